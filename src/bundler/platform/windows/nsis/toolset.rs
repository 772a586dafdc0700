//! NSIS toolset location.
//!
//! Resolves the makensis executable: an explicitly configured path first, then
//! `makensis` on `PATH`, then the standard NSIS install location on Windows.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Where the NSIS installer puts makensis on Windows hosts.
#[cfg(windows)]
const WINDOWS_MAKENSIS: &str = r"C:\Program Files (x86)\NSIS\makensis.exe";

/// Locate the makensis executable.
///
/// # Errors
///
/// [`Error::CompilerInvocationFailed`] if an explicit path does not exist or
/// makensis cannot be found anywhere.
pub fn find_makensis(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return if path.is_file() {
            log::debug!("Using configured makensis at: {}", path.display());
            Ok(path.to_path_buf())
        } else {
            Err(Error::CompilerInvocationFailed {
                command: path.display().to_string(),
                reason: "configured makensis executable does not exist".into(),
            })
        };
    }

    match which::which("makensis") {
        Ok(path) => {
            log::debug!("Found makensis at: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("makensis not found in PATH: {}", e);
            find_makensis_default()
        }
    }
}

#[cfg(windows)]
fn find_makensis_default() -> Result<PathBuf> {
    let path = PathBuf::from(WINDOWS_MAKENSIS);
    if path.is_file() {
        log::debug!("Found makensis at default location: {}", path.display());
        Ok(path)
    } else {
        Err(not_found())
    }
}

#[cfg(not(windows))]
fn find_makensis_default() -> Result<PathBuf> {
    Err(not_found())
}

fn not_found() -> Error {
    Error::CompilerInvocationFailed {
        command: "makensis".into(),
        reason: "makensis not found. Please install NSIS (e.g., apt-get install nsis) \
                 or pass --makensis"
            .into(),
    }
}
