//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the NSIS
//! bundler and describes the installer it produced.

use crate::bundler::{Result, Settings, error::ErrorExt, platform::windows::nsis};

use super::checksum::calculate_sha256;
use std::path::PathBuf;

/// An installer produced by a bundling run.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Absolute path to the installer executable.
    pub path: PathBuf,
    /// Installer size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the installer.
    pub checksum: String,
    /// Number of files the installer copies.
    pub file_count: usize,
    /// Subdirectories of the source directory that were not packaged.
    pub skipped_directories: usize,
}

/// Main bundler orchestrator.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_nsis::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> kodegen_bundler_nsis::bundler::Result<()> {
/// let artifact = Bundler::new(settings).bundle().await?;
/// println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Builds the installer and collects its size and checksum.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        let script = nsis::bundle_project(&self.settings).await?;
        let path = script.output_path().to_path_buf();

        let size = tokio::fs::metadata(&path)
            .await
            .fs_context("reading artifact metadata", &path)?
            .len();
        let checksum = calculate_sha256(&path).await?;

        Ok(BundledArtifact {
            path,
            size,
            checksum,
            file_count: script.files().len(),
            skipped_directories: script.files().skipped_directories(),
        })
    }

    /// Renders the installer script without compiling it.
    pub async fn render_script(&self) -> Result<String> {
        nsis::render_script(&self.settings).await
    }
}
