//! NSIS installer build execution.
//!
//! Compiles NSI scripts into Windows installer executables using makensis.

use crate::bundler::error::{Error, Result};
use std::path::Path;

/// Lines of compiler output kept in the error when makensis fails.
const OUTPUT_TAIL_LINES: usize = 20;

/// Run makensis to compile an NSI script into an installer executable.
///
/// The installer location comes from the script's `OutFile`; this only checks
/// that it exists once makensis reports success. Runs to completion with no
/// timeout and no retry.
///
/// # Arguments
/// - `makensis` - Path to the makensis executable
/// - `nsi_path` - Path to the NSI script file to compile
/// - `output_path` - Path the script writes the installer to
///
/// # Errors
///
/// [`Error::CompilerInvocationFailed`] if makensis cannot be launched, exits
/// non-zero, or exits zero without producing the installer.
pub async fn run_makensis(makensis: &Path, nsi_path: &Path, output_path: &Path) -> Result<()> {
    log::info!("Running makensis...");

    let command = format!("{} {}", makensis.display(), nsi_path.display());

    let output = tokio::process::Command::new(makensis)
        .args(["-V3", "-INPUTCHARSET", "UTF8"])
        .arg(nsi_path)
        .output()
        .await
        .map_err(|e| Error::CompilerInvocationFailed {
            command: command.clone(),
            reason: format!("could not launch compiler: {}", e),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        log::debug!("makensis: {}", line);
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let status = output
            .status
            .code()
            .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));
        return Err(Error::CompilerInvocationFailed {
            command,
            reason: format!(
                "{}\n{}",
                status,
                output_tail(&format!("{}{}", stdout, stderr), OUTPUT_TAIL_LINES)
            ),
        });
    }

    if !tokio::fs::try_exists(output_path).await.unwrap_or(false) {
        return Err(Error::CompilerInvocationFailed {
            command,
            reason: format!(
                "makensis succeeded but {} was not created",
                output_path.display()
            ),
        });
    }

    Ok(())
}

/// Last `lines` lines of compiler output.
fn output_tail(output: &str, lines: usize) -> String {
    let all: Vec<&str> = output.lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_tail_keeps_last_lines() {
        let output = (1..=30).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let tail = output_tail(&output, 3);
        assert_eq!(tail, "28\n29\n30");
        assert_eq!(output_tail("one\ntwo", 20), "one\ntwo");
    }

    #[tokio::test]
    async fn test_unlaunchable_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-makensis");
        let err = run_makensis(&missing, &dir.path().join("installer.nsi"), &dir.path().join("out.exe"))
            .await
            .unwrap_err();
        match err {
            Error::CompilerInvocationFailed { reason, .. } => {
                assert!(reason.starts_with("could not launch compiler"))
            }
            other => panic!("expected CompilerInvocationFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    fn fake_compiler(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("makensis");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = fake_compiler(dir.path(), "echo 'Error: bad script' >&2\nexit 3");
        let err = run_makensis(&compiler, &dir.path().join("installer.nsi"), &dir.path().join("out.exe"))
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exit code 3"), "{message}");
        assert!(message.contains("Error: bad script"), "{message}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_without_installer_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = fake_compiler(dir.path(), "exit 0");
        let err = run_makensis(&compiler, &dir.path().join("installer.nsi"), &dir.path().join("out.exe"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("was not created"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_with_installer() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.exe");
        let compiler = fake_compiler(dir.path(), &format!("touch '{}'", out.display()));
        run_makensis(&compiler, &dir.path().join("installer.nsi"), &out)
            .await
            .unwrap();
    }
}
