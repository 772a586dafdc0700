//! Command line interface for the NSIS bundler.
//!
//! Parses the four package inputs, runs the bundler, and reports either the
//! created installer or the run's single failure.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{OutputManager, is_workflow_runner, workflow_error_annotation};

use crate::bundler::Bundler;
use crate::error::{BundlerError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Execute a bundling run for already-parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()?;
    let config = RuntimeConfig::from(args);
    let bundler = Bundler::new(args.to_settings()?);

    if args.dry_run {
        let script = bundler.render_script().await?;
        print!("{}", script);
        return Ok(0);
    }

    config.section("NSIS installer")?;
    config.progress(&format!(
        "Packaging {} {} ({}) from {}",
        args.package_name,
        args.package_version,
        args.package_identifier,
        args.source_directory.display()
    ))?;

    let artifact = bundler.bundle().await?;

    config.success(&format!("Created {}", artifact.path.display()))?;
    config.indent(&format!("size:   {} bytes", artifact.size))?;
    config.indent(&format!("sha256: {}", artifact.checksum))?;
    config.indent(&format!("files:  {}", artifact.file_count))?;
    if artifact.skipped_directories > 0 {
        config.indent(&format!(
            "skipped {} subdirectories (only top-level files are packaged)",
            artifact.skipped_directories
        ))?;
    }

    Ok(0)
}

/// Report the run's failure to the terminal and, under a workflow runner, as
/// an error annotation.
pub fn report_failure(error: &BundlerError) {
    let message = error.to_string();
    OutputManager::new(false).error(&format!("Error: {}", message));

    if is_workflow_runner() {
        println!("{}", workflow_error_annotation(error.kind(), &message));
    }
}
