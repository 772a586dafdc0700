//! Kodegen Bundler NSIS - silent Windows installers from a directory of files.
//!
//! Reads the package identifier, name, version and source directory from the
//! command line or the pipeline's `INPUT_*` environment, and writes
//! `<source-directory>-setup.exe`.

use kodegen_bundler_nsis::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging; pipeline debug mode raises the default level
    let default_level = if std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            cli::report_failure(&e);
            1
        }
    };

    process::exit(exit_code);
}
