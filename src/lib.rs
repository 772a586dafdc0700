//! Silent Windows installer bundler for automation pipelines.
//!
//! This library packages a directory of built files into a silent,
//! self-registering NSIS installer:
//! - validates a `Publisher.Product` package identifier
//! - generates the NSI script (install, PATH registration, uninstall entry)
//! - compiles it with makensis into `<source-directory>-setup.exe`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
