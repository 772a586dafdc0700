//! Command line argument parsing and validation.
//!
//! Every input can also come from the pipeline environment
//! (`INPUT_PACKAGE-IDENTIFIER`, `INPUT_PACKAGE-NAME`, `INPUT_PACKAGE-VERSION`,
//! `INPUT_SOURCE-DIRECTORY`), so the binary runs unchanged as a workflow step.

use crate::bundler::{PackageSettings, Settings, SettingsBuilder};
use crate::error::{CliError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Silent Windows installer bundler
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_nsis",
    version,
    about = "Silent, self-registering Windows installers from a directory of files",
    long_about = "Packages the top-level files of a directory into a silent NSIS installer.

The installer copies the files to $PROGRAMFILES64\\<Publisher>\\<Product>, adds that
directory to the system Path and registers an uninstaller. Publisher and Product come
from the package identifier (AcmeCorp.WidgetMaker -> Acme-Corp\\Widget-Maker).

Usage:
  kodegen_bundler_nsis --package-identifier Contoso.FileTool --package-name \"File Tool\" \\
      --package-version 1.2.3 --source-directory dist/file-tool
  kodegen_bundler_nsis ... --dry-run > installer.nsi

Exit code 0 = installer guaranteed to exist at <source-directory>-setup.exe."
)]
pub struct Args {
    /// Package identifier of the form Publisher.Product (e.g. Contoso.FileTool)
    #[arg(long, env = "INPUT_PACKAGE-IDENTIFIER", value_name = "IDENTIFIER")]
    pub package_identifier: String,

    /// Human-readable name shown by the installer and in Apps & Features
    #[arg(long, env = "INPUT_PACKAGE-NAME", value_name = "NAME")]
    pub package_name: String,

    /// Version string, used verbatim
    #[arg(long, env = "INPUT_PACKAGE-VERSION", value_name = "VERSION")]
    pub package_version: String,

    /// Directory whose top-level files are packaged
    #[arg(long, env = "INPUT_SOURCE-DIRECTORY", value_name = "DIR")]
    pub source_directory: PathBuf,

    /// makensis executable (default: PATH, then the standard NSIS location)
    #[arg(long, env = "MAKENSIS", value_name = "PATH")]
    pub makensis: Option<PathBuf>,

    /// Print the generated NSI script to stdout instead of compiling it
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), CliError> {
        let required = [
            ("package-identifier", self.package_identifier.trim().is_empty()),
            ("package-name", self.package_name.trim().is_empty()),
            ("package-version", self.package_version.trim().is_empty()),
            ("source-directory", self.source_directory.as_os_str().is_empty()),
        ];

        if let Some((argument, _)) = required.iter().find(|(_, missing)| *missing) {
            return Err(CliError::MissingArgument {
                argument: (*argument).to_string(),
            });
        }

        Ok(())
    }

    /// Build the bundler settings these arguments describe.
    pub fn to_settings(&self) -> Result<Settings> {
        let mut builder = SettingsBuilder::new()
            .source_directory(&self.source_directory)
            .package_settings(PackageSettings {
                identifier: self.package_identifier.clone(),
                product_name: self.package_name.clone(),
                version: self.package_version.clone(),
            });

        if let Some(makensis) = &self.makensis {
            builder = builder.makensis(makensis);
        }

        Ok(builder.build()?)
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
