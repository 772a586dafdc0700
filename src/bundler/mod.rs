//! Silent, self-registering Windows installer bundler.
//!
//! Packages the top-level files of a directory into an NSIS installer that
//! installs under `$PROGRAMFILES64\<Publisher>\<Product>`, registers that
//! directory on the system `Path`, and writes an uninstall entry. The
//! publisher and product directories come from a `Publisher.Product` package
//! identifier, hyphenated at word boundaries.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_nsis::bundler::{Bundler, PackageSettings, SettingsBuilder};
//!
//! # async fn example() -> kodegen_bundler_nsis::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .source_directory("dist/file-tool")
//!     .package_settings(PackageSettings {
//!         identifier: "Contoso.FileTool".into(),
//!         product_name: "File Tool".into(),
//!         version: "1.2.3".into(),
//!     })
//!     .build()?;
//!
//! // Writes dist/file-tool-setup.exe
//! let artifact = Bundler::new(settings).bundle().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
pub mod error;
pub mod identifier;
pub mod package_files;
pub mod platform;
mod settings;

// Public re-exports
pub use builder::{BundledArtifact, Bundler};
pub use error::{Error, Result};
pub use identifier::{PACKAGE_IDENTIFIER_GRAMMAR, PackageIdentifier, to_directory_name};
pub use package_files::{PackageFile, PackageFileSet};
pub use platform::windows::nsis::InstallerScript;
pub use settings::{PackageSettings, Settings, SettingsBuilder};
