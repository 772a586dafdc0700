//! Core Settings struct and implementations.

use super::PackageSettings;
use std::path::{Path, PathBuf};

/// Main settings for bundler operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Everything the installer generator needs is carried here explicitly; the
/// generator never reads the environment itself.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_nsis::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_nsis::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_directory("dist/file-tool")
///     .package_settings(PackageSettings {
///         identifier: "Contoso.FileTool".into(),
///         product_name: "File Tool".into(),
///         version: "1.2.3".into(),
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Directory whose immediate files are packaged.
    ///
    /// Also names the installer: `<source_directory>-setup.exe`.
    source_directory: PathBuf,

    /// Explicit makensis executable.
    ///
    /// None means locate it (PATH, then the standard NSIS install location).
    makensis: Option<PathBuf>,
}

impl Settings {
    /// Returns the package identifier as given.
    pub fn identifier(&self) -> &str {
        &self.package.identifier
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the source directory.
    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// Returns the explicitly configured makensis executable, if any.
    pub fn makensis(&self) -> Option<&Path> {
        self.makensis.as_deref()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        source_directory: PathBuf,
        makensis: Option<PathBuf>,
    ) -> Self {
        Self {
            package,
            source_directory,
            makensis,
        }
    }
}
