//! Builder for constructing Settings.

use super::{PackageSettings, Settings};
use crate::bundler::error::{Context, Result};
use crate::bail;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building bundler settings with validation.
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
///     .makensis("/usr/bin/makensis")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    makensis: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory of files to package.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Pins the makensis executable.
    ///
    /// Default: None (located at bundle time)
    pub fn makensis<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.makensis = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_directory` or `package_settings` is missing,
    /// or if any of the package fields or the source directory is empty.
    pub fn build(self) -> Result<Settings> {
        let package = self
            .package_settings
            .context("package_settings is required")?;
        let source_directory = self
            .source_directory
            .context("source_directory is required")?;

        if package.identifier.is_empty() {
            bail!("package identifier must not be empty");
        }
        if package.product_name.is_empty() {
            bail!("package name must not be empty");
        }
        if package.version.is_empty() {
            bail!("package version must not be empty");
        }
        if source_directory.as_os_str().is_empty() {
            bail!("source directory must not be empty");
        }

        Ok(Settings::new(package, source_directory, self.makensis))
    }
}
