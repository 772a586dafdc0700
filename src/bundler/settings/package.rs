//! Package metadata supplied by the invoking pipeline.

/// Package metadata and configuration.
///
/// All three values are used verbatim in the generated installer script.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_nsis::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     identifier: "Contoso.FileTool".into(),
///     product_name: "File Tool".into(),
///     version: "1.2.3".into(),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageSettings {
    /// Dotted `Publisher.Product` identifier.
    ///
    /// Validated when the installer script is generated, not here.
    pub identifier: String,

    /// Product name displayed to users.
    ///
    /// Written to the installer `Name` and the uninstall `DisplayName` entry.
    pub product_name: String,

    /// Version string.
    ///
    /// Not semver-validated; "1.2.3", "2024.10" and "nightly" are all accepted.
    pub version: String,
}
