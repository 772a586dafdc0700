//! NSIS installer script generation.
//!
//! Turns a package identifier, display name, version and source directory into
//! the NSI script makensis compiles. Directory listing and path resolution
//! happen once in [`InstallerScript::generate`]; [`InstallerScript::render`]
//! is pure text generation over the captured values.

use super::{template::NSI_TEMPLATE, utils};
use crate::bundler::{
    error::{Error, Result},
    identifier::PackageIdentifier,
    package_files::PackageFileSet,
    settings::Settings,
};
use handlebars::Handlebars;
use path_absolutize::Absolutize;
use serde::Serialize;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// NSIS constant for the 64-bit Program Files directory.
const PROGRAM_FILES_64: &str = "$PROGRAMFILES64";

/// Suffix appended to the source directory to name the installer.
const INSTALLER_SUFFIX: &str = "-setup.exe";

/// A fully resolved installer definition, ready to render.
#[derive(Debug, Clone)]
pub struct InstallerScript {
    identifier: PackageIdentifier,
    display_name: String,
    version: String,
    output_path: PathBuf,
    files: PackageFileSet,
}

#[derive(Serialize)]
struct TemplateFile {
    source: String,
    installed: String,
}

#[derive(Serialize)]
struct TemplateData<'a> {
    product_name: &'a str,
    version: &'a str,
    display_name: &'a str,
    output_file: String,
    install_dir: String,
    files: Vec<TemplateFile>,
}

impl InstallerScript {
    /// Resolve everything the script needs from `settings`.
    ///
    /// # Process
    ///
    /// 1. Parse the package identifier (fails before the filesystem is touched)
    /// 2. List the source directory once
    /// 3. Compute the absolute installer path `<source_directory>-setup.exe`
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedIdentifier`] for an identifier outside the grammar
    /// - [`Error::SourceDirectoryUnreadable`] if the directory cannot be listed
    pub async fn generate(settings: &Settings) -> Result<Self> {
        let identifier = PackageIdentifier::parse(settings.identifier())?;
        let files = PackageFileSet::read(settings.source_directory()).await?;
        let output_path = installer_output_path(settings.source_directory())?;

        Ok(Self {
            identifier,
            display_name: settings.product_name().to_string(),
            version: settings.version_string().to_string(),
            output_path,
            files,
        })
    }

    /// The parsed package identifier.
    pub fn identifier(&self) -> &PackageIdentifier {
        &self.identifier
    }

    /// Absolute path the compiled installer is written to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Files copied by the installer and deleted by the uninstaller.
    pub fn files(&self) -> &PackageFileSet {
        &self.files
    }

    /// Install root as an NSIS path, e.g. `$PROGRAMFILES64\Contoso\File-Tool`.
    pub fn install_dir(&self) -> String {
        format!(
            "{}\\{}\\{}",
            PROGRAM_FILES_64,
            utils::escape_nsis_string(&self.identifier.publisher_dir()),
            utils::escape_nsis_string(&self.identifier.product_dir()),
        )
    }

    /// Render the NSI script text.
    ///
    /// Install and uninstall sections are both rendered from the same captured
    /// [`PackageFileSet`], in the same order.
    pub fn render(&self) -> Result<String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(utils::escape_nsis_string);
        handlebars.register_template_string("installer.nsi", NSI_TEMPLATE)?;

        let files = self
            .files
            .iter()
            .map(|file| {
                Ok(TemplateFile {
                    source: path_to_string(file.source())?,
                    installed: format!("$INSTDIR\\{}", utils::escape_nsis_string(file.name())),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let data = TemplateData {
            product_name: self.identifier.as_str(),
            version: &self.version,
            display_name: &self.display_name,
            output_file: path_to_string(&self.output_path)?,
            install_dir: self.install_dir(),
            files,
        };

        Ok(handlebars.render("installer.nsi", &data)?)
    }
}

/// Absolute installer path for a source directory.
///
/// Trailing separators are dropped, `-setup.exe` is appended to the path as
/// given, and only then is the result made absolute against the current
/// working directory: `dist/tool/` -> `<cwd>/dist/tool-setup.exe`,
/// `.` -> `<cwd>/.-setup.exe`.
pub fn installer_output_path(source_directory: &Path) -> Result<PathBuf> {
    // Collecting components drops trailing separators and keeps `.` and `..`.
    let trimmed: PathBuf = source_directory.components().collect();
    if trimmed.as_os_str().is_empty() {
        return Err(Error::GenericError(
            "source directory is empty; cannot name the installer".into(),
        ));
    }

    let mut installer = OsString::from(trimmed);
    installer.push(INSTALLER_SUFFIX);
    let installer = PathBuf::from(installer);

    let absolute = installer
        .absolutize()
        .map_err(|error| Error::SourceDirectoryUnreadable {
            path: source_directory.to_path_buf(),
            error,
        })?;

    Ok(absolute.into_owned())
}

fn path_to_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::GenericError(format!("{} is not valid UTF-8", path.display())))
}
