//! The set of files packaged into an installer.
//!
//! The source directory is listed once, one level deep. The captured list is
//! what both the install and the uninstall sections are rendered from, so the
//! uninstaller always deletes exactly what the installer copied.

use crate::bundler::error::{Error, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// One packaged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    source: PathBuf,
    name: String,
}

impl PackageFile {
    /// Absolute path of the file on the build machine.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Basename the file is installed under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered, immutable listing of the files to package.
///
/// Order is the directory-listing order of the underlying filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFileSet {
    files: Vec<PackageFile>,
    skipped_directories: usize,
}

impl PackageFileSet {
    /// List the immediate entries of `directory`.
    ///
    /// Subdirectories are skipped with a warning; symlinks to files are kept.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceDirectoryUnreadable`] if the directory is missing, is not
    ///   a directory, or an entry cannot be read
    /// - [`Error::GenericError`] if an entry name is not valid UTF-8
    pub async fn read(directory: &Path) -> Result<Self> {
        let unreadable = |error| Error::SourceDirectoryUnreadable {
            path: directory.to_path_buf(),
            error,
        };

        let mut entries = tokio::fs::read_dir(directory).await.map_err(unreadable)?;
        let base = directory.absolutize().map_err(unreadable)?.into_owned();

        let mut files = Vec::new();
        let mut skipped_directories = 0;
        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let file_name = entry.file_name();
            let name = file_name.to_str().ok_or_else(|| {
                Error::GenericError(format!(
                    "file name {} is not valid UTF-8",
                    entry.path().display()
                ))
            })?;

            // metadata() follows symlinks, file_type() would not
            let metadata = tokio::fs::metadata(entry.path())
                .await
                .map_err(unreadable)?;
            if metadata.is_dir() {
                log::warn!(
                    "Skipping subdirectory {} (only top-level files are packaged)",
                    entry.path().display()
                );
                skipped_directories += 1;
                continue;
            }

            files.push(PackageFile {
                source: base.join(name),
                name: name.to_string(),
            });
        }

        log::debug!(
            "Captured {} package files from {}",
            files.len(),
            base.display()
        );

        Ok(Self {
            files,
            skipped_directories,
        })
    }

    /// Files in listing order.
    pub fn iter(&self) -> std::slice::Iter<'_, PackageFile> {
        self.files.iter()
    }

    /// Number of packaged files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the directory held no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Subdirectories left out of the installer.
    pub fn skipped_directories(&self) -> usize {
        self.skipped_directories
    }
}

impl<'a> IntoIterator for &'a PackageFileSet {
    type Item = &'a PackageFile;
    type IntoIter = std::slice::Iter<'a, PackageFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
