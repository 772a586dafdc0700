//! Windows NSIS installer creation.
//!
//! Creates silent, self-registering Windows installers using NSIS (Nullsoft
//! Scriptable Install System). The installer copies the packaged files to
//! `$PROGRAMFILES64\<Publisher>\<Product>`, adds that directory to the system
//! `Path`, and registers an uninstaller that reverses all of it.
//!
//! # Module Organization
//!
//! - `template` - NSI script template constant
//! - `toolset` - makensis location
//! - `script` - NSI script generation
//! - `build` - makensis execution and compilation
//! - `utils` - NSIS string escaping and BOM output

mod build;
mod script;
mod template;
mod toolset;
mod utils;

pub use build::run_makensis;
pub use script::{InstallerScript, installer_output_path};
pub use toolset::find_makensis;
pub use utils::escape_nsis_string;

use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
};
use std::path::Path;

/// File name of the generated script inside the working directory.
const NSI_FILE_NAME: &str = "installer.nsi";

/// Bundle the source directory as an NSIS installer.
///
/// # Process
///
/// 1. Generate the installer script (identifier, file listing, output path)
/// 2. Locate makensis
/// 3. Write the script into a temporary working directory
/// 4. Compile it with makensis
///
/// The working directory lives until this function returns, on success and
/// on every error path. A failed compilation leaves no installer behind.
///
/// # Returns
///
/// The compiled [`InstallerScript`]; its [`InstallerScript::output_path`] is
/// the installer, `<source_directory>-setup.exe`
pub async fn bundle_project(settings: &Settings) -> Result<InstallerScript> {
    log::info!("Building NSIS installer for {}", settings.product_name());

    let (script, nsi_content) = generate_script(settings).await?;

    let makensis = find_makensis(settings.makensis())?;

    let work_dir = tempfile::tempdir().map_err(|e| {
        Error::GenericError(format!("failed to create NSIS working directory: {}", e))
    })?;
    let nsi_path = work_dir.path().join(NSI_FILE_NAME);
    utils::write_utf8_bom(&nsi_path, &nsi_content).await?;

    let output_path = script.output_path();
    if let Err(e) = run_makensis(&makensis, &nsi_path, output_path).await {
        if let Err(cleanup) = remove_partial_installer(output_path).await {
            log::warn!("{}", cleanup);
        }
        return Err(e);
    }

    log::info!("✓ Created NSIS installer: {}", output_path.display());

    Ok(script)
}

/// Render the installer script without compiling it.
pub async fn render_script(settings: &Settings) -> Result<String> {
    let (_, nsi_content) = generate_script(settings).await?;
    Ok(nsi_content)
}

/// Generate and render the script, logging the text at debug level.
async fn generate_script(settings: &Settings) -> Result<(InstallerScript, String)> {
    let script = InstallerScript::generate(settings).await?;
    let nsi_content = script.render()?;
    log::debug!("Generated NSI script:\n{}", nsi_content);
    Ok((script, nsi_content))
}

async fn remove_partial_installer(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            log::warn!("Removed partial installer {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(Error::Fs {
            context: "removing partial installer",
            path: path.to_path_buf(),
            error,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::{PackageSettings, SettingsBuilder};

    fn settings(source: &Path, makensis: &Path) -> Settings {
        SettingsBuilder::new()
            .source_directory(source)
            .package_settings(PackageSettings {
                identifier: "Contoso.FileTool".into(),
                product_name: "File Tool".into(),
                version: "1.2.3".into(),
            })
            .makensis(makensis)
            .build()
            .unwrap()
    }

    #[cfg(unix)]
    fn fake_compiler(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("makensis");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_bundle_writes_installer_next_to_source() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("file-tool");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("app.exe"), b"MZ").unwrap();

        // Stand-in compiler: checks the BOM'd script names our file, then
        // creates the OutFile it declares.
        let out = root.path().join("file-tool-setup.exe");
        let tools = tempfile::tempdir().unwrap();
        let compiler = fake_compiler(
            tools.path(),
            &format!(
                "for last; do :; done\ngrep -q 'app.exe' \"$last\" || exit 9\ntouch '{}'",
                out.display()
            ),
        );

        let script = bundle_project(&settings(&source, &compiler)).await.unwrap();
        assert_eq!(script.output_path(), out);
        assert!(out.exists());
        assert_eq!(script.files().len(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_compile_leaves_no_installer() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("file-tool");
        std::fs::create_dir(&source).unwrap();

        let out = root.path().join("file-tool-setup.exe");
        let tools = tempfile::tempdir().unwrap();
        let compiler = fake_compiler(tools.path(), &format!("touch '{}'\nexit 1", out.display()));

        let err = bundle_project(&settings(&source, &compiler)).await.unwrap_err();
        assert_eq!(err.kind(), "CompilerInvocationFailed");
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_cleanup_failure_keeps_compiler_error() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("file-tool");
        std::fs::create_dir(&source).unwrap();

        // A directory where the installer should go cannot be removed with
        // remove_file, so cleanup fails after the compile does.
        let out = root.path().join("file-tool-setup.exe");
        std::fs::create_dir(&out).unwrap();

        let tools = tempfile::tempdir().unwrap();
        let compiler = fake_compiler(tools.path(), "echo 'Error: cannot open output' >&2\nexit 1");

        let err = bundle_project(&settings(&source, &compiler)).await.unwrap_err();
        assert_eq!(err.kind(), "CompilerInvocationFailed");
        let message = err.to_string();
        assert!(message.contains("exit code 1"), "{message}");
        assert!(message.contains("cannot open output"), "{message}");
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn test_render_script_matches_generated_script() {
        let source = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join("app.exe"), b"MZ").unwrap();
        let settings = settings(source.path(), Path::new("unused-makensis"));

        let rendered = render_script(&settings).await.unwrap();
        let (script, content) = generate_script(&settings).await.unwrap();
        assert_eq!(rendered, content);
        assert_eq!(script.render().unwrap(), rendered);
    }

    #[tokio::test]
    async fn test_missing_source_fails_before_compiler_lookup() {
        let root = tempfile::tempdir().unwrap();
        let err = bundle_project(&settings(
            &root.path().join("missing"),
            &root.path().join("no-makensis"),
        ))
        .await
        .unwrap_err();
        assert_eq!(err.kind(), "SourceDirectoryUnreadable");
    }
}
