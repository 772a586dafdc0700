//! End-to-end tests driving the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn bundler() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_nsis").unwrap();
    for var in [
        "INPUT_PACKAGE-IDENTIFIER",
        "INPUT_PACKAGE-NAME",
        "INPUT_PACKAGE-VERSION",
        "INPUT_SOURCE-DIRECTORY",
        "GITHUB_ACTIONS",
        "MAKENSIS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn source_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let dist = dir.path().join("dist");
    std::fs::create_dir(&dist).unwrap();
    for name in names {
        std::fs::write(dist.join(name), name.as_bytes()).unwrap();
    }
    dir
}

fn args(identifier: &str, source: &Path) -> Vec<std::ffi::OsString> {
    vec![
        "--package-identifier".into(),
        identifier.into(),
        "--package-name".into(),
        "File Tool".into(),
        "--package-version".into(),
        "1.2.3".into(),
        "--source-directory".into(),
        source.into(),
    ]
}

#[test]
fn test_dry_run_prints_script() {
    let dir = source_dir(&["app.exe", "readme.txt"]);
    let dist = dir.path().join("dist");

    let output = bundler()
        .args(args("Contoso.FileTool", &dist))
        .arg("--dry-run")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let script = String::from_utf8(output).unwrap();

    assert!(script.contains("!define PRODUCT_NAME \"Contoso.FileTool\""));
    assert!(script.contains(r#"InstallDir "$PROGRAMFILES64\Contoso\File-Tool""#));
    let out = dir.path().join("dist-setup.exe");
    assert!(script.contains(&format!("OutFile \"{}\"", out.display())));

    let lines: Vec<&str> = script.lines().map(str::trim).collect();
    assert_eq!(lines.iter().filter(|l| l.starts_with("File ")).count(), 2);
    assert!(lines.contains(&r#"Delete "$INSTDIR\app.exe""#));
    assert!(lines.contains(&r#"Delete "$INSTDIR\readme.txt""#));
}

#[test]
fn test_inputs_from_pipeline_environment() {
    let dir = source_dir(&["app.exe"]);
    bundler()
        .env("INPUT_PACKAGE-IDENTIFIER", "AcmeCorp.WidgetMaker")
        .env("INPUT_PACKAGE-NAME", "Widget Maker")
        .env("INPUT_PACKAGE-VERSION", "2024.10")
        .env("INPUT_SOURCE-DIRECTORY", dir.path().join("dist"))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"InstallDir "$PROGRAMFILES64\Acme-Corp\Widget-Maker""#,
        ))
        .stdout(predicate::str::contains("!define PRODUCT_VERSION \"2024.10\""));
}

#[test]
fn test_relative_source_resolves_against_working_directory() {
    let dir = source_dir(&["app.exe"]);
    let root = dir.path().canonicalize().unwrap();

    bundler()
        .current_dir(&root)
        .args(args("Contoso.FileTool", Path::new("dist")))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "OutFile \"{}\"",
            root.join("dist-setup.exe").display()
        )))
        .stdout(predicate::str::contains(format!(
            "File \"{}\"",
            root.join("dist").join("app.exe").display()
        )));
}

#[test]
fn test_malformed_identifier_fails() {
    let dir = source_dir(&["app.exe"]);
    bundler()
        .args(args("contoso.filetool", &dir.path().join("dist")))
        .arg("--dry-run")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must match"));
}

#[test]
fn test_missing_source_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    bundler()
        .args(args("Contoso.FileTool", &dir.path().join("missing")))
        .arg("--dry-run")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot be read"));
    assert!(!dir.path().join("missing-setup.exe").exists());
}

#[test]
fn test_failure_is_annotated_for_workflow_runner() {
    let dir = source_dir(&[]);
    bundler()
        .env("GITHUB_ACTIONS", "true")
        .args(args("Acme", &dir.path().join("dist")))
        .arg("--dry-run")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "::error title=MalformedIdentifier::",
        ));
}

#[test]
fn test_missing_compiler_fails() {
    let dir = source_dir(&["app.exe"]);
    bundler()
        .args(args("Contoso.FileTool", &dir.path().join("dist")))
        .arg("--makensis")
        .arg(dir.path().join("no-such-makensis"))
        .arg("--quiet")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("makensis"));
    assert!(!dir.path().join("dist-setup.exe").exists());
}

#[cfg(unix)]
#[test]
fn test_skipped_subdirectories_are_reported() {
    use std::os::unix::fs::PermissionsExt;

    let dir = source_dir(&["app.exe"]);
    std::fs::create_dir(dir.path().join("dist").join("assets")).unwrap();

    let out = dir.path().join("dist-setup.exe");
    let compiler = dir.path().join("makensis");
    std::fs::write(
        &compiler,
        format!("#!/bin/sh\nprintf 'MZ' > '{}'\n", out.display()),
    )
    .unwrap();
    std::fs::set_permissions(&compiler, std::fs::Permissions::from_mode(0o755)).unwrap();

    bundler()
        .args(args("Contoso.FileTool", &dir.path().join("dist")))
        .arg("--makensis")
        .arg(&compiler)
        .assert()
        .success()
        .stdout(predicate::str::contains("files:  1"))
        .stdout(predicate::str::contains(
            "skipped 1 subdirectories (only top-level files are packaged)",
        ));
    assert!(out.exists());
}

#[test]
fn test_blank_package_name_is_rejected() {
    let dir = source_dir(&["app.exe"]);
    let mut argv = args("Contoso.FileTool", &dir.path().join("dist"));
    argv[3] = " ".into();
    bundler()
        .args(argv)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package-name"));
}

#[test]
fn test_required_inputs_enforced() {
    bundler().arg("--dry-run").assert().failure();
}
