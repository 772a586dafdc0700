//! NSI script template.
//!
//! Rendered by handlebars with [`escape_nsis_string`] registered as the escape
//! function, so every `{{value}}` is NSIS-escaped. Triple-stash values are
//! composed in Rust and already escaped.
//!
//! [`escape_nsis_string`]: super::utils::escape_nsis_string

/// Silent install/uninstall script with PATH registration and an uninstall entry.
pub const NSI_TEMPLATE: &str = r#"Unicode true

!define PRODUCT_NAME "{{product_name}}"
!define PRODUCT_VERSION "{{version}}"
!define PRODUCT_UNINST_KEY "Software\Microsoft\Windows\CurrentVersion\Uninstall\${PRODUCT_NAME}"
!define PRODUCT_UNINST_ROOT_KEY "HKLM"

Name "{{display_name}}"
OutFile "{{output_file}}"
InstallDir "{{{install_dir}}}"
SilentInstall silent
SilentUninstall silent

Section
  SetOutPath "$INSTDIR"
  SetOverwrite on
{{#each files}}
  File "{{this.source}}"
{{/each}}
  EnVar::SetHKLM
  EnVar::AddValue "Path" "$INSTDIR"
SectionEnd

Section -Post
  WriteUninstaller "$INSTDIR\uninst.exe"
  WriteRegStr ${PRODUCT_UNINST_ROOT_KEY} "${PRODUCT_UNINST_KEY}" "DisplayName" "$(^Name)"
  WriteRegStr ${PRODUCT_UNINST_ROOT_KEY} "${PRODUCT_UNINST_KEY}" "UninstallString" "$INSTDIR\uninst.exe"
  WriteRegStr ${PRODUCT_UNINST_ROOT_KEY} "${PRODUCT_UNINST_KEY}" "DisplayVersion" "${PRODUCT_VERSION}"
SectionEnd

Section Uninstall
  EnVar::SetHKLM
  EnVar::DeleteValue "Path" "$INSTDIR"
  Delete "$INSTDIR\uninst.exe"
{{#each files}}
  Delete "{{{this.installed}}}"
{{/each}}

  RMDir "$INSTDIR"

  DeleteRegKey ${PRODUCT_UNINST_ROOT_KEY} "${PRODUCT_UNINST_KEY}"
  SetAutoClose true
SectionEnd
"#;
