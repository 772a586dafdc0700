//! NSIS utility functions.
//!
//! String escaping for NSIS scripts and UTF-8 BOM output.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Escape a value for use inside a double-quoted NSIS string.
///
/// NSIS treats `$` as the start of a variable and `"` as the string terminator;
/// both are escaped with `$` so the compiler reproduces the value verbatim.
/// Backslashes are literal in NSIS and pass through.
///
/// - `Say "hi"` -> `Say $\"hi$\"`
/// - `$5 tool` -> `$$5 tool`
pub fn escape_nsis_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '$' => out.push_str("$$"),
            '"' => out.push_str("$\\\""),
            '\n' => out.push_str("$\\n"),
            '\r' => out.push_str("$\\r"),
            '\t' => out.push_str("$\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Write file with UTF-8 BOM (required by NSIS).
///
/// NSIS requires installer scripts to be encoded with UTF-8 BOM (byte order mark).
/// This function writes the BOM (EF BB BF) followed by the content.
pub async fn write_utf8_bom(path: &Path, content: &str) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .fs_context("creating NSI script file", path)?;

    // Write UTF-8 BOM: EF BB BF
    file.write_all(&[0xEF, 0xBB, 0xBF])
        .await
        .fs_context("writing UTF-8 BOM", path)?;
    file.write_all(content.as_bytes())
        .await
        .fs_context("writing NSI content", path)?;
    file.flush().await.fs_context("flushing NSI file", path)?;

    Ok(())
}
