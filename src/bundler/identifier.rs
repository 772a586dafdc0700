//! Package identifier parsing and install path derivation.
//!
//! A package identifier has the form `Publisher.Product`, where each half is one
//! or more capitalized words joined without separators (`AcmeCorp.WidgetMaker`).
//! The two halves name the install directory hierarchy under Program Files,
//! hyphenated at word boundaries (`AcmeCorp\Widget-Maker`).

use crate::bundler::error::{Error, Result};
use regex::Regex;
use std::{fmt, str::FromStr, sync::LazyLock};

/// Grammar every package identifier must fully match.
pub const PACKAGE_IDENTIFIER_GRAMMAR: &str = r"^((?:[A-Z][a-z]+)+)\.((?:[A-Z][a-z]+)+)$";

static PACKAGE_IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PACKAGE_IDENTIFIER_GRAMMAR).expect("package identifier grammar is valid")
});

/// A validated `Publisher.Product` identifier.
///
/// Both segments keep their original capitalization and remain camel-joined;
/// use [`PackageIdentifier::publisher_dir`] and [`PackageIdentifier::product_dir`]
/// for the hyphenated directory names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentifier {
    raw: String,
    dot: usize,
}

impl PackageIdentifier {
    /// Parse and validate an identifier.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedIdentifier`] when the whole string does not match
    /// [`PACKAGE_IDENTIFIER_GRAMMAR`] (missing or extra dot, lowercase or
    /// non-letter characters, empty segment).
    pub fn parse(identifier: &str) -> Result<Self> {
        let captures = PACKAGE_IDENTIFIER_PATTERN
            .captures(identifier)
            .ok_or_else(|| Error::MalformedIdentifier {
                identifier: identifier.to_string(),
                grammar: PACKAGE_IDENTIFIER_GRAMMAR,
            })?;

        // Group 1 is anchored at the start, so its end is the dot.
        let dot = captures
            .get(1)
            .map(|publisher| publisher.end())
            .ok_or_else(|| Error::MalformedIdentifier {
                identifier: identifier.to_string(),
                grammar: PACKAGE_IDENTIFIER_GRAMMAR,
            })?;

        Ok(Self {
            raw: identifier.to_string(),
            dot,
        })
    }

    /// The identifier exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Publisher half, e.g. `AcmeCorp`.
    pub fn publisher(&self) -> &str {
        &self.raw[..self.dot]
    }

    /// Product half, e.g. `WidgetMaker`.
    pub fn product(&self) -> &str {
        &self.raw[self.dot + 1..]
    }

    /// Hyphenated publisher directory name, e.g. `Acme-Corp`.
    pub fn publisher_dir(&self) -> String {
        to_directory_name(self.publisher())
    }

    /// Hyphenated product directory name, e.g. `Widget-Maker`.
    pub fn product_dir(&self) -> String {
        to_directory_name(self.product())
    }
}

impl FromStr for PackageIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Convert a camel-joined segment into a hyphenated directory name.
///
/// Inserts one `-` at every lowercase-to-uppercase transition; everything else
/// passes through unchanged. Total and side-effect free:
///
/// - `"WidgetMaker"` -> `"Widget-Maker"`
/// - `"ABCD"` -> `"ABCD"`
/// - `"myWidget"` -> `"my-Widget"`
pub fn to_directory_name(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut prev_lower = false;

    for c in segment.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
        prev_lower = c.is_ascii_lowercase();
    }

    out
}
