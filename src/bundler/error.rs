//! Error types for bundler operations.
//!
//! Provides error handling with contextual error chaining, filesystem-specific
//! errors, and the three terminal failure kinds of an installer run:
//!
//! - [`Error::MalformedIdentifier`] - the package identifier fails its grammar
//! - [`Error::SourceDirectoryUnreadable`] - the source directory cannot be listed
//! - [`Error::CompilerInvocationFailed`] - makensis could not run or exited non-zero
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_nsis::bundler::error::{ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_script(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).fs_context("reading NSI script", path)
//! }
//! ```

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors returned by the bundler.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// Package identifier does not match the `Publisher.Product` grammar.
    ///
    /// Raised before the source directory is touched.
    #[error("package identifier {identifier:?} must match {grammar}")]
    MalformedIdentifier {
        /// The rejected identifier, as given
        identifier: String,
        /// The grammar the identifier was checked against
        grammar: &'static str,
    },

    /// Source directory is missing or cannot be listed.
    #[error("source directory {path} cannot be read: {error}")]
    SourceDirectoryUnreadable {
        /// Directory that was being listed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// The NSIS compiler could not be launched or did not produce an installer.
    #[error("{command} failed: {reason}")]
    CompilerInvocationFailed {
        /// Compiler command line, for diagnosis
        command: String,
        /// Exit status and compiler output, or the launch error
        reason: String,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "writing NSI script")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Handlebars template rendering error.
    #[error("{0}")]
    HandleBarsError(#[from] handlebars::RenderError),

    /// Handlebars template parsing error.
    #[error("{0}")]
    Template(#[from] handlebars::TemplateError),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with bundler's Error type.
/// Works with both `Result<T, E>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating directory", "writing NSI script".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

impl Error {
    /// Short, stable name of the failure kind.
    ///
    /// Used when reporting the run's single failure to the invoking pipeline.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Context(_, inner) => inner.kind(),
            Error::MalformedIdentifier { .. } => "MalformedIdentifier",
            Error::SourceDirectoryUnreadable { .. } => "SourceDirectoryUnreadable",
            Error::CompilerInvocationFailed { .. } => "CompilerInvocationFailed",
            _ => "BundlerError",
        }
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
///
/// ```ignore
/// bail!("operation failed");
/// bail!("invalid value: {}", value);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
