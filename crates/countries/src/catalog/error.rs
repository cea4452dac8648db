//! Error types for loading country tables and translation catalogs.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading a country table or translation catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table or catalog.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Two sections define the same alpha-2 code.
    #[error("{path}: country '{code}' is defined more than once")]
    DuplicateCountry { path: PathBuf, code: String },

    /// A country section has no `Name` entry.
    #[error("{path}: country '{code}' has no Name")]
    MissingName { path: PathBuf, code: String },

    /// A section name is not a two-letter code.
    #[error("{path}: '{code}' is not a two-letter country code")]
    InvalidCode { path: PathBuf, code: String },

    /// Attempted to reload a catalog that was loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}

impl LoadError {
    /// Attach a path to a parse error.
    pub(crate) fn from_parse(path: PathBuf, error: ParseError) -> Self {
        match error {
            ParseError::Syntax {
                line,
                column,
                message,
            } => LoadError::Parse {
                path,
                line,
                column,
                message,
            },
            ParseError::UnexpectedEof { line, column } => LoadError::Parse {
                path,
                line,
                column,
                message: "unexpected end of file".to_string(),
            },
        }
    }
}

/// Non-fatal issues found when checking a translation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// The catalog translates a code the country table does not define.
    #[error("catalog '{language}' translates unknown country '{code}'")]
    UnknownCountry { code: String, language: String },

    /// The catalog contains a section other than `[CountryNames]`.
    #[error("catalog '{language}' section '[{section}]' is ignored")]
    IgnoredSection { section: String, language: String },
}

/// Errors from applying a named text transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// No transform group is registered under this name.
    #[error("unknown transform group '{name}'")]
    UnknownGroup { name: String },
}
