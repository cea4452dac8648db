//! Miette diagnostic wrapper for country table syntax errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for country table syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(countries::syntax))]
pub struct CountryDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CountryDiagnostic {
    /// Create a diagnostic pointing at `line:column` of `content`.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        CountryDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            help: help_for(&message),
            message,
        }
    }
}

fn help_for(message: &str) -> Option<String> {
    if message.contains("before any section") {
        Some("start each country with a `[XX]` section header".into())
    } else if message.starts_with("malformed section header") || message.contains("end of file") {
        Some("section headers look like `[FR]`".into())
    } else if message.starts_with("expected 'key=value'") {
        Some("entries are `Key=value`; comments start with `#` or `;`".into())
    } else {
        None
    }
}
