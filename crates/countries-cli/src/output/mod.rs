//! Terminal output helpers.

pub mod diagnostic;
pub mod table;

pub use diagnostic::CountryDiagnostic;

use owo_colors::{OwoColorize, Stream, Style};

/// Style `text` for `stream`, honoring `--color` and terminal detection.
pub fn styled(text: &str, stream: Stream, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}
