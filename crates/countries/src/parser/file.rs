//! Country table file parser.
//!
//! Parses INI-style files into sections of `key=value` entries.

use super::ast::{Entry, Section};
use super::error::ParseError;
use winnow::combinator::{alt, delimited, eof, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse an entire table or catalog file into sections.
///
/// A leading UTF-8 byte order mark is skipped; positions are counted from
/// the first character after it.
pub fn parse_file(input: &str) -> Result<Vec<Section>, ParseError> {
    let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(sections) => {
            if remaining.is_empty() {
                return Ok(sections);
            }
            let (line, column) = calculate_position(input, remaining);
            let current_line = remaining.lines().next().unwrap_or_default().trim_end();
            if current_line.starts_with('[')
                && !current_line.contains(']')
                && remaining.trim_end() == current_line
            {
                return Err(ParseError::UnexpectedEof {
                    line,
                    column: column + current_line.len(),
                });
            }
            Err(ParseError::Syntax {
                line,
                column,
                message: describe_unexpected(current_line, !sections.is_empty()),
            })
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {}", e),
            })
        }
    }
}

/// Explain why the line at the stop position could not be parsed.
fn describe_unexpected(line: &str, seen_section: bool) -> String {
    if line.starts_with('[') {
        format!("malformed section header '{line}'")
    } else if !seen_section && line.contains('=') {
        format!("entry '{line}' appears before any section")
    } else {
        format!("expected 'key=value', found '{line}'")
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse an entire file into sections.
fn file(input: &mut &str) -> ModalResult<Vec<Section>> {
    skip_blank_and_comments(input)?;
    let sections: Vec<Section> =
        repeat(0.., terminated(section, skip_blank_and_comments)).parse_next(input)?;
    Ok(sections)
}

/// Parse a section header and every entry that belongs to it.
fn section(input: &mut &str) -> ModalResult<Section> {
    let name = section_header(input)?;
    let entries: Vec<Entry> =
        repeat(0.., preceded(skip_blank_and_comments, entry)).parse_next(input)?;
    Ok(Section { name, entries })
}

/// Parse `[name]` up to the end of its line.
fn section_header(input: &mut &str) -> ModalResult<String> {
    let name = delimited(
        '[',
        take_while(1.., |c: char| c != ']' && c != '\n' && c != '\r'),
        ']',
    )
    .parse_next(input)?;
    inline_space(input)?;
    opt(comment).parse_next(input)?;
    line_end(input)?;
    Ok(name.trim().to_string())
}

/// Parse a `key=value` line.
fn entry(input: &mut &str) -> ModalResult<Entry> {
    let key = take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
    })
    .parse_next(input)?;
    inline_space(input)?;
    '='.parse_next(input)?;
    let value = take_while(0.., |c: char| c != '\n' && c != '\r').parse_next(input)?;
    line_end(input)?;
    Ok(Entry {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}

/// Skip blank lines, indentation and comment lines.
fn skip_blank_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace, including newlines.
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse spaces and tabs within a line.
fn inline_space<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c == ' ' || c == '\t').parse_next(input)
}

/// Parse a comment: `#` or `;` up to the end of the line.
fn comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(one_of(['#', ';']), take_while(0.., |c: char| c != '\n')).parse_next(input)
}

/// Parse a line terminator or the end of input.
fn line_end(input: &mut &str) -> ModalResult<()> {
    alt(("\r\n".void(), "\n".void(), eof.void())).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_first_line() {
        assert_eq!(calculate_position("abc", "c"), (1, 3));
    }

    #[test]
    fn test_position_after_newline() {
        let input = "[US]\nName=United States\n???";
        let remaining = &input[input.len() - 3..];
        assert_eq!(calculate_position(input, remaining), (3, 1));
    }

    #[test]
    fn test_header_with_trailing_comment() {
        let sections = parse_file("[US] # United States\nName=United States\n").unwrap();
        assert_eq!(sections[0].name, "US");
        assert_eq!(sections[0].get("Name"), Some("United States"));
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let sections = parse_file("\u{feff}[FR]\nName=France\n").unwrap();
        assert_eq!(sections[0].name, "FR");
        assert_eq!(sections[0].get("Name"), Some("France"));
    }

    #[test]
    fn test_describe_entry_before_section() {
        assert_eq!(
            describe_unexpected("Name=France", false),
            "entry 'Name=France' appears before any section"
        );
    }
}
