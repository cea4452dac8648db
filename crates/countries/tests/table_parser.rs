//! Tests for the country table file parser.

use countries::parser::{Entry, ParseError, Section, parse_file};

fn entry(key: &str, value: &str) -> Entry {
    Entry {
        key: key.to_string(),
        value: value.to_string(),
    }
}

// =========================================================================
// Sections and Entries
// =========================================================================

#[test]
fn empty_input_has_no_sections() {
    assert_eq!(parse_file("").unwrap(), Vec::<Section>::new());
    assert_eq!(parse_file("\n\n  \n").unwrap(), Vec::<Section>::new());
}

#[test]
fn sections_keep_file_order() {
    let sections = parse_file(
        r#"
[US]
Name=United States
Alpha3=USA

[FR]
Name=France
"#,
    )
    .unwrap();

    assert_eq!(
        sections,
        vec![
            Section {
                name: "US".to_string(),
                entries: vec![entry("Name", "United States"), entry("Alpha3", "USA")],
            },
            Section {
                name: "FR".to_string(),
                entries: vec![entry("Name", "France")],
            },
        ]
    );
}

#[test]
fn section_without_entries() {
    let sections = parse_file("[US]\n[FR]\nName=France\n").unwrap();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].entries.is_empty());
}

#[test]
fn values_are_trimmed() {
    let sections = parse_file("[US]\n  Name =   United States   \n").unwrap();
    assert_eq!(sections[0].get("Name"), Some("United States"));
}

#[test]
fn empty_value_is_allowed() {
    let sections = parse_file("[US]\nName=\n").unwrap();
    assert_eq!(sections[0].get("Name"), Some(""));
}

#[test]
fn value_may_contain_separators() {
    let sections = parse_file("[BA]\nName=Bosnia and Herzegovina; BiH = yes\n").unwrap();
    assert_eq!(
        sections[0].get("Name"),
        Some("Bosnia and Herzegovina; BiH = yes")
    );
}

#[test]
fn comment_lines_are_skipped() {
    let sections = parse_file(
        r#"
# country list
; semicolon comment
[US]
# inside a section
Name=United States
"#,
    )
    .unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].entries, vec![entry("Name", "United States")]);
}

#[test]
fn crlf_line_endings() {
    let sections = parse_file("[US]\r\nName=United States\r\nIDC=1\r\n").unwrap();
    assert_eq!(
        sections[0].entries,
        vec![entry("Name", "United States"), entry("IDC", "1")]
    );
}

#[test]
fn last_line_without_newline() {
    let sections = parse_file("[US]\nName=United States").unwrap();
    assert_eq!(sections[0].get("Name"), Some("United States"));
}

#[test]
fn unicode_values() {
    let sections = parse_file("[CI]\nName=Côte d’Ivoire\n[AX]\nName=Åland\n").unwrap();
    assert_eq!(sections[0].get("Name"), Some("Côte d’Ivoire"));
    assert_eq!(sections[1].get("Name"), Some("Åland"));
}

#[test]
fn leading_byte_order_mark_is_skipped() {
    let sections = parse_file("\u{feff}[FR]\nName=France\n").unwrap();
    assert_eq!(
        sections,
        [Section {
            name: "FR".to_string(),
            entries: vec![entry("Name", "France")],
        }]
    );
}

#[test]
fn get_returns_first_duplicate_key() {
    let sections = parse_file("[US]\nName=First\nName=Second\n").unwrap();
    assert_eq!(sections[0].get("Name"), Some("First"));
    assert_eq!(sections[0].entries.len(), 2);
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn garbage_line_reports_position() {
    let err = parse_file("[US]\nName=United States\nthis is not valid\n").unwrap_err();
    match err {
        ParseError::Syntax {
            line,
            column,
            message,
        } => {
            assert_eq!((line, column), (3, 1));
            assert_eq!(message, "expected 'key=value', found 'this is not valid'");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn entry_before_first_section() {
    let err = parse_file("Name=France\n[FR]\nName=France\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"syntax error at 1:1: entry 'Name=France' appears before any section"
    );
}

#[test]
fn malformed_header() {
    let err = parse_file("[US]\nName=United States\n[FR\nName=France\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"syntax error at 3:1: malformed section header '[FR'"
    );
}

#[test]
fn unterminated_header_at_end_of_input() {
    let err = parse_file("[US]\nName=United States\n[FR").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedEof { line: 3, column: 4 }
    ));
}

#[test]
fn positions_after_byte_order_mark_start_at_column_one() {
    let err = parse_file("\u{feff}Name=France\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"syntax error at 1:1: entry 'Name=France' appears before any section"
    );
}
