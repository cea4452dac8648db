//! Tests for loading the country table.

use std::io::Write;

use countries::{CountryRecord, CountryTable, LoadError};
use tempfile::NamedTempFile;

const TABLE: &str = r#"
[US]
Name=United States
Alpha2=US
Alpha3=USA
IDC=1

[fr]
Name=France
Alpha3=FRA
IDC=33
"#;

#[test]
fn parse_keeps_file_order() {
    let table = CountryTable::parse(TABLE).unwrap();
    let codes: Vec<&str> = table.records().iter().map(CountryRecord::alpha2).collect();
    assert_eq!(codes, ["US", "FR"]);
    assert_eq!(table.len(), 2);
    assert!(table.path().is_none());
}

#[test]
fn section_names_are_upper_cased() {
    let table = CountryTable::parse(TABLE).unwrap();
    assert!(table.contains("FR"));
    assert!(table.contains("fr"));
    assert_eq!(table.get("fr").unwrap().alpha2(), "FR");
}

#[test]
fn auxiliary_fields_become_attributes() {
    let table = CountryTable::parse(TABLE).unwrap();
    let us = table.get("US").unwrap();
    assert_eq!(us.name(), "United States");
    assert_eq!(us.attribute("Alpha3"), Some("USA"));
    assert_eq!(us.attribute("IDC"), Some("1"));
    assert_eq!(us.attribute("Alpha2"), Some("US"));
    assert_eq!(us.attribute("Currency"), None);

    let attributes: Vec<(&str, &str)> = us.attributes().collect();
    assert_eq!(attributes, [("Alpha3", "USA"), ("IDC", "1")]);
}

#[test]
fn empty_table_is_valid() {
    let table = CountryTable::parse("# nothing here\n").unwrap();
    assert!(table.is_empty());
}

#[test]
fn duplicate_code_is_rejected() {
    let err = CountryTable::parse("[US]\nName=United States\n[us]\nName=USA\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"<table>: country 'US' is defined more than once");
}

#[test]
fn missing_name_is_rejected() {
    let err = CountryTable::parse("[US]\nAlpha3=USA\n").unwrap_err();
    assert!(matches!(err, LoadError::MissingName { ref code, .. } if code == "US"));
}

#[test]
fn blank_name_is_rejected() {
    let err = CountryTable::parse("[US]\nName=\n").unwrap_err();
    assert!(matches!(err, LoadError::MissingName { .. }));
}

#[test]
fn malformed_code_is_rejected() {
    for bad in ["USA", "U", "1A", "U S"] {
        let content = format!("[{bad}]\nName=Somewhere\n");
        let err = CountryTable::parse(&content).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidCode { ref code, .. } if code == bad),
            "expected InvalidCode for {bad}, got {err:?}"
        );
    }
}

#[test]
fn parse_error_carries_location() {
    let err = CountryTable::parse("[US]\nName=United States\n???\n").unwrap_err();
    match err {
        LoadError::Parse {
            path, line, column, ..
        } => {
            assert_eq!(path.to_str(), Some("<table>"));
            assert_eq!((line, column), (3, 1));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TABLE.as_bytes()).unwrap();
    file.flush().unwrap();

    let table = CountryTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.path(), Some(file.path()));
}

#[test]
fn load_file_with_byte_order_mark() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("\u{feff}[FR]\nName=France\n".as_bytes()).unwrap();
    file.flush().unwrap();

    let table = CountryTable::load(file.path()).unwrap();
    assert_eq!(table.get("FR").unwrap().name(), "France");
}

#[test]
fn load_errors_name_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[US]\nName=United States\n[US]\nName=Again\n")
        .unwrap();
    file.flush().unwrap();

    let err = CountryTable::load(file.path()).unwrap_err();
    match err {
        LoadError::DuplicateCountry { path, code } => {
            assert_eq!(path, file.path());
            assert_eq!(code, "US");
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CountryTable::load(dir.path().join("country.ini")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn from_records_rejects_duplicates() {
    let err = CountryTable::from_records([
        CountryRecord::new("US", "United States"),
        CountryRecord::new("us", "USA"),
    ])
    .unwrap_err();
    assert!(matches!(err, LoadError::DuplicateCountry { ref code, .. } if code == "US"));
}
