//! The static country reference table.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::error::LoadError;
use crate::parser::{Section, parse_file};
use crate::types::{ALPHA2_FIELD, CountryCode, CountryRecord, NAME_FIELD};

/// The keyed country table read from configuration.
///
/// Records keep file order and carry their default (untranslated) names.
/// Every code is unique and well formed; loading fails otherwise.
///
/// # Example
///
/// ```
/// use countries::CountryTable;
///
/// let table = CountryTable::parse(r#"
/// [FR]
/// Name=France
/// Alpha3=FRA
/// "#).unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get("fr").unwrap().attribute("Alpha3"), Some("FRA"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
    path: Option<PathBuf>,
}

impl CountryTable {
    /// Parse a table from a string.
    pub fn parse(content: &str) -> Result<Self, LoadError> {
        Self::parse_internal(content, None)
    }

    /// Load a table from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_internal(&content, Some(path))
    }

    /// Build a table from records, rejecting duplicate codes.
    pub fn from_records(
        records: impl IntoIterator<Item = CountryRecord>,
    ) -> Result<Self, LoadError> {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for record in records {
            if !seen.insert(record.code().clone()) {
                return Err(LoadError::DuplicateCountry {
                    path: PathBuf::from("<records>"),
                    code: record.alpha2().to_string(),
                });
            }
            collected.push(record);
        }
        Ok(Self {
            records: collected,
            path: None,
        })
    }

    /// The records in file order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Find a record by code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        let code = CountryCode::new(code);
        self.records.iter().find(|record| *record.code() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The file this table was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn parse_internal(content: &str, path: Option<&Path>) -> Result<Self, LoadError> {
        let path_buf = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("<table>"));

        let sections =
            parse_file(content).map_err(|e| LoadError::from_parse(path_buf.clone(), e))?;

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(sections.len());
        for section in &sections {
            let record = record_from_section(section, &path_buf)?;
            if !seen.insert(record.code().clone()) {
                return Err(LoadError::DuplicateCountry {
                    path: path_buf,
                    code: record.alpha2().to_string(),
                });
            }
            records.push(record);
        }

        debug!(
            path = %path_buf.display(),
            countries = records.len(),
            "loaded country table"
        );

        Ok(Self {
            records,
            path: path.map(Path::to_path_buf),
        })
    }
}

/// Convert one `[XX]` section into a record.
fn record_from_section(section: &Section, path: &Path) -> Result<CountryRecord, LoadError> {
    let code = CountryCode::new(&section.name);
    if !code.is_well_formed() {
        return Err(LoadError::InvalidCode {
            path: path.to_path_buf(),
            code: section.name.clone(),
        });
    }

    let name = section
        .get(NAME_FIELD)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| LoadError::MissingName {
            path: path.to_path_buf(),
            code: code.to_string(),
        })?;

    let mut record = CountryRecord::new(code, name);
    for entry in &section.entries {
        if entry.key == NAME_FIELD || entry.key == ALPHA2_FIELD {
            continue;
        }
        record = record.with_attribute(entry.key.clone(), entry.value.clone());
    }
    Ok(record)
}
