//! Options shared by commands that need a built registry.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use countries::{CountryLocale, CountryRegistry, CountryTable, LoadError};
use miette::{miette, Report, Result};
use tracing::warn;

use crate::output::CountryDiagnostic;

/// Where the country table and translations come from.
#[derive(Debug, Args)]
pub struct RegistryArgs {
    /// Country table file (.ini).
    #[arg(long, env = "COUNTRIES_TABLE")]
    pub table: PathBuf,

    /// Language tag used for names and sort order.
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Translation catalog with a [CountryNames] section for --lang.
    #[arg(long)]
    pub translations: Option<PathBuf>,
}

impl RegistryArgs {
    /// Load the table and catalog and build the registry.
    pub fn build(&self) -> Result<(CountryRegistry, CountryLocale)> {
        let table = load_table(&self.table)?;
        let mut locale = CountryLocale::with_language(self.lang.as_str());
        if let Some(path) = &self.translations {
            locale.load_translations(path).map_err(load_error_report)?;
            for warning in locale.validate_translations(&table) {
                warn!("{warning}");
            }
        }
        let registry = CountryRegistry::build(&table, &locale);
        Ok((registry, locale))
    }
}

/// Load a country table, rendering syntax errors against the file source.
pub fn load_table(path: &Path) -> Result<CountryTable> {
    CountryTable::load(path).map_err(load_error_report)
}

/// Convert a load error into a report, with source context for parse errors.
pub fn load_error_report(error: LoadError) -> Report {
    if let LoadError::Parse {
        path,
        line,
        column,
        message,
    } = &error
    {
        if let Ok(content) = read_to_string(path) {
            return CountryDiagnostic::at(path, &content, *line, *column, message.clone()).into();
        }
    }
    miette!("{error}")
}
