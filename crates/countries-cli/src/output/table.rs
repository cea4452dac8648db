//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use countries::CountryRecord;

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "de", "fr").
    pub language: String,
    /// Number of countries translated.
    pub translated: usize,
    /// Codes of untranslated countries.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(total: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, total),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

/// Format a sorted country list as an ASCII table.
pub fn format_country_table(countries: &[CountryRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Name"]);

    for country in countries {
        table.add_row(vec![country.alpha2(), country.name()]);
    }

    table
}
