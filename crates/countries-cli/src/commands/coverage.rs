//! Coverage command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use countries::{CountryLocale, CountryTable};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::warn;

use super::registry::{load_error_report, load_table};
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Country table file (.ini).
    #[arg(long, env = "COUNTRIES_TABLE")]
    pub table: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Directory containing `<lang>.ini` catalogs. Defaults to the table's directory.
    #[arg(long)]
    pub catalogs: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let table = load_table(&args.table)?;
    let total = table.len();

    // Determine base directory for catalog files
    let base_dir = args
        .catalogs
        .clone()
        .or_else(|| args.table.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for lang in &args.lang {
        coverage_data.push(language_coverage(&table, &base_dir, lang)?);
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for code in &lang_coverage.missing {
                    println!("  - {}", code);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Count the table's countries that `<base_dir>/<lang>.ini` translates.
fn language_coverage(table: &CountryTable, base_dir: &Path, lang: &str) -> Result<LanguageCoverage> {
    let catalog = base_dir.join(format!("{lang}.ini"));
    let mut locale = CountryLocale::with_language(lang);

    // A missing catalog leaves every country untranslated.
    if catalog.exists() {
        locale
            .load_translations(&catalog)
            .map_err(load_error_report)?;
        for warning in locale.validate_translations(table) {
            warn!("{warning}");
        }
    }

    let missing: Vec<String> = table
        .records()
        .iter()
        .filter(|record| locale.translated_name(record.alpha2()).is_none())
        .map(|record| record.alpha2().to_string())
        .collect();

    Ok(LanguageCoverage {
        language: lang.to_string(),
        translated: table.len() - missing.len(),
        missing,
    })
}
