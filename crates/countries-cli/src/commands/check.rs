//! Implementation of the `countries check` command.

use std::path::PathBuf;

use countries::CountryTable;
use miette::{IntoDiagnostic, Result};
use owo_colors::{Stream, Style};
use serde::Serialize;

use super::registry::load_error_report;
use crate::output::styled;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Country table files to check (.ini)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    countries: usize,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());
    let mut failures = 0;

    for file in &args.files {
        match CountryTable::load(file) {
            Ok(table) => {
                if !args.json {
                    println!(
                        "{} {} ({} countries)",
                        styled("ok", Stream::Stdout, Style::new().green()),
                        file.display(),
                        table.len()
                    );
                }
                results.push(CheckJson {
                    file: file.display().to_string(),
                    countries: table.len(),
                    error: None,
                });
            }
            Err(e) => {
                failures += 1;
                let message = e.to_string();
                if !args.json {
                    eprintln!("{:?}", load_error_report(e));
                }
                results.push(CheckJson {
                    file: file.display().to_string(),
                    countries: 0,
                    error: Some(message),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else if failures > 0 {
        eprintln!(
            "{}: {} of {} files failed",
            styled("error", Stream::Stderr, Style::new().red()),
            failures,
            args.files.len()
        );
    }

    if failures > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
