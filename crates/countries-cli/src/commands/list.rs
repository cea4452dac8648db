//! Implementation of the `countries list` command.

use miette::{IntoDiagnostic, Result};

use super::registry::RegistryArgs;
use crate::output::table::format_country_table;

/// Arguments for the list command.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> Result<i32> {
    let (registry, _) = args.registry.build()?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(registry.all()).into_diagnostic()?
        );
    } else {
        println!("{}", format_country_table(registry.all()));
    }
    Ok(exitcode::OK)
}
