//! Implementation of the `countries decode` command.

use countries::{decode, has_content, metadata, sort_key_for_locale, title, Selection};
use miette::{IntoDiagnostic, Result};
use owo_colors::{Stream, Style};
use serde::Serialize;

use super::registry::RegistryArgs;
use crate::output::styled;

/// Arguments for the decode command.
#[derive(Debug, clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Stored attribute value, e.g. "FR,US"
    pub value: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a decoded value.
#[derive(Debug, Serialize)]
struct DecodeJson {
    kind: &'static str,
    codes: Vec<String>,
    unresolved: Vec<String>,
    title: String,
    sort_key: String,
    metadata: String,
    has_content: bool,
}

/// Run the decode command.
pub fn run_decode(args: DecodeArgs) -> Result<i32> {
    let (registry, locale) = args.registry.build()?;
    let content = decode(&registry, &args.value);

    let (kind, codes, unresolved): (&'static str, Vec<String>, Vec<String>) = match &content {
        Selection::Set(set) => (
            "selection",
            set.codes().map(str::to_string).collect(),
            set.unresolved().map(str::to_string).collect(),
        ),
        Selection::Legacy(_) => ("legacy", Vec::new(), Vec::new()),
    };

    let output = DecodeJson {
        kind,
        codes,
        unresolved,
        title: title(&content),
        sort_key: sort_key_for_locale(&content, &locale),
        metadata: metadata(&content),
        has_content: has_content(&content),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    println!("kind:        {}", output.kind);
    if !output.codes.is_empty() {
        println!("codes:       {}", output.codes.join(","));
    }
    for code in &output.unresolved {
        println!(
            "{}: '{}' is not a known country code",
            styled("warning", Stream::Stdout, Style::new().yellow()),
            code
        );
    }
    println!("title:       {}", output.title);
    println!("sort key:    {}", output.sort_key);
    println!("metadata:    {}", output.metadata);
    println!("has content: {}", output.has_content);
    Ok(exitcode::OK)
}
