//! Implementation of the `countries resolve` command.

use countries::{
    compute_suggestions, encode, metadata, resolve_input, sort_key_for_locale, title,
    validate_required, RawInput, Selection, ValidationState,
};
use miette::{IntoDiagnostic, Result};
use owo_colors::{Stream, Style};
use serde::Serialize;

use super::registry::RegistryArgs;
use crate::output::styled;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Country codes, or the words of one country name with --name
    pub input: Vec<String>,

    /// Treat the input as a free-text country name
    #[arg(long)]
    pub name: bool,

    /// Reject input that selects nothing
    #[arg(long)]
    pub required: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a resolved selection.
#[derive(Debug, Serialize)]
struct ResolveJson {
    codes: Vec<String>,
    encoded: String,
    title: String,
    sort_key: String,
    metadata: String,
    suggestions: Vec<String>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    if let ValidationState::Invalid { message } =
        validate_required(args.required, Some(args.input.as_slice()))
    {
        eprintln!(
            "{}: {}",
            styled("error", Stream::Stderr, Style::new().red()),
            message
        );
        return Ok(exitcode::DATAERR);
    }

    let (registry, locale) = args.registry.build()?;
    let raw = if args.name {
        RawInput::Name(args.input.join(" "))
    } else {
        RawInput::Codes(args.input.clone())
    };
    let resolved = resolve_input(&registry, &raw);

    let suggestions = match &raw {
        RawInput::Name(name) if resolved.is_empty() => compute_suggestions(name, &registry),
        _ => Vec::new(),
    };
    let codes: Vec<String> = resolved.codes().map(str::to_string).collect();
    let encoded = encode(&resolved);
    let selection = Selection::Set(resolved);

    let output = ResolveJson {
        codes,
        encoded,
        title: title(&selection),
        sort_key: sort_key_for_locale(&selection, &locale),
        metadata: metadata(&selection),
        suggestions,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        print_resolved(&output);
    }
    Ok(exitcode::OK)
}

fn print_resolved(output: &ResolveJson) {
    if output.codes.is_empty() {
        println!(
            "{}",
            styled("nothing selected", Stream::Stdout, Style::new().yellow())
        );
        if !output.suggestions.is_empty() {
            println!("did you mean: {}", output.suggestions.join(", "));
        }
        return;
    }
    println!("encoded:  {}", output.encoded);
    println!("title:    {}", output.title);
    println!("sort key: {}", output.sort_key);
    println!("metadata: {}", output.metadata);
}
