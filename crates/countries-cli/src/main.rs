//! Country table CLI entry point.
//!
//! Provides command-line tools for country tables and stored selections:
//! - `countries check` - Validate country table files
//! - `countries list` - Print the locale-sorted country list
//! - `countries resolve` - Resolve codes or a name and show the projections
//! - `countries decode` - Decode a stored value
//! - `countries coverage` - Report translation coverage

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_decode, run_list, run_resolve, CheckArgs, CoverageArgs,
    DecodeArgs, ListArgs, ResolveArgs,
};
use miette::MietteHandlerOpts;
use tracing::Level;

/// Country table tools.
#[derive(Debug, Parser)]
#[command(name = "countries")]
#[command(about = "Country reference table tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check country table files
    Check(CheckArgs),
    /// Print the country list sorted for a language
    List(ListArgs),
    /// Resolve submitted codes or a country name
    Resolve(ResolveArgs),
    /// Decode a stored selection value
    Decode(DecodeArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. Logs go to stderr so `--json` output stays
/// parseable.
fn setup_logging(verbose: bool, color_when: ColorWhen) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(!matches!(color_when, ColorWhen::Never))
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::List(args) => run_list(args),
        Commands::Resolve(args) => run_resolve(args),
        Commands::Decode(args) => run_decode(args),
        Commands::Coverage(args) => run_coverage(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
