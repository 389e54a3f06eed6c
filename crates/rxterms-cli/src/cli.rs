//! CLI argument definitions for the RxTerms loader.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rxterms",
    version,
    about = "RxTerms loader - Build search index documents from the RxTerms export",
    long_about = "Build search index documents from the delimited RxTerms export.\n\n\
                  Groups active drugs by display name and emits one document per name\n\
                  with padded, sortable strength-and-form texts and their RXCUIs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform the export and write a bulk index body.
    Load(LoadArgs),

    /// Print the document built for one display name.
    Inspect(InspectArgs),
}

/// Where the export lives and how it is split.
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Path to the delimited RxTerms export (overrides the config file).
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// TOML file with `[data_file]` and `[index]` sections.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field delimiter; `\t` is accepted for tab (default: `|`).
    #[arg(long = "delimiter", value_name = "STR")]
    pub delimiter: Option<String>,
}

#[derive(Parser)]
pub struct LoadArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Target index name written into each bulk action (default: rxterms).
    #[arg(long = "index", value_name = "NAME")]
    pub index: Option<String>,

    /// Write the bulk body to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Transform and report without writing the bulk body.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Display name to look up (exact match).
    #[arg(value_name = "DISPLAY_NAME")]
    pub display_name: String,

    /// Print strength-and-form texts and RXCUIs as a table instead of JSON.
    #[arg(long = "table", conflicts_with = "text")]
    pub table: bool,

    /// Print only the RXCUI paired with this strength-and-form text.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
