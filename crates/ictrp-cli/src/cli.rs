//! CLI argument definitions for the ICTRP feed normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ictrp-normalizer",
    version,
    about = "Normalize WHO ICTRP trial registrations into canonical documents",
    long_about = "Transform the WHO ICTRP CSV feed of clinical-trial registrations\n\
                  into normalized, schema-conformant documents for indexing.\n\
                  Registry-specific free-text conventions (dates, phases, designs,\n\
                  arms, countries, authors) are reconciled into one vocabulary."
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
    /// Normalize a feed snapshot into canonical trial documents.
    Run(RunArgs),

    /// List the known source registries.
    Registries,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the WHO feed CSV.
    #[arg(value_name = "FEED_CSV")]
    pub feed: PathBuf,

    /// Path to the country reference CSV.
    #[arg(long = "countries", value_name = "PATH")]
    pub countries: PathBuf,

    /// Write documents to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Document serialization format.
    #[arg(long = "format", value_enum, default_value = "ndjson")]
    pub format: OutputFormatArg,

    /// Normalize and report without writing documents.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Ndjson,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
