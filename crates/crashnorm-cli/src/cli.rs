//! CLI argument definitions for the crash-report normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crashnorm",
    version,
    about = "NYC crash-report normalizer - Clean collision records for analysis",
    long_about = "Normalize raw NYC motor-vehicle collision records.\n\n\
                  Canonicalizes street names, validates zip codes, maps borough\n\
                  names to their closed code set, and composes ISO timestamps\n\
                  from the feed's split date and time fields."
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
    /// Normalize a file of raw collision records.
    Normalize(NormalizeArgs),

    /// List the borough codes and display names.
    Boroughs,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Input file of raw records (.csv or .json).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT>.normalized.json; extension picks the format).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Longest street name kept after canonicalization, in characters.
    #[arg(long = "max-str-len", value_name = "CHARS", default_value_t = 256)]
    pub max_str_len: usize,

    /// Casualty counts outside -N..=N are dropped.
    #[arg(long = "max-int", value_name = "N", default_value_t = 10_000)]
    pub max_int: i64,

    /// Normalize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
