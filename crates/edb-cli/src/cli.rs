//! CLI argument definitions for edblint.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "edblint",
    version,
    about = "EPICS db lint - validate db/template files against house rules",
    long_about = "Statically validate EPICS database and template files against\n\
                  house style and engineering-unit rules.\n\n\
                  Violations are reported per rule; the exit code is non-zero\n\
                  when any rule fails, so a CI job can gate on it."
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
    /// Lint db/template files found under one or more directories.
    Check(CheckArgs),

    /// List the registered lint rules.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Root directories searched recursively for db/template files.
    #[arg(value_name = "DIR", required = true)]
    pub input_dirs: Vec<PathBuf>,

    /// File extension to lint; may repeat (default: db and template).
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directory to write reports into.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "test-reports")]
    pub output_dir: PathBuf,

    /// Report format to write.
    #[arg(long = "report", value_enum, default_value = "xml")]
    pub report: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Xml,
    Json,
    Both,
    None,
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
