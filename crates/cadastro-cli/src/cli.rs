//! CLI argument definitions for the client importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cadastro",
    version,
    about = "Importador de clientes - validate and import client CSV files",
    long_about = "Validate client CSV files and produce import artifacts.\n\n\
                  Each row is checked for required name, CPF check digits,\n\
                  phone length, and email shape. Valid rows become client\n\
                  records; invalid rows are collected into a report and an\n\
                  error CSV for fix-and-reupload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow raw field values (CPF, phone) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a client CSV file and write the import artifacts.
    Import(ImportArgs),

    /// Print the expected CSV template with an example row.
    Template,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the client CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub file: PathBuf,

    /// Tenant identifier stamped onto every imported client.
    #[arg(long = "company-id", value_name = "ID")]
    pub company_id: String,

    /// Output directory for generated files (default: <file dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the plain-text report.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Skip the error CSV export.
    #[arg(long = "no-errors-csv")]
    pub no_errors_csv: bool,

    /// Skip the JSON report.
    #[arg(long = "no-json")]
    pub no_json: bool,
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
