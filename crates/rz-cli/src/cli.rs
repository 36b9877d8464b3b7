//! CLI argument definitions for the registration workbook generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "registro-zona",
    version,
    about = "Generate the zone competition registration workbook",
    long_about = "Generate the annual inter-school competition registration workbook:\n\
                  a data-entry grid with one row per school and one column per\n\
                  discipline, a participation summary sheet, Sí/No dropdowns, and\n\
                  generated VBA modules enforcing the head-count rules."
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
    /// Generate the registration workbook and its macro modules.
    Generate(GenerateArgs),

    /// Dump sheet dimensions and cell contents of a workbook.
    Inspect(InspectArgs),

    /// Validate a filled workbook the way the pre-save macro would.
    Check(CheckArgs),

    /// List the embedded catalog: categories, disciplines, and bindings.
    Schema,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Directory for the workbook and macro modules (default: current dir).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Competition year used in the output file name.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<u16>,

    /// Skip emitting the VBA macro modules.
    #[arg(long = "no-macros")]
    pub no_macros: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the workbook to dump.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Maximum rows to print per sheet.
    #[arg(long = "rows", value_name = "N", default_value_t = 25)]
    pub rows: usize,

    /// Only dump the named sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the filled workbook to validate.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Findings output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
