//! CLI argument definitions for the sizefit tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sizefit_i18n::Locale;
use sizefit_model::Unit;

#[derive(Parser)]
#[command(
    name = "sizefit",
    version,
    about = "Brand size charts: convert sizes and render charts",
    long_about = "Look up brand size charts stored as JSON on disk.\n\n\
                  Convert a size between unit systems (US/UK/EU/CM), render\n\
                  shoe and clothing charts with localized headers, and list\n\
                  the available brands and categories."
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
    /// Convert a size value against a brand's shoe chart.
    Convert(ConvertArgs),

    /// Render a brand's size chart.
    Show(ShowArgs),

    /// List brands and categories found in the data directory.
    Brands(DataArgs),

    /// List the unit systems a chart supports.
    Units(ChartArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Data directory holding <brand>/<category>/size_chart.json files
    /// (default: $SIZEFIT_DATA_DIR, else ./data).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Brand slug (directory name under the data root).
    #[arg(value_name = "BRAND")]
    pub brand: String,

    /// Category slug (directory name under the brand).
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[command(flatten)]
    pub data: DataArgs,

    /// Display locale for labels and headers.
    #[arg(long = "locale", default_value = "en")]
    pub locale: Locale,

    /// Directory of per-locale message bundles (<locale>.json).
    #[arg(long = "messages-dir", value_name = "DIR")]
    pub messages_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Size value to convert (e.g. 9.5 or 42).
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Unit system the value is given in.
    #[arg(long = "unit", default_value = "cm")]
    pub unit: Unit,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Highlight the row matching this value (shoe charts only).
    #[arg(long = "highlight", value_name = "VALUE")]
    pub highlight: Option<String>,

    /// Unit system for --highlight.
    #[arg(long = "unit", default_value = "cm")]
    pub unit: Unit,
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
