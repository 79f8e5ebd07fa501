//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// heatwatch - CPU thermal throttling diagnostics for the local host.
#[derive(Parser, Debug, Clone)]
#[command(name = "heatwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the event log.
    #[arg(short, long, env = "HEATWATCH_STORAGE", default_value = "storage")]
    pub storage: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify the host's thermal state right now.
    Status,

    /// Monitor continuously, recording every status change.
    Watch,

    /// Summarize recorded events over a recent window.
    Analyze(AnalyzeArgs),

    /// Print the raw event log.
    Log(LogArgs),

    /// Advice based on the recorded history.
    Doctor,
}

/// Arguments for the analyze command.
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Window to analyze, e.g. 2h or 30m.
    #[arg(long, default_value = "2h")]
    pub last: String,
}

/// Arguments for the log command.
#[derive(Parser, Debug, Clone)]
pub struct LogArgs {
    /// Show only today's events.
    #[arg(long)]
    pub today: bool,
}
