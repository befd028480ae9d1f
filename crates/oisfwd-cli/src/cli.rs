//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConventionsArgs, CurveArgs, RunArgs};

/// oisfwd - OIS discount curves and daily overnight forwards
#[derive(Parser)]
#[command(name = "oisfwd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the multi-currency forward job
    Run(RunArgs),

    /// Bootstrap one currency's curve from quotes and show its forwards
    Curve(CurveArgs),

    /// Show the per-currency OIS conventions
    Conventions(ConventionsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
