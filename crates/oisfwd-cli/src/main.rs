//! oisfwd - OIS curve building and daily forward extraction.
//!
//! # Usage
//!
//! ```bash
//! # Run the scheduled job
//! oisfwd run --config job.toml
//!
//! # Replay a given day and hour without writing output
//! oisfwd run --config job.toml --date 2025-01-15 --hour 9 --dry-run
//!
//! # Build one curve from quotes
//! oisfwd curve --currency EUR --quotes 1M=3.5,3M=3.55,1Y=3.4
//!
//! # Show market conventions
//! oisfwd conventions
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change the filter.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info,oisfwd=debug" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, format)?,
        Commands::Curve(args) => commands::curve::execute(args, format)?,
        Commands::Conventions(args) => commands::conventions::execute(args, format)?,
    }

    Ok(())
}
