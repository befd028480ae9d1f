//! Run command implementation.
//!
//! Executes one pass of the forward job from a TOML configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use oisfwd_core::Date;
use oisfwd_curves::forwards::truncate_to_seconds;
use oisfwd_engine::{CurvePipeline, ForwardJob, JobOutcome, JobRequest};
use oisfwd_ext_file::{
    read_ticker_config, read_update_windows, CsvForwardStore, CsvMarketDataSource,
};

use crate::cli::OutputFormat;
use crate::commands::date_or_today;
use crate::config::JobSettings;
use crate::output::{print_header, print_json, print_output, print_success, print_warning};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Job configuration file (TOML)
    #[arg(short, long, env = "OISFWD_CONFIG")]
    pub config: PathBuf,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Hour of day (0-23) for the update windows. Defaults to the current hour.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Build curves but do not write any output
    #[arg(long)]
    pub dry_run: bool,
}

/// Per-currency line of the run summary.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CurrencyStatus {
    #[tabled(rename = "Currency")]
    pub currency: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Rows")]
    pub rows: usize,
    #[tabled(rename = "Detail")]
    pub detail: String,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    valuation_date: Date,
    hour: u32,
    dry_run: bool,
    currencies: &'a [CurrencyStatus],
    missing_tickers: &'a [String],
    fresh_rows: usize,
    total_rows: usize,
    written: &'a [String],
}

/// Execute the run command.
pub fn execute(args: RunArgs, format: OutputFormat) -> Result<()> {
    let settings = JobSettings::load(&args.config)?;
    let now = Local::now().naive_local();
    let request = JobRequest {
        valuation_date: date_or_today(args.date.as_deref())?,
        hour: args.hour.unwrap_or_else(|| now.hour()),
        computed_at: truncate_to_seconds(now),
        dry_run: args.dry_run,
    };

    let tickers = read_ticker_config(&settings.ticker_config)
        .context("cannot load ticker configuration")?;
    let windows = read_update_windows(&settings.update_time_config)
        .context("cannot load update windows")?;
    let source = CsvMarketDataSource::new(&settings.market_data)
        .context("cannot load market data")?;
    let store = CsvForwardStore::new(&settings.output_dir);

    info!(
        config = %args.config.display(),
        date = %request.valuation_date,
        hour = request.hour,
        dry_run = request.dry_run,
        "starting forward job"
    );
    let job = ForwardJob::new(
        tickers,
        windows,
        CurvePipeline::new(settings.pipeline_config()),
        Arc::new(source),
        Arc::new(store),
    );
    let outcome = job.run(&request)?;
    let statuses = currency_statuses(&outcome);

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Forward job {} at {:02}:00",
                request.valuation_date, request.hour
            ));
            print_output(&statuses, format)?;
            if !outcome.missing_tickers.is_empty() {
                print_warning(&format!(
                    "No data for tickers: {}",
                    outcome.missing_tickers.join(", ")
                ));
            }
            if request.dry_run {
                print_warning(&format!("Dry run: {} rows not written", outcome.rows.len()));
            }
            for location in &outcome.written {
                print_success(&format!("Wrote {} rows to {location}", outcome.rows.len()));
            }
        }
        OutputFormat::Json => print_json(&RunSummary {
            valuation_date: request.valuation_date,
            hour: request.hour,
            dry_run: request.dry_run,
            currencies: &statuses,
            missing_tickers: &outcome.missing_tickers,
            fresh_rows: outcome.fresh_rows,
            total_rows: outcome.rows.len(),
            written: &outcome.written,
        })?,
        OutputFormat::Csv => print_output(&statuses, format)?,
    }

    Ok(())
}

/// One status line per configured currency, in code order.
fn currency_statuses(outcome: &JobOutcome) -> Vec<CurrencyStatus> {
    let rows_for = |code: &str| {
        outcome
            .rows
            .iter()
            .filter(|r| r.currency.code() == code)
            .count()
    };

    let mut statuses: Vec<CurrencyStatus> = outcome
        .refreshed
        .iter()
        .map(|c| CurrencyStatus {
            currency: c.code().to_string(),
            status: "refreshed".to_string(),
            rows: rows_for(c.code()),
            detail: String::new(),
        })
        .chain(outcome.failed.iter().map(|c| CurrencyStatus {
            currency: c.code().to_string(),
            status: "failed".to_string(),
            rows: rows_for(c.code()),
            detail: "no forwards produced, see log".to_string(),
        }))
        .chain(outcome.skipped.iter().map(|(c, decision)| {
            let rows = rows_for(c.code());
            CurrencyStatus {
                currency: c.code().to_string(),
                status: if rows > 0 { "carried" } else { "skipped" }.to_string(),
                rows,
                detail: decision.to_string(),
            }
        }))
        .collect();
    statuses.sort_by(|a, b| a.currency.cmp(&b.currency));
    statuses
}
