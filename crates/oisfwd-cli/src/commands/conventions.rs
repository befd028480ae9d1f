//! Conventions command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use oisfwd_core::Date;
use oisfwd_curves::conventions;
use oisfwd_curves::CurrencyConvention;

use crate::cli::OutputFormat;
use crate::commands::date_or_today;
use crate::output::print_output;

/// Arguments for the conventions command.
#[derive(Args, Debug)]
pub struct ConventionsArgs {
    /// Show spot dates for this trade date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ConventionRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Lag")]
    settlement_lag_days: u32,
    #[tabled(rename = "Day Count")]
    day_count: String,
    #[tabled(rename = "Calendar")]
    calendar: String,
    #[tabled(rename = "Spot")]
    spot_date: String,
}

impl ConventionRow {
    fn new(convention: &CurrencyConvention, trade_date: Date) -> Self {
        Self {
            currency: convention.currency.code().to_string(),
            index: convention.overnight_index.to_string(),
            settlement_lag_days: convention.settlement_lag_days,
            day_count: convention.day_count.to_string(),
            calendar: convention.calendar.to_string(),
            spot_date: convention.spot_date(trade_date).to_string(),
        }
    }
}

/// Execute the conventions command.
pub fn execute(args: ConventionsArgs, format: OutputFormat) -> Result<()> {
    let trade_date = date_or_today(args.date.as_deref())?;
    let rows: Vec<ConventionRow> = conventions::all()
        .iter()
        .map(|c| ConventionRow::new(c, trade_date))
        .collect();
    print_output(&rows, format)
}
