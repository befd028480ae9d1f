//! Curve command implementation.
//!
//! Bootstraps one currency's OIS curve from command-line quotes, then shows
//! the pillars, the repricing check and the start of the forward series.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use oisfwd_curves::conventions;
use oisfwd_curves::forwards::ForwardExtractor;
use oisfwd_curves::quotes::normalize;
use oisfwd_curves::repricing::RepricingCheck;
use oisfwd_curves::{BootstrapConfig, OisBootstrapper, RateQuote};

use crate::cli::OutputFormat;
use crate::commands::date_or_today;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_json, print_output, print_table, print_warning, KeyValue};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Currency code (EUR, GBP, USD, JPY, AUD, CAD)
    #[arg(short, long)]
    pub currency: String,

    /// Par rates in percent, comma-separated TENOR=RATE (e.g., "1M=3.5,3M=3.55,1Y=3.4")
    #[arg(short, long)]
    pub quotes: String,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Number of forwards to display
    #[arg(long, default_value = "10")]
    pub points: usize,

    /// Sweep cap for the fixed-point solver
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct KnotRow {
    #[tabled(rename = "Pillar")]
    date: String,
    #[tabled(rename = "Years")]
    years: String,
    #[tabled(rename = "DF")]
    discount_factor: String,
    #[tabled(rename = "Zero (%)")]
    zero_rate: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct RepricingRow {
    #[tabled(rename = "Instrument")]
    instrument: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Market (%)")]
    market: String,
    #[tabled(rename = "Model (%)")]
    model: String,
    #[tabled(rename = "Error")]
    error: String,
    #[tabled(rename = "OK")]
    passed: bool,
}

impl From<&RepricingCheck> for RepricingRow {
    fn from(check: &RepricingCheck) -> Self {
        Self {
            instrument: check.instrument_id.clone(),
            maturity: check.maturity.to_string(),
            market: format!("{:.6}", check.market_rate * 100.0),
            model: format!("{:.6}", check.model_rate * 100.0),
            error: format!("{:.2e}", check.error),
            passed: check.passed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ForwardRow {
    #[tabled(rename = "Date")]
    forward_date: String,
    #[tabled(rename = "Forward (%)")]
    forward_rate: String,
}

/// Parses `TENOR=RATE` pairs separated by commas.
pub fn parse_quotes(s: &str) -> CliResult<Vec<(String, f64)>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (tenor, rate) = part
                .split_once('=')
                .ok_or_else(|| CliError::InvalidQuote(part.to_string()))?;
            let rate: f64 = rate
                .trim()
                .parse()
                .map_err(|_| CliError::InvalidQuote(part.to_string()))?;
            Ok((tenor.trim().to_string(), rate))
        })
        .collect()
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat) -> Result<()> {
    let valuation_date = date_or_today(args.date.as_deref())?;
    let convention = conventions::lookup_code(&args.currency)?;
    let quotes = parse_quotes(&args.quotes)?
        .into_iter()
        .map(|(tenor, rate)| normalize(&tenor, rate))
        .collect::<Result<Vec<RateQuote>, _>>()?;

    let mut config = BootstrapConfig::default();
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    let result = OisBootstrapper::from_quotes(valuation_date, convention, &quotes)?
        .with_config(config)
        .bootstrap_validated()
        .with_context(|| format!("{} curve did not build", convention.currency))?;

    let curve = &result.curve;
    let knots = curve
        .knots()
        .map(|(date, df)| -> Result<KnotRow> {
            let zero = curve.zero_rate(date)?;
            Ok(KnotRow {
                date: date.to_string(),
                years: format!("{:.4}", curve.time(date)),
                discount_factor: format!("{df:.10}"),
                zero_rate: format!("{:.6}", zero * 100.0),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let repricing: Vec<RepricingRow> = result
        .repricing_report
        .checks()
        .iter()
        .map(RepricingRow::from)
        .collect();

    let forwards = ForwardExtractor::default().extract(
        curve,
        valuation_date,
        convention.calendar(),
        convention.currency,
        Local::now().naive_local(),
    )?;
    let shown: Vec<ForwardRow> = forwards
        .iter()
        .take(args.points)
        .map(|p| ForwardRow {
            forward_date: p.forward_date.to_string(),
            forward_rate: format!("{:.6}", p.forward_rate_percent),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "{} {} curve",
                convention.currency, convention.overnight_index
            ));
            print_table(&[
                KeyValue::new("Valuation Date", valuation_date.to_string()),
                KeyValue::new("Spot Date", convention.spot_date(valuation_date).to_string()),
                KeyValue::new("Day Count", convention.day_count.to_string()),
                KeyValue::new("Calendar", convention.calendar.to_string()),
                KeyValue::new("Sweeps", result.iterations.to_string()),
                KeyValue::new("Build Time", format!("{:?}", result.build_duration)),
            ])?;

            print_header("Pillars");
            print_table(&knots)?;

            print_header("Repricing");
            print_table(&repricing)?;
            if !result.is_valid() {
                print_warning(&format!(
                    "Max repricing error {:.2e} exceeds tolerance",
                    result.max_error()
                ));
            }

            print_header(&format!("Forwards (first {} of {})", shown.len(), forwards.len()));
            print_table(&shown)?;
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "currency": convention.currency,
            "valuation_date": valuation_date,
            "iterations": result.iterations,
            "max_error": result.max_error(),
            "pillars": knots,
            "repricing": repricing,
            "forwards": shown,
            "forward_count": forwards.len(),
        }))?,
        OutputFormat::Csv => print_output(&shown, format)?,
    }

    Ok(())
}
