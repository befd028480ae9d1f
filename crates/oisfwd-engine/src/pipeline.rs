//! Single-currency pipeline: quotes in, daily forwards out.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use oisfwd_core::{Currency, Date};
use oisfwd_curves::bootstrap::{BootstrapConfig, OisBootstrapper};
use oisfwd_curves::conventions;
use oisfwd_curves::forwards::{ExtractionConfig, ForwardExtractor, ForwardPoint};
use oisfwd_curves::quotes::{normalize, RateQuote};

use crate::error::{PipelineError, PipelineResult};

/// A quote as it arrives from market data: the rate may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    /// Tenor string, e.g. "3M"
    pub tenor: String,
    /// Rate in percent, `None` when unavailable
    pub rate_percent: Option<f64>,
}

impl RawQuote {
    /// Creates a raw quote.
    #[must_use]
    pub fn new(tenor: impl Into<String>, rate_percent: Option<f64>) -> Self {
        Self {
            tenor: tenor.into(),
            rate_percent,
        }
    }

    fn usable_rate(&self) -> Option<f64> {
        self.rate_percent.filter(|r| r.is_finite())
    }
}

impl<S: Into<String>> From<(S, f64)> for RawQuote {
    fn from((tenor, rate): (S, f64)) -> Self {
        Self::new(tenor, Some(rate))
    }
}

/// Bootstrap and extraction settings for pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Fixed-point solver settings
    pub bootstrap: BootstrapConfig,
    /// Forward series settings
    pub extraction: ExtractionConfig,
}

/// Runs lookup, completeness check, normalization, bootstrap and extraction
/// for one currency.
///
/// [`run`](Self::run) never fails: any error is logged and yields an empty
/// series. [`try_run`](Self::try_run) exposes the error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurvePipeline {
    config: PipelineConfig,
}

impl CurvePipeline {
    /// Creates a pipeline.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Pipeline settings.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline stamped with the current local time.
    pub fn run(&self, currency: &str, quotes: &[RawQuote], valuation_date: Date) -> Vec<ForwardPoint> {
        self.run_at(currency, quotes, valuation_date, Local::now().naive_local())
    }

    /// Runs the pipeline with an explicit `computed_at`.
    pub fn run_at(
        &self,
        currency: &str,
        quotes: &[RawQuote],
        valuation_date: Date,
        computed_at: NaiveDateTime,
    ) -> Vec<ForwardPoint> {
        match self.try_run_at(currency, quotes, valuation_date, computed_at) {
            Ok(points) => points,
            Err(err) => {
                warn!(
                    currency = %currency.trim(),
                    kind = err.kind(),
                    error = %err,
                    %valuation_date,
                    "curve pipeline failed, no forwards produced"
                );
                Vec::new()
            }
        }
    }

    /// Runs the pipeline stamped with the current local time, returning
    /// errors.
    pub fn try_run(
        &self,
        currency: &str,
        quotes: &[RawQuote],
        valuation_date: Date,
    ) -> PipelineResult<Vec<ForwardPoint>> {
        self.try_run_at(currency, quotes, valuation_date, Local::now().naive_local())
    }

    /// Runs the pipeline with an explicit `computed_at`, returning errors.
    ///
    /// # Errors
    ///
    /// - `UnsupportedCurrency` for an unknown code
    /// - `IncompleteQuoteSet` when any rate is missing or non-finite
    /// - `InvalidTenorUnit` / `InvalidTenorMagnitude` for a bad tenor
    /// - `CurveBuild` when the bootstrap or extraction fails
    pub fn try_run_at(
        &self,
        currency: &str,
        quotes: &[RawQuote],
        valuation_date: Date,
        computed_at: NaiveDateTime,
    ) -> PipelineResult<Vec<ForwardPoint>> {
        let ccy = Currency::from_code(currency)?;
        let convention = conventions::lookup(ccy);

        let missing: Vec<String> = quotes
            .iter()
            .filter(|q| q.usable_rate().is_none())
            .map(|q| q.tenor.clone())
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::incomplete(ccy, missing));
        }

        let normalized = quotes
            .iter()
            .map(|q| normalize(&q.tenor, q.usable_rate().unwrap_or(f64::NAN)))
            .collect::<Result<Vec<RateQuote>, _>>()?;

        let result = OisBootstrapper::from_quotes(valuation_date, convention, &normalized)?
            .with_config(self.config.bootstrap)
            .bootstrap_validated()?;

        debug!(
            currency = %ccy,
            pillars = normalized.len(),
            iterations = result.iterations,
            max_error = result.max_error(),
            elapsed_us = result.build_duration.as_micros() as u64,
            "curve bootstrapped"
        );
        if !result.is_valid() {
            warn!(
                currency = %ccy,
                failed = ?result.repricing_report.failed_instruments(),
                max_error = result.max_error(),
                "curve does not reprice all quotes"
            );
        }

        let points = ForwardExtractor::new(self.config.extraction).extract(
            &result.curve,
            valuation_date,
            convention.calendar(),
            ccy,
            computed_at,
        )?;
        Ok(points)
    }
}
