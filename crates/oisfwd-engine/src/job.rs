//! Multi-currency forward job.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use oisfwd_core::{Currency, Date};
use oisfwd_curves::ForwardPoint;

use crate::config::{TickerConfig, UpdateWindows};
use crate::error::{JobError, JobResult};
use crate::gate::{self, GateDecision};
use crate::merge;
use crate::pipeline::{CurvePipeline, RawQuote};
use crate::source::{ForwardStore, MarketDataSource, Observations};

/// Parameters of one job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobRequest {
    /// Valuation date for curves and the market data fetch
    pub valuation_date: Date,
    /// Hour (0-23) used for the liquidity gate
    pub hour: u32,
    /// Stamp for every fresh row
    pub computed_at: NaiveDateTime,
    /// Skip writing output
    pub dry_run: bool,
}

/// What a job run did.
#[derive(Debug, Clone, Default)]
pub struct JobOutcome {
    /// Currencies whose curves were rebuilt
    pub refreshed: Vec<Currency>,
    /// Currencies not attempted, with the reason
    pub skipped: Vec<(Currency, GateDecision)>,
    /// Currencies attempted that produced no forwards
    pub failed: Vec<Currency>,
    /// Configured tickers with no observation
    pub missing_tickers: Vec<String>,
    /// Fresh rows from this run
    pub fresh_rows: usize,
    /// Rows after the carry-forward merge
    pub rows: Vec<ForwardPoint>,
    /// Locations written, empty on a dry run
    pub written: Vec<String>,
}

/// Gates, builds, merges and writes forwards for every configured currency.
pub struct ForwardJob {
    tickers: Vec<TickerConfig>,
    windows: UpdateWindows,
    pipeline: CurvePipeline,
    source: Arc<dyn MarketDataSource>,
    store: Arc<dyn ForwardStore>,
}

impl ForwardJob {
    /// Creates a job.
    pub fn new(
        tickers: Vec<TickerConfig>,
        windows: UpdateWindows,
        pipeline: CurvePipeline,
        source: Arc<dyn MarketDataSource>,
        store: Arc<dyn ForwardStore>,
    ) -> Self {
        Self {
            tickers,
            windows,
            pipeline,
            source,
            store,
        }
    }

    /// Distinct configured currencies, sorted by code.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self
            .tickers
            .iter()
            .map(|t| t.currency)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        currencies.sort_by_key(|c| c.code());
        currencies
    }

    /// Runs the job.
    ///
    /// # Errors
    ///
    /// Fails only when no tickers are configured or the market data source
    /// or output store fails. Individual currencies that cannot be built are
    /// reported in [`JobOutcome::failed`].
    pub fn run(&self, request: &JobRequest) -> JobResult<JobOutcome> {
        if self.tickers.is_empty() {
            return Err(JobError::NoTickers);
        }

        let date = request.valuation_date;
        let ticker_ids: Vec<String> = self.tickers.iter().map(|t| t.ticker.clone()).collect();
        info!(
            source = self.source.name(),
            tickers = ticker_ids.len(),
            %date,
            "fetching market data"
        );
        let observations = self
            .source
            .fetch(&ticker_ids, date)
            .map_err(JobError::MarketData)?;

        let missing_tickers: Vec<String> = ticker_ids
            .iter()
            .filter(|t| !observations.contains_key(*t))
            .cloned()
            .collect();
        if !missing_tickers.is_empty() {
            error!(missing = ?missing_tickers, "data points not available");
        }

        let mut outcome = JobOutcome {
            missing_tickers,
            ..JobOutcome::default()
        };

        let mut plan: Vec<(Currency, Vec<RawQuote>)> = Vec::new();
        for currency in self.currencies() {
            let decision = gate::decide(&self.windows, currency, request.hour);
            debug!(%currency, hour = request.hour, %decision, "liquidity gate");
            match decision {
                GateDecision::Refresh => plan.push((currency, self.quotes_for(currency, &observations))),
                GateDecision::NoWindow => {
                    warn!(%currency, "no update window configured, skipping");
                    outcome.skipped.push((currency, decision));
                }
                GateDecision::Closed { .. } => outcome.skipped.push((currency, decision)),
            }
        }

        let results: Vec<(Currency, Vec<ForwardPoint>)> = plan
            .par_iter()
            .map(|(currency, quotes)| {
                let points = self
                    .pipeline
                    .run_at(currency.code(), quotes, date, request.computed_at);
                (*currency, points)
            })
            .collect();

        let mut fresh = Vec::new();
        for (currency, points) in results {
            if points.is_empty() {
                outcome.failed.push(currency);
            } else {
                outcome.refreshed.push(currency);
                fresh.extend(points);
            }
        }
        outcome.fresh_rows = fresh.len();

        let previous = self.store.read_dated(date).map_err(JobError::Store)?;
        outcome.rows = match previous {
            Some(previous) => {
                debug!(rows = previous.len(), "previous run found for the day");
                merge::carry_forward(fresh, previous)
            }
            None => {
                let mut rows = fresh;
                merge::sort_rows(&mut rows);
                rows
            }
        };

        if request.dry_run {
            info!(rows = outcome.rows.len(), "dry run, nothing written");
        } else if outcome.rows.is_empty() {
            warn!(%date, "no forwards to write");
        } else {
            outcome.written = self
                .store
                .write(date, &outcome.rows)
                .map_err(JobError::Store)?;
            info!(rows = outcome.rows.len(), written = ?outcome.written, "forwards written");
        }

        info!(
            refreshed = ?outcome.refreshed,
            skipped = outcome.skipped.len(),
            failed = ?outcome.failed,
            "forward job finished"
        );
        Ok(outcome)
    }

    /// Quotes for a currency in configuration order; unobserved tickers give
    /// a missing rate.
    fn quotes_for(&self, currency: Currency, observations: &Observations) -> Vec<RawQuote> {
        self.tickers
            .iter()
            .filter(|t| t.currency == currency)
            .map(|t| RawQuote::new(t.tenor_string(), observations.get(&t.ticker).copied()))
            .collect()
    }
}
