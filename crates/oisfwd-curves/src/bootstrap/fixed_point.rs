//! Gauss-Seidel OIS bootstrap.

use log::debug;
use serde::{Deserialize, Serialize};

use oisfwd_core::Date;
use oisfwd_math::extrapolation::ExtrapolationMethod;

use crate::conventions::CurrencyConvention;
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::instruments::OisInstrument;
use crate::quotes::RateQuote;
use crate::repricing::{BootstrapResult, BuildTimer, RepricingReport, PAR_RATE_TOLERANCE};

/// Configuration for the fixed-point bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Stop once the largest knot change in a sweep is below this.
    pub tolerance: f64,
    /// Sweeps allowed before giving up.
    pub max_iterations: u32,
    /// Extrapolation past the last pillar.
    #[serde(skip)]
    pub extrapolation: ExtrapolationMethod,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 100,
            extrapolation: ExtrapolationMethod::Linear,
        }
    }
}

/// Bootstraps an OIS discount curve for one currency.
///
/// The algorithm:
/// 1. Sort instruments by maturity and reject duplicate pillars
/// 2. Seed each pillar with `exp(-R × t)`
/// 3. Sweep the pillars in maturity order; for pillar `n`, rebuild the curve
///    from the current knots and set
///    `DF_n = (DF(spot) - R × Σ_{i<n} τ_i DF(pay_i)) / (1 + R × τ_n)`
/// 4. Stop when the largest change in a sweep is below the tolerance
/// 5. Require knots strictly decreasing from 1
///
/// Non-positive rates fail at step 5, so such quote sets never produce a
/// curve.
#[derive(Debug, Clone)]
pub struct OisBootstrapper {
    valuation_date: Date,
    convention: CurrencyConvention,
    instruments: Vec<OisInstrument>,
    config: BootstrapConfig,
}

impl OisBootstrapper {
    /// Creates an empty bootstrapper for a currency.
    #[must_use]
    pub fn new(valuation_date: Date, convention: &CurrencyConvention) -> Self {
        Self {
            valuation_date,
            convention: *convention,
            instruments: Vec::new(),
            config: BootstrapConfig::default(),
        }
    }

    /// Creates a bootstrapper with one instrument per quote.
    ///
    /// # Errors
    ///
    /// Returns a date error if an instrument schedule cannot be built.
    pub fn from_quotes(
        valuation_date: Date,
        convention: &CurrencyConvention,
        quotes: &[RateQuote],
    ) -> CurveResult<Self> {
        let instruments = quotes
            .iter()
            .map(|q| OisInstrument::new(q, convention, valuation_date))
            .collect::<CurveResult<Vec<_>>>()?;
        Ok(Self::new(valuation_date, convention).add_instruments(instruments))
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets the sweep cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Adds an instrument.
    #[must_use]
    pub fn add_instrument(mut self, instrument: OisInstrument) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Adds several instruments.
    #[must_use]
    pub fn add_instruments(mut self, instruments: impl IntoIterator<Item = OisInstrument>) -> Self {
        self.instruments.extend(instruments);
        self
    }

    /// Instruments added so far, in insertion order until bootstrapped.
    #[must_use]
    pub fn instruments(&self) -> &[OisInstrument] {
        &self.instruments
    }

    /// Bootstraps the curve.
    ///
    /// # Errors
    ///
    /// - `NoInstruments` if nothing was added
    /// - `DuplicatePillar` if two instruments share a maturity
    /// - `NonMonotonic` if a knot is non-positive, non-finite or not below
    ///   its predecessor
    /// - `NonConvergent` if the sweep cap is reached
    pub fn bootstrap(mut self) -> CurveResult<DiscountCurve> {
        self.solve().map(|(curve, _)| curve)
    }

    /// Bootstraps the curve and reprices every instrument on it.
    ///
    /// A result whose report fails is still returned; check
    /// [`BootstrapResult::is_valid`].
    ///
    /// # Errors
    ///
    /// As [`bootstrap`](Self::bootstrap).
    pub fn bootstrap_validated(mut self) -> CurveResult<BootstrapResult> {
        let timer = BuildTimer::start();
        let (curve, iterations) = self.solve()?;
        let repricing_report = RepricingReport::build(&self.instruments, &curve, PAR_RATE_TOLERANCE)?;

        if !repricing_report.is_valid() {
            debug!(
                "{} curve fails repricing: {:?}",
                self.convention.currency,
                repricing_report.failed_instruments()
            );
        }

        Ok(BootstrapResult {
            curve,
            repricing_report,
            iterations,
            build_duration: timer.elapsed(),
        })
    }

    fn solve(&mut self) -> CurveResult<(DiscountCurve, u32)> {
        if self.instruments.is_empty() {
            return Err(CurveError::NoInstruments);
        }

        self.instruments.sort_by_key(OisInstrument::maturity);
        if let Some(pair) = self
            .instruments
            .windows(2)
            .find(|pair| pair[0].maturity() == pair[1].maturity())
        {
            return Err(CurveError::duplicate_pillar(pair[1].maturity()));
        }

        let day_count = self.convention.day_count;
        let dates: Vec<Date> = self.instruments.iter().map(OisInstrument::maturity).collect();
        let mut dfs: Vec<f64> = self
            .instruments
            .iter()
            .map(|inst| {
                let t = day_count.year_fraction(self.valuation_date, inst.maturity());
                (-inst.fixed_rate() * t).exp()
            })
            .collect();

        let mut residual = f64::INFINITY;
        for iteration in 1..=self.config.max_iterations {
            let mut max_change = 0.0_f64;

            for n in 0..self.instruments.len() {
                let curve = self.curve_from(&dates, &dfs)?;
                let implied = self.instruments[n].implied_maturity_df(&curve)?;
                if !implied.is_finite() || implied <= 0.0 {
                    let previous = if n == 0 { 1.0 } else { dfs[n - 1] };
                    return Err(CurveError::non_monotonic(dates[n], implied, previous));
                }
                max_change = max_change.max((implied - dfs[n]).abs());
                dfs[n] = implied;
            }

            debug!(
                "{} bootstrap sweep {iteration}: max knot change {max_change:.3e}",
                self.convention.currency
            );

            residual = max_change;
            if max_change < self.config.tolerance {
                let curve = self.curve_from(&dates, &dfs)?;
                check_decreasing(&curve)?;
                debug!(
                    "{} curve converged after {iteration} sweeps over {} pillars",
                    self.convention.currency,
                    dates.len()
                );
                return Ok((curve, iteration));
            }
        }

        Err(CurveError::non_convergent(self.config.max_iterations, residual))
    }

    fn curve_from(&self, dates: &[Date], dfs: &[f64]) -> CurveResult<DiscountCurve> {
        let pillars: Vec<(Date, f64)> = dates.iter().copied().zip(dfs.iter().copied()).collect();
        Ok(
            DiscountCurve::new(self.valuation_date, self.convention.day_count, &pillars)?
                .with_extrapolation(self.config.extrapolation),
        )
    }
}

/// Knots must fall strictly from DF = 1 at the reference date.
fn check_decreasing(curve: &DiscountCurve) -> CurveResult<()> {
    let knots: Vec<(Date, f64)> = curve.knots().collect();
    for pair in knots.windows(2) {
        let (_, previous) = pair[0];
        let (maturity, df) = pair[1];
        if df >= previous {
            return Err(CurveError::non_monotonic(maturity, df, previous));
        }
    }
    Ok(())
}

/// Bootstraps a curve from prepared instruments with the default
/// configuration.
///
/// # Errors
///
/// As [`OisBootstrapper::bootstrap`].
pub fn build(
    instruments: &[OisInstrument],
    convention: &CurrencyConvention,
    valuation_date: Date,
) -> CurveResult<DiscountCurve> {
    OisBootstrapper::new(valuation_date, convention)
        .add_instruments(instruments.iter().cloned())
        .bootstrap()
}
