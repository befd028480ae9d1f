//! Repricing validation for bootstrapped curves.
//!
//! Every calibration instrument is repriced on the finished curve and its
//! model par rate compared with the quote. A curve that cannot reprice its
//! inputs within tolerance is wrong.

use std::fmt;
use std::time::{Duration, Instant};

use oisfwd_core::{Date, Tenor};

use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::instruments::OisInstrument;

/// Absolute par-rate tolerance (decimal) for OIS repricing.
pub const PAR_RATE_TOLERANCE: f64 = 1e-8;

/// Result of repricing a single instrument against the curve.
#[derive(Debug, Clone)]
pub struct RepricingCheck {
    /// Instrument label (e.g. "EUR ESTR 3M")
    pub instrument_id: String,
    /// Quoted tenor
    pub tenor: Tenor,
    /// Pillar date
    pub maturity: Date,
    /// Quoted par rate (decimal)
    pub market_rate: f64,
    /// Par rate implied by the curve (decimal)
    pub model_rate: f64,
    /// Absolute error |model - market|
    pub error: f64,
    /// Tolerance applied
    pub tolerance: f64,
    /// Whether the instrument passed
    pub passed: bool,
}

impl RepricingCheck {
    /// Reprices an instrument on a curve.
    pub fn from_instrument(
        instrument: &OisInstrument,
        curve: &DiscountCurve,
        tolerance: f64,
    ) -> CurveResult<Self> {
        let model_rate = instrument.par_rate(curve)?;
        let market_rate = instrument.fixed_rate();
        let error = (model_rate - market_rate).abs();

        Ok(Self {
            instrument_id: instrument.description(),
            tenor: instrument.tenor(),
            maturity: instrument.maturity(),
            market_rate,
            model_rate,
            error,
            tolerance,
            passed: error <= tolerance,
        })
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} {} | market: {:.6}% | model: {:.6}% | error: {:.2e} (tol: {:.0e})",
            status,
            self.instrument_id,
            self.market_rate * 100.0,
            self.model_rate * 100.0,
            self.error,
            self.tolerance
        )
    }
}

/// Repricing results for every calibration instrument.
#[derive(Debug, Clone)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
}

impl RepricingReport {
    /// Creates a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);

        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };

        Self {
            checks,
            max_error,
            rms_error,
        }
    }

    /// Reprices each instrument on the curve.
    pub fn build(
        instruments: &[OisInstrument],
        curve: &DiscountCurve,
        tolerance: f64,
    ) -> CurveResult<Self> {
        let checks = instruments
            .iter()
            .map(|inst| RepricingCheck::from_instrument(inst, curve, tolerance))
            .collect::<CurveResult<Vec<_>>>()?;
        Ok(Self::new(checks))
    }

    /// True if every instrument repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Individual checks, in maturity order.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Largest absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Root mean square error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Labels of the instruments that failed.
    #[must_use]
    pub fn failed_instruments(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.instrument_id.as_str())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Repricing: {}/{} passed, max error {:.2e}, rms {:.2e}",
            self.checks.iter().filter(|c| c.passed).count(),
            self.checks.len(),
            self.max_error,
            self.rms_error
        )?;
        for check in &self.checks {
            writeln!(f, "  {check}")?;
        }
        Ok(())
    }
}

/// A bootstrapped curve with its repricing report and build diagnostics.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The curve
    pub curve: DiscountCurve,
    /// Repricing of the calibration instruments
    pub repricing_report: RepricingReport,
    /// Fixed-point sweeps used
    pub iterations: u32,
    /// Wall time of the build
    pub build_duration: Duration,
}

impl BootstrapResult {
    /// True if every instrument repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repricing_report.is_valid()
    }

    /// Largest repricing error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.repricing_report.max_error()
    }

    /// Consumes the result, returning the curve.
    #[must_use]
    pub fn into_curve(self) -> DiscountCurve {
        self.curve
    }
}

/// Wall-clock timer for builds.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuildTimer(Instant);

impl BuildTimer {
    pub(crate) fn start() -> Self {
        Self(Instant::now())
    }

    pub(crate) fn elapsed(self) -> Duration {
        self.0.elapsed()
    }
}
