//! # OIS Forward Engine
//!
//! Orchestration around the curve library.
//!
//! This crate provides:
//! - [`CurvePipeline`]: one currency, quotes to daily forwards, errors logged
//!   and turned into an empty series
//! - [`ForwardJob`]: the multi-currency batch with liquidity gating, parallel
//!   pipeline runs and the carry-forward merge
//! - [`MarketDataSource`] / [`ForwardStore`]: seams for quote input and
//!   forward output
//!
//! ## Architecture
//!
//! ```text
//! MarketDataSource ─> ForwardJob ─┬─> gate ─> CurvePipeline (rayon, per currency)
//!                                 │
//!                                 └─> merge (with ForwardStore::read_dated) ─> ForwardStore::write
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod gate;
pub mod job;
pub mod merge;
pub mod pipeline;
pub mod source;

pub use config::{TickerConfig, UpdateWindow, UpdateWindows};
pub use error::{JobError, JobResult, PipelineError, PipelineResult, SourceError, SourceResult};
pub use gate::GateDecision;
pub use job::{ForwardJob, JobOutcome, JobRequest};
pub use pipeline::{CurvePipeline, PipelineConfig, RawQuote};
pub use source::{ForwardStore, MarketDataSource, Observations};
