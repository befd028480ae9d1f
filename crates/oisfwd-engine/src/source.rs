//! Seams to the outside world: market data in, forward rows out.

use std::collections::HashMap;

use oisfwd_core::Date;
use oisfwd_curves::ForwardPoint;

use crate::error::SourceResult;

/// Observed values keyed by ticker.
pub type Observations = HashMap<String, f64>;

/// Supplies end-of-day quote values for tickers.
pub trait MarketDataSource: Send + Sync {
    /// Name for logs.
    fn name(&self) -> &str;

    /// Values observed for `tickers` on `date`.
    ///
    /// Tickers with no observation are simply absent from the map.
    fn fetch(&self, tickers: &[String], date: Date) -> SourceResult<Observations>;
}

/// Reads and writes forward output.
pub trait ForwardStore: Send + Sync {
    /// Rows previously written for `valuation_date`, or `None` if there are
    /// none.
    fn read_dated(&self, valuation_date: Date) -> SourceResult<Option<Vec<ForwardPoint>>>;

    /// Writes `rows` as both the latest and the dated output. Returns the
    /// locations written.
    fn write(&self, valuation_date: Date, rows: &[ForwardPoint]) -> SourceResult<Vec<String>>;
}

/// In-memory source and store for tests and dry runs.
pub mod memory {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::{ForwardStore, MarketDataSource, Observations};
    use crate::error::{SourceError, SourceResult};
    use oisfwd_core::Date;
    use oisfwd_curves::ForwardPoint;

    /// Fixed observations, keyed by date then ticker.
    #[derive(Debug, Default)]
    pub struct MemorySource {
        data: BTreeMap<Date, Observations>,
    }

    impl MemorySource {
        /// Creates an empty source.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds an observation.
        #[must_use]
        pub fn with(mut self, date: Date, ticker: &str, value: f64) -> Self {
            self.data
                .entry(date)
                .or_default()
                .insert(ticker.to_string(), value);
            self
        }
    }

    impl MarketDataSource for MemorySource {
        fn name(&self) -> &str {
            "memory"
        }

        fn fetch(&self, tickers: &[String], date: Date) -> SourceResult<Observations> {
            let Some(day) = self.data.get(&date) else {
                return Ok(Observations::new());
            };
            Ok(tickers
                .iter()
                .filter_map(|t| day.get(t).map(|v| (t.clone(), *v)))
                .collect())
        }
    }

    /// Keeps dated output in memory.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        dated: Mutex<BTreeMap<Date, Vec<ForwardPoint>>>,
        latest: Mutex<Vec<ForwardPoint>>,
    }

    impl MemoryStore {
        /// Creates an empty store.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// The most recently written rows.
        #[must_use]
        pub fn latest(&self) -> Vec<ForwardPoint> {
            self.latest.lock().map(|rows| rows.clone()).unwrap_or_default()
        }
    }

    impl ForwardStore for MemoryStore {
        fn read_dated(&self, valuation_date: Date) -> SourceResult<Option<Vec<ForwardPoint>>> {
            let dated = self
                .dated
                .lock()
                .map_err(|_| SourceError::io("memory store poisoned"))?;
            Ok(dated.get(&valuation_date).cloned())
        }

        fn write(&self, valuation_date: Date, rows: &[ForwardPoint]) -> SourceResult<Vec<String>> {
            self.dated
                .lock()
                .map_err(|_| SourceError::io("memory store poisoned"))?
                .insert(valuation_date, rows.to_vec());
            *self
                .latest
                .lock()
                .map_err(|_| SourceError::io("memory store poisoned"))? = rows.to_vec();
            Ok(vec![
                "memory:latest".to_string(),
                format!("memory:{valuation_date}"),
            ])
        }
    }
}
