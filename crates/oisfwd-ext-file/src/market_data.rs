//! CSV market data source.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use oisfwd_core::Date;
use oisfwd_engine::{MarketDataSource, Observations, SourceResult};

use crate::error::{FileError, FileResult};

#[derive(Debug, Deserialize)]
struct ObservationRecord {
    #[serde(rename = "Date")]
    date: Date,
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Value")]
    value: Option<f64>,
}

/// End-of-day values from a `Date,Ticker,Value` CSV.
///
/// An empty `Value` is a missing observation, the same as an absent row.
#[derive(Debug, Clone)]
pub struct CsvMarketDataSource {
    file_path: PathBuf,
    data: BTreeMap<Date, Observations>,
}

impl CsvMarketDataSource {
    /// Loads a market data file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or a row is malformed.
    pub fn new(file_path: impl AsRef<Path>) -> FileResult<Self> {
        let mut source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            data: BTreeMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Re-reads the file.
    pub fn reload(&mut self) -> FileResult<()> {
        let path = self.file_path.as_path();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| FileError::io(path, e))?;

        let mut data: BTreeMap<Date, Observations> = BTreeMap::new();
        let mut rows = 0usize;
        for (i, result) in reader.deserialize::<ObservationRecord>().enumerate() {
            let record = result.map_err(|e| FileError::parse(path, i + 1, e))?;
            rows += 1;
            if let Some(value) = record.value.filter(|v| v.is_finite()) {
                data.entry(record.date).or_default().insert(record.ticker, value);
            }
        }

        info!(path = %path.display(), rows, dates = data.len(), "market data loaded");
        self.data = data;
        Ok(())
    }

    /// Dates with at least one observation.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.data.keys().copied()
    }
}

impl MarketDataSource for CsvMarketDataSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self, tickers: &[String], date: Date) -> SourceResult<Observations> {
        let observed: Observations = self
            .data
            .get(&date)
            .map(|day| {
                tickers
                    .iter()
                    .filter_map(|t| day.get(t).map(|v| (t.clone(), *v)))
                    .collect()
            })
            .unwrap_or_default();
        debug!(%date, requested = tickers.len(), observed = observed.len(), "market data fetch");
        Ok(observed)
    }
}
