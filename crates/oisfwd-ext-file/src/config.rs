//! Ticker and update-window configuration files.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use oisfwd_core::{Currency, Tenor};
use oisfwd_engine::{TickerConfig, UpdateWindow, UpdateWindows};

use crate::error::{FileError, FileResult};

#[derive(Debug, Deserialize)]
struct TickerRecord {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Term")]
    term: u32,
    #[serde(rename = "Unit")]
    unit: String,
}

#[derive(Debug, Deserialize)]
struct WindowRecord {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "FirstUpdate")]
    first_update: u32,
    #[serde(rename = "LastUpdate")]
    last_update: u32,
}

/// Reads the ticker configuration (`Ticker,Currency,Term,Unit`).
///
/// # Errors
///
/// Fails on an unreadable file, an unknown currency or a bad term/unit.
pub fn read_ticker_config(path: impl AsRef<Path>) -> FileResult<Vec<TickerConfig>> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading ticker config");

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| FileError::io(path, e))?;

    let mut tickers = Vec::new();
    for (i, result) in reader.deserialize::<TickerRecord>().enumerate() {
        let record = result.map_err(|e| FileError::parse(path, i + 1, e))?;
        let currency =
            Currency::from_code(&record.currency).map_err(|e| FileError::parse(path, i + 1, e))?;
        let tenor = Tenor::parse(&format!("{}{}", record.term, record.unit))
            .map_err(|e| FileError::parse(path, i + 1, e))?;
        tickers.push(TickerConfig {
            ticker: record.ticker,
            currency,
            term: tenor.magnitude(),
            unit: tenor.unit(),
        });
    }
    Ok(tickers)
}

/// Reads the update-window configuration (`Currency,FirstUpdate,LastUpdate`).
///
/// A currency listed twice keeps its last row.
///
/// # Errors
///
/// Fails on an unreadable file, an unknown currency or an hour above 24.
pub fn read_update_windows(path: impl AsRef<Path>) -> FileResult<UpdateWindows> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading update time config");

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| FileError::io(path, e))?;

    let mut windows = UpdateWindows::new();
    for (i, result) in reader.deserialize::<WindowRecord>().enumerate() {
        let record = result.map_err(|e| FileError::parse(path, i + 1, e))?;
        let currency =
            Currency::from_code(&record.currency).map_err(|e| FileError::parse(path, i + 1, e))?;
        if record.first_update > 24 || record.last_update > 24 {
            return Err(FileError::parse(
                path,
                i + 1,
                format!(
                    "hours must be within 0-24, got {}-{}",
                    record.first_update, record.last_update
                ),
            ));
        }
        windows.insert(
            currency,
            UpdateWindow::new(record.first_update, record.last_update),
        );
    }
    Ok(windows)
}
