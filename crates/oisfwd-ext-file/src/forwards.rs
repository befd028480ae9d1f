//! Forward output CSVs: `curves.csv` and `curves_YYYY-MM-DD.csv`.
//!
//! Columns are `Date,Currency,DateFwd,RateFwd,Updated`, with `Updated` as
//! `%Y-%m-%d %H:%M:%S`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use oisfwd_core::{Currency, Date};
use oisfwd_curves::ForwardPoint;
use oisfwd_engine::{ForwardStore, SourceResult};

use crate::error::{FileError, FileResult};

const UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name of the latest output.
pub const LATEST_FILE: &str = "curves.csv";

#[derive(Debug, Serialize, Deserialize)]
struct ForwardRecord {
    #[serde(rename = "Date")]
    date: Date,
    #[serde(rename = "Currency")]
    currency: Currency,
    #[serde(rename = "DateFwd")]
    date_fwd: Date,
    #[serde(rename = "RateFwd")]
    rate_fwd: f64,
    #[serde(rename = "Updated")]
    updated: String,
}

impl From<&ForwardPoint> for ForwardRecord {
    fn from(p: &ForwardPoint) -> Self {
        Self {
            date: p.valuation_date,
            currency: p.currency,
            date_fwd: p.forward_date,
            rate_fwd: p.forward_rate_percent,
            updated: p.computed_at.format(UPDATED_FORMAT).to_string(),
        }
    }
}

/// File name of the dated output for a valuation date.
#[must_use]
pub fn dated_file_name(valuation_date: Date) -> String {
    format!("curves_{valuation_date}.csv")
}

/// Writes forward rows to a CSV file.
///
/// # Errors
///
/// Fails if the file cannot be written.
pub fn write_forwards(path: impl AsRef<Path>, rows: &[ForwardPoint]) -> FileResult<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| FileError::io(path, e))?;
    for row in rows {
        writer
            .serialize(ForwardRecord::from(row))
            .map_err(|e| FileError::io(path, e))?;
    }
    writer.flush().map_err(|e| FileError::io(path, e))?;
    debug!(path = %path.display(), rows = rows.len(), "forwards written");
    Ok(())
}

/// Reads forward rows written by [`write_forwards`].
///
/// # Errors
///
/// Fails if the file cannot be read or a row is malformed.
pub fn read_forwards(path: impl AsRef<Path>) -> FileResult<Vec<ForwardPoint>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| FileError::io(path, e))?;

    reader
        .deserialize::<ForwardRecord>()
        .enumerate()
        .map(|(i, result)| {
            let record = result.map_err(|e| FileError::parse(path, i + 1, e))?;
            let computed_at = NaiveDateTime::parse_from_str(&record.updated, UPDATED_FORMAT)
                .map_err(|e| FileError::parse(path, i + 1, e))?;
            Ok(ForwardPoint {
                valuation_date: record.date,
                currency: record.currency,
                forward_date: record.date_fwd,
                forward_rate_percent: record.rate_fwd,
                computed_at,
            })
        })
        .collect()
}

/// Forward output in a directory: a latest file plus one file per
/// valuation date.
#[derive(Debug, Clone)]
pub struct CsvForwardStore {
    output_dir: PathBuf,
}

impl CsvForwardStore {
    /// Creates a store writing under `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the latest output.
    #[must_use]
    pub fn latest_path(&self) -> PathBuf {
        self.output_dir.join(LATEST_FILE)
    }

    /// Path of the dated output.
    #[must_use]
    pub fn dated_path(&self, valuation_date: Date) -> PathBuf {
        self.output_dir.join(dated_file_name(valuation_date))
    }
}

impl ForwardStore for CsvForwardStore {
    fn read_dated(&self, valuation_date: Date) -> SourceResult<Option<Vec<ForwardPoint>>> {
        let path = self.dated_path(valuation_date);
        match fs::metadata(&path) {
            Ok(_) => Ok(Some(read_forwards(&path)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FileError::io(&path, e).into()),
        }
    }

    fn write(&self, valuation_date: Date, rows: &[ForwardPoint]) -> SourceResult<Vec<String>> {
        fs::create_dir_all(&self.output_dir).map_err(|e| FileError::io(&self.output_dir, e))?;

        let latest = self.latest_path();
        let dated = self.dated_path(valuation_date);
        write_forwards(&latest, rows)?;
        write_forwards(&dated, rows)?;

        Ok(vec![
            latest.display().to_string(),
            dated.display().to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn point(day: i64, rate: f64) -> ForwardPoint {
        let valuation = Date::from_ymd(2025, 1, 15).unwrap();
        ForwardPoint {
            valuation_date: valuation,
            currency: Currency::GBP,
            forward_date: valuation.add_days(day),
            forward_rate_percent: rate,
            computed_at: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(16, 30, 59)
                .unwrap(),
        }
    }

    #[test]
    fn test_header_and_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_forwards(&path, &[point(0, 4.6875)]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Date,Currency,DateFwd,RateFwd,Updated"));
        assert_eq!(
            lines.next(),
            Some("2025-01-15,GBP,2025-01-15,4.6875,2025-01-15 16:30:59")
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![point(0, 4.712_345_678_901_234), point(1, 4.7), point(2, 0.1 + 0.2)];

        write_forwards(&path, &rows).unwrap();
        assert_eq!(read_forwards(&path).unwrap(), rows);
    }

    #[test]
    fn test_store_paths_and_missing_dated() {
        let dir = TempDir::new().unwrap();
        let store = CsvForwardStore::new(dir.path().join("ois_fwd"));
        let date = Date::from_ymd(2025, 1, 15).unwrap();

        assert!(store.read_dated(date).unwrap().is_none());

        let written = store.write(date, &[point(0, 4.6)]).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[1].ends_with("curves_2025-01-15.csv"));
        assert!(store.latest_path().exists());
        assert_eq!(store.read_dated(date).unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_bad_updated_stamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "Date,Currency,DateFwd,RateFwd,Updated\n2025-01-15,GBP,2025-01-15,4.6,yesterday\n",
        )
        .unwrap();
        assert!(matches!(read_forwards(&path), Err(FileError::Parse { record: 1, .. })));
    }
}
