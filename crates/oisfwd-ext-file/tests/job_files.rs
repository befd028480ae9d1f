//! Integration test: the forward job over CSV configuration, market data and
//! output files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use oisfwd_core::{Currency, Date};
use oisfwd_engine::{CurvePipeline, ForwardJob, JobRequest};
use oisfwd_ext_file::{
    read_forwards, read_ticker_config, read_update_windows, CsvForwardStore, CsvMarketDataSource,
};

const TICKERS: &str = "\
Ticker,Currency,Term,Unit
ESTR1M,EUR,1,M
ESTR3M,EUR,3,M
ESTR1Y,EUR,1,Y
SONIA1M,GBP,1,M
SONIA1Y,GBP,1,Y
";

const WINDOWS: &str = "\
Currency,FirstUpdate,LastUpdate
EUR,7,18
GBP,8,17
";

const MARKET_DATA: &str = "\
Date,Ticker,Value
2025-01-15,ESTR1M,3.50
2025-01-15,ESTR3M,3.55
2025-01-15,ESTR1Y,3.40
2025-01-15,SONIA1M,4.70
2025-01-15,SONIA1Y,
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn job(dir: &Path, market_data: &str) -> ForwardJob {
    let tickers = read_ticker_config(write(dir, "tickers.csv", TICKERS)).unwrap();
    let windows = read_update_windows(write(dir, "windows.csv", WINDOWS)).unwrap();
    let source = CsvMarketDataSource::new(write(dir, "market.csv", market_data)).unwrap();
    ForwardJob::new(
        tickers,
        windows,
        CurvePipeline::default(),
        Arc::new(source),
        Arc::new(CsvForwardStore::new(dir.join("out"))),
    )
}

fn request(hour: u32, minute: u32) -> JobRequest {
    JobRequest {
        valuation_date: Date::from_ymd(2025, 1, 15).unwrap(),
        hour,
        computed_at: NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap(),
        dry_run: false,
    }
}

#[test]
fn test_job_writes_latest_and_dated() {
    let dir = TempDir::new().unwrap();
    let outcome = job(dir.path(), MARKET_DATA).run(&request(10, 0)).unwrap();

    assert_eq!(outcome.refreshed, vec![Currency::EUR]);
    assert_eq!(outcome.failed, vec![Currency::GBP]);
    assert_eq!(outcome.missing_tickers, vec!["SONIA1Y".to_string()]);

    let latest = read_forwards(dir.path().join("out/curves.csv")).unwrap();
    let dated = read_forwards(dir.path().join("out/curves_2025-01-15.csv")).unwrap();
    assert_eq!(latest.len(), 1095);
    assert_eq!(latest, dated);
    assert_eq!(latest, outcome.rows);
}

#[test]
fn test_second_run_carries_forward_from_dated_file() {
    let dir = TempDir::new().unwrap();

    // 07:30: only the EUR window is open
    let first = job(dir.path(), MARKET_DATA).run(&request(7, 30)).unwrap();
    assert_eq!(first.refreshed, vec![Currency::EUR]);

    // 16:15: GBP data is complete, both build and EUR replaces its 07:30 rows
    let completed = MARKET_DATA.replace("SONIA1Y,\n", "SONIA1Y,4.22\n");
    let second = job(dir.path(), &completed).run(&request(16, 15)).unwrap();
    assert_eq!(second.refreshed, vec![Currency::EUR, Currency::GBP]);
    assert_eq!(second.rows.len(), 2 * 1095);

    // At 17:45 only EUR refreshes; GBP rows from 16:15 are carried
    let third = job(dir.path(), &completed).run(&request(17, 45)).unwrap();
    assert_eq!(third.refreshed, vec![Currency::EUR]);

    let dated = read_forwards(dir.path().join("out/curves_2025-01-15.csv")).unwrap();
    assert_eq!(dated.len(), 2 * 1095);
    let stamp = |h, m| {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    };
    assert!(dated
        .iter()
        .filter(|r| r.currency == Currency::EUR)
        .all(|r| r.computed_at == stamp(17, 45)));
    assert!(dated
        .iter()
        .filter(|r| r.currency == Currency::GBP)
        .all(|r| r.computed_at == stamp(16, 15)));
}
