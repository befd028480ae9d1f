//! Integration test: the forward job against in-memory market data.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use oisfwd_core::{Currency, Date, TimeUnit};
use oisfwd_engine::source::memory::{MemorySource, MemoryStore};
use oisfwd_engine::{
    CurvePipeline, ForwardJob, ForwardStore, GateDecision, JobError, JobRequest, TickerConfig,
    UpdateWindow, UpdateWindows,
};

fn valuation() -> Date {
    Date::from_ymd(2025, 1, 15).unwrap()
}

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(hour, 5, 0)
        .unwrap()
}

fn ticker(id: &str, currency: Currency, term: u32, unit: TimeUnit) -> TickerConfig {
    TickerConfig {
        ticker: id.to_string(),
        currency,
        term,
        unit,
    }
}

fn tickers() -> Vec<TickerConfig> {
    vec![
        ticker("EESWEA", Currency::EUR, 1, TimeUnit::Month),
        ticker("EESWEC", Currency::EUR, 3, TimeUnit::Month),
        ticker("EESWE1", Currency::EUR, 1, TimeUnit::Year),
        ticker("USOSFRA", Currency::USD, 1, TimeUnit::Month),
        ticker("USOSFR1", Currency::USD, 1, TimeUnit::Year),
        ticker("ADSOA", Currency::AUD, 1, TimeUnit::Month),
        ticker("ADSO1", Currency::AUD, 1, TimeUnit::Year),
        ticker("CDSOA", Currency::CAD, 1, TimeUnit::Month),
    ]
}

fn windows() -> UpdateWindows {
    [
        (Currency::EUR, UpdateWindow::new(7, 18)),
        (Currency::USD, UpdateWindow::new(13, 22)),
        (Currency::AUD, UpdateWindow::new(0, 8)),
    ]
    .into_iter()
    .collect()
}

fn source() -> MemorySource {
    let d = valuation();
    MemorySource::new()
        .with(d, "EESWEA", 3.50)
        .with(d, "EESWEC", 3.55)
        .with(d, "EESWE1", 3.40)
        .with(d, "USOSFRA", 4.32)
        // USOSFR1 missing
        .with(d, "ADSOA", 4.25)
        .with(d, "ADSO1", 3.80)
        .with(d, "CDSOA", 3.18)
}

fn request(hour: u32) -> JobRequest {
    JobRequest {
        valuation_date: valuation(),
        hour,
        computed_at: at(hour),
        dry_run: false,
    }
}

fn job(store: Arc<MemoryStore>) -> ForwardJob {
    ForwardJob::new(
        tickers(),
        windows(),
        CurvePipeline::default(),
        Arc::new(source()),
        store,
    )
}

#[test]
fn test_gating_and_failures() {
    let store = Arc::new(MemoryStore::new());
    let outcome = job(store.clone()).run(&request(14)).unwrap();

    assert_eq!(outcome.refreshed, vec![Currency::EUR]);
    assert_eq!(outcome.failed, vec![Currency::USD]);
    assert_eq!(outcome.missing_tickers, vec!["USOSFR1".to_string()]);

    let skipped: Vec<_> = outcome.skipped.iter().map(|(c, _)| *c).collect();
    assert_eq!(skipped, vec![Currency::AUD, Currency::CAD]);
    assert!(matches!(outcome.skipped[0].1, GateDecision::Closed { hour: 14, .. }));
    assert_eq!(outcome.skipped[1].1, GateDecision::NoWindow);

    assert_eq!(outcome.fresh_rows, 1095);
    assert_eq!(outcome.rows.len(), 1095);
    assert_eq!(outcome.written.len(), 2);
    assert_eq!(store.latest().len(), 1095);
}

#[test]
fn test_later_run_carries_earlier_currency() {
    let store = Arc::new(MemoryStore::new());
    let job = job(store.clone());

    // AUD refreshes early in the morning
    let morning = job.run(&request(6)).unwrap();
    assert_eq!(morning.refreshed, vec![Currency::AUD]);

    // EUR later in the day; AUD rows survive from the morning
    let afternoon = job.run(&request(15)).unwrap();
    assert_eq!(afternoon.refreshed, vec![Currency::EUR]);
    assert_eq!(afternoon.rows.len(), 2 * 1095);

    let aud: Vec<_> = afternoon
        .rows
        .iter()
        .filter(|r| r.currency == Currency::AUD)
        .collect();
    assert_eq!(aud.len(), 1095);
    assert!(aud.iter().all(|r| r.computed_at == at(6)));

    // AUD sorts before EUR
    assert_eq!(afternoon.rows[0].currency, Currency::AUD);
    assert_eq!(afternoon.rows[1095].currency, Currency::EUR);

    let stored = store.read_dated(valuation()).unwrap().unwrap();
    assert_eq!(stored, afternoon.rows);
}

#[test]
fn test_rerun_replaces_same_currency() {
    let store = Arc::new(MemoryStore::new());
    let job = job(store.clone());

    job.run(&request(8)).unwrap();
    let second = job.run(&request(9)).unwrap();

    assert_eq!(second.rows.len(), 1095);
    assert!(second.rows.iter().all(|r| r.computed_at == at(9)));
}

#[test]
fn test_dry_run_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let outcome = job(store.clone())
        .run(&JobRequest {
            dry_run: true,
            ..request(10)
        })
        .unwrap();

    assert_eq!(outcome.rows.len(), 1095);
    assert!(outcome.written.is_empty());
    assert!(store.read_dated(valuation()).unwrap().is_none());
}

#[test]
fn test_closed_hour_writes_nothing_new() {
    let store = Arc::new(MemoryStore::new());
    let outcome = job(store.clone()).run(&request(23)).unwrap();

    assert!(outcome.refreshed.is_empty());
    assert!(outcome.rows.is_empty());
    assert!(outcome.written.is_empty());
}

#[test]
fn test_no_tickers() {
    let job = ForwardJob::new(
        Vec::new(),
        windows(),
        CurvePipeline::default(),
        Arc::new(source()),
        Arc::new(MemoryStore::new()),
    );
    assert!(matches!(job.run(&request(10)), Err(JobError::NoTickers)));
}

#[test]
fn test_currencies_sorted_by_code() {
    let job = job(Arc::new(MemoryStore::new()));
    let codes: Vec<_> = job.currencies().iter().map(|c| c.code()).collect();
    assert_eq!(codes, vec!["AUD", "CAD", "EUR", "USD"]);
}
