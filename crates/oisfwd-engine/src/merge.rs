//! Carry-forward merge of fresh forwards with earlier output of the same day.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use oisfwd_core::Currency;
use oisfwd_curves::ForwardPoint;

/// Merges fresh rows with previously written rows.
///
/// For each currency only the rows stamped with that currency's latest
/// `computed_at` survive, so a currency not refreshed on this run keeps its
/// earlier series. When stamps tie, the fresh row wins for each forward date.
/// The result is sorted by currency code, then forward date.
#[must_use]
pub fn carry_forward(fresh: Vec<ForwardPoint>, previous: Vec<ForwardPoint>) -> Vec<ForwardPoint> {
    let mut rows = fresh;
    rows.extend(previous);

    let mut latest: HashMap<Currency, NaiveDateTime> = HashMap::new();
    for row in &rows {
        latest
            .entry(row.currency)
            .and_modify(|at| *at = (*at).max(row.computed_at))
            .or_insert(row.computed_at);
    }

    rows.retain(|row| latest.get(&row.currency) == Some(&row.computed_at));
    // stable sort keeps fresh rows ahead of previous ones
    sort_rows(&mut rows);
    rows.dedup_by(|later, earlier| {
        later.currency == earlier.currency && later.forward_date == earlier.forward_date
    });
    rows
}

/// Sorts rows by currency code, then forward date.
pub fn sort_rows(rows: &mut [ForwardPoint]) {
    rows.sort_by(|a, b| {
        a.currency
            .code()
            .cmp(b.currency.code())
            .then(a.forward_date.cmp(&b.forward_date))
    });
}
