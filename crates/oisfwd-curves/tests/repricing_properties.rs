//! Property tests: any positive quote set reprices, in any order.

use proptest::prelude::*;

use oisfwd_core::{Currency, Date};
use oisfwd_curves::bootstrap::OisBootstrapper;
use oisfwd_curves::conventions;
use oisfwd_curves::quotes::normalize;
use oisfwd_curves::repricing::PAR_RATE_TOLERANCE;
use oisfwd_curves::RateQuote;

const TENORS: [&str; 8] = ["1W", "1M", "3M", "6M", "9M", "1Y", "2Y", "3Y"];

fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// A non-empty subset of tenors with a base rate and small per-tenor spreads.
fn quotes_strategy() -> impl Strategy<Value = Vec<RateQuote>> {
    (
        prop::sample::subsequence(TENORS.to_vec(), 1..=TENORS.len()),
        1.0f64..6.0,
        prop::collection::vec(-0.05f64..0.05, TENORS.len()),
    )
        .prop_map(|(tenors, base, spreads)| {
            tenors
                .iter()
                .zip(spreads)
                .map(|(t, s)| normalize(t, base + s).unwrap())
                .collect()
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_flat_quotes_reprice(currency in currency_strategy(), rate in 0.1f64..8.0) {
        let valuation = Date::from_ymd(2025, 3, 12).unwrap();
        let quotes: Vec<RateQuote> = ["1M", "6M", "1Y", "2Y"]
            .iter()
            .map(|t| normalize(t, rate).unwrap())
            .collect();

        let result = OisBootstrapper::from_quotes(valuation, conventions::lookup(currency), &quotes)
            .unwrap()
            .bootstrap_validated()
            .unwrap();

        prop_assert!(result.is_valid(), "{}", result.repricing_report);
    }

    #[test]
    fn prop_random_quote_sets_reprice(currency in currency_strategy(), quotes in quotes_strategy()) {
        let valuation = Date::from_ymd(2025, 1, 15).unwrap();

        let result = OisBootstrapper::from_quotes(valuation, conventions::lookup(currency), &quotes)
            .unwrap()
            .bootstrap_validated()
            .unwrap();

        prop_assert!(result.max_error() <= PAR_RATE_TOLERANCE, "{}", result.repricing_report);
    }
}
