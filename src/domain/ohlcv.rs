//! Daily OHLCV bar representation.

use chrono::NaiveDate;

/// One daily price record as loaded from the price store.
///
/// A loaded series is sorted ascending by date with no duplicates; the
/// adapters enforce that on read.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
