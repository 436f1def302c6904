#![allow(dead_code)]

use chrono::NaiveDate;
use sigwalk::domain::error::SigwalkError;
pub use sigwalk::domain::ohlcv::PriceBar;
use sigwalk::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_prices(&self, ticker: &str) -> Result<Vec<PriceBar>, SigwalkError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(SigwalkError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(ticker) {
            Some(bars) => Ok(bars.clone()),
            None => Err(SigwalkError::NoData {
                ticker: ticker.to_string(),
            }),
        }
    }

    fn list_tickers(&self) -> Result<Vec<String>, SigwalkError> {
        let mut tickers: Vec<String> = self.data.keys().cloned().collect();
        tickers.sort();
        Ok(tickers)
    }

    fn get_data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SigwalkError> {
        match self.data.get(ticker) {
            Some(bars) if !bars.is_empty() => Ok(Some((
                bars[0].date,
                bars[bars.len() - 1].date,
                bars.len(),
            ))),
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(date: NaiveDate, close: f64) -> PriceBar {
    PriceBar {
        date,
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1_000_000.0,
    }
}

/// `count` consecutive daily bars with linearly drifting closes.
pub fn generate_bars(start: NaiveDate, count: usize, start_price: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            make_bar(
                start + chrono::Duration::days(i as i64),
                start_price + i as f64 * 0.1,
            )
        })
        .collect()
}

/// Multi-year daily series with a deterministic drift-plus-cycle close, so
/// the fast/slow moving averages cross repeatedly and no 20-day window has
/// zero variance.
pub fn generate_crossover_bars(start_year: i32, years: usize) -> Vec<PriceBar> {
    let start = date(start_year, 1, 1);
    let end = date(start_year + years as i32 - 1, 12, 31);
    let mut bars = Vec::new();
    let mut day = start;
    let mut i = 0usize;
    while day <= end {
        let close = 100.0 + 0.02 * i as f64 + 10.0 * (i as f64 * std::f64::consts::TAU / 120.0).sin();
        bars.push(make_bar(day, close));
        day += chrono::Duration::days(1);
        i += 1;
    }
    bars
}
