//! Feature builder: derived return/volatility/moving-average columns.
//!
//! All features are computed once over the full price history, before any
//! walk-forward slicing. Rows inside a rolling warm-up period (or with a
//! zero-variance z-score window) are dropped from the result.

use crate::domain::ohlcv::PriceBar;
use crate::domain::rolling::{pct_change, rolling_mean, rolling_std};

const FAST_WINDOW: usize = 20;
const SLOW_WINDOW: usize = 100;
const TRADING_DAYS_SQRT: f64 = 15.874507866387544; // sqrt(252)

/// One fully-defined row of the feature frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    pub date: chrono::NaiveDate,
    pub close: f64,
    pub ret_1d: f64,
    pub ret_5d: f64,
    pub vol_20d: f64,
    pub ma_fast: f64,
    pub ma_slow: f64,
    pub z_20: f64,
    pub fwd_ret_1d: f64,
}

/// Derives the feature frame from a daily price series.
///
/// Pure transform. A series shorter than the slow-MA warm-up (plus the
/// forward-return row) yields an empty frame rather than an error; callers
/// treat that as "nothing to evaluate".
pub fn add_features(bars: &[PriceBar]) -> Vec<FeatureRow> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let close_opts: Vec<Option<f64>> = closes.iter().map(|&c| Some(c)).collect();

    let ret_1d = pct_change(&closes, 1);
    let ret_5d = pct_change(&closes, 5);
    let vol_20d = rolling_std(&ret_1d, FAST_WINDOW);
    let ma_fast = rolling_mean(&closes, FAST_WINDOW);
    let ma_slow = rolling_mean(&closes, SLOW_WINDOW);
    let std_20 = rolling_std(&close_opts, FAST_WINDOW);

    let mut rows = Vec::new();
    for i in 0..bars.len() {
        // z is missing when the 20-day close window has zero variance;
        // division by zero must never leak an infinity into the frame.
        let z_20 = match (ma_fast[i], std_20[i]) {
            (Some(ma), Some(sd)) if sd > 0.0 => Some((closes[i] - ma) / sd),
            _ => None,
        };
        let fwd_ret_1d = ret_1d.get(i + 1).copied().flatten();

        let row = (|| {
            Some(FeatureRow {
                date: bars[i].date,
                close: closes[i],
                ret_1d: ret_1d[i]?,
                ret_5d: ret_5d[i]?,
                vol_20d: vol_20d[i]? * TRADING_DAYS_SQRT,
                ma_fast: ma_fast[i]?,
                ma_slow: ma_slow[i]?,
                z_20: z_20?,
                fwd_ret_1d: fwd_ret_1d?,
            })
        })();

        if let Some(row) = row {
            rows.push(row);
        }
    }
    rows
}
