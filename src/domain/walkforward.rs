//! Walk-forward evaluation engine.
//!
//! Slides a fixed train/test year window across the feature frame one year
//! at a time, evaluates both signals out-of-sample on each test window, and
//! aggregates per-window metrics plus the concatenated return sequences.
//! Train years are labels only: the signals are rule-based, nothing is
//! fitted on the train span.

use chrono::Datelike;

use crate::domain::costs::apply_costs;
use crate::domain::features::FeatureRow;
use crate::domain::metrics::{TRADING_DAYS_PER_YEAR, equity_curve, max_drawdown, sharpe};
use crate::domain::signals::{DEFAULT_ENTRY_Z, DEFAULT_EXIT_Z, mean_reversion_signal, trend_signal};

/// Immutable run parameters, resolved from config and CLI overrides.
#[derive(Debug, Clone)]
pub struct WalkForwardSpec {
    pub ticker: String,
    pub train_years: usize,
    pub test_years: usize,
    pub fee_bps: f64,
}

impl Default for WalkForwardSpec {
    fn default() -> Self {
        Self {
            ticker: "SPY".to_string(),
            train_years: 5,
            test_years: 1,
            fee_bps: 1.0,
        }
    }
}

/// Per-window metrics row of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResult {
    pub train_start: i32,
    pub train_end: i32,
    pub test_start: i32,
    pub test_end: i32,
    pub trend_sharpe: f64,
    pub trend_mdd: f64,
    pub mr_sharpe: f64,
    pub mr_mdd: f64,
}

/// Summary table plus the concatenated out-of-sample returns, in window order.
#[derive(Debug, Clone, Default)]
pub struct WalkForwardResult {
    pub summary: Vec<WindowResult>,
    pub trend_returns: Vec<f64>,
    pub mr_returns: Vec<f64>,
}

/// Per-period strategy return: held position times next-day return, less
/// transaction costs.
pub fn strategy_returns(window: &[FeatureRow], position: &[u8], fee_bps: f64) -> Vec<f64> {
    let costs = apply_costs(position, fee_bps);
    window
        .iter()
        .zip(position)
        .zip(&costs)
        .map(|((row, &p), &cost)| f64::from(p) * row.fwd_ret_1d - cost)
        .collect()
}

/// Runs the walk-forward evaluation over a feature frame.
///
/// Fewer distinct years than `train_years + test_years` (including an empty
/// frame) produces an empty result; that is a legitimate outcome, not an
/// error. Features must have been computed on the full series beforehand;
/// this function only slices.
pub fn run(frame: &[FeatureRow], spec: &WalkForwardSpec) -> WalkForwardResult {
    let mut result = WalkForwardResult::default();
    if spec.train_years == 0 || spec.test_years == 0 {
        return result;
    }

    let mut years: Vec<i32> = frame.iter().map(|row| row.date.year()).collect();
    years.dedup();

    let span = spec.train_years + spec.test_years;
    let mut i = 0;
    while i + span <= years.len() {
        let train_start = years[i];
        let train_end = years[i + spec.train_years - 1];
        let test_start = years[i + spec.train_years];
        let test_end = years[i + span - 1];

        let window: Vec<FeatureRow> = frame
            .iter()
            .filter(|row| {
                let y = row.date.year();
                y >= test_start && y <= test_end
            })
            .copied()
            .collect();

        let trend_pos = trend_signal(&window);
        let mr_pos = mean_reversion_signal(&window, DEFAULT_ENTRY_Z, DEFAULT_EXIT_Z);
        let trend_ret = strategy_returns(&window, &trend_pos, spec.fee_bps);
        let mr_ret = strategy_returns(&window, &mr_pos, spec.fee_bps);

        result.summary.push(WindowResult {
            train_start,
            train_end,
            test_start,
            test_end,
            trend_sharpe: sharpe(&trend_ret, TRADING_DAYS_PER_YEAR),
            trend_mdd: max_drawdown(&equity_curve(&trend_ret)),
            mr_sharpe: sharpe(&mr_ret, TRADING_DAYS_PER_YEAR),
            mr_mdd: max_drawdown(&equity_curve(&mr_ret)),
        });
        result.trend_returns.extend(trend_ret);
        result.mr_returns.extend(mr_ret);
        i += 1;
    }
    result
}
