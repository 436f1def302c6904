//! Performance metrics: equity curve, Sharpe ratio, max drawdown.
//!
//! All three are pure, total functions over finite sequences: degenerate or
//! empty input produces a zero/empty result, never a panic or a NaN.

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Cumulative product of `1 + r`. Non-finite returns count as 0.
pub fn equity_curve(returns: &[f64]) -> Vec<f64> {
    let mut equity = 1.0;
    returns
        .iter()
        .map(|&r| {
            if r.is_finite() {
                equity *= 1.0 + r;
            }
            equity
        })
        .collect()
}

/// Annualized Sharpe ratio over a per-period return series.
///
/// Non-finite entries are dropped; a zero sample standard deviation (which
/// includes samples smaller than two) resolves to 0.0.
pub fn sharpe(returns: &[f64], periods: f64) -> f64 {
    let r: Vec<f64> = returns.iter().copied().filter(|v| v.is_finite()).collect();
    if r.len() < 2 {
        return 0.0;
    }
    let n = r.len() as f64;
    let mean = r.iter().sum::<f64>() / n;
    let variance = r.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std = variance.sqrt();
    if std == 0.0 {
        return 0.0;
    }
    (mean / std) * periods.sqrt()
}

/// Largest peak-to-trough decline of an equity curve, as a fraction <= 0.
pub fn max_drawdown(equity: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for &e in equity {
        if e > peak {
            peak = e;
        }
        if peak > 0.0 {
            let dd = e / peak - 1.0;
            if dd < worst {
                worst = dd;
            }
        }
    }
    worst
}
