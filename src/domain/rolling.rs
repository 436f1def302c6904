//! Fixed-size sliding-window aggregations over ordered series.
//!
//! All helpers return one output per input element; positions inside the
//! warm-up period (or fed by a missing input) are `None`. Standard deviation
//! is the sample flavor (n-1 denominator) throughout.

/// k-period percentage change: `v[t]/v[t-k] - 1`, `None` for `t < k`.
pub fn pct_change(values: &[f64], k: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if i >= k && k > 0 {
                Some(v / values[i - k] - 1.0)
            } else {
                None
            }
        })
        .collect()
}

/// Rolling mean over the trailing `n` values, `None` for the first `n-1`.
pub fn rolling_mean(values: &[f64], n: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if n == 0 || i + 1 < n {
            out.push(None);
            continue;
        }
        let window = &values[i + 1 - n..=i];
        out.push(Some(window.iter().sum::<f64>() / n as f64));
    }
    out
}

/// Rolling sample standard deviation over the trailing `n` values.
///
/// Requires `n >= 2`; a window containing any missing input yields `None`.
pub fn rolling_std(values: &[Option<f64>], n: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if n < 2 || i + 1 < n {
            out.push(None);
            continue;
        }
        let window = &values[i + 1 - n..=i];
        if window.iter().any(|v| v.is_none()) {
            out.push(None);
            continue;
        }
        let mean = window.iter().map(|v| v.unwrap_or(0.0)).sum::<f64>() / n as f64;
        let sum_sq: f64 = window
            .iter()
            .map(|v| {
                let diff = v.unwrap_or(0.0) - mean;
                diff * diff
            })
            .sum();
        out.push(Some((sum_sq / (n - 1) as f64).sqrt()));
    }
    out
}
