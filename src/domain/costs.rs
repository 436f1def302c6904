//! Transaction-cost model: position changes charged in basis points.

const BPS_DENOMINATOR: f64 = 10_000.0;

/// Converts a {0,1} position series into a per-period cost series.
///
/// The position before the window is an implicit flat 0, so entering on the
/// first bar is charged like any other trade.
pub fn apply_costs(position: &[u8], fee_bps: f64) -> Vec<f64> {
    let fee = fee_bps / BPS_DENOMINATOR;
    let mut prev = 0u8;
    position
        .iter()
        .map(|&p| {
            let trade = (i16::from(p) - i16::from(prev)).unsigned_abs() as f64;
            prev = p;
            trade * fee
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_bar_entry_is_charged() {
        let costs = apply_costs(&[1, 1, 1], 1.0);
        assert_relative_eq!(costs[0], 1.0 / 10_000.0);
        assert_relative_eq!(costs[1], 0.0);
        assert_relative_eq!(costs[2], 0.0);
    }

    #[test]
    fn unchanged_position_costs_nothing_after_entry() {
        let costs = apply_costs(&[0, 0, 0, 0], 5.0);
        assert!(costs.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn each_flip_is_charged() {
        let costs = apply_costs(&[0, 1, 1, 0, 1], 2.0);
        let fee = 2.0 / 10_000.0;
        assert_relative_eq!(costs[0], 0.0);
        assert_relative_eq!(costs[1], fee);
        assert_relative_eq!(costs[2], 0.0);
        assert_relative_eq!(costs[3], fee);
        assert_relative_eq!(costs[4], fee);
    }

    #[test]
    fn zero_fee_is_free() {
        let costs = apply_costs(&[1, 0, 1, 0], 0.0);
        assert!(costs.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn empty_position_series() {
        assert!(apply_costs(&[], 1.0).is_empty());
    }
}
