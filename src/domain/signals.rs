//! Signal generators mapping a feature window to a {0,1} position series.
//!
//! Both generators operate on one evaluation window at a time and never look
//! across window boundaries; the mean-reversion automaton restarts flat at
//! the beginning of every window.

use crate::domain::features::FeatureRow;

/// z-score at or below which the mean-reversion strategy enters.
pub const DEFAULT_ENTRY_Z: f64 = -1.0;
/// z-score at or above which the mean-reversion strategy exits.
pub const DEFAULT_EXIT_Z: f64 = -0.2;

/// Long whenever the fast moving average is above the slow one. Stateless.
pub fn trend_signal(window: &[FeatureRow]) -> Vec<u8> {
    window
        .iter()
        .map(|row| u8::from(row.ma_fast > row.ma_slow))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MrState {
    Flat,
    Long,
}

/// Two-state scan over the window's z-scores.
///
/// Enters when flat and `z <= entry_z`, exits when long and `z >= exit_z`;
/// the entry check runs first but the two transitions are mutually
/// exclusive. Emits the position after applying the step's transition.
pub fn mean_reversion_signal(window: &[FeatureRow], entry_z: f64, exit_z: f64) -> Vec<u8> {
    let mut state = MrState::Flat;
    window
        .iter()
        .map(|row| {
            state = match state {
                MrState::Flat if row.z_20 <= entry_z => MrState::Long,
                MrState::Long if row.z_20 >= exit_z => MrState::Flat,
                other => other,
            };
            u8::from(state == MrState::Long)
        })
        .collect()
}
