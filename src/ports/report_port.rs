//! Report output port trait.

use crate::domain::error::SigwalkError;
use crate::domain::walkforward::WindowResult;
use std::path::PathBuf;

/// Sink for the walk-forward summary table and the equity-curve chart.
pub trait ReportPort {
    /// Writes the summary table (header always, even with zero windows) and
    /// returns the path it landed at.
    fn write_summary(
        &self,
        ticker: &str,
        summary: &[WindowResult],
    ) -> Result<PathBuf, SigwalkError>;

    /// Renders the two concatenated out-of-sample equity curves.
    fn write_equity_chart(
        &self,
        ticker: &str,
        trend_equity: &[f64],
        mr_equity: &[f64],
    ) -> Result<PathBuf, SigwalkError>;
}
