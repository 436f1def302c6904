//! File-based report adapter: summary CSV and equity-curve SVG chart.

use crate::domain::error::SigwalkError;
use crate::domain::walkforward::WindowResult;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use std::fs;
use std::path::PathBuf;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 320.0;
const CHART_PADDING: f64 = 40.0;

const TREND_COLOR: &str = "#1f77b4";
const MR_COLOR: &str = "#ff7f0e";

pub struct FileReportAdapter {
    results_dir: PathBuf,
    figures_dir: PathBuf,
}

impl FileReportAdapter {
    pub fn new(results_dir: PathBuf, figures_dir: PathBuf) -> Self {
        Self {
            results_dir,
            figures_dir,
        }
    }

    /// Reads `[report] results_dir` / `figures_dir`, with conventional
    /// defaults when unset.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let results = config
            .get_string("report", "results_dir")
            .unwrap_or_else(|| "reports/results".to_string());
        let figures = config
            .get_string("report", "figures_dir")
            .unwrap_or_else(|| "reports/figures".to_string());
        Self::new(PathBuf::from(results), PathBuf::from(figures))
    }
}

impl ReportPort for FileReportAdapter {
    fn write_summary(
        &self,
        ticker: &str,
        summary: &[WindowResult],
    ) -> Result<PathBuf, SigwalkError> {
        fs::create_dir_all(&self.results_dir)?;
        let path = self
            .results_dir
            .join(format!("{ticker}_walkforward_summary.csv"));

        let mut wtr = csv::Writer::from_path(&path).map_err(|e| SigwalkError::Data {
            reason: format!("failed to open {}: {}", path.display(), e),
        })?;
        wtr.write_record([
            "train_start",
            "train_end",
            "test_start",
            "test_end",
            "trend_sharpe",
            "trend_mdd",
            "mr_sharpe",
            "mr_mdd",
        ])
        .map_err(|e| SigwalkError::Data {
            reason: format!("failed to write summary header: {e}"),
        })?;

        for row in summary {
            wtr.write_record([
                row.train_start.to_string(),
                row.train_end.to_string(),
                row.test_start.to_string(),
                row.test_end.to_string(),
                format!("{:.6}", row.trend_sharpe),
                format!("{:.6}", row.trend_mdd),
                format!("{:.6}", row.mr_sharpe),
                format!("{:.6}", row.mr_mdd),
            ])
            .map_err(|e| SigwalkError::Data {
                reason: format!("failed to write summary row: {e}"),
            })?;
        }

        wtr.flush()?;
        Ok(path)
    }

    fn write_equity_chart(
        &self,
        ticker: &str,
        trend_equity: &[f64],
        mr_equity: &[f64],
    ) -> Result<PathBuf, SigwalkError> {
        fs::create_dir_all(&self.figures_dir)?;
        let path = self.figures_dir.join(format!("{ticker}_equity_curves.svg"));
        let svg = render_chart(ticker, trend_equity, mr_equity);
        fs::write(&path, svg)?;
        Ok(path)
    }
}

fn polyline_points(series: &[f64], min: f64, max: f64) -> String {
    let plot_width = CHART_WIDTH - 2.0 * CHART_PADDING;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PADDING;

    let range = max - min;
    let scale_y = if range > 0.0 { plot_height / range } else { 0.0 };
    let scale_x = if series.len() > 1 {
        plot_width / (series.len() - 1) as f64
    } else {
        0.0
    };

    series
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = CHART_PADDING + i as f64 * scale_x;
            let y = CHART_HEIGHT - CHART_PADDING - (v - min) * scale_y;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_chart(ticker: &str, trend_equity: &[f64], mr_equity: &[f64]) -> String {
    // both series share one y-scale so the curves are comparable
    let min = trend_equity
        .iter()
        .chain(mr_equity)
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max = trend_equity
        .iter()
        .chain(mr_equity)
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let axis_left = CHART_PADDING;
    let axis_bottom = CHART_HEIGHT - CHART_PADDING;
    let axis_right = CHART_WIDTH - CHART_PADDING;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_WIDTH:.0}" height="{CHART_HEIGHT:.0}" viewBox="0 0 {CHART_WIDTH:.0} {CHART_HEIGHT:.0}">
<rect width="100%" height="100%" fill="white"/>
<text x="{mid:.0}" y="20" text-anchor="middle" font-family="sans-serif" font-size="14">Equity Curves (Walk-forward) - {ticker}</text>
<line x1="{axis_left:.0}" y1="{CHART_PADDING:.0}" x2="{axis_left:.0}" y2="{axis_bottom:.0}" stroke="black"/>
<line x1="{axis_left:.0}" y1="{axis_bottom:.0}" x2="{axis_right:.0}" y2="{axis_bottom:.0}" stroke="black"/>
"#,
        mid = CHART_WIDTH / 2.0,
    );

    for (series, color, label, offset) in [
        (trend_equity, TREND_COLOR, "Trend (MA crossover)", 0.0),
        (mr_equity, MR_COLOR, "Mean Reversion (z-score)", 16.0),
    ] {
        if !series.is_empty() {
            svg.push_str(&format!(
                "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"1.5\" points=\"{}\"/>\n",
                polyline_points(series, min, max)
            ));
        }
        let y = CHART_PADDING + 16.0 + offset;
        svg.push_str(&format!(
            "<line x1=\"{x1:.0}\" y1=\"{y0:.0}\" x2=\"{x2:.0}\" y2=\"{y0:.0}\" stroke=\"{color}\" stroke-width=\"1.5\"/>\n<text x=\"{xt:.0}\" y=\"{yt:.0}\" font-family=\"sans-serif\" font-size=\"11\">{label}</text>\n",
            x1 = axis_left + 12.0,
            x2 = axis_left + 36.0,
            y0 = y,
            xt = axis_left + 42.0,
            yt = y + 4.0,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
