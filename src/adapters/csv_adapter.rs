//! CSV file price-store adapter.
//!
//! One file per ticker (`<dir>/<TICKER>.csv`) with a
//! `date,open,high,low,close,volume` header, as produced by the external
//! download/cleaning step.

use crate::domain::error::SigwalkError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug)]
pub struct CsvPriceAdapter {
    base_path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Builds the adapter from the `[data] prices_dir` config key.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, SigwalkError> {
        let dir = config
            .get_string("data", "prices_dir")
            .ok_or_else(|| SigwalkError::ConfigMissing {
                section: "data".into(),
                key: "prices_dir".into(),
            })?;
        Ok(Self::new(PathBuf::from(dir)))
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{ticker}.csv"))
    }
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<T, SigwalkError>
where
    T::Err: std::fmt::Display,
{
    let raw = record.get(index).ok_or_else(|| SigwalkError::Data {
        reason: format!("missing {name} column"),
    })?;
    raw.parse().map_err(|e| SigwalkError::Data {
        reason: format!("invalid {name} value {raw:?}: {e}"),
    })
}

impl DataPort for CsvPriceAdapter {
    fn fetch_prices(&self, ticker: &str) -> Result<Vec<PriceBar>, SigwalkError> {
        let path = self.csv_path(ticker);
        if !path.exists() {
            return Err(SigwalkError::NoData {
                ticker: ticker.to_string(),
            });
        }

        let mut rdr = csv::Reader::from_path(&path).map_err(|e| SigwalkError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut bars = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| SigwalkError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str: String = parse_field(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                SigwalkError::Data {
                    reason: format!("invalid date {date_str:?}: {e}"),
                }
            })?;

            bars.push(PriceBar {
                date,
                open: parse_field(&record, 1, "open")?,
                high: parse_field(&record, 2, "high")?,
                low: parse_field(&record, 3, "low")?,
                close: parse_field(&record, 4, "close")?,
                volume: parse_field(&record, 5, "volume")?,
            });
        }

        // enforce the price-series invariant: ascending, unique dates
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Ok(bars)
    }

    fn list_tickers(&self) -> Result<Vec<String>, SigwalkError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| SigwalkError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut tickers = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SigwalkError::Data {
                reason: format!("directory entry error: {e}"),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                if let Some(stem) = path.file_stem() {
                    tickers.push(stem.to_string_lossy().into_owned());
                }
            }
        }

        tickers.sort();
        Ok(tickers)
    }

    fn get_data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SigwalkError> {
        match self.fetch_prices(ticker) {
            Ok(bars) => match (bars.first(), bars.last()) {
                (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
                _ => Ok(None),
            },
            Err(SigwalkError::NoData { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
