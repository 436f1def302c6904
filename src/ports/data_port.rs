//! Price data access port trait.

use crate::domain::error::SigwalkError;
use crate::domain::ohlcv::PriceBar;
use chrono::NaiveDate;

pub trait DataPort {
    /// Full daily history for a ticker, sorted ascending, dates unique.
    fn fetch_prices(&self, ticker: &str) -> Result<Vec<PriceBar>, SigwalkError>;

    fn list_tickers(&self) -> Result<Vec<String>, SigwalkError>;

    /// `(first_date, last_date, row_count)` if any data exists.
    fn get_data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SigwalkError>;
}
