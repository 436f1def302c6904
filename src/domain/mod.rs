//! Core domain types and logic.

pub mod ohlcv;
pub mod rolling;
pub mod features;
pub mod signals;
pub mod costs;
pub mod metrics;
pub mod walkforward;
pub mod config_validation;
pub mod error;
