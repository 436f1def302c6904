//! Concrete adapter implementations for ports.

pub mod csv_adapter;
pub mod ini_config_adapter;
pub mod report_adapter;
