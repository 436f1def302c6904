//! Configuration validation.
//!
//! Validates the walk-forward and data sections before a run starts, so bad
//! values fail with a config error instead of surfacing mid-pipeline.

use crate::domain::error::SigwalkError;
use crate::ports::config_port::ConfigPort;

pub fn validate_walkforward_config(config: &dyn ConfigPort) -> Result<(), SigwalkError> {
    validate_ticker(config)?;
    validate_train_years(config)?;
    validate_test_years(config)?;
    validate_fee_bps(config)?;
    validate_prices_dir(config)?;
    Ok(())
}

fn validate_ticker(config: &dyn ConfigPort) -> Result<(), SigwalkError> {
    if let Some(ticker) = config.get_string("walkforward", "ticker") {
        if ticker.trim().is_empty() {
            return Err(SigwalkError::ConfigInvalid {
                section: "walkforward".to_string(),
                key: "ticker".to_string(),
                reason: "ticker must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_train_years(config: &dyn ConfigPort) -> Result<(), SigwalkError> {
    let value = config.get_int("walkforward", "train_years", 5);
    if value < 1 {
        return Err(SigwalkError::ConfigInvalid {
            section: "walkforward".to_string(),
            key: "train_years".to_string(),
            reason: "train_years must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_test_years(config: &dyn ConfigPort) -> Result<(), SigwalkError> {
    let value = config.get_int("walkforward", "test_years", 1);
    if value < 1 {
        return Err(SigwalkError::ConfigInvalid {
            section: "walkforward".to_string(),
            key: "test_years".to_string(),
            reason: "test_years must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_fee_bps(config: &dyn ConfigPort) -> Result<(), SigwalkError> {
    let value = config.get_double("walkforward", "fee_bps", 1.0);
    if value < 0.0 {
        return Err(SigwalkError::ConfigInvalid {
            section: "walkforward".to_string(),
            key: "fee_bps".to_string(),
            reason: "fee_bps must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_prices_dir(config: &dyn ConfigPort) -> Result<(), SigwalkError> {
    match config.get_string("data", "prices_dir") {
        Some(dir) if !dir.trim().is_empty() => Ok(()),
        _ => Err(SigwalkError::ConfigMissing {
            section: "data".to_string(),
            key: "prices_dir".to_string(),
        }),
    }
}
