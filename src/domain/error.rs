//! Domain error types.

/// Top-level error type for sigwalk.
#[derive(Debug, thiserror::Error)]
pub enum SigwalkError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no price data for {ticker}")]
    NoData { ticker: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SigwalkError> for std::process::ExitCode {
    fn from(err: &SigwalkError) -> Self {
        let code: u8 = match err {
            SigwalkError::Io(_) => 1,
            SigwalkError::ConfigParse { .. }
            | SigwalkError::ConfigMissing { .. }
            | SigwalkError::ConfigInvalid { .. } => 2,
            SigwalkError::Data { .. } => 3,
            SigwalkError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
