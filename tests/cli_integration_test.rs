//! Integration tests for config loading and run-spec resolution.

use sigwalk::adapters::ini_config_adapter::IniConfigAdapter;
use sigwalk::cli::{build_spec, load_config};
use sigwalk::domain::config_validation::validate_walkforward_config;
use sigwalk::domain::error::SigwalkError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

const FULL_CONFIG: &str = r#"
[data]
prices_dir = data/processed

[walkforward]
ticker = QQQ
train_years = 3
test_years = 2
fee_bps = 2.5

[report]
results_dir = out/results
figures_dir = out/figures
"#;

mod spec_resolution {
    use super::*;

    #[test]
    fn config_values_fill_the_spec() {
        let file = write_config(FULL_CONFIG);
        let config = load_config(&file.path().to_path_buf()).unwrap();
        let spec = build_spec(&config, None, None, None, None);

        assert_eq!(spec.ticker, "QQQ");
        assert_eq!(spec.train_years, 3);
        assert_eq!(spec.test_years, 2);
        assert_eq!(spec.fee_bps, 2.5);
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let file = write_config("[data]\nprices_dir = data\n");
        let config = load_config(&file.path().to_path_buf()).unwrap();
        let spec = build_spec(&config, None, None, None, None);

        assert_eq!(spec.ticker, "SPY");
        assert_eq!(spec.train_years, 5);
        assert_eq!(spec.test_years, 1);
        assert_eq!(spec.fee_bps, 1.0);
    }

    #[test]
    fn cli_overrides_beat_config_values() {
        let file = write_config(FULL_CONFIG);
        let config = load_config(&file.path().to_path_buf()).unwrap();
        let spec = build_spec(&config, Some("iwm"), Some(7), Some(1), Some(0.0));

        assert_eq!(spec.ticker, "IWM");
        assert_eq!(spec.train_years, 7);
        assert_eq!(spec.test_years, 1);
        assert_eq!(spec.fee_bps, 0.0);
    }

    #[test]
    fn ticker_override_is_uppercased() {
        let file = write_config("[data]\nprices_dir = data\n");
        let config = load_config(&file.path().to_path_buf()).unwrap();
        let spec = build_spec(&config, Some("spy"), None, None, None);
        assert_eq!(spec.ticker, "SPY");
    }
}

mod validation {
    use super::*;

    #[test]
    fn full_config_validates() {
        let config = IniConfigAdapter::from_string(FULL_CONFIG).unwrap();
        assert!(validate_walkforward_config(&config).is_ok());
    }

    #[test]
    fn missing_prices_dir_is_rejected() {
        let config = IniConfigAdapter::from_string("[walkforward]\nticker = SPY\n").unwrap();
        let err = validate_walkforward_config(&config).unwrap_err();
        assert!(matches!(
            err,
            SigwalkError::ConfigMissing { ref section, ref key }
                if section == "data" && key == "prices_dir"
        ));
    }

    #[test]
    fn zero_train_years_is_rejected() {
        let config = IniConfigAdapter::from_string(
            "[data]\nprices_dir = data\n\n[walkforward]\ntrain_years = 0\n",
        )
        .unwrap();
        let err = validate_walkforward_config(&config).unwrap_err();
        assert!(matches!(
            err,
            SigwalkError::ConfigInvalid { ref key, .. } if key == "train_years"
        ));
    }

    #[test]
    fn negative_fee_is_rejected() {
        let config = IniConfigAdapter::from_string(
            "[data]\nprices_dir = data\n\n[walkforward]\nfee_bps = -1.0\n",
        )
        .unwrap();
        let err = validate_walkforward_config(&config).unwrap_err();
        assert!(matches!(
            err,
            SigwalkError::ConfigInvalid { ref key, .. } if key == "fee_bps"
        ));
    }
}

mod loading {
    use super::*;

    #[test]
    fn missing_config_file_fails_to_load() {
        assert!(load_config(&PathBuf::from("/nonexistent/sigwalk.ini")).is_err());
    }
}
