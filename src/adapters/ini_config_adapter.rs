//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct IniConfigAdapter {
    config: Ini,
}

impl IniConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for IniConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[data]
prices_dir = data/processed

[walkforward]
ticker = SPY
train_years = 5
test_years = 1
fee_bps = 1.5

[report]
results_dir = reports/results
figures_dir = reports/figures
"#;

    #[test]
    fn from_string_reads_all_sections() {
        let adapter = IniConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            adapter.get_string("data", "prices_dir"),
            Some("data/processed".to_string())
        );
        assert_eq!(
            adapter.get_string("walkforward", "ticker"),
            Some("SPY".to_string())
        );
        assert_eq!(
            adapter.get_string("report", "figures_dir"),
            Some("reports/figures".to_string())
        );
    }

    #[test]
    fn typed_getters_parse_values() {
        let adapter = IniConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(adapter.get_int("walkforward", "train_years", 0), 5);
        assert_eq!(adapter.get_int("walkforward", "test_years", 0), 1);
        assert_eq!(adapter.get_double("walkforward", "fee_bps", 0.0), 1.5);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let adapter = IniConfigAdapter::from_string("[walkforward]\nticker = QQQ\n").unwrap();
        assert_eq!(adapter.get_string("walkforward", "missing"), None);
        assert_eq!(adapter.get_int("walkforward", "train_years", 5), 5);
        assert_eq!(adapter.get_double("walkforward", "fee_bps", 1.0), 1.0);
        assert!(adapter.get_bool("walkforward", "missing", true));
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let adapter =
            IniConfigAdapter::from_string("[walkforward]\ntrain_years = many\nfee_bps = cheap\n")
                .unwrap();
        assert_eq!(adapter.get_int("walkforward", "train_years", 5), 5);
        assert_eq!(adapter.get_double("walkforward", "fee_bps", 1.0), 1.0);
    }

    #[test]
    fn bool_spellings() {
        let adapter =
            IniConfigAdapter::from_string("[x]\na = true\nb = yes\nc = 1\nd = false\ne = no\nf = 0\n")
                .unwrap();
        assert!(adapter.get_bool("x", "a", false));
        assert!(adapter.get_bool("x", "b", false));
        assert!(adapter.get_bool("x", "c", false));
        assert!(!adapter.get_bool("x", "d", true));
        assert!(!adapter.get_bool("x", "e", true));
        assert!(!adapter.get_bool("x", "f", true));
    }

    #[test]
    fn from_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let adapter = IniConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("walkforward", "ticker"),
            Some("SPY".to_string())
        );
    }

    #[test]
    fn from_file_missing_path_errors() {
        assert!(IniConfigAdapter::from_file("/nonexistent/sigwalk.ini").is_err());
    }
}
