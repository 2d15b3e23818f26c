/**
* filename : config
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;
use crate::indicators::IndicatorParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub indicators: IndicatorParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// date,open,high,low,close,volume 형식의 일봉 CSV
    pub csv_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub use_mock: bool,
}

impl Config {
    /// Load configuration from `config.json` in the working directory
    pub fn load() -> Result<Self, AnalysisError> {
        Self::load_from(Path::new("config.json"))
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self, AnalysisError> {
        let mut cfg = if config_path.exists() {
            let mut file = File::open(config_path)
                .map_err(|e| AnalysisError::ConfigError(format!("Failed to open config file: {}", e)))?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| AnalysisError::ConfigError(format!("Failed to read config file: {}", e)))?;

            serde_json::from_str::<Config>(&contents)
                .map_err(|e| AnalysisError::ConfigError(format!("Failed to parse config file: {}", e)))?
        } else {
            Config::default()
        };

        cfg.apply_env_overrides();
        cfg.indicators.validate()?;
        Ok(cfg)
    }

    /// Apply environment variable overrides for runtime fields
    fn apply_env_overrides(&mut self) {
        use std::env;
        if let Ok(v) = env::var("XA_DATA_FILE") { if !v.is_empty() { self.data.csv_path = Some(PathBuf::from(v)); } }
        if let Ok(v) = env::var("XA_OUTPUT_DIR") { if !v.is_empty() { self.data.output_dir = PathBuf::from(v); } }
        if let Ok(v) = env::var("XA_LOG_LEVEL") { if !v.is_empty() { self.logging.level = v; } }
        if let Ok(v) = env::var("XA_USE_MOCK") {
            let lower = v.to_lowercase();
            if ["1","true","yes"].contains(&lower.as_str()) { self.data.use_mock = true; }
            if ["0","false","no"].contains(&lower.as_str()) { self.data.use_mock = false; }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: LoggingConfig::default(),
            data: DataConfig::default(),
            indicators: IndicatorParams::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            csv_path: None,
            output_dir: PathBuf::from("."),
            use_mock: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = Config::load_from(Path::new("/nonexistent/config.json")).unwrap();

        assert_eq!(cfg.indicators, IndicatorParams::default());
        assert_eq!(cfg.data.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"logging": {{"level": "debug", "file_path": null}}, "indicators": {{"rsi_period": 10}}}}"#
        )
        .unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.indicators.rsi_period, 10);
        assert_eq!(cfg.indicators.macd_slow_span, 26);
    }

    #[test]
    fn test_invalid_indicator_params_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"indicators": {{"atr_period": 0}}}}"#).unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(Config::load_from(file.path()), Err(AnalysisError::ConfigError(_))));
    }
}
