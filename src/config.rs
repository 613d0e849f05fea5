//! Configuration System
//!
//! Loads preview settings from TOML files and environment variables.
//! Every field has a default, so an empty file (or no file) is valid.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dashboard::{FinancialYear, Tab, DEFAULT_FINANCIAL_YEAR};
use crate::series::DEFAULT_SPAN_YEARS;
use crate::ticker::TICKER_INTERVAL_MS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub ticker: TickerConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial dashboard state
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_tab: Tab,

    #[serde(default = "default_year")]
    pub default_year: String,
}

fn default_year() -> String {
    DEFAULT_FINANCIAL_YEAR.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_tab: Tab::default(),
            default_year: default_year(),
        }
    }
}

impl DashboardConfig {
    pub fn year(&self) -> FinancialYear {
        FinancialYear::new(self.default_year.clone())
    }
}

/// Ticker timing
#[derive(Debug, Clone, Deserialize)]
pub struct TickerConfig {
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
}

fn default_interval() -> u64 {
    TICKER_INTERVAL_MS
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval(),
        }
    }
}

impl TickerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Mock chart series
#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_span_years")]
    pub span_years: u32,
}

fn default_span_years() -> u32 {
    DEFAULT_SPAN_YEARS
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            span_years: default_span_years(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("econboard").join("config.toml")),
            Some(PathBuf::from("./econboard.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(tab) = std::env::var("ECONBOARD_DEFAULT_TAB") {
            match tab.parse() {
                Ok(t) => self.dashboard.default_tab = t,
                Err(e) => tracing::warn!("Ignoring ECONBOARD_DEFAULT_TAB: {}", e),
            }
        }
        if let Ok(year) = std::env::var("ECONBOARD_DEFAULT_YEAR") {
            self.dashboard.default_year = year;
        }

        if let Ok(ms) = std::env::var("ECONBOARD_TICKER_INTERVAL_MS") {
            if let Ok(v) = ms.parse() {
                self.ticker.interval_ms = v;
            }
        }

        if let Ok(years) = std::env::var("ECONBOARD_SPAN_YEARS") {
            if let Ok(v) = years.parse() {
                self.charts.span_years = v;
            }
        }

        if let Ok(level) = std::env::var("ECONBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ECONBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Econboard Configuration
#
# Environment variables override these settings:
# - ECONBOARD_DEFAULT_TAB
# - ECONBOARD_DEFAULT_YEAR
# - ECONBOARD_TICKER_INTERVAL_MS
# - ECONBOARD_SPAN_YEARS
# - ECONBOARD_LOG_LEVEL
# - ECONBOARD_LOG_FORMAT

[dashboard]
# Panel shown on start: economy, markets or data
default_tab = "economy"

# Financial year label shown in the year selector
default_year = "FY24 (2023-24)"

[ticker]
# Milliseconds between ticker highlight advances
interval_ms = 3000

[charts]
# Years covered by generated chart series
span_years = 20

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.dashboard.default_tab, Tab::Economy);
        assert_eq!(config.dashboard.year().as_str(), "FY24 (2023-24)");
        assert_eq!(config.ticker.interval(), Duration::from_millis(3000));
        assert_eq!(config.charts.span_years, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.dashboard.default_tab, Tab::Economy);
        assert_eq!(config.dashboard.default_year, "FY24 (2023-24)");
        assert_eq!(config.ticker.interval_ms, 3000);
        assert_eq!(config.charts.span_years, 20);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ndefault_tab = \"markets\"\n[ticker]\ninterval_ms = 500").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.default_tab, Tab::Markets);
        assert_eq!(config.dashboard.default_year, "FY24 (2023-24)");
        assert_eq!(config.ticker.interval_ms, 500);
        assert_eq!(config.charts.span_years, 20);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[dashboard]\ndefault_tab = \"portfolio\"").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_interval_never_zero() {
        let ticker = TickerConfig { interval_ms: 0 };
        assert_eq!(ticker.interval(), Duration::from_millis(1));
    }

    /// Every variable this test sets is cleared again before it returns;
    /// no other test reads the environment.
    #[test]
    fn test_env_overrides() {
        const VARS: [&str; 6] = [
            "ECONBOARD_DEFAULT_TAB",
            "ECONBOARD_DEFAULT_YEAR",
            "ECONBOARD_TICKER_INTERVAL_MS",
            "ECONBOARD_SPAN_YEARS",
            "ECONBOARD_LOG_LEVEL",
            "ECONBOARD_LOG_FORMAT",
        ];

        std::env::set_var("ECONBOARD_DEFAULT_TAB", "data");
        std::env::set_var("ECONBOARD_DEFAULT_YEAR", "FY21 (2020-21)");
        std::env::set_var("ECONBOARD_TICKER_INTERVAL_MS", "750");
        std::env::set_var("ECONBOARD_SPAN_YEARS", "12");
        std::env::set_var("ECONBOARD_LOG_LEVEL", "debug");
        std::env::set_var("ECONBOARD_LOG_FORMAT", "json");

        let config = Config::from_env();
        assert_eq!(config.dashboard.default_tab, Tab::Data);
        assert_eq!(config.dashboard.default_year, "FY21 (2020-21)");
        assert_eq!(config.ticker.interval_ms, 750);
        assert_eq!(config.charts.span_years, 12);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        // Environment wins over the file
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ndefault_tab = \"markets\"\n[charts]\nspan_years = 40").unwrap();
        let config = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.dashboard.default_tab, Tab::Data);
        assert_eq!(config.charts.span_years, 12);

        // Unparseable values leave the file's settings in place
        std::env::set_var("ECONBOARD_DEFAULT_TAB", "portfolio");
        std::env::set_var("ECONBOARD_SPAN_YEARS", "many");
        std::env::set_var("ECONBOARD_TICKER_INTERVAL_MS", "-5");
        let config = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.dashboard.default_tab, Tab::Markets);
        assert_eq!(config.charts.span_years, 40);
        assert_eq!(config.ticker.interval_ms, 3000);

        for var in VARS {
            std::env::remove_var(var);
        }
        let config = Config::from_env();
        assert_eq!(config.dashboard.default_tab, Tab::Economy);
        assert_eq!(config.charts.span_years, 20);
    }
}
