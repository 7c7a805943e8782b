use crate::BigOError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read config: {0}")]
    ReadError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration for the `bigo` tooling around the analyzer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BigOConfig {
    /// Input limits applied before analysis
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Result rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Live re-analysis of a watched file
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Largest snippet accepted by the caller boundary, in bytes
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl AnalysisSettings {
    /// Reject snippets over the configured size. The analyzer itself has no limit.
    pub fn check_input(&self, code: &str) -> Result<(), BigOError> {
        if code.len() > self.max_input_bytes {
            return Err(BigOError::InputTooLarge {
                size: code.len(),
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "pretty", "table", "json"
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            color: default_color(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "pretty", "json", "compact"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period after the last change before re-analyzing (ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_max_input_bytes() -> usize {
    256 * 1024
}
fn default_output_format() -> String {
    "pretty".to_string()
}
fn default_color() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_debounce_ms() -> u64 {
    300
}

/// Configuration manager with layered sources
pub struct ConfigManager {
    config: BigOConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with the following precedence:
    /// 1. Environment variables (.env file)
    /// 2. Config file (.bigo.toml, then ~/.bigo/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_dotenv();

        let (config, config_path) = Self::load_config_file()?;
        let config = Self::apply_env_overrides(config);
        Self::validate_config(&config)?;

        match &config_path {
            Some(path) => info!("Config file: {}", path.display()),
            None => debug!("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Load an explicit config file, still honoring environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        Self::load_dotenv();

        let config = Self::apply_env_overrides(Self::read_toml_file(path)?);
        Self::validate_config(&config)?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    fn load_dotenv() {
        if Path::new(".env").exists() {
            if let Err(e) = dotenv::from_filename(".env") {
                warn!("Failed to load .env file: {}", e);
            }
        }
    }

    /// Search order: ./.bigo.toml, ~/.bigo/config.toml, defaults
    fn load_config_file() -> Result<(BigOConfig, Option<PathBuf>), ConfigError> {
        let local_config = Path::new(".bigo.toml");
        if local_config.exists() {
            let config = Self::read_toml_file(local_config)?;
            return Ok((config, Some(local_config.to_path_buf())));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".bigo").join("config.toml");
            if user_config.exists() {
                let config = Self::read_toml_file(&user_config)?;
                return Ok((config, Some(user_config)));
            }
        }

        Ok((BigOConfig::default(), None))
    }

    fn read_toml_file(path: &Path) -> Result<BigOConfig, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn apply_env_overrides(mut config: BigOConfig) -> BigOConfig {
        if let Ok(limit) = std::env::var("BIGO_MAX_INPUT_BYTES") {
            if let Ok(bytes) = limit.parse() {
                config.analysis.max_input_bytes = bytes;
            }
        }
        if let Ok(format) = std::env::var("BIGO_OUTPUT_FORMAT") {
            config.output.format = format;
        }
        if let Ok(color) = std::env::var("BIGO_COLOR") {
            config.output.color = color.to_lowercase() == "true" || color == "1";
        }
        if let Ok(debounce) = std::env::var("BIGO_WATCH_DEBOUNCE_MS") {
            if let Ok(ms) = debounce.parse() {
                config.watch.debounce_ms = ms;
            }
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.logging.level = level;
        }

        config
    }

    fn validate_config(config: &BigOConfig) -> Result<(), ConfigError> {
        if config.analysis.max_input_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }

        match config.output.format.as_str() {
            "pretty" | "table" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid output format: {}. Must be one of: pretty, table, json",
                    other
                )))
            }
        }

        match config.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {}. Must be one of: pretty, compact, json",
                    other
                )))
            }
        }

        // RUST_LOG may carry a full filter directive; only bare levels are checked
        let level = config.logging.level.as_str();
        if !level.contains('=') && !level.contains(',') {
            match level {
                "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        other
                    )))
                }
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &BigOConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Create a default config file
    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        let config = BigOConfig::default();
        let toml_str =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            }
        }

        std::fs::write(path, toml_str).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BigOConfig::default();
        assert_eq!(config.analysis.max_input_bytes, 262_144);
        assert_eq!(config.output.format, "pretty");
        assert_eq!(config.watch.debounce_ms, 300);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_validation() {
        let config = BigOConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());

        let mut bad_format = config.clone();
        bad_format.output.format = "xml".to_string();
        assert!(ConfigManager::validate_config(&bad_format).is_err());

        let mut bad_limit = config.clone();
        bad_limit.analysis.max_input_bytes = 0;
        assert!(ConfigManager::validate_config(&bad_limit).is_err());

        let mut directive = config;
        directive.logging.level = "bigo_analyzer=debug".to_string();
        assert!(ConfigManager::validate_config(&directive).is_ok());
    }

    #[test]
    fn test_input_limit() {
        let settings = AnalysisSettings { max_input_bytes: 4 };
        assert!(settings.check_input("abcd").is_ok());
        assert!(matches!(
            settings.check_input("abcde"),
            Err(BigOError::InputTooLarge { size: 5, limit: 4 })
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BigOConfig = toml::from_str("[watch]\ndebounce_ms = 50\n").unwrap();
        assert_eq!(config.watch.debounce_ms, 50);
        assert_eq!(config.output.format, "pretty");
    }
}
