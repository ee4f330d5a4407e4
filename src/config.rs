//! Configuration management for the calckit CLI
//!
//! Handles loading, validation, and merging of configuration from
//! multiple sources: config.toml, environment variables, CLI flags.
//!
//! - **Layered configuration**: Defaults < file < env vars < CLI flags
//! - **Validated construction**: All config validated on load
//! - **Zero panics**: Use `Result` for all fallible operations

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Largest accepted `precision`; beyond this f64 has no more significant digits.
pub const MAX_PRECISION: u8 = 17;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "CALCKIT_LOG_LEVEL";

/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "CALCKIT_FORMAT";

/// Local fallback config file name.
pub const LOCAL_CONFIG_FILE: &str = "calckit.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("invalid configuration for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    /// Create a validation error for a config key.
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Log Level
// =============================================================================

/// Logging level for the CLI. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_filter(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_filter().to_uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::invalid(
                "log_level",
                format!("'{s}' is not one of error, warn, info, debug, trace"),
            )),
        }
    }
}

// =============================================================================
// Output Format
// =============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// Compact JSON output
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::invalid(
                "format",
                format!("'{s}' is not one of text, json"),
            )),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// CLI configuration.
///
/// Loaded in order, later sources overriding earlier ones:
/// 1. Default values
/// 2. Config file
/// 3. Environment variables (`CALCKIT_*`)
/// 4. CLI flags (applied by the caller)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Starting value for `eval` when `--initial` is not given.
    pub initial: f64,
    /// Decimal places for text output; `None` prints the shortest exact form.
    pub precision: Option<u8>,
    pub log_level: LogLevel,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: 0.0,
            precision: None,
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::Invalid` when a value is out of range.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable holds an unparseable value.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = value.parse()?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            self.format = value.parse()?;
        }
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `initial` is not finite or
    /// `precision` exceeds [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial.is_finite() {
            return Err(ConfigError::invalid(
                "initial",
                format!("must be a finite number, got {}", self.initial),
            ));
        }
        if let Some(precision) = self.precision.filter(|p| *p > MAX_PRECISION) {
            return Err(ConfigError::invalid(
                "precision",
                format!("must be at most {MAX_PRECISION}, got {precision}"),
            ));
        }
        Ok(())
    }
}

/// Load configuration from all sources.
///
/// With `explicit`, that file must exist. Otherwise the first existing file
/// among the XDG config path and `./calckit.toml` is used, and none existing
/// means defaults.
///
/// # Errors
///
/// Returns an error if a config file cannot be read or parsed, or if a value
/// (from file or environment) is invalid.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match explicit {
        Some(path) => load_file(path)?,
        None => candidate_paths()
            .into_iter()
            .find(|path| path.is_file())
            .map_or_else(|| Ok(Config::default()), |path| load_file(&path))?,
    };

    config.apply_env_with(|key| std::env::var(key).ok())?;
    Ok(config)
}

/// Log level usable before any config file has been read.
///
/// The CLI flag wins, then a parseable `CALCKIT_LOG_LEVEL`, then the default.
/// An unparseable variable is ignored here; [`load`] reports it.
pub fn bootstrap_log_level<F>(flag: Option<LogLevel>, lookup: F) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    flag.or_else(|| lookup(ENV_LOG_LEVEL).and_then(|value| value.parse().ok()))
        .unwrap_or_default()
}

/// Read and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read, otherwise the
/// errors of [`Config::from_toml`].
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config file");
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Config::from_toml(path, &content)
}

/// Default lookup order for config files.
fn candidate_paths() -> Vec<PathBuf> {
    ProjectDirs::from("", "", "calckit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .into_iter()
        .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)))
        .collect()
}
