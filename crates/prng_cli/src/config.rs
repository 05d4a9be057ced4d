//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.

use prng_core::diagnostics::{DEFAULT_BUCKET_COUNT, DEFAULT_SAMPLE_SIZE};
use prng_core::DiagnosticConfig;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Number of values printed per sequence by default.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 100;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid sequence length {0}: must be at least 1")]
    InvalidSequenceLength(usize),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Diagnostic settings: {0}")]
    Diagnostic(#[from] prng_core::ConfigError),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrngConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Values printed by `sequence` and `demo`
    pub sequence_length: usize,
    /// Samples drawn per diagnostic
    pub sample_size: usize,
    /// Chi-square buckets
    pub bucket_count: usize,
    /// Report format for `analyse`
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for PrngConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            sample_size: DEFAULT_SAMPLE_SIZE,
            bucket_count: DEFAULT_BUCKET_COUNT,
            format: OutputFormat::default(),
        }
    }
}

impl PrngConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `PRNG_*` overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("PRNG_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(length) = lookup("PRNG_SEQUENCE_LENGTH") {
            self.sequence_length = parse_count("PRNG_SEQUENCE_LENGTH", &length)?;
        }
        if let Some(size) = lookup("PRNG_SAMPLE_SIZE") {
            self.sample_size = parse_count("PRNG_SAMPLE_SIZE", &size)?;
        }
        if let Some(buckets) = lookup("PRNG_BUCKET_COUNT") {
            self.bucket_count = parse_count("PRNG_BUCKET_COUNT", &buckets)?;
        }
        if let Some(format) = lookup("PRNG_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(length) = cli.sequence_length {
            self.sequence_length = length;
        }
        if let Some(size) = cli.sample_size {
            self.sample_size = size;
        }
        if let Some(buckets) = cli.bucket_count {
            self.bucket_count = buckets;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_length == 0 {
            return Err(ConfigError::InvalidSequenceLength(self.sequence_length));
        }
        self.diagnostic_config()?;
        Ok(())
    }

    /// Diagnostic settings for `prng_core`
    pub fn diagnostic_config(&self) -> Result<DiagnosticConfig, ConfigError> {
        Ok(DiagnosticConfig::builder()
            .sample_size(self.sample_size)
            .bucket_count(self.bucket_count)
            .build()?)
    }
}

fn parse_count(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Sequence length override
    pub sequence_length: Option<usize>,
    /// Sample size override
    pub sample_size: Option<usize>,
    /// Bucket count override
    pub bucket_count: Option<usize>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<PrngConfig, ConfigError> {
    let config = match &cli.config_file {
        Some(path) => PrngConfig::from_file(path)?,
        None => PrngConfig::default(),
    };

    let mut config = config.with_env_override()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
