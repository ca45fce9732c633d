//! Adapter configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the terminal adapter.
///
/// Deserializing validates the delay range, so every value of this type
/// has `min_delay_ms <= max_delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawAdapterConfig")]
pub struct AdapterConfig {
    /// Shortest opponent "thinking" delay in milliseconds.
    min_delay_ms: u64,

    /// Longest opponent "thinking" delay in milliseconds.
    max_delay_ms: u64,

    /// Seed for the opponent's random source. Entropy when absent.
    seed: Option<u64>,
}

/// Unvalidated on-disk form of [`AdapterConfig`].
#[derive(Debug, Deserialize)]
struct RawAdapterConfig {
    #[serde(default = "default_min_delay_ms")]
    min_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    max_delay_ms: u64,
    #[serde(default)]
    seed: Option<u64>,
}

impl TryFrom<RawAdapterConfig> for AdapterConfig {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(raw: RawAdapterConfig) -> Result<Self, Self::Error> {
        let config = Self {
            min_delay_ms: raw.min_delay_ms,
            max_delay_ms: raw.max_delay_ms,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[instrument]
fn default_min_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_max_delay_ms() -> u64 {
    1000
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            seed: None,
        }
    }
}

impl AdapterConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Loads configuration from a file, or defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            min_delay_ms = config.min_delay_ms,
            max_delay_ms = config.max_delay_ms,
            seeded = config.seed.is_some(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy with no opponent delay.
    pub fn without_delay(mut self) -> Self {
        self.min_delay_ms = 0;
        self.max_delay_ms = 0;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(ConfigError::new(format!(
                "min_delay_ms ({}) exceeds max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
