//! # CLI Configuration
//!
//! Read from environment variables, overridable by command-line flags.
//!
//! - `NTT_STATE_FILE` — path of the registry state file (default `ntt-state.json`)
//! - `NTT_LOG_FORMAT` — `text` or `json` (default `text`)
//!
//! A variable that is set but blank is an error rather than a silent default.

use std::path::PathBuf;
use std::str::FromStr;

/// Default state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "ntt-state.json";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                var: "NTT_LOG_FORMAT",
                value: other.to_string(),
            }),
        }
    }
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where the registry state lives.
    pub state_file: PathBuf,
    /// How logs are rendered.
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = non_blank(&lookup, "NTT_STATE_FILE")? {
            config.state_file = PathBuf::from(path);
        }
        if let Some(format) = non_blank(&lookup, "NTT_LOG_FORMAT")? {
            config.log_format = format.parse()?;
        }
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_state_file(mut self, state_file: Option<PathBuf>) -> Self {
        if let Some(path) = state_file {
            self.state_file = path;
        }
        self
    }

    /// Path of the deployment record written next to the state file.
    pub fn deployment_record_path(&self) -> PathBuf {
        self.state_file.with_extension("deployment.json")
    }
}

fn non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(var)),
        Some(value) => Ok(Some(value)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but empty or whitespace.
    #[error("environment variable '{0}' is set but blank")]
    Blank(&'static str),
    /// A variable holds a value that does not parse.
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}
