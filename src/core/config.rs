//! Logging configuration
//!
//! [`LoggingOptions`] is what callers hand to `configure`; every field has a
//! default, so a partial JSON object (or `LoggingOptions::default()`) is a
//! complete request. [`LoggingConfig`] is the resolved form the sink set is
//! built from. A new `LoggingConfig` is resolved on every configure call and
//! replaces the previous one wholesale.

use super::error::{LoggerError, Result};
use super::formatter::FormatterConfig;
use super::log_level::LogLevel;
use crate::appenders::ConsoleTarget;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE_PREFIX: &str = "visiondesk";

/// Directory under the home directory that holds application data
const APP_DIR_NAME: &str = ".visiondesk";

/// Caller-facing logging options
///
/// # Examples
///
/// ```
/// use visiondesk_logger::LoggingOptions;
///
/// let options = LoggingOptions::from_json_str(r#"{"default_level": "debug", "use_emoji": false}"#)
///     .unwrap();
/// assert_eq!(options.default_level, "debug");
/// assert!(options.file_logging);
/// assert!(!options.use_emoji);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Console threshold; unknown names resolve to `INFO`
    pub default_level: String,
    pub file_logging: bool,
    pub console_logging: bool,
    pub use_emoji: bool,
    pub use_colors: bool,
    pub log_file_prefix: String,
    /// Directory for log files; `~/.visiondesk/logs` when unset
    pub log_dir: Option<PathBuf>,
    #[serde(skip)]
    pub console_target: ConsoleTarget,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info.to_str().to_string(),
            file_logging: true,
            console_logging: true,
            use_emoji: true,
            use_colors: true,
            log_file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            log_dir: None,
            console_target: ConsoleTarget::default(),
        }
    }
}

impl LoggingOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document; missing fields take defaults
    ///
    /// # Errors
    ///
    /// Returns error if the document is not a valid options object
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::config_load(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| LoggerError::config_load(path.display().to_string(), e.to_string()))
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.file_logging = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console_logging(mut self, enabled: bool) -> Self {
        self.console_logging = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_emoji(mut self, enabled: bool) -> Self {
        self.use_emoji = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console_target(mut self, target: ConsoleTarget) -> Self {
        self.console_target = target;
        self
    }

    /// Resolve every field against `now`
    #[must_use]
    pub fn resolve(&self, now: DateTime<Local>) -> LoggingConfig {
        let prefix = file_name_prefix(&self.log_file_prefix).unwrap_or(DEFAULT_LOG_FILE_PREFIX);
        let log_dir = self.log_dir.clone().unwrap_or_else(default_log_dir);
        let log_file = log_dir.join(format!("{}_{}.log", prefix, now.format("%Y%m%d")));

        LoggingConfig {
            default_level: LogLevel::resolve(&self.default_level),
            file_logging: self.file_logging,
            console_logging: self.console_logging,
            formatter: FormatterConfig {
                use_emoji: self.use_emoji,
                use_colors: self.use_colors,
            },
            log_file_prefix: prefix.to_string(),
            log_file,
            console_target: self.console_target.clone(),
        }
    }
}

/// Fully resolved configuration of an installed sink set
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub default_level: LogLevel,
    pub file_logging: bool,
    pub console_logging: bool,
    pub formatter: FormatterConfig,
    pub log_file_prefix: String,
    /// `{log_dir}/{prefix}_{YYYYMMDD}.log`
    pub log_file: PathBuf,
    pub console_target: ConsoleTarget,
}

/// A prefix usable as the start of a file name inside the log directory.
/// Blank prefixes and anything that could name another directory
/// (separators, `..`, drive colons) are rejected.
fn file_name_prefix(raw: &str) -> Option<&str> {
    let prefix = raw.trim();
    let plain = !prefix.is_empty()
        && !prefix.contains("..")
        && !prefix
            .chars()
            .any(|c| c == '/' || c == '\\' || c == ':' || std::path::is_separator(c));
    plain.then_some(prefix)
}

/// `~/.visiondesk/logs`, or `./logs` when there is no home directory
pub fn default_log_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_DIR_NAME).join("logs"),
        None => PathBuf::from("logs"),
    }
}
