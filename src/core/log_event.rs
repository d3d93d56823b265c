//! Log event structure

use super::log_level::LogLevel;
use super::marker::Marker;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// One log call, captured once and rendered by every sink that accepts it.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Local>,
    pub logger: Arc<str>,
    pub level: LogLevel,
    pub message: String,
    pub marker: Option<Marker>,
}

impl LogEvent {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one event always renders as one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger: impl Into<Arc<str>>, level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            timestamp: Local::now(),
            logger: logger.into(),
            level,
            message: Self::sanitize_message(message.as_ref()),
            marker: None,
        }
    }

    /// Build an event that carries a semantic marker from the start.
    pub fn marked(
        logger: impl Into<Arc<str>>,
        level: LogLevel,
        marker: Marker,
        message: impl AsRef<str>,
    ) -> Self {
        Self {
            marker: Some(marker),
            ..Self::new(logger, level, message)
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
