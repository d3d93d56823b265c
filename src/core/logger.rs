//! Named logger handle

use super::{log_event::LogEvent, log_level::LogLevel, marker::Marker, system::SystemCore};
use std::fmt;
use std::sync::Arc;

/// A named handle into a [`LoggingSystem`](super::LoggingSystem).
///
/// Obtain one with `get_logger`; the handle carries only its name; level
/// thresholds and sinks come from the system's active configuration at the
/// time of each call.
///
/// # Example
///
/// ```
/// use visiondesk_logger::{ConsoleTarget, LoggingOptions, LoggingSystem, MemoryBuffer};
///
/// let buffer = MemoryBuffer::new();
/// let system = LoggingSystem::new();
/// system.configure(
///     LoggingOptions::new()
///         .with_file_logging(false)
///         .with_console_target(ConsoleTarget::Memory(buffer.clone())),
/// );
///
/// let logger = system.get_logger("capture");
/// logger.info("Region selected");
/// assert_eq!(buffer.count_containing("[capture] "), 1);
/// ```
pub struct Logger {
    name: Arc<str>,
    core: Arc<SystemCore>,
}

impl Logger {
    pub(crate) fn new(name: &str, core: Arc<SystemCore>) -> Self {
        Self {
            name: Arc::from(name),
            core,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        let event = LogEvent::new(Arc::clone(&self.name), level, message);
        self.core.dispatch(&event);
    }

    /// Log an INFO event tagged with `marker`
    pub fn log_marked(&self, marker: Marker, message: impl AsRef<str>) {
        let event = LogEvent::marked(Arc::clone(&self.name), LogLevel::Info, marker, message);
        self.core.dispatch(&event);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}
