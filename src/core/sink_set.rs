//! The set of sinks built from one configuration
//!
//! A `SinkSet` is immutable once built. Reconfiguring never edits a set; the
//! whole set is dropped and a new one is built, which is what keeps repeated
//! configure calls from stacking duplicate sinks.

use super::{
    appender::Appender,
    config::LoggingConfig,
    error::LoggerError,
    formatter::SinkKind,
    log_event::LogEvent,
    log_level::LogLevel,
};
use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Logger name used for messages the logging system emits about itself
pub const INTERNAL_LOGGER: &str = "visiondesk.logging";

struct InstalledSink {
    threshold: LogLevel,
    kind: SinkKind,
    appender: Mutex<Box<dyn Appender>>,
}

impl InstalledSink {
    fn new<A: Appender + 'static>(threshold: LogLevel, appender: A) -> Self {
        Self {
            threshold,
            kind: appender.kind(),
            appender: Mutex::new(Box::new(appender)),
        }
    }
}

pub struct SinkSet {
    sinks: Vec<InstalledSink>,
    log_file: Option<PathBuf>,
}

impl SinkSet {
    /// Build the sinks `config` asks for, with the standard rotation policy
    pub fn build(config: &LoggingConfig) -> Self {
        Self::build_with_policy(config, RotationPolicy::default())
    }

    /// Build the sinks `config` asks for. A file sink that cannot be opened
    /// is skipped and reported; building itself never fails.
    pub fn build_with_policy(config: &LoggingConfig, policy: RotationPolicy) -> Self {
        let mut set = Self {
            sinks: Vec::new(),
            log_file: None,
        };

        if config.console_logging {
            let console = ConsoleAppender::with_target(config.console_target.clone())
                .with_formatter(config.formatter);
            set.sinks.push(InstalledSink::new(config.default_level, console));
        }

        if config.file_logging {
            // The file is the full record: it always takes DEBUG and up
            match RotatingFileAppender::with_policy(&config.log_file, policy) {
                Ok(appender) => {
                    set.sinks.push(InstalledSink::new(LogLevel::Debug, appender));
                    set.log_file = Some(config.log_file.clone());
                }
                Err(e) => set.report(&LoggerError::file_appender(
                    config.log_file.display().to_string(),
                    format!("File logging disabled: {}", e),
                )),
            }
        }

        set
    }

    /// Hand `event` to every sink whose threshold it meets
    pub fn dispatch(&self, event: &LogEvent) {
        let mut problems = Vec::new();

        for sink in &self.sinks {
            if event.level < sink.threshold {
                continue;
            }
            let mut appender = sink.appender.lock();
            if let Err(e) = appender.append(event) {
                problems.push(e);
            }
            if let Some(warning) = appender.take_warning() {
                problems.push(warning);
            }
        }

        for problem in &problems {
            self.report(problem);
        }
    }

    /// Surface a sink problem on the console sink, or on stderr when there
    /// is no console sink
    fn report(&self, error: &LoggerError) {
        let console = self.sinks.iter().find(|s| s.kind == SinkKind::Console);
        match console {
            Some(sink) => {
                let event = LogEvent::new(INTERNAL_LOGGER, LogLevel::Warning, error.to_string());
                if let Err(e) = sink.appender.lock().append(&event) {
                    eprintln!("[LOGGER ERROR] Console sink failed: {} (while reporting: {})", e, error);
                }
            }
            None => eprintln!("[LOGGER WARNING] {}", error),
        }
    }

    pub fn flush(&self) {
        for sink in &self.sinks {
            let mut appender = sink.appender.lock();
            if let Err(e) = appender.flush() {
                eprintln!("[LOGGER ERROR] Appender '{}' flush failed: {}", appender.name(), e);
            }
        }
    }

    /// Path of the active log file, if a file sink is installed
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn has_console(&self) -> bool {
        self.sinks.iter().any(|s| s.kind == SinkKind::Console)
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Drop for SinkSet {
    fn drop(&mut self) {
        self.flush();
    }
}
