//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod marker;
pub mod registry;
pub mod sink_set;
pub mod system;

pub use appender::Appender;
pub use config::{default_log_dir, LoggingConfig, LoggingOptions, DEFAULT_LOG_FILE_PREFIX};
pub use error::{LoggerError, Result};
pub use formatter::{format, FormatterConfig, SinkKind, TIMESTAMP_FORMAT};
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use marker::Marker;
pub use registry::{LoggerRegistry, ROOT_LOGGER};
pub use sink_set::{SinkSet, INTERNAL_LOGGER};
pub use system::{configure, flush, get_logger, global, LoggingState, LoggingSystem};
