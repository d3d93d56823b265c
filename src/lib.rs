//! # VisionDesk Logger
//!
//! Process-wide logging for the VisionDesk desktop application.
//!
//! ## Features
//!
//! - **Two sinks**: a console sink gated at the configured level, and a
//!   size-rotated file sink that records everything from DEBUG up
//! - **Decorations**: optional emoji glyphs and ANSI-colored level names on
//!   the console; file lines stay plain
//! - **Semantic helpers**: `log_step_start`, `log_network`, `log_ai`,
//!   `log_screenshot` and friends tag INFO events with an operation marker
//! - **Thread safe**: loggers can be used from any thread
//!
//! ## Example
//!
//! ```no_run
//! use visiondesk_logger::prelude::*;
//!
//! configure(LoggingOptions::new().with_default_level("DEBUG").with_log_file_prefix("visiondesk"));
//!
//! let logger = get_logger("app");
//! log_init(&logger, "VisionDesk starting");
//! logger.warning("No AI provider configured");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;
pub mod semantic;

pub mod prelude {
    pub use crate::appenders::{ConsoleTarget, MemoryBuffer};
    pub use crate::core::{
        configure, flush, get_logger, global, LogEvent, LogLevel, Logger, LoggerError,
        LoggingOptions, LoggingState, LoggingSystem, Marker, Result,
    };
    pub use crate::semantic::*;
}

pub use appenders::{ConsoleAppender, ConsoleTarget, MemoryBuffer, RotatingFileAppender, RotationPolicy};
pub use core::{
    configure, flush, get_logger, global, Appender, FormatterConfig, LogEvent, LogLevel, Logger,
    LoggerError, LoggerRegistry, LoggingConfig, LoggingOptions, LoggingState, LoggingSystem,
    Marker, Result, SinkKind, SinkSet,
};
pub use semantic::{
    log_ai, log_config, log_init, log_network, log_phase_complete, log_screenshot,
    log_step_complete, log_step_start,
};
