//! Semantic operation helpers
//!
//! Each helper logs `message` at INFO with a fixed [`Marker`]. They go
//! through the same path as [`Logger::info`]: the console threshold applies
//! to them and the file sink records them with no glyph.
//!
//! ```
//! use visiondesk_logger::semantic::{log_screenshot, log_step_start};
//! use visiondesk_logger::{ConsoleTarget, LoggingOptions, LoggingSystem, MemoryBuffer};
//!
//! let buffer = MemoryBuffer::new();
//! let system = LoggingSystem::new();
//! system.configure(
//!     LoggingOptions::new()
//!         .with_file_logging(false)
//!         .with_colors(false)
//!         .with_console_target(ConsoleTarget::Memory(buffer.clone())),
//! );
//!
//! let logger = system.get_logger("capture");
//! log_step_start(&logger, "Selecting region");
//! log_screenshot(&logger, "captured");
//! assert!(buffer.lines().last().unwrap().ends_with("📸 [capture] INFO: captured"));
//! ```

use crate::core::{Logger, Marker};

pub fn log_step_start(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::StepStart, message);
}

pub fn log_step_complete(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::StepComplete, message);
}

/// Marks the end of a multi-step phase
pub fn log_phase_complete(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::PhaseComplete, message);
}

pub fn log_init(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::Init, message);
}

pub fn log_config(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::Config, message);
}

pub fn log_network(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::Network, message);
}

/// AI provider and vision model activity
pub fn log_ai(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::Ai, message);
}

pub fn log_screenshot(logger: &Logger, message: impl AsRef<str>) {
    logger.log_marked(Marker::Screenshot, message);
}
