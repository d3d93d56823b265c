//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use visiondesk_logger::{info, marked, LoggingOptions, LoggingSystem, Marker};
//!
//! let system = LoggingSystem::new();
//! system.configure(LoggingOptions::new().with_file_logging(false).with_console_logging(false));
//! let logger = system.get_logger("shortcuts");
//!
//! let key = "Ctrl+Shift+S";
//! info!(logger, "Shortcut registered: {}", key);
//! marked!(logger, Marker::Screenshot, "Captured {}x{} region", 640, 480);
//! ```

/// Log a message with automatic formatting.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log an INFO message tagged with a semantic marker.
#[macro_export]
macro_rules! marked {
    ($logger:expr, $marker:expr, $($arg:tt)+) => {
        $logger.log_marked($marker, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
