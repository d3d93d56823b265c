//! Appender implementations

pub mod console;
pub mod rotating_file;

pub use console::{ConsoleAppender, ConsoleTarget, MemoryBuffer};
pub use rotating_file::{
    RotatingFileAppender, RotationPolicy, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES,
};

pub use crate::core::Appender;
