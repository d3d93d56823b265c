//! Appender trait for log output destinations

use super::{
    error::{LoggerError, Result},
    formatter::SinkKind,
    log_event::LogEvent,
};

/// An output destination for rendered log lines.
///
/// Appenders are only ever driven from behind their own mutex, so `&mut self`
/// methods see one caller at a time.
pub trait Appender: Send {
    fn append(&mut self, event: &LogEvent) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
    fn kind(&self) -> SinkKind;

    /// Hand over a problem the appender recovered from during its last
    /// append (the line itself was still written).
    fn take_warning(&mut self) -> Option<LoggerError> {
        None
    }
}
