//! Console appender implementation

use crate::core::{Appender, FormatterConfig, LogEvent, Result, SinkKind};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// In-memory line buffer, for hosts that show log output in their own UI
/// (and for tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        self.lines.lock().push(line);
    }

    /// Snapshot of every line captured so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// Count captured lines containing `needle`
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines.lock().iter().filter(|l| l.contains(needle)).count()
    }
}

/// Where console lines go
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    Memory(MemoryBuffer),
}

pub struct ConsoleAppender {
    target: ConsoleTarget,
    formatter: FormatterConfig,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            target: ConsoleTarget::default(),
            formatter: FormatterConfig::default(),
        }
    }

    pub fn with_target(target: ConsoleTarget) -> Self {
        Self {
            target,
            formatter: FormatterConfig::default(),
        }
    }

    /// Set the emoji/color decorations for this appender
    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn formatter(&self) -> &FormatterConfig {
        &self.formatter
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, event: &LogEvent) -> Result<()> {
        let line = self.formatter.format(event, SinkKind::Console);

        match &self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
            ConsoleTarget::Memory(buffer) => buffer.push(line),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
            ConsoleTarget::Memory(_) => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Marker};

    #[test]
    fn test_memory_target_captures_lines() {
        let buffer = MemoryBuffer::new();
        let mut appender = ConsoleAppender::with_target(ConsoleTarget::Memory(buffer.clone()))
            .with_formatter(FormatterConfig {
                use_emoji: true,
                use_colors: false,
            });

        let event = LogEvent::marked("ui", LogLevel::Info, Marker::Init, "window ready");
        appender.append(&event).unwrap();
        appender.flush().unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("🔧 [ui] INFO: window ready"));
    }

    #[test]
    fn test_buffer_clear_and_count() {
        let buffer = MemoryBuffer::new();
        buffer.push("alpha".into());
        buffer.push("beta alpha".into());
        assert_eq!(buffer.count_containing("alpha"), 2);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
