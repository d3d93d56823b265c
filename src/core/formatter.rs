//! Line rendering for console and file sinks
//!
//! Both sinks share one template:
//!
//! - console: `[2025-01-08 10:30:45] 📸 [capture] INFO: captured`
//! - file:    `[2025-01-08 10:30:45] [capture] INFO: captured`
//!
//! Glyphs and ANSI color are console-only decorations. The file line is the
//! plain record and never carries either, whatever the toggles say.

use super::log_event::LogEvent;
use super::log_level::LogLevel;

/// strftime pattern for the leading timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which kind of sink a line is being rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

/// Console decoration toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterConfig {
    pub use_emoji: bool,
    pub use_colors: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            use_emoji: true,
            use_colors: true,
        }
    }
}

impl FormatterConfig {
    /// Plain rendering: no glyphs, no color
    pub const PLAIN: FormatterConfig = FormatterConfig {
        use_emoji: false,
        use_colors: false,
    };

    /// Render `event` as one line (without the trailing newline).
    ///
    /// # Examples
    ///
    /// ```
    /// use visiondesk_logger::{FormatterConfig, LogEvent, LogLevel, SinkKind};
    ///
    /// let event = LogEvent::new("capture", LogLevel::Warning, "slow frame");
    /// let line = FormatterConfig::PLAIN.format(&event, SinkKind::File);
    /// assert!(line.ends_with("] [capture] WARNING: slow frame"));
    /// ```
    #[must_use]
    pub fn format(&self, event: &LogEvent, kind: SinkKind) -> String {
        let timestamp = event.timestamp.format(TIMESTAMP_FORMAT);
        let console = kind == SinkKind::Console;

        let glyph = if console && self.use_emoji {
            let glyph = event.marker.map_or_else(|| event.level.glyph(), |m| m.glyph());
            format!("{} ", glyph)
        } else {
            String::new()
        };

        let level = if console && self.use_colors {
            colorize_level(event.level)
        } else {
            event.level.to_str().to_string()
        };

        format!(
            "[{}] {}[{}] {}: {}",
            timestamp, glyph, event.logger, level, event.message
        )
    }
}

/// Free-function form of [`FormatterConfig::format`]
#[must_use]
pub fn format(event: &LogEvent, kind: SinkKind, config: &FormatterConfig) -> String {
    config.format(event, kind)
}

/// Wrap the level name in its SGR color and a reset, whether or not stdout
/// is a terminal
#[cfg(feature = "console")]
fn colorize_level(level: LogLevel) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m",
        level.color_code().to_fg_str(),
        level.to_str()
    )
}

#[cfg(not(feature = "console"))]
fn colorize_level(level: LogLevel) -> String {
    level.to_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Marker;
    use chrono::{Local, TimeZone};

    fn fixed_event(level: LogLevel, marker: Option<Marker>) -> LogEvent {
        let ts = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let event = match marker {
            Some(m) => LogEvent::marked("capture", level, m, "captured"),
            None => LogEvent::new("capture", level, "captured"),
        };
        event.with_timestamp(ts)
    }

    #[test]
    fn test_file_line_layout() {
        let event = fixed_event(LogLevel::Info, Some(Marker::Screenshot));
        let line = FormatterConfig::default().format(&event, SinkKind::File);
        assert_eq!(line, "[2025-01-08 10:30:45] [capture] INFO: captured");
    }

    #[test]
    fn test_console_marker_beats_level_glyph() {
        let config = FormatterConfig {
            use_emoji: true,
            use_colors: false,
        };
        let line = config.format(&fixed_event(LogLevel::Info, Some(Marker::Screenshot)), SinkKind::Console);
        assert_eq!(line, "[2025-01-08 10:30:45] 📸 [capture] INFO: captured");

        let line = config.format(&fixed_event(LogLevel::Error, None), SinkKind::Console);
        assert_eq!(line, "[2025-01-08 10:30:45] ❌ [capture] ERROR: captured");
    }

    #[test]
    fn test_console_without_emoji_has_no_glyph_segment() {
        let line = FormatterConfig::PLAIN
            .format(&fixed_event(LogLevel::Info, Some(Marker::Ai)), SinkKind::Console);
        assert_eq!(line, "[2025-01-08 10:30:45] [capture] INFO: captured");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_color_wraps_level_token_only() {
        let config = FormatterConfig {
            use_emoji: false,
            use_colors: true,
        };
        let line = config.format(&fixed_event(LogLevel::Warning, None), SinkKind::Console);
        assert_eq!(
            line,
            "[2025-01-08 10:30:45] [capture] \u{1b}[33mWARNING\u{1b}[0m: captured"
        );

        let line = config.format(&fixed_event(LogLevel::Warning, None), SinkKind::File);
        assert!(!line.contains('\u{1b}'));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_every_level_has_its_escape() {
        let config = FormatterConfig {
            use_emoji: false,
            use_colors: true,
        };
        let expected = [
            (LogLevel::Debug, "\u{1b}[36mDEBUG\u{1b}[0m"),
            (LogLevel::Info, "\u{1b}[32mINFO\u{1b}[0m"),
            (LogLevel::Warning, "\u{1b}[33mWARNING\u{1b}[0m"),
            (LogLevel::Error, "\u{1b}[31mERROR\u{1b}[0m"),
            (LogLevel::Critical, "\u{1b}[35mCRITICAL\u{1b}[0m"),
        ];
        for (level, token) in expected {
            let line = config.format(&fixed_event(level, None), SinkKind::Console);
            assert_eq!(line, format!("[2025-01-08 10:30:45] [capture] {}: captured", token));
        }
    }

    #[test]
    fn test_free_function_matches_method() {
        let event = fixed_event(LogLevel::Debug, None);
        let config = FormatterConfig::PLAIN;
        assert_eq!(
            format(&event, SinkKind::File, &config),
            config.format(&event, SinkKind::File)
        );
    }
}
