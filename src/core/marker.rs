//! Semantic operation markers
//!
//! A marker tags an INFO event with the kind of operation it reports on. On
//! the console, with emoji enabled, the marker's glyph replaces the level
//! glyph.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    StepStart,
    StepComplete,
    PhaseComplete,
    Init,
    Config,
    Network,
    Ai,
    Screenshot,
}

impl Marker {
    pub const ALL: [Marker; 8] = [
        Marker::StepStart,
        Marker::StepComplete,
        Marker::PhaseComplete,
        Marker::Init,
        Marker::Config,
        Marker::Network,
        Marker::Ai,
        Marker::Screenshot,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Marker::StepStart => "🚀",
            Marker::StepComplete => "✅",
            Marker::PhaseComplete => "🎉",
            Marker::Init => "🔧",
            Marker::Config => "⚙️",
            Marker::Network => "🌐",
            Marker::Ai => "🤖",
            Marker::Screenshot => "📸",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Marker::StepStart => "step-start",
            Marker::StepComplete => "step-complete",
            Marker::PhaseComplete => "phase-complete",
            Marker::Init => "init",
            Marker::Config => "config",
            Marker::Network => "network",
            Marker::Ai => "ai",
            Marker::Screenshot => "screenshot",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
