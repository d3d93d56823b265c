//! Process-wide logging state
//!
//! A [`LoggingSystem`] owns the active configuration, the installed
//! [`SinkSet`] and the logger registry. The application uses the single
//! instance behind [`global`]; the free functions at the bottom of this
//! module are shorthands for it.
//!
//! # Thread safety
//!
//! Logging and logger lookup are safe from any thread. `configure` swaps the
//! whole sink set under a write lock, but log calls already in flight keep
//! the set they started with, so configure at startup before other threads
//! log if every line must land in the new sinks.

use super::{
    config::{LoggingConfig, LoggingOptions},
    log_event::LogEvent,
    log_level::LogLevel,
    logger::Logger,
    marker::Marker,
    registry::LoggerRegistry,
    sink_set::{SinkSet, INTERNAL_LOGGER},
};
use crate::appenders::RotationPolicy;
use chrono::Local;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Lifecycle of a logging system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingState {
    /// Nothing installed yet; the first log call applies the defaults
    Unconfigured,
    /// One configuration applied, explicitly or implicitly
    Configured,
    /// Configured more than once; each time fully rebuilt
    Reconfigured,
}

#[derive(Default)]
struct CoreState {
    config: Option<LoggingConfig>,
    sinks: Option<Arc<SinkSet>>,
    configure_count: u64,
}

/// State shared between a system and every logger it hands out
pub(crate) struct SystemCore {
    state: RwLock<CoreState>,
    policy: RotationPolicy,
}

impl SystemCore {
    fn new(policy: RotationPolicy) -> Self {
        Self {
            state: RwLock::new(CoreState::default()),
            policy,
        }
    }

    pub(crate) fn dispatch(&self, event: &LogEvent) {
        self.current_sinks().dispatch(event);
    }

    fn current_sinks(&self) -> Arc<SinkSet> {
        if let Some(sinks) = self.state.read().sinks.as_ref() {
            return Arc::clone(sinks);
        }
        self.install(LoggingOptions::default(), true)
    }

    /// Tear down the installed sinks and build new ones from `options`.
    ///
    /// With `only_if_unconfigured`, an already configured system is left
    /// alone; that is how racing first log calls agree on one default set.
    fn install(&self, options: LoggingOptions, only_if_unconfigured: bool) -> Arc<SinkSet> {
        let (sinks, level) = {
            let mut state = self.state.write();
            if only_if_unconfigured {
                if let Some(sinks) = state.sinks.as_ref() {
                    return Arc::clone(sinks);
                }
            }

            if let Some(old) = state.sinks.take() {
                old.flush();
            }

            let config = options.resolve(Local::now());
            let level = config.default_level;
            let sinks = Arc::new(SinkSet::build_with_policy(&config, self.policy));
            state.config = Some(config);
            state.sinks = Some(Arc::clone(&sinks));
            state.configure_count += 1;
            (sinks, level)
        };

        Self::announce(&sinks, level);
        sinks
    }

    fn announce(sinks: &SinkSet, level: LogLevel) {
        let file = sinks
            .log_file()
            .map_or_else(|| "disabled".to_string(), |p| p.display().to_string());
        let event = LogEvent::marked(
            INTERNAL_LOGGER,
            LogLevel::Info,
            Marker::Config,
            format!(
                "Logging configured: level={}, log file={}",
                level, file
            ),
        );
        sinks.dispatch(&event);
    }
}

/// One logging system: configuration, sinks and named loggers
pub struct LoggingSystem {
    core: Arc<SystemCore>,
    registry: LoggerRegistry,
}

impl LoggingSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rotation_policy(RotationPolicy::default())
    }

    /// A system whose file sink rotates by `policy` instead of the standard
    /// 10 MB / 10 backups
    #[must_use]
    pub fn with_rotation_policy(policy: RotationPolicy) -> Self {
        let core = Arc::new(SystemCore::new(policy));
        Self {
            registry: LoggerRegistry::new(Arc::clone(&core)),
            core,
        }
    }

    /// Look up the logger for `name`, creating it on first use.
    ///
    /// The same `Arc` comes back for the same name every time.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        self.registry.get(name)
    }

    /// Replace the active configuration. Never fails: an unknown level
    /// becomes INFO and an unusable log directory disables the file sink
    /// with a warning.
    pub fn configure(&self, options: LoggingOptions) {
        self.core.install(options, false);
    }

    pub fn state(&self) -> LoggingState {
        match self.core.state.read().configure_count {
            0 => LoggingState::Unconfigured,
            1 => LoggingState::Configured,
            _ => LoggingState::Reconfigured,
        }
    }

    /// The active resolved configuration
    pub fn config(&self) -> Option<LoggingConfig> {
        self.core.state.read().config.clone()
    }

    /// Path of the file the active file sink writes to
    pub fn log_file(&self) -> Option<PathBuf> {
        self.core
            .state
            .read()
            .sinks
            .as_ref()
            .and_then(|s| s.log_file().map(PathBuf::from))
    }

    pub fn flush(&self) {
        let sinks = self.core.state.read().sinks.clone();
        if let Some(sinks) = sinks {
            sinks.flush();
        }
    }

    pub fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<LoggingSystem> = OnceLock::new();

/// The process-wide logging system
pub fn global() -> &'static LoggingSystem {
    GLOBAL.get_or_init(LoggingSystem::new)
}

/// Logger for `name` from the process-wide system
pub fn get_logger(name: &str) -> Arc<Logger> {
    global().get_logger(name)
}

/// Configure the process-wide system
pub fn configure(options: LoggingOptions) {
    global().configure(options);
}

/// Flush every sink of the process-wide system
pub fn flush() {
    global().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{ConsoleTarget, MemoryBuffer};
    use tempfile::tempdir;

    #[test]
    fn test_lifecycle_states() {
        let dir = tempdir().unwrap();
        let system = LoggingSystem::new();
        assert_eq!(system.state(), LoggingState::Unconfigured);
        assert!(system.config().is_none());

        let options = LoggingOptions::new()
            .with_log_dir(dir.path())
            .with_console_target(ConsoleTarget::Memory(MemoryBuffer::new()));
        system.configure(options.clone());
        assert_eq!(system.state(), LoggingState::Configured);

        system.configure(options);
        assert_eq!(system.state(), LoggingState::Reconfigured);
    }

    #[test]
    fn test_configure_announces_itself() {
        let buffer = MemoryBuffer::new();
        let system = LoggingSystem::new();
        system.configure(
            LoggingOptions::new()
                .with_file_logging(false)
                .with_emoji(false)
                .with_colors(false)
                .with_console_target(ConsoleTarget::Memory(buffer.clone())),
        );

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[visiondesk.logging] INFO: Logging configured: level=INFO, log file=disabled"));
        assert!(system.log_file().is_none());
    }

    #[test]
    fn test_global_is_a_singleton() {
        assert!(std::ptr::eq(global(), global()));
        assert!(Arc::ptr_eq(&get_logger("global.test"), &get_logger("global.test")));
    }
}
