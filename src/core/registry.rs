//! Name-keyed logger cache

use super::logger::Logger;
use super::system::SystemCore;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Name used when a logger is requested with an empty name
pub const ROOT_LOGGER: &str = "root";

/// Hands out one [`Logger`] per name for the life of its system.
///
/// Lookups from any number of threads agree on the instance: the first one
/// inserts under the lock, every later one clones the stored `Arc`.
pub struct LoggerRegistry {
    core: Arc<SystemCore>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub(crate) fn new(core: Arc<SystemCore>) -> Self {
        Self {
            core,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, name: &str) -> Arc<Logger> {
        let name = if name.is_empty() { ROOT_LOGGER } else { name };

        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(name, Arc::clone(&self.core)));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use crate::core::LoggingSystem;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_same_name_same_instance() {
        let system = LoggingSystem::new();
        let a = system.get_logger("ui.main_window");
        let b = system.get_logger("ui.main_window");
        let c = system.get_logger("ui.overlay");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(system.registry().len(), 2);
        assert_eq!(system.registry().names(), vec!["ui.main_window", "ui.overlay"]);
    }

    #[test]
    fn test_empty_name_is_root() {
        let system = LoggingSystem::new();
        let root = system.get_logger("");
        assert_eq!(root.name(), "root");
        assert!(Arc::ptr_eq(&root, &system.get_logger("root")));
        assert!(system.registry().contains("root"));
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let system = Arc::new(LoggingSystem::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let system = Arc::clone(&system);
                thread::spawn(move || system.get_logger("shared"))
            })
            .collect();

        let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for logger in &loggers[1..] {
            assert!(Arc::ptr_eq(&loggers[0], logger));
        }
        assert_eq!(system.registry().len(), 1);
    }

    #[test]
    fn test_systems_do_not_share_registries() {
        let first = LoggingSystem::new();
        let second = LoggingSystem::new();
        assert!(!Arc::ptr_eq(&first.get_logger("x"), &second.get_logger("x")));
    }
}
