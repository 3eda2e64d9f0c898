//! Process-wide catalog of loggers and appender bindings

use super::{
    appender::AppenderHandle,
    error::{LoggerError, Result},
    logger::Logger,
};
use crate::config::Config;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Category substituted when callers do not name one.
pub const DEFAULT_CATEGORY: &str = "[default]";

/// Reserved category meaning "every current and future logger".
pub const ALL_CATEGORIES: &str = "[all]";

#[derive(Default)]
struct RegistryInner {
    loggers: HashMap<String, Arc<Logger>>,
    /// Stable enumeration order for wildcard binds; `HashMap` iteration
    /// order is not.
    creation_order: Vec<String>,
    pending: HashMap<String, Vec<AppenderHandle>>,
}

/// The catalog of `category -> Logger` and `category -> [Appender]`.
///
/// Loggers are created lazily and cached for the registry's lifetime.
/// Appenders registered before their target logger exists are held in a
/// pending list and bound when the logger is created: own-category
/// appenders first, wildcard appenders after, each list in addition
/// order. Appenders registered for a category whose logger already
/// exists are bound immediately, appended at the end of its current
/// bindings.
#[derive(Default)]
pub struct Registry {
    inner: RwLock<RegistryInner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or create the logger for `category`. Repeated calls with the
    /// same category return the identical instance. The empty string maps
    /// to the reserved default category.
    pub fn get_logger(&self, category: &str) -> Arc<Logger> {
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };

        if let Some(logger) = self.inner.read().loggers.get(category) {
            return Arc::clone(logger);
        }

        let mut inner = self.inner.write();
        // Lost the race between the read above and this write lock.
        if let Some(logger) = inner.loggers.get(category) {
            return Arc::clone(logger);
        }

        let logger = Logger::new(category);
        if let Some(pending) = inner.pending.get(category) {
            for appender in pending {
                logger.bind_appender(Arc::clone(appender));
            }
        }
        if category != ALL_CATEGORIES {
            if let Some(pending) = inner.pending.get(ALL_CATEGORIES) {
                for appender in pending {
                    logger.bind_appender(Arc::clone(appender));
                }
            }
        }

        inner.loggers.insert(category.to_string(), Arc::clone(&logger));
        inner.creation_order.push(category.to_string());
        logger
    }

    /// The logger for the reserved default category.
    pub fn get_default_logger(&self) -> Arc<Logger> {
        self.get_logger(DEFAULT_CATEGORY)
    }

    /// Register an appender under the given categories. An empty slice
    /// registers under the wildcard category, binding the appender to
    /// every logger that exists now or is created later.
    pub fn add_appender(&self, appender: AppenderHandle, categories: &[&str]) {
        let mut inner = self.inner.write();
        if categories.is_empty() {
            Self::register(&mut inner, &appender, ALL_CATEGORIES);
        } else {
            for category in categories {
                Self::register(&mut inner, &appender, category);
            }
        }
    }

    fn register(inner: &mut RegistryInner, appender: &AppenderHandle, category: &str) {
        inner
            .pending
            .entry(category.to_string())
            .or_default()
            .push(Arc::clone(appender));

        // The pending list covers future loggers; existing loggers are
        // bound here so registration order stays independent of logger
        // creation order.
        if category == ALL_CATEGORIES {
            for name in &inner.creation_order {
                if let Some(logger) = inner.loggers.get(name) {
                    logger.bind_appender(Arc::clone(appender));
                }
            }
        } else if let Some(logger) = inner.loggers.get(category) {
            logger.bind_appender(Arc::clone(appender));
        }
    }

    /// Drop every pending list and empty every existing logger's bound
    /// appenders. The loggers themselves persist.
    pub fn clear_appenders(&self) {
        let mut inner = self.inner.write();
        inner.pending.clear();
        for logger in inner.loggers.values() {
            logger.clear_appenders();
        }
    }

    /// Flush every distinct registered appender once.
    pub fn flush(&self) -> Result<()> {
        let inner = self.inner.read();
        let mut flushed: Vec<*const ()> = Vec::new();
        for appenders in inner.pending.values() {
            for appender in appenders {
                let ptr = Arc::as_ptr(appender) as *const ();
                if flushed.contains(&ptr) {
                    continue;
                }
                flushed.push(ptr);
                appender.lock().flush()?;
            }
        }
        Ok(())
    }

    /// Apply a decoded configuration: clear all appender state, then build
    /// and register each configured appender, then set category levels.
    ///
    /// Not transactional: a failure leaves the registry cleared or
    /// partially reconfigured.
    pub fn configure(&self, config: &Config) -> Result<()> {
        self.clear_appenders();
        for spec in &config.appenders {
            let appender = spec.build()?;
            self.add_appender(appender, &spec.categories());
        }
        for (category, level) in &config.levels {
            self.get_logger(category).set_level_name(level);
        }
        Ok(())
    }

    /// Read and parse a JSON configuration file, then apply it.
    pub fn configure_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::config_read(path.display().to_string(), e))?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| LoggerError::config_parse(path.display().to_string(), e))?;
        self.configure(&config)
    }
}
