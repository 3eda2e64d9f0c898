//! Named logger implementation

use super::{
    appender::AppenderHandle,
    error::Result,
    event::{ErrorInfo, LoggingEvent},
    level::Level,
};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// A named logger.
///
/// Holds a category name, a minimum level, and the ordered list of bound
/// appenders. Accepted calls build a [`LoggingEvent`] and invoke every
/// bound appender synchronously, in binding order; an appender failure
/// aborts the fan-out and propagates to the call site.
///
/// Loggers are shared (`Arc`) values cached by the registry, so threshold
/// and binding state live behind locks and all methods take `&self`.
pub struct Logger {
    category: String,
    threshold: RwLock<Level>,
    appenders: RwLock<Vec<AppenderHandle>>,
    handle: Weak<Logger>,
}

impl Logger {
    /// Create a detached logger. Loggers are normally obtained through the
    /// registry, which caches one instance per category.
    pub fn new(category: impl Into<String>) -> Arc<Self> {
        Arc::new_cyclic(|handle| Self {
            category: category.into(),
            threshold: RwLock::new(Level::Trace),
            appenders: RwLock::new(Vec::new()),
            handle: handle.clone(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn level(&self) -> Level {
        *self.threshold.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.threshold.write() = level;
    }

    /// Set the threshold by name, defaulting to `Trace` when the name is
    /// unrecognized. Never fails.
    pub fn set_level_name(&self, name: &str) {
        self.set_level(Level::to_level(Some(name), Level::Trace));
    }

    /// `true` iff a call at `level` would pass the threshold gate.
    pub fn is_level_enabled(&self, level: Level) -> bool {
        self.threshold.read().is_at_most(level)
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_level_enabled(Level::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_level_enabled(Level::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_level_enabled(Level::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_level_enabled(Level::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_level_enabled(Level::Error)
    }

    pub fn is_fatal_enabled(&self) -> bool {
        self.is_level_enabled(Level::Fatal)
    }

    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<()> {
        self.dispatch(level, message, None)
    }

    /// Log with error details attached to the event.
    pub fn log_with_error(
        &self,
        level: Level,
        message: impl Into<String>,
        error: ErrorInfo,
    ) -> Result<()> {
        self.dispatch(level, message, Some(error))
    }

    fn dispatch(
        &self,
        level: Level,
        message: impl Into<String>,
        error: Option<ErrorInfo>,
    ) -> Result<()> {
        // The gate runs before the event is built, so rejected calls never
        // allocate.
        if !self.threshold.read().is_at_most(level) {
            return Ok(());
        }

        let event = LoggingEvent::new(
            self.category.clone(),
            level,
            message.into(),
            error,
            self.handle.clone(),
        );

        let appenders = self.appenders.read();
        for appender in appenders.iter() {
            appender.lock().append(&event)?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Trace, message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Warn, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Error, message)
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Fatal, message)
    }

    /// Number of appenders currently bound to this logger.
    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Append an appender at the end of the bound list. The registry is
    /// the only caller, which preserves the binding-order contract.
    pub(crate) fn bind_appender(&self, appender: AppenderHandle) {
        self.appenders.write().push(appender);
    }

    pub(crate) fn clear_appenders(&self) {
        self.appenders.write().clear();
    }
}
