//! Appender trait for log output destinations

use super::{error::Result, event::LoggingEvent};
use parking_lot::Mutex;
use std::sync::Arc;

pub trait Appender: Send + Sync {
    fn append(&mut self, event: &LoggingEvent) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Shared handle to an appender.
///
/// The registry may bind one appender instance to many loggers (a wildcard
/// registration binds to every logger), so appenders are held behind an
/// `Arc<Mutex<..>>` rather than owned by a single logger.
pub type AppenderHandle = Arc<Mutex<dyn Appender>>;

/// Wrap an appender in a shareable handle.
pub fn shared<A: Appender + 'static>(appender: A) -> AppenderHandle {
    Arc::new(Mutex::new(appender))
}
