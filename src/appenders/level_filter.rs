//! Level filter appender wrapper

use crate::core::{Appender, Level, LoggingEvent, Result};

/// Forwards events at or above a threshold to an inner appender and
/// silently drops the rest.
///
/// The inner appender is just another [`Appender`], so filters compose:
/// a filter may wrap another filter wrapping a sink.
pub struct LevelFilter {
    threshold: Level,
    inner: Box<dyn Appender>,
}

impl LevelFilter {
    pub fn new(threshold: Level, inner: Box<dyn Appender>) -> Self {
        Self { threshold, inner }
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }
}

impl Appender for LevelFilter {
    fn append(&mut self, event: &LoggingEvent) -> Result<()> {
        if event.level.is_at_least(self.threshold) {
            self.inner.append(event)
        } else {
            Ok(())
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }

    fn name(&self) -> &str {
        "logLevelFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::{Arc, Weak};

    struct CountingAppender {
        count: Arc<Mutex<usize>>,
    }

    impl Appender for CountingAppender {
        fn append(&mut self, _event: &LoggingEvent) -> Result<()> {
            *self.count.lock() += 1;
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn event(level: Level) -> LoggingEvent {
        LoggingEvent::new("test", level, "msg", None, Weak::new())
    }

    #[test]
    fn test_forwards_at_or_above_threshold() {
        let count = Arc::new(Mutex::new(0));
        let mut filter = LevelFilter::new(
            Level::Warn,
            Box::new(CountingAppender {
                count: Arc::clone(&count),
            }),
        );

        filter.append(&event(Level::Warn)).unwrap();
        filter.append(&event(Level::Error)).unwrap();
        filter.append(&event(Level::Fatal)).unwrap();
        assert_eq!(*count.lock(), 3);
    }

    #[test]
    fn test_drops_below_threshold() {
        let count = Arc::new(Mutex::new(0));
        let mut filter = LevelFilter::new(
            Level::Warn,
            Box::new(CountingAppender {
                count: Arc::clone(&count),
            }),
        );

        filter.append(&event(Level::Trace)).unwrap();
        filter.append(&event(Level::Info)).unwrap();
        assert_eq!(*count.lock(), 0);
    }

    #[test]
    fn test_filters_compose() {
        let count = Arc::new(Mutex::new(0));
        let inner = LevelFilter::new(
            Level::Warn,
            Box::new(CountingAppender {
                count: Arc::clone(&count),
            }),
        );
        // The outer filter is looser; the inner one still governs.
        let mut outer = LevelFilter::new(Level::Debug, Box::new(inner));

        outer.append(&event(Level::Info)).unwrap();
        assert_eq!(*count.lock(), 0);

        outer.append(&event(Level::Error)).unwrap();
        assert_eq!(*count.lock(), 1);
    }
}
