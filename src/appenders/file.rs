//! File appender implementation

use crate::core::{Appender, LoggerError, LoggingEvent, Result};
use crate::layouts::Layout;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
    layout: Layout,
}

impl FileAppender {
    /// Open `path` once in append mode, creating the file if absent. Each
    /// event is written as one rendered line.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            layout: Layout::default(),
        })
    }

    /// Set the layout for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use category_logger::appenders::FileAppender;
    /// use category_logger::layouts::Layout;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_layout(Layout::pattern("%d %p %m"));
    /// ```
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, event: &LoggingEvent) -> Result<()> {
        let mut line = self.layout.format(event);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use std::sync::Weak;
    use tempfile::TempDir;

    #[test]
    fn test_appends_one_line_per_event() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.log");

        let mut appender = FileAppender::new(&path)
            .unwrap()
            .with_layout(Layout::MessagePassThrough);
        for message in ["first", "second"] {
            let event = LoggingEvent::new("t", Level::Info, message, None, Weak::new());
            appender.append(&event).unwrap();
        }
        appender.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_reopens_in_append_mode() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.log");

        {
            let mut appender = FileAppender::new(&path)
                .unwrap()
                .with_layout(Layout::MessagePassThrough);
            let event = LoggingEvent::new("t", Level::Info, "kept", None, Weak::new());
            appender.append(&event).unwrap();
            // Dropped here; the Drop impl flushes.
        }

        let mut appender = FileAppender::new(&path)
            .unwrap()
            .with_layout(Layout::MessagePassThrough);
        let event = LoggingEvent::new("t", Level::Info, "added", None, Weak::new());
        appender.append(&event).unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "kept\nadded\n");
    }

    #[test]
    fn test_unopenable_path_is_a_file_appender_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("out.log");

        let result = FileAppender::new(&path);
        assert!(matches!(
            result,
            Err(LoggerError::FileAppenderError { .. })
        ));
    }
}
