//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Configuration file could not be read
    #[error("failed to read configuration from '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration source could not be parsed
    #[error("failed to parse configuration from '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File appender error with path
    #[error("file appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic)
    #[error("writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a configuration read error
    pub fn config_read(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        LoggerError::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("logLevelFilter", "missing inner appender");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_appender("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileAppenderError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::file_appender("/var/log/app.log", "Disk full");
        assert_eq!(
            err.to_string(),
            "file appender error for '/var/log/app.log': Disk full"
        );

        let err = LoggerError::writer("stream closed");
        assert_eq!(err.to_string(), "writer error: stream closed");
    }

    #[test]
    fn test_config_read_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LoggerError::config_read("log4.json", io_err);

        assert!(matches!(err, LoggerError::ConfigRead { .. }));
        assert!(err.to_string().contains("log4.json"));
    }

    #[test]
    fn test_config_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = LoggerError::config_parse("log4.json", parse_err);

        assert!(matches!(err, LoggerError::ConfigParse { .. }));
        assert!(err.to_string().starts_with("failed to parse configuration"));
    }
}
