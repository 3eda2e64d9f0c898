//! Configuration structures and appender construction
//!
//! Configuration is decoded with serde into closed tagged enums, so an
//! appender or layout spec with an unknown `type` fails at decode time
//! rather than at a runtime lookup.

use crate::appenders::{ConsoleAppender, FileAppender, LevelFilter};
use crate::core::appender::{shared, Appender, AppenderHandle};
use crate::core::error::Result;
use crate::core::level::Level;
use crate::layouts::Layout;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Decoded configuration: an ordered list of appender specs and a
/// category-to-level map applied after the appenders are registered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub appenders: Vec<AppenderConfig>,
    #[serde(default)]
    pub levels: BTreeMap<String, String>,
}

/// One category name or an ordered list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategorySelector {
    One(String),
    Many(Vec<String>),
}

impl CategorySelector {
    pub fn names(&self) -> Vec<&str> {
        match self {
            CategorySelector::One(name) => vec![name.as_str()],
            CategorySelector::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutConfig {
    MessagePassThrough,
    #[default]
    Basic,
    Pattern {
        pattern: String,
    },
}

impl LayoutConfig {
    pub fn build(&self) -> Layout {
        match self {
            LayoutConfig::MessagePassThrough => Layout::MessagePassThrough,
            LayoutConfig::Basic => Layout::Basic,
            LayoutConfig::Pattern { pattern } => Layout::pattern(pattern),
        }
    }
}

/// Appender spec. `category` is absent for a wildcard registration;
/// `layout` defaults to the basic layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AppenderConfig {
    Console {
        #[serde(default)]
        category: Option<CategorySelector>,
        #[serde(default)]
        layout: Option<LayoutConfig>,
    },
    File {
        filename: PathBuf,
        #[serde(default)]
        category: Option<CategorySelector>,
        #[serde(default)]
        layout: Option<LayoutConfig>,
    },
    LogLevelFilter {
        level: String,
        appender: Box<AppenderConfig>,
        #[serde(default)]
        category: Option<CategorySelector>,
    },
}

impl AppenderConfig {
    /// Categories to register under; empty means the wildcard.
    pub fn categories(&self) -> Vec<&str> {
        match self.category_selector() {
            Some(selector) => selector.names(),
            None => Vec::new(),
        }
    }

    fn category_selector(&self) -> Option<&CategorySelector> {
        match self {
            AppenderConfig::Console { category, .. }
            | AppenderConfig::File { category, .. }
            | AppenderConfig::LogLevelFilter { category, .. } => category.as_ref(),
        }
    }

    /// Construct the configured appender as a shared handle.
    pub fn build(&self) -> Result<AppenderHandle> {
        Ok(match self {
            AppenderConfig::Console { layout, .. } => shared(Self::console(layout)),
            AppenderConfig::File {
                filename, layout, ..
            } => shared(Self::file(filename, layout)?),
            AppenderConfig::LogLevelFilter {
                level, appender, ..
            } => shared(Self::filter(level, appender)?),
        })
    }

    fn boxed(&self) -> Result<Box<dyn Appender>> {
        Ok(match self {
            AppenderConfig::Console { layout, .. } => Box::new(Self::console(layout)),
            AppenderConfig::File {
                filename, layout, ..
            } => Box::new(Self::file(filename, layout)?),
            AppenderConfig::LogLevelFilter {
                level, appender, ..
            } => Box::new(Self::filter(level, appender)?),
        })
    }

    fn layout_of(config: &Option<LayoutConfig>) -> Layout {
        config.as_ref().map(LayoutConfig::build).unwrap_or_default()
    }

    fn console(layout: &Option<LayoutConfig>) -> ConsoleAppender {
        ConsoleAppender::new().with_layout(Self::layout_of(layout))
    }

    fn file(path: &Path, layout: &Option<LayoutConfig>) -> Result<FileAppender> {
        Ok(FileAppender::new(path)?.with_layout(Self::layout_of(layout)))
    }

    fn filter(level: &str, inner: &AppenderConfig) -> Result<LevelFilter> {
        // Unknown level names degrade to Trace, same as Logger::set_level_name.
        let threshold = Level::to_level(Some(level), Level::Trace);
        Ok(LevelFilter::new(threshold, inner.boxed()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_console_spec() {
        let config: Config = serde_json::from_str(
            r#"{ "appenders": [ { "type": "console" } ] }"#,
        )
        .unwrap();

        assert_eq!(config.appenders.len(), 1);
        assert!(matches!(
            config.appenders[0],
            AppenderConfig::Console { ref category, ref layout }
                if category.is_none() && layout.is_none()
        ));
        assert!(config.appenders[0].categories().is_empty());
    }

    #[test]
    fn test_decode_file_spec_with_pattern_layout() {
        let config: Config = serde_json::from_str(
            r#"{
                "appenders": [
                    {
                        "type": "file",
                        "filename": "logs/app.log",
                        "category": "app",
                        "layout": { "type": "pattern", "pattern": "%p %m%n" }
                    }
                ]
            }"#,
        )
        .unwrap();

        let AppenderConfig::File {
            ref filename,
            ref layout,
            ..
        } = config.appenders[0]
        else {
            panic!("expected a file spec");
        };
        assert_eq!(filename, &PathBuf::from("logs/app.log"));
        assert!(matches!(layout, Some(LayoutConfig::Pattern { .. })));
        assert_eq!(config.appenders[0].categories(), vec!["app"]);
    }

    #[test]
    fn test_decode_category_list() {
        let config: Config = serde_json::from_str(
            r#"{ "appenders": [ { "type": "console", "category": ["db", "net"] } ] }"#,
        )
        .unwrap();

        assert_eq!(config.appenders[0].categories(), vec!["db", "net"]);
    }

    #[test]
    fn test_decode_nested_level_filter() {
        let config: Config = serde_json::from_str(
            r#"{
                "appenders": [
                    {
                        "type": "logLevelFilter",
                        "level": "WARN",
                        "appender": { "type": "console" }
                    }
                ]
            }"#,
        )
        .unwrap();

        let AppenderConfig::LogLevelFilter {
            ref level,
            ref appender,
            ..
        } = config.appenders[0]
        else {
            panic!("expected a logLevelFilter spec");
        };
        assert_eq!(level, "WARN");
        assert!(matches!(**appender, AppenderConfig::Console { .. }));
    }

    #[test]
    fn test_unknown_appender_type_fails_decode() {
        let result: std::result::Result<Config, _> =
            serde_json::from_str(r#"{ "appenders": [ { "type": "smtp" } ] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_layout_type_fails_decode() {
        let result: std::result::Result<Config, _> = serde_json::from_str(
            r#"{ "appenders": [ { "type": "console", "layout": { "type": "xml" } } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_levels_map() {
        let config: Config = serde_json::from_str(
            r#"{ "levels": { "db": "WARN", "net": "debug" } }"#,
        )
        .unwrap();

        assert_eq!(config.levels["db"], "WARN");
        assert_eq!(config.levels["net"], "debug");
    }

    #[test]
    fn test_empty_config_decodes_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.appenders.is_empty());
        assert!(config.levels.is_empty());
    }

    #[test]
    fn test_build_nested_filter_spec() {
        let config: Config = serde_json::from_str(
            r#"{
                "appenders": [
                    {
                        "type": "logLevelFilter",
                        "level": "ERROR",
                        "appender": {
                            "type": "logLevelFilter",
                            "level": "WARN",
                            "appender": { "type": "console" }
                        }
                    }
                ]
            }"#,
        )
        .unwrap();

        // Filters compose through the nested spec without error.
        assert!(config.appenders[0].build().is_ok());
    }
}
