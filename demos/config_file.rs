//! Configuration-driven setup example
//!
//! Demonstrates configuring the registry from a JSON document.
//!
//! Run with: cargo run --example config_file

use category_logger::prelude::*;

const CONFIG: &str = r#"{
    "appenders": [
        {
            "type": "console",
            "layout": { "type": "pattern", "pattern": "%-5p %c - %m" }
        },
        {
            "type": "logLevelFilter",
            "level": "WARN",
            "category": "db",
            "appender": { "type": "console", "layout": { "type": "messagePassThrough" } }
        }
    ],
    "levels": {
        "db": "DEBUG",
        "metrics": "OFF"
    }
}"#;

fn main() -> Result<()> {
    println!("=== Category Logger - Configuration Example ===\n");

    let registry = Registry::new();

    let config: Config = serde_json::from_str(CONFIG)
        .map_err(|e| LoggerError::config_parse("<inline>", e))?;
    registry.configure(&config)?;

    let db = registry.get_logger("db");
    db.debug("connection pool ready")?;
    db.warn("pool exhausted, growing")?;

    let metrics = registry.get_logger("metrics");
    metrics.fatal("never printed, metrics is OFF")?;

    registry.get_default_logger().info("configured and running")?;

    Ok(())
}
