//! Basic logger usage example
//!
//! Demonstrates the registry, console logging, and level thresholds.
//!
//! Run with: cargo run --example basic_usage

use category_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Category Logger - Basic Usage Example ===\n");

    let registry = Registry::new();

    // One console appender for every category
    registry.add_appender(shared(ConsoleAppender::new()), &[]);

    let logger = registry.get_logger("app");

    // Log messages at different levels
    println!("1. Logging at different levels:");
    logger.trace("This is a trace message")?;
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Logging with a raised threshold:");
    logger.set_level(Level::Info);
    println!("   Threshold set to INFO - trace and debug won't show:");
    logger.trace("Trace message (hidden)")?;
    logger.debug("Debug message (hidden)")?;
    logger.info("Info message (visible)")?;
    logger.warn("Warning message (visible)")?;

    println!("\n3. Separate categories keep separate thresholds:");
    let db = registry.get_logger("db");
    db.set_level(Level::Warn);
    db.info("db info (hidden)")?;
    db.warn("db warning (visible)")?;
    logger.info("app info (still visible)")?;

    println!("\n4. Attaching error details:");
    logger.log_with_error(
        Level::Error,
        "request failed",
        ErrorInfo::new("TimeoutError", "upstream did not answer in 5s"),
    )?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
