//! File logging example
//!
//! Demonstrates file appenders, pattern layouts, and level filters.
//!
//! Run with: cargo run --example file_logging

use category_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Category Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("category_logger_demo.log");
    let error_path = std::env::temp_dir().join("category_logger_demo_errors.log");

    let registry = Registry::new();

    // Everything goes to the main log with a pattern layout
    let main_file = FileAppender::new(&log_path)?
        .with_layout(Layout::pattern("[%d{ABSOLUTE}] %-5p %c{1} - %m"));
    registry.add_appender(shared(main_file), &[]);

    // Errors and worse additionally go to a second file
    let error_file = FileAppender::new(&error_path)?;
    registry.add_appender(
        shared(LevelFilter::new(Level::Error, Box::new(error_file))),
        &[],
    );

    let server = registry.get_logger("server.http");
    server.info("listening on 0.0.0.0:8080")?;
    server.warn("slow request: 1.9s")?;
    server.error("worker crashed")?;

    let jobs = registry.get_logger("server.jobs");
    jobs.info("queue drained")?;

    registry.flush()?;

    println!("main log:  {}", log_path.display());
    println!("{}", std::fs::read_to_string(&log_path)?);
    println!("error log: {}", error_path.display());
    println!("{}", std::fs::read_to_string(&error_path)?);

    Ok(())
}
