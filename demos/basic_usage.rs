//! Basic formatter usage example
//!
//! Demonstrates plugging the line formatter into a minimal host that frames
//! and prints each line.
//!
//! Run with: cargo run --example basic_usage

use rust_log_formatter::prelude::*;
use rust_log_formatter::{event, fields};
use std::io::Write;

/// Stand-in for a host logging framework: it owns a formatter and a sink.
struct Host {
    formatter: Box<dyn Formatter>,
}

impl Host {
    fn emit(&self, event: &Event) -> Result<()> {
        let mut line = self.formatter.format(event)?;
        line.push(b'\n');
        std::io::stdout()
            .write_all(&line)
            .map_err(|e| FormatterError::other(format!("stdout write failed: {}", e)))
    }
}

fn main() -> Result<()> {
    println!("=== Rust Log Formatter - Basic Usage Example ===\n");

    println!("1. Default templates:");
    let host = Host {
        formatter: Box::new(LineFormatter::default()),
    };
    host.emit(&Event::new(LogLevel::Info, "Server started"))?;
    host.emit(&event!(LogLevel::Warn, "Disk usage at {}%", 91; "mount" => "/var", "free_gb" => 4.5))?;

    println!("\n2. Custom templates:");
    let config = FormatterConfig::new()
        .with_line_template("%time% %lvl% %msg% [%fields%]")
        .with_timestamp_pattern("%H:%M:%S")
        .with_field_template("%k%=%v%");
    let host = Host {
        formatter: Box::new(LineFormatter::try_new(config)?),
    };
    host.emit(
        &Event::new(LogLevel::Error, "Request failed")
            .with_fields(fields! { "status" => 503, "path" => "/api/orders" }),
    )?;

    println!("\n3. Reconfiguring at runtime:");
    let shared = SharedFormatter::new(FormatterConfig::new().with_line_template("%lvl%|%msg%"));
    let host = Host {
        formatter: Box::new(shared.clone()),
    };
    host.emit(&Event::new(LogLevel::Debug, "before reload"))?;
    shared.reconfigure(FormatterConfig::from_json(r#"{"line_template": "<%lvl%> %msg%"}"#)?)?;
    host.emit(&Event::new(LogLevel::Debug, "after reload"))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
