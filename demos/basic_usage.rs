//! Basic logger usage example
//!
//! Demonstrates the standard logger, hierarchical naming, fields, and
//! `error_return`.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use rust_logger_facade::{fields, info, warn};

fn load_user(logger: &dyn Logger, id: u64) -> Result<String> {
    if id == 0 {
        return Err(logger.error_return("user not found", &[field("id", id)]));
    }
    Ok(format!("user-{}", id))
}

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    let root = StdLogger::builder()
        .min_level(Level::Debug)
        .is_in_dev_environment(false)
        .build()?;

    println!("1. Logging at different levels:");
    root.debug("This is a debug message", &[]);
    root.info("This is an info message", &[]);
    root.warn("This is a warning message", &[]);
    root.error("This is an error message", &[]);
    // Not fatal outside development
    root.dpanic("This is a dpanic message", &[])?;

    println!("\n2. Named loggers and fields:");
    let db = root.named("svc").named("db").with(&[field("table", "users")]);
    db.info("upserted", &[field("rows", 3), field("ms", 1.25)]);
    info!(db, "connection pool at {} of {}", 8, 10; "idle" => 2);
    warn!(db, "slow query"; "ms" => 850, "query" => "SELECT *");

    println!("\n3. Errors that mirror the logged line:");
    let users = root.named("users").with(&fields!["tenant" => "acme"]);
    match load_user(&*users, 0) {
        Ok(name) => println!("loaded {}", name),
        Err(e) => println!("caller received: {}", e),
    }

    println!("\n4. Minimum level filtering:");
    let quiet = StdLogger::builder().min_level(Level::Warn).build()?;
    quiet.info("This info message will NOT be shown", &[]);
    quiet.warn("This warning message WILL be shown", &[]);

    root.sync()?;
    println!("\n=== Example Complete ===");
    Ok(())
}
