//! Minimal end-to-end usage of the rotating JSON-lines logger.

use std::sync::Arc;
use std::time::Duration;
use serde::Serialize;

use jsonl_logger::{Logger, LoggerConfig, Record};

#[derive(Serialize)]
struct User {
    id: u64,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let config = LoggerConfig::new()
        .with_filename_prefix("example")
        .with_log_dir("./logs")
        .with_max_lines(100)
        .with_rotation_time(Duration::from_secs(30 * 60));

    let logger = Arc::new(Logger::new(config)?);

    let mut record = Record::new();
    record.insert("message".to_string(), "Hello, Logger!".into());
    logger.log(&record)?;

    // Any Serialize type works as a record
    logger.log(&User {
        id: 1,
        name: "alice".to_string(),
        email: None,
    })?;

    // Concurrent callers share the logger through an Arc
    let worker = {
        let logger = logger.clone();
        std::thread::spawn(move || -> jsonl_logger::Result<()> {
            let mut record = Record::new();
            record.insert("message".to_string(), "Hello from the worker!".into());
            logger.log(&record)
        })
    };
    worker.join().expect("worker panicked")?;

    let stats = logger.stats();
    println!("wrote {} lines ({} bytes)", stats.lines_written, stats.bytes_written);

    logger.close()?;
    Ok(())
}
