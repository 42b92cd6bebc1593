//! Custom logging module.
//!
//! This module installs a logger implementation that captures formatted log
//! entries into a shared buffer, which the UI drains into the debug pane on
//! each tick. Writing to stdout would corrupt the terminal once the
//! alternate screen is active, so nothing is ever printed directly.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Upper bound on entries held between UI drains.
const BUFFER_CAPACITY: usize = 1000;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that captures formatted records into a shared buffer.
///
pub struct BufferedLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

/// Install the buffered logger and return the shared buffer handle.
///
pub fn init() -> AppResult<Arc<Mutex<Vec<String>>>> {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let logger = BufferedLogger {
        buffer: Arc::clone(&buffer),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(buffer)
}

impl Log for BufferedLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() >= BUFFER_CAPACITY {
                buffer.remove(0);
            }
            buffer.push(format_log(record));
        }
        // If the lock is poisoned the entry is dropped; logging is non-critical
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_log_includes_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("hello world"))
                .level(Level::Info)
                .build(),
        );
        assert!(formatted.contains("INFO"));
        assert!(formatted.contains("hello world"));
    }

    #[test]
    fn init_installs_the_global_logger() {
        // Only this test may install the global logger; a second call to
        // set_boxed_logger in the same process would fail.
        let buffer = init().unwrap();
        log::info!("logger installation check");
        assert!(buffer
            .lock()
            .unwrap()
            .iter()
            .any(|entry| entry.contains("logger installation check")));
    }

    #[test]
    fn buffered_logger_captures_and_caps_entries() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let logger = BufferedLogger {
            buffer: Arc::clone(&buffer),
        };

        for _ in 0..(BUFFER_CAPACITY + 10) {
            logger.log(
                &Record::builder()
                    .args(format_args!("entry"))
                    .level(Level::Debug)
                    .build(),
            );
        }

        let buffer = buffer.lock().unwrap();
        assert_eq!(buffer.len(), BUFFER_CAPACITY);
        assert!(buffer[0].contains("entry"));
    }
}
