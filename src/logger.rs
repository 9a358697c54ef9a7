//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a shared buffer for display in the log view.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Maximum number of captured entries kept in the buffer.
///
const MAX_ENTRIES: usize = 500;

/// Shared buffer of formatted log entries, oldest first.
///
pub type LogBuffer = Arc<Mutex<Vec<String>>>;

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

/// Custom logger that captures logs to a shared buffer
///
pub struct CustomLogger {
    entries: LogBuffer,
}

impl CustomLogger {
    /// Install a new logger as the global logger and return the buffer it
    /// captures into.
    ///
    pub fn init() -> Result<LogBuffer, AppError> {
        let entries: LogBuffer = Arc::new(Mutex::new(vec![]));
        let logger = CustomLogger {
            entries: Arc::clone(&entries),
        };
        log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(LevelFilter::Debug);
        Ok(entries)
    }
}

impl Log for CustomLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Allow all logs
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut entries) = self.entries.lock() {
                entries.push(format_log(record));
                if entries.len() > MAX_ENTRIES {
                    let excess = entries.len() - MAX_ENTRIES;
                    entries.drain(..excess);
                }
            }
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_includes_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Warn)
                .build(),
        );
        assert!(formatted.contains("WARN"));
        assert!(formatted.contains("hello"));
    }

    #[test]
    fn test_logger_captures_to_buffer() {
        let entries: LogBuffer = Arc::new(Mutex::new(vec![]));
        let logger = CustomLogger {
            entries: Arc::clone(&entries),
        };
        logger.log(
            &Record::builder()
                .args(format_args!("captured"))
                .level(Level::Info)
                .build(),
        );
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("captured"));
    }

    #[test]
    fn test_logger_caps_buffer_length() {
        let entries: LogBuffer = Arc::new(Mutex::new(vec![]));
        let logger = CustomLogger {
            entries: Arc::clone(&entries),
        };
        for _ in 0..(MAX_ENTRIES + 10) {
            logger.log(
                &Record::builder()
                    .args(format_args!("entry"))
                    .level(Level::Debug)
                    .build(),
            );
        }
        assert_eq!(entries.lock().unwrap().len(), MAX_ENTRIES);
    }
}
