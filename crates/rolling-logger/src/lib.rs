//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer and
//! echoes each line to the browser console (wasm32) or stderr (native).
//! The buffer backs the in-app log viewer.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// One captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<5} {} - {}", self.timestamp, self.level, self.target, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Application name prefixed to console output
    pub app_name: String,
    pub level: LevelFilter,
    /// Lines kept in the buffer; older lines are dropped first
    pub capacity: usize,
    /// Echo lines to the console / stderr
    pub echo: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { app_name: "app".to_string(), level: LevelFilter::Info, capacity: 500, echo: true }
    }
}

/// Circular buffer of formatted lines
pub struct RollingLogger {
    config: LoggerConfig,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self { config: LoggerConfig { capacity, ..config }, lines: Mutex::new(VecDeque::with_capacity(capacity)) }
    }

    pub fn push(&self, line: LogLine) {
        if self.config.echo {
            echo(&self.config.app_name, &line);
        }
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.config.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().map(|lines| lines.iter().cloned().collect()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn echo(app_name: &str, line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&format!("{} {}", app_name, line));
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        Level::Info => web_sys::console::info_1(&text),
        Level::Debug | Level::Trace => web_sys::console::log_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn echo(app_name: &str, line: &LogLine) {
    eprintln!("{} {}", app_name, line);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logger(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let level = config.level;
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines captured by the global logger, oldest first
pub fn recent() -> Vec<LogLine> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

pub fn clear() {
    if let Some(logger) = LOGGER.get() {
        logger.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(capacity: usize) -> RollingLogger {
        RollingLogger::new(LoggerConfig { capacity, echo: false, level: LevelFilter::Debug, ..Default::default() })
    }

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: "00:00:00.000".into(),
            level: Level::Info,
            target: "test".into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = quiet(2);
        logger.push(line("one"));
        logger.push(line("two"));
        logger.push(line("three"));
        let messages: Vec<String> = logger.lines().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = quiet(10);
        logger.log(&Record::builder().level(Level::Trace).args(format_args!("hidden")).build());
        logger.log(&Record::builder().level(Level::Warn).target("api").args(format_args!("shown")).build());
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].target, "api");
        assert_eq!(lines[0].level, Level::Warn);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = quiet(0);
        logger.push(line("a"));
        logger.push(line("b"));
        assert_eq!(logger.lines().len(), 1);
        logger.clear();
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(line("hello").to_string(), "[00:00:00.000] INFO  test - hello");
    }
}
