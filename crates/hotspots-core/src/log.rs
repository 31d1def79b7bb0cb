//! File-based logger with size-based rotation.
//!
//! Lines go to `~/.config/hypr-hotspots/logs/hypr-hotspots.log`. Once the
//! file passes the configured size it is renamed to `hypr-hotspots.log.1`
//! and a fresh file is started.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "hypr-hotspots.log";
const BACKUP_FILE_NAME: &str = "hypr-hotspots.log.1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    dir: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

/// Returns the directory log files are written to.
pub fn log_dir() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("logs"))
}

/// Initialises the global logger. Call once at daemon startup.
///
/// Does nothing if `config.enabled` is `false`. Later calls are ignored,
/// so a reload cannot switch logging on or off.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = log_dir() else {
        return;
    };
    let _ = fs::create_dir_all(&dir);
    let Ok(file) = open_append(&dir.join(LOG_FILE_NAME)) else {
        return;
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let logger = Logger {
        file,
        dir,
        min_level: Level::parse(&config.level),
        max_bytes: config.max_file_mb.saturating_mul(1024 * 1024),
        written,
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&timestamp(), level, args);

    let _ = logger.file.write_all(line.as_bytes());
    logger.written += line.len() as u64;

    if logger.max_bytes > 0 && logger.written >= logger.max_bytes {
        logger.rotate();
    }
}

impl Logger {
    fn rotate(&mut self) {
        let current = self.dir.join(LOG_FILE_NAME);
        let _ = fs::rename(&current, self.dir.join(BACKUP_FILE_NAME));
        if let Ok(f) = open_append(&current) {
            self.file = f;
        }
        self.written = 0;
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn format_line(time: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} [{lvl}] {args}\n", lvl = level.as_str())
}

fn timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}.{:03}", dur.subsec_millis())
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn line_includes_time_and_level() {
        // Act
        let line = format_line("12:00:00.000", Level::Warn, format_args!("bar {} hidden", 1));

        // Assert
        assert_eq!(line, "12:00:00.000 [WARN] bar 1 hidden\n");
    }

    #[test]
    fn logging_without_init_is_a_no_op() {
        // Act / Assert: must not panic
        crate::log_info!("nothing to see");
    }
}
