//! File-backed `log` sink.
//!
//! The terminal belongs to the UI, so records are appended to
//! `<data_dir>/contactform/contactform.log` instead of stderr.

mod error;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

pub use error::LoggerError;

/// Formats a record as one log line (without trailing newline).
pub fn format_record(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!(
        "{timestamp} {:<5} {} {}",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Appends formatted records to a file.
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Opens (or creates) `path` for appending, creating parent directories.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self, LoggerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned lock or failed write only loses the line.
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_record(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Returns the default log file path.
pub fn default_path() -> Result<PathBuf, LoggerError> {
    let dir = dirs::data_dir().ok_or(LoggerError::NoDataDir)?;
    Ok(dir.join("contactform").join("contactform.log"))
}

/// Installs a [`FileLogger`] at `path` as the global logger.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
