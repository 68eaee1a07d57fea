//! Process-wide line logger.
//!
//! The terminal host draws on stderr, so log lines go to a file. Until
//! `init_logger` is called every `log!` is dropped.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    sink: Mutex<File>,
}

impl Logger {
    fn new(prefix: Option<String>, sink: File) -> Self {
        Self {
            prefix,
            sink: Mutex::new(sink),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let entry = format_entry(self.prefix.as_deref(), file, line, message);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        // A failed log write must never take the game down.
        let _ = writeln!(sink, "{}", entry);
    }
}

fn format_entry(prefix: Option<&str>, file: &str, line: u32, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

/// Start appending log lines to `path`. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    LOGGER.get_or_init(|| Logger::new(prefix, file));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
