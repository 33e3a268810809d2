//! File sink for troubleshooting
//!
//! Appends one line per message to a log file. Useful when the platform log
//! isn't reachable (host-side test runs, desktop builds of the bindings).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use parking_lot::Mutex;

use super::domain::Domain;
use super::level::LogLevel;
use super::traits::LogSink;

/// File name used under the temp dir when no path is given
pub const DEFAULT_LOG_FILE: &str = "nclog.log";

/// A sink that appends to a file
///
/// Open and write failures are dropped. If the file can't be opened, the sink
/// stays silent until `clear` manages to reopen it.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Create a sink appending to `path`, creating the file if needed
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = open_append(&path);
        Self {
            path,
            file: Mutex::new(file),
        }
    }

    /// Default log path (`nclog.log` in the temp dir)
    pub fn default_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(DEFAULT_LOG_FILE);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the log file and reopen it for appending
    pub fn clear(&self) {
        let mut guard = self.file.lock();
        // Release the old handle before truncating
        *guard = None;
        if let Ok(file) = File::create(&self.path) {
            drop(file);
        }
        *guard = open_append(&self.path);
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn emit(&self, domain: Domain, component: &str, message: &str, level: LogLevel) {
        let mut guard = self.file.lock();
        if let Some(ref mut file) = *guard {
            let _ = writeln!(
                file,
                "[{}] [{:5}] [{}/{}] {}",
                timestamp(),
                level,
                domain,
                component,
                message
            );
            let _ = file.flush();
        }
    }

    fn log_file(&self) -> Option<&FileSink> {
        Some(self)
    }
}

fn open_append(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// UTC wall-clock time of day as `HH:MM:SS.mmm`
fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            let millis = d.subsec_millis();
            let hours = (secs % 86400) / 3600;
            let mins = (secs % 3600) / 60;
            let secs = secs % 60;
            format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}
