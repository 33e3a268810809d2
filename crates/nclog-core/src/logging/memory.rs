//! In-memory recording sink

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::domain::Domain;
use super::level::LogLevel;
use super::traits::LogSink;

/// One forwarded message, as seen by a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub domain: Domain,
    pub component: String,
    pub message: String,
    pub level: LogLevel,
}

impl LogRecord {
    pub fn new(domain: Domain, component: impl Into<String>, message: impl Into<String>, level: LogLevel) -> Self {
        Self {
            domain,
            component: component.into(),
            message: message.into(),
            level,
        }
    }
}

/// Sink that keeps every message in memory
///
/// Intended for tests and for hosts that want to inspect recent output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn emit(&self, domain: Domain, component: &str, message: &str, level: LogLevel) {
        self.records
            .lock()
            .push(LogRecord::new(domain, component, message, level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.emit(Domain::APP, "Files", "listed 3 entries", LogLevel::Debug);
        sink.emit(Domain::new(7), "Auth", "", LogLevel::Error);

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.records(),
            vec![
                LogRecord::new(Domain::APP, "Files", "listed 3 entries", LogLevel::Debug),
                LogRecord::new(Domain::new(7), "Auth", "", LogLevel::Error),
            ]
        );
    }

    #[test]
    fn test_take_and_clear() {
        let sink = MemorySink::new();
        sink.emit(Domain::APP, "A", "one", LogLevel::Info);

        let taken = sink.take();
        assert_eq!(taken.len(), 1);
        assert!(sink.is_empty());

        sink.emit(Domain::APP, "A", "two", LogLevel::Info);
        sink.clear();
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_concurrent_emits() {
        use std::sync::Arc;

        let sink = Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        sink.emit(Domain::APP, "Worker", &format!("{}-{}", t, i), LogLevel::Info);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.len(), 100);
    }

    #[test]
    fn test_record_serializes() {
        let record = LogRecord::new(Domain::APP, "Sync", "ok", LogLevel::Warn);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["domain"], 1);
        assert_eq!(json["level"], "warn");
    }
}
