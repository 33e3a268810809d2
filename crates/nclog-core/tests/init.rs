//! Installing sinks from configuration

use std::fs;

use nclog_core::config::{ConfigFile, LoggingConfig};
use nclog_core::{current_sink, init, logger, reset_sink, ConfigError, LogSink};
use parking_lot::Mutex;
use tempfile::TempDir;

static SLOT_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_init_file_sink_from_yaml() {
    let _guard = SLOT_LOCK.lock();
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("app.log");
    let config_path = dir.path().join("logging.yaml");
    fs::write(
        &config_path,
        format!("sink: file\nfile_path: {}\n", log_path.display()),
    )
    .unwrap();

    let config = ConfigFile::new(&config_path).load().unwrap();
    init(&config).unwrap();
    assert_eq!(current_sink().name(), "file");

    logger::warn("Upload", "quota nearly full");
    reset_sink();

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO ] [0x0001/nclog] logging to file sink"));
    assert!(lines[1].ends_with("[WARN ] [0x0001/Upload] quota nearly full"));
}

#[test]
fn test_init_unknown_sink_keeps_current() {
    let _guard = SLOT_LOCK.lock();
    init(&LoggingConfig::with_sink("noop")).unwrap();

    let err = init(&LoggingConfig::with_sink("carrier-pigeon")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSink(_)));
    assert_eq!(current_sink().name(), "noop");

    reset_sink();
}

#[test]
fn test_log_file_follows_active_sink() {
    let _guard = SLOT_LOCK.lock();
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("active.log");

    init(&LoggingConfig {
        sink: "file".to_string(),
        file_path: Some(log_path.clone()),
        ..Default::default()
    })
    .unwrap();
    let active = current_sink();
    assert_eq!(active.log_file().map(|f| f.path().to_path_buf()), Some(log_path.clone()));

    logger::error("Upload", "stale");
    active.log_file().unwrap().clear();
    assert!(fs::read_to_string(&log_path).unwrap().is_empty());

    init(&LoggingConfig::with_sink("console")).unwrap();
    assert!(current_sink().log_file().is_none());

    reset_sink();
    assert!(current_sink().log_file().is_none());
}
