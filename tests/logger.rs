use bucketlist::config::LoggingConfig;
use bucketlist::logger::{build_dispatch, get_log_file_path, setup_logging};
use log::{Level, Log, Record};
use std::fs;

#[test]
fn test_logging_disabled_installs_nothing() {
    let result = setup_logging(&LoggingConfig { enabled: false }).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_log_file_path() {
    let path = get_log_file_path().unwrap();
    assert!(path.ends_with("bucketlist/bucketlist.log"));
}

#[test]
fn test_dispatch_writes_crate_records_to_file() {
    let temp_dir = std::env::temp_dir().join("bucketlist_test_logs");
    let _ = fs::remove_dir_all(&temp_dir);
    let log_path = temp_dir.join("nested").join("test.log");

    let (_level, logger) = build_dispatch(&log_path).unwrap().into_log();

    logger.log(
        &Record::builder()
            .args(format_args!("Selected bucket 'academic'"))
            .level(Level::Debug)
            .target("bucketlist::ui::list_editor")
            .build(),
    );
    logger.log(
        &Record::builder()
            .args(format_args!("noisy dependency"))
            .level(Level::Debug)
            .target("mio::poll")
            .build(),
    );
    logger.flush();

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("DEBUG bucketlist::ui::list_editor: Selected bucket 'academic'"));
    assert!(!content.contains("noisy dependency"));

    let _ = fs::remove_dir_all(&temp_dir);
}
