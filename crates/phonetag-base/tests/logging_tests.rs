use log::Log;
use phonetag_base::logging::{FileLogger, StdoutLogger, format_record, format_today};
use std::fs;

fn record_args<'a>(args: std::fmt::Arguments<'a>) -> log::Record<'a> {
    log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("test")
        .file(Some("decoder.rs"))
        .line(Some(42))
        .args(args)
        .build()
}

#[test]
fn test_stdout_logger_accepts_records() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    logger.log(&record_args(format_args!("mask decoded")));
    logger.flush();
}

#[test]
fn test_format_record_layout() {
    let line = format_record(&record_args(format_args!("quadrant joined")));
    assert!(line.contains("[WARN]"));
    assert!(line.contains("[thread:"));
    assert!(line.contains("decoder.rs:42 - quadrant joined"));
}

#[test]
fn test_file_logger_creates_directory() {
    let dir = std::env::temp_dir().join(format!("phonetag-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let _logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    assert!(dir.is_dir());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_appends_lines() {
    let dir =
        std::env::temp_dir().join(format!("phonetag-log-test-{}-append", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    logger.log(&record_args(format_args!("first")));
    logger.log(&record_args(format_args!("second")));
    logger.flush();

    let path = dir.join(format!("{}.log", format_today()));
    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first"));
    assert!(lines[1].ends_with("second"));

    fs::remove_dir_all(&dir).ok();
}
