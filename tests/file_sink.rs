use lingolog::file_sink::{self, FileSinkOptions};
use lingolog::{Error, Level, LoggerFactory, PlainFormatter, Registry};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn file_sink_end_to_end_single_line() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("bot.log");
    let registry = Registry::new();

    let handle = file_sink::open_in(&registry, &path, FileSinkOptions::default()).unwrap();
    LoggerFactory::new(Arc::clone(&registry))
        .get("publish")
        .info("Ad [42] published");
    handle.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[INFO]"));
    assert!(lines[0].ends_with("Ad [42] published"));
    assert!(lines[0].starts_with(|c: char| c.is_ascii_digit()));
    assert!(!lines[0].contains('\x1b'));
}

#[test]
fn file_sink_is_closed_only_after_close() {
    let tmp_dir = TempDir::new().unwrap();
    let registry = Registry::new();
    let handle = file_sink::open_in(
        &registry,
        tmp_dir.path().join("a.log"),
        FileSinkOptions::default(),
    )
    .unwrap();

    assert!(!handle.is_closed());
    assert_eq!(registry.len(), 1);

    handle.close().unwrap();
    assert!(handle.is_closed());
    assert!(registry.is_empty());
}

#[test]
fn file_sink_close_is_idempotent() {
    let tmp_dir = TempDir::new().unwrap();
    let registry = Registry::new();
    let handle = file_sink::open_in(
        &registry,
        tmp_dir.path().join("a.log"),
        FileSinkOptions::default(),
    )
    .unwrap();

    handle.close().unwrap();
    handle.close().unwrap();
    assert!(handle.is_closed());
}

#[test]
fn file_sink_records_after_close_are_not_written() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("a.log");
    let registry = Registry::new();
    let handle = file_sink::open_in(&registry, &path, FileSinkOptions::default()).unwrap();
    let log = LoggerFactory::new(Arc::clone(&registry)).get("app");

    log.info("before");
    handle.close().unwrap();
    log.info("after");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("before"));
    assert!(!content.contains("after"));
}

#[test]
fn file_sink_drop_closes_and_detaches() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("a.log");
    let registry = Registry::new();
    {
        let _handle = file_sink::open_in(&registry, &path, FileSinkOptions::default()).unwrap();
        LoggerFactory::new(Arc::clone(&registry)).get("app").warning("dropped");
    }

    assert!(registry.is_empty());
    assert!(fs::read_to_string(&path).unwrap().contains("[WARNING] dropped"));
}

#[test]
fn file_sink_appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("a.log");
    fs::write(&path, "existing\n").unwrap();

    let registry = Registry::new();
    let handle = file_sink::open_in(&registry, &path, FileSinkOptions::default()).unwrap();
    LoggerFactory::new(Arc::clone(&registry)).get("app").info("new");
    handle.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("existing\n"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn file_sink_open_fails_for_missing_directory() {
    let tmp_dir = TempDir::new().unwrap();
    let registry = Registry::new();
    let result = file_sink::open_in(
        &registry,
        tmp_dir.path().join("missing").join("a.log"),
        FileSinkOptions::default(),
    );

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(registry.is_empty());
}

#[test]
fn file_sink_rotation_keeps_ten_backups() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("rot.log");
    let registry = Registry::new();

    // 99 chars + newline = 100 bytes per line, 10 lines per file
    let options = FileSinkOptions::new()
        .max_bytes(1000)
        .formatter(PlainFormatter::new().template("{msg}"));
    let handle = file_sink::open_in(&registry, &path, options).unwrap();
    let log = LoggerFactory::new(Arc::clone(&registry)).get("app");

    for i in 0..120 {
        log.info(&format!("{i:0>99}"));
    }
    handle.close().unwrap();

    // rotations happen before lines 10, 20, ..., 110: eleven in total
    for n in 1..=10 {
        let backup = tmp_dir.path().join(format!("rot.log.{n}"));
        let content = fs::read_to_string(&backup).unwrap();
        assert_eq!(content.len(), 1000, "backup {n}");
    }
    assert!(!tmp_dir.path().join("rot.log.11").exists());

    let active = fs::read_to_string(&path).unwrap();
    assert_eq!(active.lines().count(), 10);
    assert!(active.starts_with(&format!("{:0>99}", 110)));

    // the file rotated away first (lines 0..10) was discarded
    let oldest = fs::read_to_string(tmp_dir.path().join("rot.log.10")).unwrap();
    assert!(oldest.starts_with(&format!("{:0>99}", 10)));
}

#[test]
fn file_sink_rotation_is_one_per_threshold_crossing() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("once.log");
    let registry = Registry::new();

    let options = FileSinkOptions::new()
        .max_bytes(1000)
        .formatter(PlainFormatter::new().template("{msg}"));
    let handle = file_sink::open_in(&registry, &path, options).unwrap();
    let log = LoggerFactory::new(Arc::clone(&registry)).get("app");

    for i in 0..15 {
        log.info(&format!("{i:0>99}"));
    }
    handle.close().unwrap();

    assert!(tmp_dir.path().join("once.log.1").exists());
    assert!(!tmp_dir.path().join("once.log.2").exists());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 5);
}

#[test]
fn file_sink_range_filters_levels() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("errors.log");
    let registry = Registry::new();

    let options = FileSinkOptions::new().range(lingolog::SeverityRange::at_least(Level::Error));
    let handle = file_sink::open_in(&registry, &path, options).unwrap();
    let log = LoggerFactory::new(Arc::clone(&registry)).get("app");
    log.info("routine");
    log.error("broken");
    handle.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("[ERROR] broken"));
}

#[test]
fn file_sink_without_backups_keeps_growing() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("grow.log");
    let registry = Registry::new();

    let options = FileSinkOptions::new()
        .max_bytes(1000)
        .backups(0)
        .formatter(PlainFormatter::new().template("{msg}"));
    let handle = file_sink::open_in(&registry, &path, options).unwrap();
    let log = LoggerFactory::new(Arc::clone(&registry)).get("app");

    for i in 0..25 {
        log.info(&format!("{i:0>99}"));
    }
    handle.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 25);
    assert!(content.starts_with(&format!("{:0>99}", 0)));
    assert!(!tmp_dir.path().join("grow.log.1").exists());
}
