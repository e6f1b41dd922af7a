mod common;

use common::fixed_time;
use regex::Regex;
use std::fs;
use tempfile::TempDir;
use tierlog::Level;
use tierlog::clock::FixedClock;
use tierlog::sink::{FileSink, LINE_ENDING, LevelFilter, Lifecycle, Sink};

#[test]
fn writes_dated_line_without_color() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");

    let sink = FileSink::new();
    sink.init(Some(path.to_str().unwrap()));
    sink.emit(Level::Warning, "disk low");

    let content = fs::read_to_string(&path).unwrap();
    let line = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] \[WARN\] disk low\r?\n$").unwrap();
    assert!(line.is_match(&content), "unexpected line: {content:?}");
    assert!(!content.contains('\x1b'));
}

#[test]
fn fixed_clock_line_is_exact() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("exact.log");

    let sink = FileSink::open(&path).clock(FixedClock(fixed_time()));
    sink.emit(Level::Fatal, "gone");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("[2024-03-09 14:05:07] [FATAL] gone{LINE_ENDING}"));
}

#[test]
fn appends_to_existing_content() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("append.log");
    fs::write(&path, "existing\n").unwrap();

    let sink = FileSink::open(&path);
    sink.emit(Level::Info, "one");
    sink.close();

    let sink = FileSink::open(&path);
    sink.emit(Level::Info, "two");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "existing");
    assert!(lines[1].ends_with("[INFO] one"));
    assert!(lines[2].ends_with("[INFO] two"));
}

#[test]
fn emit_before_init_is_dropped() {
    let sink = FileSink::new();
    sink.emit(Level::Error, "nowhere to go");
    assert!(!sink.is_open());
}

#[test]
fn emit_after_close_is_dropped() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("closed.log");

    let sink = FileSink::open(&path);
    sink.emit(Level::Info, "kept");
    sink.close();
    sink.emit(Level::Info, "dropped");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("kept"));
    assert!(!content.contains("dropped"));
}

#[test]
fn close_is_idempotent() {
    let tmp_dir = TempDir::new().unwrap();
    let sink = FileSink::new();
    sink.close();

    sink.init(Some(tmp_dir.path().join("x.log").to_str().unwrap()));
    assert!(sink.is_open());
    sink.close();
    sink.close();
    assert!(!sink.is_open());
}

#[test]
fn reinit_switches_files() {
    let tmp_dir = TempDir::new().unwrap();
    let first = tmp_dir.path().join("first.log");
    let second = tmp_dir.path().join("second.log");

    let sink = FileSink::open(&first);
    sink.emit(Level::Info, "to first");
    sink.init(Some(second.to_str().unwrap()));
    sink.emit(Level::Info, "to second");

    assert_eq!(sink.path().as_deref(), Some(second.as_path()));
    assert!(!fs::read_to_string(&first).unwrap().contains("to second"));
    assert!(fs::read_to_string(&second).unwrap().contains("to second"));
}

#[test]
fn failed_reinit_leaves_sink_closed() {
    let tmp_dir = TempDir::new().unwrap();
    let good = tmp_dir.path().join("good.log");
    let bad = tmp_dir.path().join("missing").join("bad.log");

    let sink = FileSink::open(&good);
    sink.init(Some(bad.to_str().unwrap()));
    assert!(!sink.is_open());

    sink.emit(Level::Error, "lost");
    assert!(!fs::read_to_string(&good).unwrap().contains("lost"));
}

#[test]
fn threshold_filters_file_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("filtered.log");

    let sink = FileSink::open(&path).with_min_level(Level::Error);
    sink.emit(Level::Warning, "skip");
    sink.emit(Level::Error, "keep");
    assert_eq!(LevelFilter::min_level(&sink), Level::Error);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("keep"));
}

#[test]
fn file_sink_has_no_color_capability() {
    let sink = FileSink::new();
    assert!(sink.as_color().is_none());
    assert!(sink.as_filter().is_some());
    assert!(sink.as_lifecycle().is_some());
}
