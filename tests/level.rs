//! Tests for log level functionality.

use tierlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn level_numeric_values() {
    let values: Vec<u8> = Level::all().iter().map(|&l| l as u8).collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
}

#[test]
fn level_labels() {
    assert_eq!(Level::Debug.label(), "[DEBUG]");
    assert_eq!(Level::Info.label(), "[INFO]");
    assert_eq!(Level::Warning.label(), "[WARN]");
    assert_eq!(Level::Error.label(), "[ERROR]");
    assert_eq!(Level::Fatal.label(), "[FATAL]");
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Fatal.to_string(), "fatal");
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!(" Info ".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("critical".parse::<Level>().unwrap(), Level::Fatal);
}

#[test]
fn level_from_str_invalid() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'trace'");
}

#[test]
fn level_try_from_u8() {
    assert_eq!(Level::try_from(2), Ok(Level::Warning));
    assert_eq!(Level::try_from(5), Err(5));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Debug);
}
