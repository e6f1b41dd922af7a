mod common;

use common::{SharedBuf, fixed_time};
use tierlog::clock::FixedClock;
use tierlog::sink::{ColorControl, ConsoleLayout, ConsoleSink, LevelFilter, Sink};
use tierlog::Level;

fn plain(buf: &SharedBuf) -> ConsoleSink<SharedBuf> {
    ConsoleSink::with_writer(buf.clone()).colors(false)
}

#[test]
fn plain_line_without_color() {
    let buf = SharedBuf::default();
    plain(&buf).emit(Level::Info, "server started");
    assert_eq!(buf.contents(), "[INFO] server started\n");
}

#[test]
fn plain_line_with_color_wraps_whole_line() {
    let buf = SharedBuf::default();
    let sink = ConsoleSink::with_writer(buf.clone());
    sink.emit(Level::Error, "boom");
    assert_eq!(buf.contents(), "\x1b[91m[ERROR] boom\x1b[0m\n");
}

#[test]
fn timestamped_line_without_color() {
    let buf = SharedBuf::default();
    let sink = plain(&buf)
        .layout(ConsoleLayout::Timestamped)
        .clock(FixedClock(fixed_time()));
    sink.emit(Level::Warning, "disk low");
    assert_eq!(buf.contents(), "[14:05:07] [WARN] disk low\n");
}

#[test]
fn timestamped_line_with_color_segments() {
    let buf = SharedBuf::default();
    let sink = ConsoleSink::with_writer(buf.clone())
        .layout(ConsoleLayout::Timestamped)
        .clock(FixedClock(fixed_time()));
    sink.emit(Level::Warning, "disk low");
    assert_eq!(
        buf.contents(),
        "\x1b[90m[14:05:07] \x1b[0m\x1b[93m[WARN] \x1b[0m\x1b[97mdisk low\x1b[0m\n"
    );
}

#[test]
fn records_below_threshold_are_dropped() {
    let buf = SharedBuf::default();
    let sink = plain(&buf);
    sink.set_min_level(Level::Warning);

    sink.emit(Level::Debug, "a");
    sink.emit(Level::Info, "b");
    sink.emit(Level::Warning, "c");
    sink.emit(Level::Fatal, "d");

    assert_eq!(buf.lines(), vec!["[WARN] c", "[FATAL] d"]);
    assert_eq!(LevelFilter::min_level(&sink), Level::Warning);
}

#[test]
fn color_toggle_changes_presentation_only() {
    let buf = SharedBuf::default();
    let sink = ConsoleSink::with_writer(buf.clone());
    assert!(sink.color_enabled());

    sink.set_color_enabled(false);
    sink.emit(Level::Info, "same text");
    sink.set_color_enabled(true);
    sink.emit(Level::Info, "same text");

    let out = buf.contents();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("[INFO] same text"));
    assert_eq!(lines.next(), Some("\x1b[96m[INFO] same text\x1b[0m"));
}

#[test]
fn capabilities_exposed() {
    let sink = ConsoleSink::with_writer(SharedBuf::default());
    assert!(sink.as_filter().is_some());
    assert!(sink.as_color().is_some());
    assert!(sink.as_lifecycle().is_none());
}

#[test]
fn empty_message_still_writes_a_line() {
    let buf = SharedBuf::default();
    plain(&buf).emit(Level::Debug, "");
    assert_eq!(buf.contents(), "[DEBUG] \n");
}
