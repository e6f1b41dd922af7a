use tierlog::Level;
use tierlog::sink::{LevelFilter, Lifecycle, NullSink, Sink};

#[test]
fn accepts_everything_and_reports_fatal() {
    let sink = NullSink::new();
    sink.init(Some("/definitely/not/a/dir/x.log"));
    for level in Level::all() {
        sink.emit(level, "ignored");
    }
    sink.set_min_level(Level::Debug);
    assert_eq!(LevelFilter::min_level(&sink), Level::Fatal);
    sink.close();
    sink.close();
}

#[test]
fn has_no_color_capability() {
    assert!(NullSink.as_color().is_none());
}
