//! The leveled macros against the global registry. Tests share one process-wide
//! sink, so each takes the lock before installing its own.
//!
//! The compiled-out branch runs with `cargo test --features strip-macros`
//! (or `cargo test --release`).

mod common;

use common::SharedBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tierlog::macros::MACROS_ENABLED;
use tierlog::sink::ConsoleSink;
use tierlog::{
    Level, log_at, log_debug, log_error, log_fatal, log_info, log_warn, log_warning, registry,
};

static GLOBAL_SINK: Mutex<()> = Mutex::new(());

fn capture() -> SharedBuf {
    let buf = SharedBuf::default();
    registry::install_sink(ConsoleSink::with_writer(buf.clone()).colors(false));
    buf
}

#[test]
fn leveled_macros_follow_build_configuration() {
    let _guard = GLOBAL_SINK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let buf = capture();
    let evaluations = AtomicUsize::new(0);
    let count = || evaluations.fetch_add(1, Ordering::SeqCst);

    log_debug!("d %d", count());
    log_info!("i %d", count());
    log_warning!("w %d", count());
    log_warn!("w2 %d", count());
    log_error!("e %d", count());
    log_fatal!("f %d", count());

    if MACROS_ENABLED {
        assert_eq!(evaluations.load(Ordering::SeqCst), 6);
        assert_eq!(
            buf.lines(),
            vec![
                "[DEBUG] d 0",
                "[INFO] i 1",
                "[WARN] w 2",
                "[WARN] w2 3",
                "[ERROR] e 4",
                "[FATAL] f 5",
            ]
        );
    } else {
        // Compiled out: arguments never evaluated, nothing emitted.
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
        assert!(buf.contents().is_empty());
    }
    registry::shutdown();
}

#[test]
fn log_at_is_available_in_every_build() {
    let _guard = GLOBAL_SINK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let buf = capture();

    log_at!(Level::Error, "code %d in %s", 42, "parser");
    log_at!(Level::Info, "no args");

    assert_eq!(buf.lines(), vec!["[ERROR] code 42 in parser", "[INFO] no args"]);
    registry::shutdown();
}

#[test]
fn macros_respect_the_global_threshold() {
    let _guard = GLOBAL_SINK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let buf = capture();
    registry::set_min_level(Level::Error);

    log_at!(Level::Warning, "dropped");
    log_at!(Level::Fatal, "kept");

    assert_eq!(registry::min_level(), Some(Level::Error));
    assert_eq!(buf.lines(), vec!["[FATAL] kept"]);
    registry::shutdown();
}
