//! tierlog's own diagnostics: failures the logging path absorbs (a log file
//! that cannot be opened, a config file that falls back to defaults) are
//! reported here instead of being returned to the caller.
//!
//! Goes to stderr through a dedicated [`ConsoleSink`], never through the
//! registry, so a broken active sink cannot hide its own failure.
//! Uses `OnceLock` so the channel is initialized exactly once, even if several
//! entry points (CLI, config loading, tests) race to call `init`.

use crate::config::Config;
use crate::level::Level;
use crate::sink::{ConsoleSink, Sink};
use std::io::{self, Stderr};
use std::sync::OnceLock;

static INTERNAL_SINK: OnceLock<ConsoleSink<Stderr>> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops.
pub fn init(level: Level, colors: bool) {
    let was_init = INTERNAL_SINK.get().is_some();
    INTERNAL_SINK.get_or_init(|| {
        ConsoleSink::with_writer(io::stderr())
            .colors(colors)
            .with_min_level(level)
    });
    if !was_init {
        debug(&format!("Internal diagnostics enabled at {level}"));
    }
}

/// `[general] diagnostics = "off"` (the default) leaves the channel silent.
pub fn init_with_config(config: &Config) {
    if let Some(level) = config.parse_diagnostics_level() {
        init(level, config.console.colors);
    }
}

#[must_use]
pub fn is_enabled() -> bool {
    INTERNAL_SINK.get().is_some()
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, msg: &str) {
    if let Some(sink) = INTERNAL_SINK.get() {
        sink.emit(level, &format!("tierlog: {msg}"));
    }
}

pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

pub fn info(msg: &str) {
    log(Level::Info, msg);
}

/// Absorbed failures: the caller keeps running, but someone debugging should know.
pub fn warn(msg: &str) {
    log(Level::Warning, msg);
}

pub fn error(msg: &str) {
    log(Level::Error, msg);
}
