//! Sinks receive `(level, message)` pairs and render or persist them.
//!
//! Every sink implements [`Sink::emit`]. Filtering, lifecycle and color are
//! optional capabilities: a sink hands out a reference to the matching trait
//! object through `as_filter` / `as_lifecycle` / `as_color`, or `None` when it
//! does not support it. Callers treat `None` as "nothing to do".

mod composite;
mod console;
mod file;
mod null;

pub use composite::CompositeSink;
pub use console::{ConsoleLayout, ConsoleSink};
pub use file::{FileSink, LINE_ENDING};
pub use null::NullSink;

use crate::level::Level;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// `Send + Sync` so one sink can be shared by every thread in the process;
/// implementations own whatever locking they need.
pub trait Sink: Send + Sync {
    /// Writes one record. Must drop records below the sink's own minimum level
    /// and must never panic or report failure.
    fn emit(&self, level: Level, message: &str);

    fn as_filter(&self) -> Option<&dyn LevelFilter> {
        None
    }

    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        None
    }

    fn as_color(&self) -> Option<&dyn ColorControl> {
        None
    }
}

/// Minimum-severity threshold.
pub trait LevelFilter: Send + Sync {
    fn set_min_level(&self, level: Level);
    fn min_level(&self) -> Level;
}

/// Acquire and release a destination resource.
pub trait Lifecycle: Send + Sync {
    /// `None` leaves the sink as it is.
    fn init(&self, parameter: Option<&str>);

    /// Idempotent: closing an uninitialized or already closed sink is a no-op.
    fn close(&self);
}

/// Presentation toggle; never changes the text that is written.
pub trait ColorControl: Send + Sync {
    fn set_color_enabled(&self, enabled: bool);
    fn color_enabled(&self) -> bool;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }

    fn as_filter(&self) -> Option<&dyn LevelFilter> {
        (**self).as_filter()
    }

    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        (**self).as_lifecycle()
    }

    fn as_color(&self) -> Option<&dyn ColorControl> {
        (**self).as_color()
    }
}

/// Lock-free threshold shared by the sinks that filter.
#[derive(Debug)]
pub(crate) struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub(crate) const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    pub(crate) fn load(&self) -> Level {
        Level::from_u8(self.0.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub(crate) fn store(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    pub(crate) fn allows(&self, level: Level) -> bool {
        level >= self.load()
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

#[derive(Debug)]
pub(crate) struct AtomicFlag(AtomicBool);

impl AtomicFlag {
    pub(crate) const fn new(value: bool) -> Self {
        Self(AtomicBool::new(value))
    }

    pub(crate) fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn set(&self, value: bool) {
        self.0.store(value, Ordering::Relaxed);
    }
}
