//! Discards everything. The release-build default.

use super::{LevelFilter, Lifecycle, Sink};
use crate::level::Level;

/// Accepts every call and does nothing. Reports `Fatal` as its threshold so
/// anyone asking sees the most restrictive answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for NullSink {
    fn emit(&self, _level: Level, _message: &str) {}

    fn as_filter(&self) -> Option<&dyn LevelFilter> {
        Some(self)
    }

    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        Some(self)
    }
}

impl LevelFilter for NullSink {
    fn set_min_level(&self, _level: Level) {}

    fn min_level(&self) -> Level {
        Level::Fatal
    }
}

impl Lifecycle for NullSink {
    fn init(&self, _parameter: Option<&str>) {}

    fn close(&self) {}
}
