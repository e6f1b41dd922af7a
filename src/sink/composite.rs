//! Console plus file behind a single sink.

use super::{AtomicLevel, ColorControl, ConsoleSink, FileSink, LevelFilter, Lifecycle, Sink};
use crate::level::Level;
use std::io::{Stdout, Write};

/// Owns one [`ConsoleSink`] and one [`FileSink`] and fans every record out to
/// both, console first.
///
/// Routing of the optional capabilities:
/// - filter: the composite keeps its own threshold and `set_min_level` copies
///   it into both members,
/// - lifecycle: file member only (the console has nothing to open),
/// - color: console member only.
///
/// Members keep filtering on their own, so their thresholds may be pushed
/// apart with [`set_console_min_level`](Self::set_console_min_level) and
/// [`set_file_min_level`](Self::set_file_min_level), e.g. a terse console with
/// a verbose file. The next `set_min_level` brings them back in line.
pub struct CompositeSink<W: Write + Send = Stdout> {
    console: ConsoleSink<W>,
    file: FileSink,
    min_level: AtomicLevel,
}

impl Default for CompositeSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeSink<Stdout> {
    /// Timestamped stdout console and an unopened file; call `init` with a path to start persisting.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(ConsoleSink::timestamped(), FileSink::new())
    }
}

impl<W: Write + Send> CompositeSink<W> {
    /// Takes ownership of both members; they are not reachable from outside afterwards.
    #[must_use]
    pub fn from_parts(console: ConsoleSink<W>, file: FileSink) -> Self {
        Self {
            console,
            file,
            min_level: AtomicLevel::default(),
        }
    }

    pub fn set_console_min_level(&self, level: Level) {
        self.console.set_min_level(level);
    }

    pub fn set_file_min_level(&self, level: Level) {
        self.file.set_min_level(level);
    }

    #[must_use]
    pub fn console_min_level(&self) -> Level {
        LevelFilter::min_level(&self.console)
    }

    #[must_use]
    pub fn file_min_level(&self) -> Level {
        LevelFilter::min_level(&self.file)
    }

    #[must_use]
    pub fn file_is_open(&self) -> bool {
        self.file.is_open()
    }
}

impl<W: Write + Send> Sink for CompositeSink<W> {
    fn emit(&self, level: Level, message: &str) {
        if !self.min_level.allows(level) {
            return;
        }

        self.console.emit(level, message);
        self.file.emit(level, message);
    }

    fn as_filter(&self) -> Option<&dyn LevelFilter> {
        Some(self)
    }

    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        Some(self)
    }

    fn as_color(&self) -> Option<&dyn ColorControl> {
        Some(self)
    }
}

impl<W: Write + Send> LevelFilter for CompositeSink<W> {
    fn set_min_level(&self, level: Level) {
        self.min_level.store(level);
        self.console.set_min_level(level);
        self.file.set_min_level(level);
    }

    fn min_level(&self) -> Level {
        self.min_level.load()
    }
}

impl<W: Write + Send> Lifecycle for CompositeSink<W> {
    fn init(&self, parameter: Option<&str>) {
        if parameter.is_some() {
            self.file.init(parameter);
        }
    }

    fn close(&self) {
        self.file.close();
    }
}

impl<W: Write + Send> ColorControl for CompositeSink<W> {
    fn set_color_enabled(&self, enabled: bool) {
        self.console.set_color_enabled(enabled);
    }

    fn color_enabled(&self) -> bool {
        self.console.color_enabled()
    }
}
