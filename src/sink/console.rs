//! Console output: the default destination during development.

use super::{AtomicFlag, AtomicLevel, ColorControl, LevelFilter, Sink};
use crate::clock::{Clock, LocalClock};
use crate::fmt::Color;
use crate::level::Level;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Line shape written by a [`ConsoleSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleLayout {
    /// `LABEL message`, the whole line in the level color.
    #[default]
    Plain,
    /// `[HH:MM:SS] LABEL message`, with time, label and message colored separately.
    Timestamped,
}

/// Writes one line per record to a writer (standard output unless told otherwise).
///
/// Generic over the writer so tests and embedders can capture output. The
/// writer sits behind the sink's own mutex, which makes every `emit` a single
/// uninterrupted line even when many threads log at once.
pub struct ConsoleSink<W: Write + Send = Stdout> {
    writer: Mutex<W>,
    layout: ConsoleLayout,
    min_level: AtomicLevel,
    colors: AtomicFlag,
    clock: Box<dyn Clock>,
}

impl Default for ConsoleSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink<Stdout> {
    /// Plain layout on stdout, colors on, threshold `Debug`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Timestamped layout on stdout.
    #[must_use]
    pub fn timestamped() -> Self {
        Self::with_writer(io::stdout()).layout(ConsoleLayout::Timestamped)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            layout: ConsoleLayout::default(),
            min_level: AtomicLevel::default(),
            colors: AtomicFlag::new(true),
            clock: Box::new(LocalClock),
        }
    }

    #[must_use]
    pub fn layout(mut self, layout: ConsoleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Piped output and CI logs don't render ANSI escape codes.
    #[must_use]
    pub fn colors(self, enabled: bool) -> Self {
        self.colors.set(enabled);
        self
    }

    #[must_use]
    pub fn with_min_level(self, level: Level) -> Self {
        self.min_level.store(level);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The exact bytes `emit` writes for this record, line terminator included.
    #[must_use]
    pub fn render(&self, level: Level, message: &str) -> String {
        let label = level.label();
        let colored = self.colors.get();
        let reset = Color::RESET;

        match (self.layout, colored) {
            (ConsoleLayout::Plain, false) => format!("{label} {message}\n"),
            (ConsoleLayout::Plain, true) => {
                let color = Color::for_level(level).fg_ansi();
                format!("{color}{label} {message}{reset}\n")
            }
            (ConsoleLayout::Timestamped, false) => {
                let time = self.clock.now().format("%H:%M:%S");
                format!("[{time}] {label} {message}\n")
            }
            (ConsoleLayout::Timestamped, true) => {
                let time = self.clock.now().format("%H:%M:%S");
                let gray = Color::Gray.fg_ansi();
                let color = Color::for_level(level).fg_ansi();
                let white = Color::White.fg_ansi();
                format!(
                    "{gray}[{time}] {reset}{color}{label} {reset}{white}{message}{reset}\n"
                )
            }
        }
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn emit(&self, level: Level, message: &str) {
        if !self.min_level.allows(level) {
            return;
        }

        let line = self.render(level, message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed pipe or full disk must not take the caller down.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn as_filter(&self) -> Option<&dyn LevelFilter> {
        Some(self)
    }

    fn as_color(&self) -> Option<&dyn ColorControl> {
        Some(self)
    }
}

impl<W: Write + Send> LevelFilter for ConsoleSink<W> {
    fn set_min_level(&self, level: Level) {
        self.min_level.store(level);
    }

    fn min_level(&self) -> Level {
        self.min_level.load()
    }
}

impl<W: Write + Send> ColorControl for ConsoleSink<W> {
    fn set_color_enabled(&self, enabled: bool) {
        self.colors.set(enabled);
    }

    fn color_enabled(&self) -> bool {
        self.colors.get()
    }
}
