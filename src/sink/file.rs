//! Append-only log file opened by `init` and released by `close`.

use super::{AtomicLevel, LevelFilter, Lifecycle, Sink};
use crate::clock::{Clock, LocalClock};
use crate::internal;
use crate::level::Level;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Terminator appended to every file line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Terminator appended to every file line.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

struct OpenFile {
    file: File,
    path: PathBuf,
}

/// Persists `[YYYY-MM-DD HH:MM:SS] LABEL message` lines.
///
/// Until `init` succeeds (and again after `close`) every record is dropped.
/// Each write is flushed and synced before `emit` returns, so a concurrent
/// reader (`tail -f`) sees the line immediately. No color capability: files
/// never receive escape codes.
pub struct FileSink {
    state: Mutex<Option<OpenFile>>,
    min_level: AtomicLevel,
    clock: Box<dyn Clock>,
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSink {
    /// Unopened sink with threshold `Debug`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
            min_level: AtomicLevel::default(),
            clock: Box::new(LocalClock),
        }
    }

    /// Convenience for `new()` followed by `init(Some(path))`.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let sink = Self::new();
        sink.open_path(path.as_ref());
        sink
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

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Path of the currently open file.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().as_ref().map(|open| open.path.clone())
    }

    /// The exact bytes `emit` appends for this record.
    #[must_use]
    pub fn render(&self, level: Level, message: &str) -> String {
        let timestamp = self.clock.now().format("%Y-%m-%d %H:%M:%S");
        format!("[{timestamp}] {} {message}{LINE_ENDING}", level.label())
    }

    fn lock(&self) -> MutexGuard<'_, Option<OpenFile>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A failed open leaves the sink closed; the previous file, if any, is released either way.
    fn open_path(&self, path: &Path) {
        let mut state = self.lock();
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                internal::debug(&format!("File sink opened: {}", path.display()));
                *state = Some(OpenFile {
                    file,
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                internal::warn(&format!(
                    "File sink could not open {}: {e}",
                    path.display()
                ));
                *state = None;
            }
        }
    }
}

impl Sink for FileSink {
    fn emit(&self, level: Level, message: &str) {
        if !self.min_level.allows(level) {
            return;
        }

        let line = self.render(level, message);
        let mut state = self.lock();
        let Some(open) = state.as_mut() else {
            return;
        };

        if let Err(e) = open
            .file
            .write_all(line.as_bytes())
            .and_then(|()| open.file.flush())
            .and_then(|()| open.file.sync_data())
        {
            internal::warn(&format!(
                "File sink write to {} failed: {e}",
                open.path.display()
            ));
        }
    }

    fn as_filter(&self) -> Option<&dyn LevelFilter> {
        Some(self)
    }

    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        Some(self)
    }
}

impl LevelFilter for FileSink {
    fn set_min_level(&self, level: Level) {
        self.min_level.store(level);
    }

    fn min_level(&self) -> Level {
        self.min_level.load()
    }
}

impl Lifecycle for FileSink {
    fn init(&self, parameter: Option<&str>) {
        if let Some(path) = parameter {
            self.open_path(Path::new(path));
        }
    }

    fn close(&self) {
        if let Some(open) = self.lock().take() {
            internal::debug(&format!("File sink closed: {}", open.path.display()));
        }
    }
}
