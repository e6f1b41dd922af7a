#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tierlog::Level;
use tierlog::sink::{ColorControl, LevelFilter, Lifecycle, Sink};

/// Cloneable in-memory writer: hand one clone to a sink, read through the other.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 7)
        .unwrap()
}

/// Records every call it receives, in order, into a shared journal.
#[derive(Clone)]
pub struct RecordingSink {
    pub name: &'static str,
    pub journal: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new(name: &'static str, journal: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            journal: Arc::clone(journal),
        }
    }

    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

impl Sink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        self.record(format!("{}:emit:{level}:{message}", self.name));
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

impl LevelFilter for RecordingSink {
    fn set_min_level(&self, level: Level) {
        self.record(format!("{}:set_min_level:{level}", self.name));
    }

    fn min_level(&self) -> Level {
        Level::Debug
    }
}

impl Lifecycle for RecordingSink {
    fn init(&self, parameter: Option<&str>) {
        self.record(format!("{}:init:{}", self.name, parameter.unwrap_or("-")));
    }

    fn close(&self) {
        self.record(format!("{}:close", self.name));
    }
}

impl ColorControl for RecordingSink {
    fn set_color_enabled(&self, enabled: bool) {
        self.record(format!("{}:color:{enabled}", self.name));
    }

    fn color_enabled(&self) -> bool {
        true
    }
}

/// Emit-only sink with no optional capabilities.
#[derive(Clone)]
pub struct BareSink(pub Arc<Mutex<Vec<String>>>);

impl Sink for BareSink {
    fn emit(&self, level: Level, message: &str) {
        self.0.lock().unwrap().push(format!("{level}:{message}"));
    }
}
