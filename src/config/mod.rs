//! TOML configuration: which sink to install, at what level, writing where.
//!
//! Every field has a default, so a missing or empty file still produces a
//! working setup.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig};

use crate::internal;
use crate::level::Level;
use crate::sink::{
    ColorControl, CompositeSink, ConsoleSink, FileSink, LevelFilter, Lifecycle, NullSink, Sink,
};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level configuration file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

/// Sink selected by `[general] sink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    /// Plain console.
    Console,
    /// Console with `[HH:MM:SS]` prefix.
    #[default]
    Timestamped,
    File,
    /// Timestamped console plus file.
    Composite,
    Null,
}

impl SinkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Timestamped => "timestamped",
            Self::File => "file",
            Self::Composite => "composite",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "plain" => Ok(Self::Console),
            "timestamped" | "enhanced" => Ok(Self::Timestamped),
            "file" => Ok(Self::File),
            "composite" | "both" => Ok(Self::Composite),
            "null" | "none" | "off" => Ok(Self::Null),
            _ => Err(s.to_string()),
        }
    }
}

impl Config {
    /// Loads the user's config from the default location, or defaults if there is none.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load_from(&path)?;
        internal::info(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns an error on TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/tierlog/tierlog.toml`, e.g. `~/.config/tierlog/tierlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tierlog").join("tierlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Strict level parse, for callers that want to report a typo.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] when `[general] level` is not a level name.
    pub fn level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse::<Level>()?)
    }

    /// Lenient level parse: unknown names fall back to `Debug`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.level().unwrap_or_else(|e| {
            internal::warn(&format!("{e}, falling back to debug"));
            Level::Debug
        })
    }

    /// Unknown names fall back to the timestamped console.
    #[must_use]
    pub fn parse_sink_kind(&self) -> SinkKind {
        self.general.sink.parse().unwrap_or_else(|unknown| {
            internal::warn(&format!(
                "unknown sink '{unknown}', falling back to {}",
                SinkKind::default()
            ));
            SinkKind::default()
        })
    }

    /// `None` for "off" (and for anything that isn't a level).
    #[must_use]
    pub fn parse_diagnostics_level(&self) -> Option<Level> {
        match self.general.diagnostics.trim().to_lowercase().as_str() {
            "" | "off" | "none" => None,
            other => other.parse().ok(),
        }
    }

    /// `[file] path` with `~` expanded.
    #[must_use]
    pub fn file_path(&self) -> Option<String> {
        self.file
            .path
            .as_deref()
            .map(|path| shellexpand::tilde(path).into_owned())
    }

    /// Constructs the configured sink with level and colors applied and, for
    /// file-backed kinds, the file opened.
    #[must_use]
    pub fn build_sink(&self) -> Box<dyn Sink> {
        let level = self.parse_level();
        let colors = self.console.colors;
        let path = self.file_path();
        let kind = self.parse_sink_kind();
        internal::debug(&format!("Building {kind} sink at {level}"));

        match kind {
            SinkKind::Console => Box::new(
                ConsoleSink::new()
                    .colors(colors)
                    .with_min_level(level),
            ),
            SinkKind::Timestamped => Box::new(
                ConsoleSink::timestamped()
                    .colors(colors)
                    .with_min_level(level),
            ),
            SinkKind::File => {
                let sink = FileSink::new().with_min_level(level);
                sink.init(path.as_deref());
                Box::new(sink)
            }
            SinkKind::Composite => {
                let sink = CompositeSink::new();
                sink.set_min_level(level);
                sink.set_color_enabled(colors);
                sink.init(path.as_deref());
                Box::new(sink)
            }
            SinkKind::Null => Box::new(NullSink),
        }
    }
}
