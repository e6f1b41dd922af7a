//! `tierlog` - leveled logging with swappable console, file and composite sinks.
//!
//! - Five ordered levels, `Debug` through `Fatal`
//! - Sinks with optional capabilities (level filter, lifecycle, color)
//! - Console (plain or timestamped, ANSI colors), append-only file, null
//! - A composite sink that writes to console and file at once
//! - A process-wide registry holding one active sink, swappable at runtime
//! - printf-style `log_*!` macros that compile out in release builds
//!
//! # Example
//!
//! ```
//! use tierlog::sink::{CompositeSink, LevelFilter};
//! use tierlog::{Level, Registry, fmt::Arg};
//!
//! let sink = CompositeSink::new();
//! sink.set_min_level(Level::Info);
//!
//! let registry = Registry::new(sink);
//! registry.init(None); // no path: console only
//! registry.info("listening on port %d", &[Arg::from(8080)]);
//! registry.debug("filtered out", &[]);
//! registry.shutdown();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `tierlog` command-line binary
//! - `release-logging`: keep the `log_*!` macros in optimized builds
//! - `strip-macros`: compile the `log_*!` macros out even in debug builds

pub mod clock;
pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod macros;
pub mod registry;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, SinkKind};
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use registry::{BuildMode, Registry};
pub use sink::{
    ColorControl, CompositeSink, ConsoleLayout, ConsoleSink, FileSink, LevelFilter, Lifecycle,
    NullSink, Sink,
};
