//! CLI module for tierlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use crate::config::SinkKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
    Fatal,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// Sink kind for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SinkArg {
    Console,
    Timestamped,
    File,
    Composite,
    Null,
}

impl From<SinkArg> for SinkKind {
    fn from(sink: SinkArg) -> Self {
        match sink {
            SinkArg::Console => Self::Console,
            SinkArg::Timestamped => Self::Timestamped,
            SinkArg::File => Self::File,
            SinkArg::Composite => Self::Composite,
            SinkArg::Null => Self::Null,
        }
    }
}

/// tierlog - Log messages from the command line.
#[derive(Parser)]
#[command(
    name = "tierlog",
    version,
    about = "Log messages from the command line"
)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Sink to write to
    #[arg(long, global = true, value_enum)]
    pub sink: Option<SinkArg>,
    /// Log file for the file and composite sinks
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<String>,
    /// Minimum level to emit
    #[arg(long, global = true, value_enum)]
    pub min_level: Option<LogLevel>,
    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Print tierlog's own diagnostics at this level
    #[arg(long, global = true, value_enum)]
    pub diagnostics: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log one message. The message is a printf-style template; remaining
    /// arguments fill its directives in order.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Message template
        template: String,
        /// Template arguments
        args: Vec<String>,
    },
    /// List levels and their labels.
    Levels,
    /// Show the config path and resolved settings.
    Config,
}

pub use commands::{cmd_config, cmd_levels, cmd_log};
pub use util::{apply_overrides, load_config, parse_arg};
