//! Utility functions for the CLI.

use super::Cli;
use crate::config::Config;
use crate::fmt::Arg;
use crate::level::Level;

/// Loads `--config` if given, otherwise the default location.
///
/// # Errors
/// Propagates config read and parse failures.
pub fn load_config(cli: &Cli) -> Result<Config, crate::Error> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Command-line flags win over the config file.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(sink) = cli.sink {
        config.general.sink = crate::config::SinkKind::from(sink).as_str().to_string();
    }
    if let Some(path) = &cli.file {
        config.file.path = Some(path.clone());
    }
    if let Some(level) = cli.min_level {
        config.general.level = Level::from(level).as_str().to_string();
    }
    if let Some(level) = cli.diagnostics {
        config.general.diagnostics = Level::from(level).as_str().to_string();
    }
    if cli.no_color {
        config.console.colors = false;
    }
}

/// Shell arguments are all strings; numbers are promoted so `%d` and `%x` render as numbers.
#[must_use]
pub fn parse_arg(raw: &str) -> Arg<'_> {
    if let Ok(v) = raw.parse::<i64>() {
        return Arg::Int(v);
    }
    if let Ok(v) = raw.parse::<u64>() {
        return Arg::UInt(v);
    }
    if let Ok(v) = raw.parse::<f64>() {
        return Arg::Float(v);
    }
    Arg::from(raw)
}
