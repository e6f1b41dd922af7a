//! `tierlog config`: show where settings come from and what they resolve to.

use crate::config::Config;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_config(config: &Config, path: Option<&Path>) -> ExitCode {
    match path {
        Some(p) => println!("Config file:  {}", p.display()),
        None => match Config::get_config_path() {
            Ok(p) if p.exists() => println!("Config file:  {}", p.display()),
            Ok(p) => println!("Config file:  {} (not found, using defaults)", p.display()),
            Err(e) => println!("Config file:  unavailable ({e})"),
        },
    }
    println!("Sink:         {}", config.parse_sink_kind());
    println!("Min level:    {}", config.parse_level());
    println!("Colors:       {}", config.console.colors);
    println!(
        "Log file:     {}",
        config.file_path().as_deref().unwrap_or("(none)")
    );
    println!(
        "Diagnostics:  {}",
        config
            .parse_diagnostics_level()
            .map_or_else(|| "off".to_string(), |l| l.to_string())
    );
    ExitCode::SUCCESS
}
