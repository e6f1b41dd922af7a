//! Usage:
//!   tierlog log <level> <template> [args...]   Log one message
//!   tierlog levels                             List levels
//!   tierlog config                             Show resolved settings
//!
//! Global flags (`--sink`, `--file`, `--min-level`, `--no-color`,
//! `--diagnostics`, `--config`) override the config file.

use clap::Parser;
use std::process::ExitCode;
use tierlog::cli::{Cli, Command, apply_overrides, cmd_config, cmd_levels, cmd_log, load_config};
use tierlog::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    apply_overrides(&mut config, &cli);

    // Diagnostics must be up before the sink is built so open failures are reported
    internal::init_with_config(&config);
    internal::debug(&format!(
        "Effective settings: sink={}, level={}",
        config.general.sink, config.general.level
    ));

    match cli.command {
        Command::Log {
            level,
            template,
            args,
        } => cmd_log(&config, level.into(), &template, &args),
        Command::Levels => cmd_levels(config.console.colors),
        Command::Config => cmd_config(&config, cli.config.as_deref()),
    }
}
