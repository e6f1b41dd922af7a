//! `tierlog log <level> <template> [args...]`: emit one line through the
//! configured sink.

use crate::cli::util::parse_arg;
use crate::config::Config;
use crate::fmt::Arg;
use crate::internal;
use crate::level::Level;
use crate::registry::Registry;
use std::process::ExitCode;

/// Builds the configured sink, logs one message, then closes the sink.
#[must_use]
pub fn cmd_log(config: &Config, level: Level, template: &str, args: &[String]) -> ExitCode {
    let registry = Registry::from_boxed(config.build_sink());
    let args: Vec<Arg<'_>> = args.iter().map(|a| parse_arg(a)).collect();

    let directives = crate::fmt::Template::parse(template).directive_count();
    if directives != args.len() {
        internal::warn(&format!(
            "Template has {directives} directive(s) but {} argument(s) were given",
            args.len()
        ));
    }

    registry.log(level, template, &args);
    registry.shutdown();
    ExitCode::SUCCESS
}
