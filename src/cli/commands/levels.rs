use crate::fmt::{Color, colorize};
use crate::level::Level;
use std::process::ExitCode;

/// Prints each level with its label, in severity order.
#[must_use]
pub fn cmd_levels(colors: bool) -> ExitCode {
    for level in Level::all() {
        let label = if colors {
            colorize(level.label(), Color::for_level(level))
        } else {
            level.label().to_string()
        };
        println!("{} {:<8} {label}", level as u8, level.as_str());
    }
    ExitCode::SUCCESS
}
