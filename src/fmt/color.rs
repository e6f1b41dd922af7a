//! The 16-color ANSI palette is the lowest common denominator every terminal
//! (and Windows 10+ console) renders, so level colors stick to it.

use crate::level::Level;
use std::fmt;

/// Named foreground colors. `Neutral` means "no color": it renders as a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Gray,
    White,
    Cyan,
    Yellow,
    Red,
    Magenta,
    Green,
    Blue,
    #[default]
    Neutral,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// SGR foreground sequence. Bright variants (90-97) read better on dark backgrounds.
    #[must_use]
    pub const fn fg_ansi(self) -> &'static str {
        match self {
            Self::Gray => "\x1b[90m",
            Self::Red => "\x1b[91m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Blue => "\x1b[94m",
            Self::Magenta => "\x1b[95m",
            Self::Cyan => "\x1b[96m",
            Self::White => "\x1b[97m",
            Self::Neutral => Self::RESET,
        }
    }

    /// Color used for a level's label (and, in the plain console layout, the whole line).
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Debug => Self::Gray,
            Level::Info => Self::Cyan,
            Level::Warning => Self::Yellow,
            Level::Error => Self::Red,
            Level::Fatal => Self::Magenta,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::White => "white",
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
