//! Raw-value lookups for callers that only hold a numeric severity (FFI-style
//! integers, values read back from storage). Out-of-range input degrades to a
//! neutral rendering instead of failing.

use super::Color;
use crate::level::Level;

/// Shown for severities outside `0..=4`.
pub const UNKNOWN_LABEL: &str = "[UNKNOWN]";

/// `[DEBUG]`..`[FATAL]`, or `[UNKNOWN]` for anything else.
#[must_use]
pub fn label_for_raw(value: u8) -> &'static str {
    Level::from_u8(value).map_or(UNKNOWN_LABEL, Level::label)
}

/// Level color, or [`Color::Neutral`] for anything else.
#[must_use]
pub fn color_for_raw(value: u8) -> Color {
    Level::from_u8(value).map_or(Color::Neutral, Color::for_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_match_levels() {
        for level in Level::all() {
            assert_eq!(label_for_raw(level as u8), level.label());
            assert_eq!(color_for_raw(level as u8), Color::for_level(level));
        }
    }

    #[test]
    fn out_of_range_falls_back() {
        assert_eq!(label_for_raw(5), UNKNOWN_LABEL);
        assert_eq!(label_for_raw(u8::MAX), UNKNOWN_LABEL);
        assert_eq!(color_for_raw(42), Color::Neutral);
        assert_eq!(color_for_raw(42).fg_ansi(), Color::RESET);
    }
}
