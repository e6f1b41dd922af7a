//! Rendering helpers shared by the sinks: level colors, raw-value label lookup,
//! and printf-style message templates.

mod color;
mod format;
mod label;

pub use color::{Color, colorize};
pub use format::{
    Arg, Conversion, Directive, MAX_MESSAGE_LEN, Template, TemplateSegment, format_template,
    truncate_message,
};
pub use label::{UNKNOWN_LABEL, color_for_raw, label_for_raw};
