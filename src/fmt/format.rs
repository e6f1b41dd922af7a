//! printf-style message templates (`"disk %s at %d%%"`).
//!
//! Rendering never fails: a logging call must not be the reason a program
//! crashes. Mismatches degrade as follows:
//! - a directive with no argument left is copied verbatim (`%d` stays `%d`),
//! - an unknown or unterminated directive is copied verbatim,
//! - an argument of the "wrong" type is rendered in its natural form,
//! - surplus arguments are ignored,
//! - the result is cut to [`MAX_MESSAGE_LEN`] bytes on a char boundary.

use std::borrow::Cow;
use std::fmt;

/// Upper bound on a rendered message, in bytes.
pub const MAX_MESSAGE_LEN: usize = 1023;

/// One ordered argument for a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Bool(bool),
    Str(Cow<'a, str>),
}

impl Arg<'_> {
    /// Any `Display` value, rendered up front. Escape hatch for types without a `From` impl.
    #[must_use]
    pub fn display(value: &impl fmt::Display) -> Arg<'static> {
        Arg::Str(Cow::Owned(value.to_string()))
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(value: $t) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

arg_from!(Int as i64: i8, i16, i32, i64);
arg_from!(UInt as u64: u8, u16, u32, u64);
arg_from!(Float as f64: f32, f64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Str(Cow::Owned(value.to_string())),
        }
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        match u64::try_from(value) {
            Ok(v) => Self::UInt(v),
            Err(_) => Self::Str(Cow::Owned(value.to_string())),
        }
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

/// Conversion character of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%d`, `%i`
    Signed,
    /// `%u`
    Unsigned,
    /// `%x`
    HexLower,
    /// `%X`
    HexUpper,
    /// `%o`
    Octal,
    /// `%f`, `%F`
    Float,
    /// `%s`
    Str,
    /// `%c`
    Char,
}

impl Conversion {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' | 'i' => Some(Self::Signed),
            'u' => Some(Self::Unsigned),
            'x' => Some(Self::HexLower),
            'X' => Some(Self::HexUpper),
            'o' => Some(Self::Octal),
            'f' | 'F' => Some(Self::Float),
            's' => Some(Self::Str),
            'c' => Some(Self::Char),
            _ => None,
        }
    }

    const fn is_numeric(self) -> bool {
        !matches!(self, Self::Str | Self::Char)
    }
}

/// A parsed `%[flags][width][.precision][length]conv` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub left_align: bool,
    pub zero_pad: bool,
    pub plus_sign: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
    /// Original text, reproduced when no argument is left for it.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    Literal(String),
    Directive(Directive),
}

/// Parse once, render many. The facade parses per call; benches and repeated
/// callers can hold on to a parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<TemplateSegment>,
}

impl Template {
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            if let Some(&(_, '%')) = chars.peek() {
                chars.next();
                literal.push('%');
                continue;
            }

            let mut left_align = false;
            let mut zero_pad = false;
            let mut plus_sign = false;
            while let Some(&(_, flag)) = chars.peek() {
                match flag {
                    '-' => left_align = true,
                    '0' => zero_pad = true,
                    '+' => plus_sign = true,
                    ' ' | '#' => {}
                    _ => break,
                }
                chars.next();
            }

            let width = take_number(&mut chars);
            let precision = if let Some(&(_, '.')) = chars.peek() {
                chars.next();
                Some(take_number(&mut chars).unwrap_or(0))
            } else {
                None
            };

            // Length modifiers carry no meaning once arguments are typed.
            while let Some(&(_, 'h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't')) = chars.peek() {
                chars.next();
            }

            let conversion = chars
                .peek()
                .and_then(|&(_, conv)| Conversion::from_char(conv));
            let Some(conversion) = conversion else {
                // Unknown or unterminated: keep what was consumed as plain text.
                let end = chars.peek().map_or(template.len(), |&(i, _)| i);
                literal.push_str(&template[start..end]);
                continue;
            };
            let Some((conv_at, conv_char)) = chars.next() else {
                continue;
            };

            if !literal.is_empty() {
                segments.push(TemplateSegment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(TemplateSegment::Directive(Directive {
                left_align,
                zero_pad,
                plus_sign,
                width,
                precision,
                conversion,
                raw: template[start..conv_at + conv_char.len_utf8()].to_string(),
            }));
        }

        if !literal.is_empty() {
            segments.push(TemplateSegment::Literal(literal));
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Number of arguments the template expects.
    #[must_use]
    pub fn directive_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, TemplateSegment::Directive(_)))
            .count()
    }

    /// Substitutes `args` in order. Never fails; see the module docs for mismatch handling.
    #[must_use]
    pub fn render(&self, args: &[Arg<'_>]) -> String {
        let mut out = String::new();
        let mut args = args.iter();

        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Directive(directive) => match args.next() {
                    Some(arg) => out.push_str(&render_directive(directive, arg)),
                    None => out.push_str(&directive.raw),
                },
            }
        }

        truncate_message(&mut out);
        out
    }
}

/// One-shot parse and render.
#[must_use]
pub fn format_template(template: &str, args: &[Arg<'_>]) -> String {
    Template::parse(template).render(args)
}

/// Cuts `message` to at most [`MAX_MESSAGE_LEN`] bytes without splitting a character.
pub fn truncate_message(message: &mut String) {
    if message.len() <= MAX_MESSAGE_LEN {
        return;
    }
    let mut end = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message.truncate(end);
}

/// Width and precision never exceed [`MAX_MESSAGE_LEN`]; anything wider would be truncated anyway.
fn take_number(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize)
                .min(MAX_MESSAGE_LEN),
        );
    }
    value
}

#[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn render_directive(directive: &Directive, arg: &Arg<'_>) -> String {
    let body = match (directive.conversion, arg) {
        (Conversion::Signed, Arg::Int(v)) => v.to_string(),
        (Conversion::Signed | Conversion::Unsigned, Arg::UInt(v)) => v.to_string(),
        (Conversion::Signed | Conversion::Unsigned, Arg::Char(v)) => u32::from(*v).to_string(),
        (Conversion::Signed | Conversion::Unsigned, Arg::Bool(v)) => u8::from(*v).to_string(),
        (Conversion::Unsigned, Arg::Int(v)) => (*v as u64).to_string(),
        (Conversion::HexLower, Arg::Int(v)) => format!("{v:x}"),
        (Conversion::HexLower, Arg::UInt(v)) => format!("{v:x}"),
        (Conversion::HexUpper, Arg::Int(v)) => format!("{v:X}"),
        (Conversion::HexUpper, Arg::UInt(v)) => format!("{v:X}"),
        (Conversion::Octal, Arg::Int(v)) => format!("{v:o}"),
        (Conversion::Octal, Arg::UInt(v)) => format!("{v:o}"),
        (Conversion::Float, Arg::Float(v)) => format_float(*v, directive.precision),
        (Conversion::Float, Arg::Int(v)) => format_float(*v as f64, directive.precision),
        (Conversion::Float, Arg::UInt(v)) => format_float(*v as f64, directive.precision),
        (Conversion::Char, Arg::Int(v)) => u32::try_from(*v)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| v.to_string(), String::from),
        (Conversion::Char, Arg::UInt(v)) => u32::try_from(*v)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| v.to_string(), String::from),
        (Conversion::Str, Arg::Str(s)) => match directive.precision {
            Some(max) => s.chars().take(max).collect(),
            None => s.to_string(),
        },
        _ => arg.to_string(),
    };

    let body = match (directive.conversion, directive.precision) {
        (
            Conversion::Signed
            | Conversion::Unsigned
            | Conversion::HexLower
            | Conversion::HexUpper
            | Conversion::Octal,
            Some(min_digits),
        ) => pad_digits(&body, min_digits),
        _ => body,
    };

    let body = if directive.plus_sign
        && matches!(directive.conversion, Conversion::Signed | Conversion::Float)
        && body.starts_with(|c: char| c.is_ascii_digit())
    {
        format!("+{body}")
    } else {
        body
    };

    pad_width(directive, body)
}

fn format_float(value: f64, precision: Option<usize>) -> String {
    format!("{value:.*}", precision.unwrap_or(6))
}

/// Integer precision means "at least this many digits".
fn pad_digits(body: &str, min_digits: usize) -> String {
    let (sign, digits) = body
        .strip_prefix('-')
        .map_or(("", body), |rest| ("-", rest));
    if digits.len() >= min_digits || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return body.to_string();
    }
    format!("{sign}{}{digits}", "0".repeat(min_digits - digits.len()))
}

fn pad_width(directive: &Directive, body: String) -> String {
    let Some(width) = directive.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = width - len;

    let mut out = String::with_capacity(body.len() + fill);
    if directive.left_align {
        out.push_str(&body);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if directive.zero_pad
        && directive.conversion.is_numeric()
        && body.trim_start_matches(['-', '+']).starts_with(|c: char| c.is_ascii_hexdigit())
    {
        let sign_len = usize::from(body.starts_with(['-', '+']));
        out.push_str(&body[..sign_len]);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(&body[sign_len..]);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(&body);
    }
    out
}
