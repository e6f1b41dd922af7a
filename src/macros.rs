//! Call-site macros: `log_info!("disk %s at %d%%", name, pct)`.
//!
//! The leveled macros are active when the crate is built with
//! `debug_assertions` (unless the `strip-macros` feature is on), or whenever
//! the `release-logging` feature is on. Otherwise they expand to `()`: the
//! template and argument expressions are never evaluated and no call is
//! emitted. [`log_at!`] and the `registry` functions stay available in
//! every build.

/// `true` when the leveled `log_*!` macros expand to real calls in this build.
pub const MACROS_ENABLED: bool = cfg!(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
));

/// Always-on worker: renders the template against the global registry.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::registry::log($level, $template, &[$($crate::fmt::Arg::from($arg)),*])
    };
}

// ---------------------- enabled ----------------------

#[cfg(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log_at!($crate::Level::Debug, $($arg)*) };
}

#[cfg(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log_at!($crate::Level::Info, $($arg)*) };
}

#[cfg(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => { $crate::log_at!($crate::Level::Warning, $($arg)*) };
}

#[cfg(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log_at!($crate::Level::Warning, $($arg)*) };
}

#[cfg(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log_at!($crate::Level::Error, $($arg)*) };
}

#[cfg(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => { $crate::log_at!($crate::Level::Fatal, $($arg)*) };
}

// ---------------------- compiled out ----------------------

#[cfg(not(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
)))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
)))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
)))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
)))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
)))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(any(
    all(debug_assertions, not(feature = "strip-macros")),
    feature = "release-logging"
)))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
