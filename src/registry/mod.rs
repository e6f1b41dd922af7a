//! The facade: one active sink per process, replaceable at runtime.
//!
//! [`Registry`] holds exactly one sink. Capability calls (`init`, `close`,
//! `set_min_level`, `set_color_enabled`) reach it only if it supports them
//! and are silently skipped otherwise, so callers never need to know what is
//! installed. The process-wide instance lives behind [`global`] and is built
//! lazily on first use from [`BuildMode::current`].

use crate::config::Config;
use crate::fmt::{Arg, format_template};
use crate::internal;
use crate::level::Level;
use crate::sink::{ConsoleSink, NullSink, Sink};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Which default sink a fresh registry starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Timestamped, colored console at `Debug`.
    Debug,
    /// Everything discarded.
    Release,
}

impl BuildMode {
    /// Follows `debug_assertions`, i.e. the Cargo profile the crate was built with.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// The sink a registry starts with in the given build mode.
#[must_use]
pub fn default_sink(mode: BuildMode) -> Box<dyn Sink> {
    match mode {
        BuildMode::Debug => Box::new(
            ConsoleSink::timestamped()
                .colors(true)
                .with_min_level(Level::Debug),
        ),
        BuildMode::Release => Box::new(NullSink),
    }
}

/// Holder of the single active sink.
///
/// Emission takes the read lock for the whole call, replacement takes the
/// write lock, so an emit sees either the old sink or the new one, never a
/// half-swapped state. Lock poisoning is ignored: a panic elsewhere must not
/// turn every later log call into a panic too.
pub struct Registry {
    active: RwLock<Box<dyn Sink>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_build_mode(BuildMode::current())
    }
}

impl Registry {
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::from_boxed(Box::new(sink))
    }

    #[must_use]
    pub fn from_boxed(sink: Box<dyn Sink>) -> Self {
        Self {
            active: RwLock::new(sink),
        }
    }

    #[must_use]
    pub fn with_build_mode(mode: BuildMode) -> Self {
        Self::from_boxed(default_sink(mode))
    }

    fn read(&self) -> RwLockReadGuard<'_, Box<dyn Sink>> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Box<dyn Sink>> {
        self.active.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the active sink. The outgoing sink is closed (if it has a
    /// lifecycle) before the new one becomes visible to any caller.
    pub fn install_sink(&self, sink: impl Sink + 'static) {
        self.install_boxed(Box::new(sink));
    }

    pub fn install_boxed(&self, sink: Box<dyn Sink>) {
        let mut active = self.write();
        if let Some(lifecycle) = active.as_lifecycle() {
            lifecycle.close();
        }
        *active = sink;
        internal::debug("Active sink replaced");
    }

    /// Runs `f` against the active sink while holding the read lock.
    pub fn with_active<R>(&self, f: impl FnOnce(&dyn Sink) -> R) -> R {
        let active = self.read();
        f(&**active)
    }

    pub fn init(&self, parameter: Option<&str>) {
        if let Some(lifecycle) = self.read().as_lifecycle() {
            lifecycle.init(parameter);
        }
    }

    pub fn close(&self) {
        if let Some(lifecycle) = self.read().as_lifecycle() {
            lifecycle.close();
        }
    }

    pub fn set_min_level(&self, level: Level) {
        if let Some(filter) = self.read().as_filter() {
            filter.set_min_level(level);
        }
    }

    /// `None` when the active sink does not filter.
    #[must_use]
    pub fn min_level(&self) -> Option<Level> {
        self.read().as_filter().map(|filter| filter.min_level())
    }

    pub fn set_color_enabled(&self, enabled: bool) {
        if let Some(color) = self.read().as_color() {
            color.set_color_enabled(enabled);
        }
    }

    /// `None` when the active sink has no color control.
    #[must_use]
    pub fn color_enabled(&self) -> Option<bool> {
        self.read().as_color().map(|color| color.color_enabled())
    }

    /// Forwards an already rendered message.
    pub fn emit(&self, level: Level, message: &str) {
        self.read().emit(level, message);
    }

    /// Renders `template` with `args` and forwards the result. Skips the
    /// rendering when the active sink would filter the record anyway.
    pub fn log(&self, level: Level, template: &str, args: &[Arg<'_>]) {
        let active = self.read();
        if let Some(filter) = active.as_filter()
            && level < filter.min_level()
        {
            return;
        }
        let message = format_template(template, args);
        active.emit(level, &message);
    }

    pub fn debug(&self, template: &str, args: &[Arg<'_>]) {
        self.log(Level::Debug, template, args);
    }

    pub fn info(&self, template: &str, args: &[Arg<'_>]) {
        self.log(Level::Info, template, args);
    }

    pub fn warning(&self, template: &str, args: &[Arg<'_>]) {
        self.log(Level::Warning, template, args);
    }

    pub fn error(&self, template: &str, args: &[Arg<'_>]) {
        self.log(Level::Error, template, args);
    }

    /// Labels the record `[FATAL]`. Does not exit; that is the caller's decision.
    pub fn fatal(&self, template: &str, args: &[Arg<'_>]) {
        self.log(Level::Fatal, template, args);
    }

    /// Closes the active sink and swaps in a [`NullSink`]; later calls become no-ops.
    pub fn shutdown(&self) {
        self.install_sink(NullSink);
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created on first call.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::default)
}

/// Builds the sink described by `config`, installs it globally, and sets up
/// internal diagnostics from the same config.
pub fn init_from_config(config: &Config) {
    internal::init_with_config(config);
    global().install_boxed(config.build_sink());
}

pub fn install_sink(sink: impl Sink + 'static) {
    global().install_sink(sink);
}

pub fn install_boxed(sink: Box<dyn Sink>) {
    global().install_boxed(sink);
}

pub fn init(parameter: Option<&str>) {
    global().init(parameter);
}

pub fn close() {
    global().close();
}

pub fn set_min_level(level: Level) {
    global().set_min_level(level);
}

#[must_use]
pub fn min_level() -> Option<Level> {
    global().min_level()
}

pub fn set_color_enabled(enabled: bool) {
    global().set_color_enabled(enabled);
}

#[must_use]
pub fn color_enabled() -> Option<bool> {
    global().color_enabled()
}

pub fn emit(level: Level, message: &str) {
    global().emit(level, message);
}

pub fn log(level: Level, template: &str, args: &[Arg<'_>]) {
    global().log(level, template, args);
}

pub fn debug(template: &str, args: &[Arg<'_>]) {
    global().debug(template, args);
}

pub fn info(template: &str, args: &[Arg<'_>]) {
    global().info(template, args);
}

pub fn warning(template: &str, args: &[Arg<'_>]) {
    global().warning(template, args);
}

pub fn error(template: &str, args: &[Arg<'_>]) {
    global().error(template, args);
}

pub fn fatal(template: &str, args: &[Arg<'_>]) {
    global().fatal(template, args);
}

/// Call once at controlled teardown so the active sink releases its resources.
pub fn shutdown() {
    global().shutdown();
}
