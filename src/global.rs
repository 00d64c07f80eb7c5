//! The process-wide default logger.
//!
//! Starts out as [`Logger::standard`] (`INFO`, no prefix, standard output, `SHORT_FILE | STD`)
//! on first use. Every function here reads the instance installed at the time of the call, so
//! [`replace_default`] and [`scoped_default`] redirect all of them at once.

use core::fmt;
use std::io::Write;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::prelude::{Flags, Level, LevelLog, Logger, LoggerError, Sink};
use crate::sync::Slot;

lazy_static! {
    static ref DEFAULT: Slot<Logger> = Slot::new(Logger::standard());
}

/// The logger the functions in this module currently write through.
pub fn default_logger() -> Arc<Logger> {
    DEFAULT.get()
}

/// Installs `logger` as the default, returning the one it replaces.
pub fn replace_default(logger: impl Into<Arc<Logger>>) -> Arc<Logger> {
    DEFAULT.replace(logger.into())
}

/// Installs `logger` as the default until the returned guard is dropped.
///
/// The previous default comes back when the guard drops, including during a panic, which makes
/// this the way to capture output in a test:
///
/// ```
/// # use std::io;
/// use level_logging::prelude::*;
/// use level_logging::global;
///
/// let guard = global::scoped_default(Logger::new(Level::DEBUG, "", io::sink(), Flags::NONE));
/// global::debug(format_args!("goes to the sink"))?;
/// drop(guard);
/// # Ok::<(), LoggerError>(())
/// ```
///
/// Nested guards must be dropped innermost first; dropping one while a different logger is
/// installed panics instead of restoring.
#[must_use = "the previous default is restored as soon as the guard is dropped"]
pub fn scoped_default(logger: impl Into<Arc<Logger>>) -> DefaultGuard {
    let logger = logger.into();
    let previous = DEFAULT.replace(logger.clone());
    DefaultGuard {
        previous: Some(previous),
        installed: logger,
    }
}

/// Restores the previous default logger on drop. See [`scoped_default`].
pub struct DefaultGuard {
    previous: Option<Arc<Logger>>,
    installed: Arc<Logger>,
}

impl DefaultGuard {
    /// The logger installed by this guard.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.installed
    }
}

impl Drop for DefaultGuard {
    /// Restores the previous default, but only if this guard's logger is still installed.
    ///
    /// Otherwise the default was swapped behind the guard's back (an outer guard dropped before
    /// an inner one, or `replace_default` inside the scope). The slot is then left alone, and
    /// the drop panics unless the thread is already unwinding.
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            if !DEFAULT.replace_if(&self.installed, previous) && !std::thread::panicking() {
                panic!("default logger guard dropped while a different logger was installed");
            }
        }
    }
}

#[track_caller]
pub fn log(level: Level, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    DEFAULT.get().log(level, args)
}

#[track_caller]
pub fn trace(args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    log(Level::TRACE, args)
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    log(Level::DEBUG, args)
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    log(Level::INFO, args)
}

#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    log(Level::WARN, args)
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    log(Level::ERROR, args)
}

pub fn set_min_level(level: Level) {
    DEFAULT.get().set_min_level(level)
}

pub fn set_output<W>(writer: W) -> Sink
where
    W: Write + Send + 'static,
{
    DEFAULT.get().set_output(writer)
}

pub fn set_prefix(prefix: impl Into<String>) {
    DEFAULT.get().set_prefix(prefix)
}

pub fn set_flags(flags: Flags) {
    DEFAULT.get().set_flags(flags)
}

pub fn flush() -> Result<(), LoggerError> {
    DEFAULT.get().flush()
}

#[track_caller]
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), LoggerError> {
    DEFAULT.get().print_json(value)
}

#[track_caller]
pub fn print_struct<T: fmt::Debug + ?Sized>(value: &T) -> Result<(), LoggerError> {
    DEFAULT.get().print_struct(value)
}
