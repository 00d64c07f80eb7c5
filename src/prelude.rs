use core::fmt::{self, Write as _};
use core::panic::Location;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

pub use crate::error::LoggerError;
pub use crate::flags::Flags;
pub use crate::levels::Level;
use crate::encode::{json_payload, struct_payload};
use crate::header::write_header;

/// The destination of formatted lines.
pub type Sink = Box<dyn Write + Send>;

/// Anything that can emit leveled lines.
///
/// Implementors only provide [`log`](LevelLog::log); the five level methods forward to it. All
/// methods are `#[track_caller]`, so a caller-location header names the line that called
/// `info`, not a line inside the logger.
pub trait LevelLog {
    /// Emits `args` at `level`, or does nothing if `level` is below the threshold.
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), LoggerError>;

    #[track_caller]
    fn trace(&self, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        self.log(Level::TRACE, args)
    }

    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        self.log(Level::DEBUG, args)
    }

    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        self.log(Level::INFO, args)
    }

    #[track_caller]
    fn warn(&self, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        self.log(Level::WARN, args)
    }

    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        self.log(Level::ERROR, args)
    }
}

impl<L: LevelLog + ?Sized> LevelLog for &L {
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        (**self).log(level, args)
    }
}

impl<L: LevelLog + ?Sized> LevelLog for Arc<L> {
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        (**self).log(level, args)
    }
}

struct Config {
    min_level: Level,
    prefix: String,
    flags: Flags,
    writer: Sink,
}

/// Formats `header + prefix + label + message`, ending in exactly one newline.
///
/// Runs user `Display` impls, so it must not be called with the config lock held.
fn format_line(
    flags: Flags, prefix: &str, location: &Location<'_>, label: &str, message: fmt::Arguments<'_>
) -> Result<String, LoggerError> {
    let mut line = String::with_capacity(prefix.len() + 64);
    write_header(&mut line, flags, location)?;
    line.push_str(prefix);
    line.push_str(label);
    line.write_fmt(message)?;
    if !line.ends_with('\n') {
        line.push('\n');
    }
    Ok(line)
}

/// A leveled line logger.
///
/// Each emitted line is `header + prefix + label + message + "\n"`, where the header is chosen
/// by [`Flags`] and the label by the [`Level`]. Calls below the minimum level write nothing.
///
/// The configuration and the sink sit behind one lock. A call reads the configuration under it,
/// formats the line without it, then takes it again for the single write, so lines from
/// different threads never interleave and message arguments may themselves log through the
/// same logger. A sink that logs through the logger it is installed in is not supported.
pub struct Logger {
    inner: Mutex<Config>,
}

impl Logger {
    /// Constructs a new `Logger`.
    ///
    /// # Arguments
    ///
    /// * `level` - Calls below this level are dropped.
    /// * `prefix` - Written after the header and before the level label on every line.
    /// * `writer` - Where lines go. `std::io::sink()` is fine and discards everything.
    /// * `flags` - Which header fields to write.
    pub fn new<W>(level: Level, prefix: impl Into<String>, writer: W, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            inner: Mutex::new(Config {
                min_level: level,
                prefix: prefix.into(),
                flags,
                writer: Box::new(writer),
            }),
        }
    }

    /// The configuration of the default logger: `INFO`, no prefix, standard output,
    /// `SHORT_FILE | STD`.
    pub fn standard() -> Self {
        Self::new(Level::INFO, "", io::stdout(), Flags::SHORT_FILE | Flags::STD)
    }

    // Every update leaves the config consistent, so a panic inside a sink doesn't taint it.
    fn config(&self) -> MutexGuard<'_, Config> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn min_level(&self) -> Level {
        self.config().min_level
    }

    pub fn prefix(&self) -> String {
        self.config().prefix.clone()
    }

    pub fn flags(&self) -> Flags {
        self.config().flags
    }

    /// Sets the minimum level. Applies to calls made after this returns.
    pub fn set_min_level(&self, level: Level) {
        self.config().min_level = level;
    }

    /// Replaces the sink, returning the previous one.
    pub fn set_output<W>(&self, writer: W) -> Sink
    where
        W: Write + Send + 'static,
    {
        core::mem::replace(&mut self.config().writer, Box::new(writer))
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.config().prefix = prefix.into();
    }

    pub fn set_flags(&self, flags: Flags) {
        self.config().flags = flags;
    }

    /// Flushes the sink.
    pub fn flush(&self) -> Result<(), LoggerError> {
        self.config().writer.flush()?;
        Ok(())
    }

    /// Writes the JSON encoding of `value` as one line, with no level label and no level check.
    ///
    /// If `value` can't be encoded, the reason (e.g. `json: unsupported value: NaN`) is written
    /// instead and the call still succeeds.
    #[track_caller]
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), LoggerError> {
        let payload = json_payload(value);
        self.emit(Location::caller(), None, format_args!("{}", payload))
    }

    /// Writes the `Debug` form of `value` as one line, with no level label and no level check.
    #[track_caller]
    pub fn print_struct<T: fmt::Debug + ?Sized>(&self, value: &T) -> Result<(), LoggerError> {
        let payload = struct_payload(value);
        self.emit(Location::caller(), None, format_args!("{}", payload))
    }

    /// Emits one line. With a `level`, calls below the minimum level are dropped before anything
    /// is formatted; without one, the line is unlabelled and always written.
    fn emit(
        &self, location: &Location<'_>, level: Option<Level>, message: fmt::Arguments<'_>
    ) -> Result<(), LoggerError> {
        let (flags, prefix) = {
            let config = self.config();
            if level.is_some_and(|level| level < config.min_level) {
                return Ok(());
            }
            (config.flags, config.prefix.clone())
        };

        let label = level.map_or("", Level::label);
        let line = format_line(flags, &prefix, location, label, message)?;

        self.config().writer.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl LevelLog for Logger {
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        self.emit(Location::caller(), Some(level), args)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config();
        f.debug_struct("Logger")
            .field("min_level", &config.min_level)
            .field("prefix", &config.prefix)
            .field("flags", &config.flags)
            .finish_non_exhaustive()
    }
}
