use std::fmt::Formatter;

pub enum LoggerError {
    /// The sink rejected the line. Nothing about the logger changed.
    WriteFailed(std::io::Error),
    /// A `Display` impl in the message arguments returned an error; nothing was written.
    FormatFailed,
    /// A level name that is not one of TRACE, DEBUG, INFO, WARN or ERROR.
    UnknownLevel(String),
}

fn format_logger_error(l: &LoggerError, fmt: &mut Formatter) -> std::fmt::Result {
    match l {
        LoggerError::WriteFailed(e) => {
            write!(fmt, "WriteFailed: {}", e)
        }
        LoggerError::FormatFailed => {
            write!(fmt, "Format Failed")
        }
        LoggerError::UnknownLevel(name) => {
            write!(fmt, "Unknown Level: {:?}", name)
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::WriteFailed(e)
    }
}

impl From<std::fmt::Error> for LoggerError {
    fn from(_: std::fmt::Error) -> Self {
        LoggerError::FormatFailed
    }
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::fmt::Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::WriteFailed(e) => Some(e),
            _ => None,
        }
    }
}
