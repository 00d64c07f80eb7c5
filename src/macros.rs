//! `format!`-style front ends for the five levels.
//!
//! Without a target they write through the default logger; with `logger: <expr>` they write
//! through any [`LevelLog`](crate::prelude::LevelLog). Either way they evaluate to
//! `Result<(), LoggerError>`, and the arguments are only formatted if the level passes.

/// Emits at an explicit level. The other macros expand to this.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::prelude::LevelLog::log(&$logger, $level, ::core::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global::log($level, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::prelude::Level::TRACE, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::prelude::Level::TRACE, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::prelude::Level::DEBUG, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::prelude::Level::DEBUG, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::prelude::Level::INFO, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::prelude::Level::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::prelude::Level::WARN, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::prelude::Level::WARN, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::prelude::Level::ERROR, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::prelude::Level::ERROR, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::prelude::tests::Capture;
    use crate::prelude::*;

    #[test]
    fn explicit_logger() {
        let out = Capture::default();
        let logger = Logger::new(Level::DEBUG, "m ", out.clone(), Flags::NONE);
        let shared = Arc::new(Logger::new(Level::TRACE, "", out.clone(), Flags::NONE));

        crate::trace!(logger: logger, "dropped {}", 1).unwrap();
        crate::debug!(logger: logger, "kept {}", 2).unwrap();
        crate::info!(logger: &logger, "by ref").unwrap();
        crate::warn!(logger: shared, "{} + {} = {}", 1, 1, 2).unwrap();
        crate::error!(logger: shared, "{x}", x = "named").unwrap();
        crate::log!(logger: logger, Level::from(8), "unlabelled").unwrap();

        assert_eq!(
            out.contents(),
            "m [DEBUG] kept 2\nm [INFO] by ref\n[WARN] 1 + 1 = 2\n[ERROR] named\nm unlabelled\n"
        );
    }

    #[test]
    fn macro_reports_call_site() {
        let out = Capture::default();
        let logger = Logger::new(Level::INFO, "", out.clone(), Flags::SHORT_FILE);

        let line = line!() + 1;
        crate::info!(logger: logger, "here").unwrap();

        assert_eq!(out.contents(), format!("macros.rs:{}: [INFO] here\n", line));
    }

    #[test]
    fn suppressed_arguments_are_not_formatted() {
        struct Loud;

        impl core::fmt::Display for Loud {
            fn fmt(&self, _f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                panic!("formatted a suppressed message");
            }
        }

        let logger = Logger::new(Level::ERROR, "", std::io::sink(), Flags::NONE);

        crate::debug!(logger: logger, "{}", Loud).unwrap();
    }
}
