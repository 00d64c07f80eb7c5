#![cfg_attr(docsrs, feature(doc_cfg))]

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`Logger`](Logger)
//! * [`LevelLog`](LevelLog)
//! * [`global`](global)

pub mod prelude;
pub mod error;
pub mod encode;
pub(crate) mod levels;
pub(crate) mod flags;
pub(crate) mod header;
mod macros;
#[cfg(feature = "singleton")]
pub(crate) mod sync;
#[cfg(feature = "singleton")]
#[cfg_attr(docsrs, doc(cfg(feature = "singleton")))]
pub mod global;

pub use prelude::{
    Flags, Level, LevelLog, Logger, LoggerError, Sink
};
