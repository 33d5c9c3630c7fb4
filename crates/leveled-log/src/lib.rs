//! Four leveled log streams (Debug, Info, Warning, Error) writing to one
//! append-mode file, optionally mirrored to the console.
//!
//! ```no_run
//! use leveled_log::{FormatFlags, LevelMask};
//!
//! leveled_log::init("service.log", true, FormatFlags::STD, LevelMask::INFO | LevelMask::ERROR);
//! leveled_log::info!("listening on {}", 8080);
//! leveled_log::debug!("not written: debug is not in the mask");
//! ```

pub mod core;
pub mod error;
mod macros;

pub use crate::core::{
    facade::{debug, error, global, info, init, try_init, warning, Loggers},
    flags::FormatFlags,
    level::{Level, LevelMask},
    stream::Stream,
    types::LogOptions,
    writer::{Console, FanOut, FileWriter, LineWriter, MemoryWriter, SharedWriter},
};
pub use error::{LogError, LogResult};
