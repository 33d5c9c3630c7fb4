use std::{path::Path, sync::Arc};

use super::{
    flags::FormatFlags,
    level::{Level, LevelMask},
    stream::Stream,
    types::LogOptions,
    writer::{Console, FanOut, FileWriter, SharedWriter},
};
use crate::error::LogResult;

/// The four leveled streams as one value.
///
/// Hold one of these and pass it to whoever needs to log, or use the
/// process-wide bundle behind [`global`].
#[derive(Debug)]
pub struct Loggers {
    debug: Stream,
    info: Stream,
    warning: Stream,
    error: Stream,
}

impl Loggers {
    pub const fn discard() -> Self {
        Self {
            debug: Stream::discarding(Level::Debug),
            info: Stream::discarding(Level::Info),
            warning: Stream::discarding(Level::Warning),
            error: Stream::discarding(Level::Error),
        }
    }

    /// Opens the log file and builds a bundle with the selected levels
    /// active. Does not touch the process-wide streams.
    pub fn open(opts: &LogOptions) -> LogResult<Self> {
        let file: SharedWriter = Arc::new(FileWriter::open(&opts.file_name)?);
        tracing::debug!(
            path = %opts.file_name.display(),
            mirror = opts.mirror_to_console,
            levels = opts.level_mask.0,
            "log file opened"
        );
        Ok(Self::with_writers(
            file,
            Arc::new(Console::Stdout),
            Arc::new(Console::Stderr),
            opts.mirror_to_console,
            opts.format_flags,
            opts.level_mask,
        ))
    }

    /// Builds a bundle over arbitrary writers. With `mirror`, Debug, Info
    /// and Warning also go to `stdout` and Error also goes to `stderr`.
    pub fn with_writers(
        file: SharedWriter,
        stdout: SharedWriter,
        stderr: SharedWriter,
        mirror: bool,
        flags: FormatFlags,
        mask: LevelMask,
    ) -> Self {
        let (std_handle, err_handle): (SharedWriter, SharedWriter) = if mirror {
            (
                Arc::new(FanOut::new(vec![file.clone(), stdout])),
                Arc::new(FanOut::new(vec![file, stderr])),
            )
        } else {
            (file.clone(), file)
        };

        let loggers = Self::discard();
        for level in mask.levels() {
            let handle = match level {
                Level::Error => err_handle.clone(),
                _ => std_handle.clone(),
            };
            loggers.get(level).bind(flags, handle);
        }
        loggers
    }

    pub fn get(&self, level: Level) -> &Stream {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        }
    }

    pub fn debug(&self) -> &Stream {
        &self.debug
    }

    pub fn info(&self) -> &Stream {
        &self.info
    }

    pub fn warning(&self) -> &Stream {
        &self.warning
    }

    pub fn error(&self) -> &Stream {
        &self.error
    }
}

impl Default for Loggers {
    fn default() -> Self {
        Self::discard()
    }
}

static GLOBAL: Loggers = Loggers::discard();

/// The process-wide bundle. Discarding until [`init`] or [`try_init`].
pub fn global() -> &'static Loggers {
    &GLOBAL
}

pub fn debug() -> &'static Stream {
    GLOBAL.debug()
}

pub fn info() -> &'static Stream {
    GLOBAL.info()
}

pub fn warning() -> &'static Stream {
    GLOBAL.warning()
}

pub fn error() -> &'static Stream {
    GLOBAL.error()
}

/// Configures the process-wide streams. Levels outside the mask keep
/// whatever they were bound to. On error no stream has been changed.
pub fn try_init(opts: &LogOptions) -> LogResult<()> {
    let fresh = Loggers::open(opts)?;
    for level in opts.level_mask.levels() {
        GLOBAL.get(level).bind_like(fresh.get(level));
    }
    Ok(())
}

/// Configures the process-wide streams, terminating the process with
/// status 1 if the log file cannot be opened.
pub fn init(
    file_name: impl AsRef<Path>,
    mirror_to_console: bool,
    format_flags: FormatFlags,
    level_mask: LevelMask,
) {
    let opts = LogOptions {
        file_name: file_name.as_ref().to_path_buf(),
        mirror_to_console,
        format_flags,
        level_mask,
    };
    if let Err(e) = try_init(&opts) {
        tracing::debug!(code = e.code(), "log initialisation failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
