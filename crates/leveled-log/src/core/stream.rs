use std::{
    fmt,
    panic::Location,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, RwLock,
    },
};

use chrono::Utc;

use super::{
    flags::FormatFlags,
    format::format_line,
    level::Level,
    writer::SharedWriter,
};

/// A fully configured destination. Swapped into a stream in one step.
struct Sink {
    flags: FormatFlags,
    writer: SharedWriter,
    // Serializes writes on one stream.
    serial: Mutex<()>,
}

/// One leveled output channel.
///
/// A stream is either discarding (no sink bound) or active. Writes never
/// fail from the caller's point of view; lines a destination rejects are
/// counted in [`Stream::dropped_writes`].
pub struct Stream {
    level: Level,
    sink: RwLock<Option<Arc<Sink>>>,
    dropped: AtomicU64,
}

impl Stream {
    pub const fn discarding(level: Level) -> Self {
        Self {
            level,
            sink: RwLock::new(None),
            dropped: AtomicU64::new(0),
        }
    }

    /// Replaces whatever the stream was bound to. The previous sink is
    /// released once in-flight writes on it finish.
    pub(crate) fn bind(&self, flags: FormatFlags, writer: SharedWriter) {
        let sink = Arc::new(Sink {
            flags,
            writer,
            serial: Mutex::new(()),
        });
        let mut guard = self.sink.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(sink);
        tracing::debug!(stream = %self.level, flags = flags.0, "log stream bound");
    }

    /// Takes the sink of `other`, or nothing if `other` is discarding.
    pub(crate) fn bind_like(&self, other: &Stream) {
        let sink = other.current();
        let mut guard = self.sink.write().unwrap_or_else(|e| e.into_inner());
        *guard = sink;
    }

    fn current(&self) -> Option<Arc<Sink>> {
        self.sink.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn prefix(&self) -> &'static str {
        self.level.prefix()
    }

    pub fn is_active(&self) -> bool {
        self.current().is_some()
    }

    /// Format flags of the bound sink; `None` while discarding.
    pub fn flags(&self) -> Option<FormatFlags> {
        self.current().map(|s| s.flags)
    }

    pub fn dropped_writes(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Writes a preformatted message as one line.
    #[track_caller]
    pub fn print(&self, msg: &str) {
        self.emit(msg, Location::caller());
    }

    /// Writes a formatted message as one line. Arguments are not rendered
    /// while the stream is discarding.
    #[track_caller]
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        let Some(sink) = self.current() else { return };
        match args.as_str() {
            Some(s) => self.emit_to(&sink, s, location),
            None => self.emit_to(&sink, &args.to_string(), location),
        }
    }

    /// Writes the message, then exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, msg: &str) -> ! {
        self.emit(msg, Location::caller());
        std::process::exit(1)
    }

    /// Writes the message, then panics with it.
    #[track_caller]
    pub fn panic(&self, msg: &str) -> ! {
        self.emit(msg, Location::caller());
        panic!("{msg}")
    }

    fn emit(&self, msg: &str, location: &Location<'_>) {
        if let Some(sink) = self.current() {
            self.emit_to(&sink, msg, location);
        }
    }

    fn emit_to(&self, sink: &Sink, msg: &str, location: &Location<'_>) {
        let line = format_line(self.prefix(), sink.flags, Utc::now(), location, msg);
        let _serial = sink.serial.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = sink.writer.write_line(line.as_bytes()) {
            let before = self.dropped.fetch_add(1, Ordering::Relaxed);
            if before == 0 {
                tracing::warn!(stream = %self.level, error = %e, "log write failed; dropping lines");
            }
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("level", &self.level)
            .field("flags", &self.flags())
            .field("dropped", &self.dropped_writes())
            .finish()
    }
}
