use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use crate::error::{LogError, LogResult};

/// A destination that accepts whole, already formatted lines.
///
/// Implementations must write a line with a single call so that lines
/// sharing a destination do not tear.
pub trait LineWriter: Send + Sync {
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

pub type SharedWriter = Arc<dyn LineWriter>;

/// Append-mode log file shared by every stream bound to it.
#[derive(Debug)]
pub struct FileWriter {
    file: File,
}

impl FileWriter {
    pub fn open(path: &Path) -> LogResult<Self> {
        let mut opts = OpenOptions::new();
        opts.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o666);
        }
        let file = opts.open(path).map_err(|source| LogError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }
}

impl LineWriter for FileWriter {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (&self.file).write_all(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    Stderr,
}

impl LineWriter for Console {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Console::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()
            }
            Console::Stderr => io::stderr().lock().write_all(line),
        }
    }
}

/// In-memory destination, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    buf: Mutex<Vec<u8>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let guard = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&guard).into_owned()
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "poisoned lock"))?;
        guard.extend_from_slice(line);
        Ok(())
    }
}

/// Duplicates every line to each writer in order. Stops at the first
/// failure and reports it; later writers do not see that line.
pub struct FanOut {
    writers: Vec<SharedWriter>,
}

impl FanOut {
    pub fn new(writers: Vec<SharedWriter>) -> Self {
        Self { writers }
    }
}

impl LineWriter for FanOut {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        for w in &self.writers {
            w.write_line(line)?;
        }
        Ok(())
    }
}
