use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to open logfile: {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    #[error("unknown format flag: {0}")]
    UnknownFlag(String),

    #[error("missing log file name")]
    MissingFileName,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    pub fn code(&self) -> &'static str {
        match self {
            LogError::OpenLogFile { .. } => "OPEN_LOG_FILE",
            LogError::UnknownLevel(_) => "UNKNOWN_LEVEL",
            LogError::UnknownFlag(_) => "UNKNOWN_FLAG",
            LogError::MissingFileName => "MISSING_FILE_NAME",
            LogError::Io(_) => "IO_ERROR",
            LogError::Json(_) => "JSON_ERROR",
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_message_names_the_path() {
        let e = LogError::OpenLogFile {
            path: PathBuf::from("/nope/app.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Failed to open logfile: /nope/app.log"), "{msg}");
        assert_eq!(e.code(), "OPEN_LOG_FILE");
    }
}
