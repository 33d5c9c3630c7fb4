use std::path::PathBuf;

use clap::Parser;
use leveled_log::{FormatFlags, Level, LevelMask, LogError, LogOptions, LogResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "leveled-log", about = "Append messages to a leveled log file")]
pub struct Args {
    /// Log file to append to (created if absent).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// JSON file with log options. Flags given here override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mirror output to stdout (stderr for the Error stream).
    #[arg(long)]
    pub mirror: bool,

    /// Format flags, e.g. `date|time|shortfile` or `3`.
    #[arg(long)]
    pub flags: Option<FormatFlags>,

    /// Levels to activate, e.g. `info|error` or `10`.
    #[arg(long)]
    pub levels: Option<LevelMask>,

    /// Stream the messages are written to.
    #[arg(long, default_value = "info")]
    pub level: Level,

    /// Diagnostics level for the tool itself (stderr). Also supports RUST_LOG.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write the last message through the stream's fatal path: the line
    /// is logged, then the tool exits with status 1.
    #[arg(long, requires = "message")]
    pub fatal: bool,

    /// Messages to write, one line each. Reads stdin when empty.
    pub message: Vec<String>,
}

impl Args {
    pub fn log_options(&self) -> LogResult<LogOptions> {
        let mut opts = match (&self.config, &self.file) {
            (Some(path), _) => LogOptions::from_json_file(path)?,
            (None, Some(file)) => LogOptions::new(file),
            (None, None) => return Err(LogError::MissingFileName),
        };
        if let Some(file) = &self.file {
            opts.file_name = file.clone();
        }
        if self.mirror {
            opts.mirror_to_console = true;
        }
        if let Some(flags) = self.flags {
            opts.format_flags = flags;
        }
        if let Some(levels) = self.levels {
            opts.level_mask = levels;
        }
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_build_options() {
        let args = Args::try_parse_from([
            "leveled-log",
            "--file",
            "app.log",
            "--flags",
            "date|shortfile",
            "--levels",
            "warn,error",
            "--level",
            "error",
            "boom",
        ])
        .unwrap();
        assert_eq!(args.level, Level::Error);
        assert_eq!(args.message, vec!["boom".to_string()]);

        let opts = args.log_options().unwrap();
        assert_eq!(opts.file_name, PathBuf::from("app.log"));
        assert!(!opts.mirror_to_console);
        assert_eq!(opts.format_flags, FormatFlags::DATE | FormatFlags::SHORT_FILE);
        assert_eq!(opts.level_mask, LevelMask::WARNING | LevelMask::ERROR);
    }

    #[test]
    fn command_line_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("log.json");
        std::fs::write(
            &config,
            r#"{"file_name": "from-config.log", "format_flags": 0, "level_mask": 1}"#,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "leveled-log",
            "--config",
            config.to_str().unwrap(),
            "--mirror",
            "--levels",
            "all",
        ])
        .unwrap();
        let opts = args.log_options().unwrap();
        assert_eq!(opts.file_name, PathBuf::from("from-config.log"));
        assert!(opts.mirror_to_console);
        assert_eq!(opts.format_flags, FormatFlags::NONE);
        assert_eq!(opts.level_mask, LevelMask::ALL);
    }

    #[test]
    fn file_or_config_is_required() {
        let args = Args::try_parse_from(["leveled-log"]).unwrap();
        assert!(matches!(args.log_options(), Err(LogError::MissingFileName)));
    }

    #[test]
    fn fatal_needs_a_message() {
        assert!(Args::try_parse_from(["leveled-log", "--file", "a.log", "--fatal"]).is_err());
        let args = Args::try_parse_from(["leveled-log", "--file", "a.log", "--fatal", "bye"]).unwrap();
        assert!(args.fatal);
    }

    #[test]
    fn bad_level_is_rejected_by_the_parser() {
        assert!(Args::try_parse_from(["leveled-log", "--level", "loud"]).is_err());
    }
}
