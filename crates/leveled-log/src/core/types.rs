use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{flags::FormatFlags, level::LevelMask};
use crate::error::LogResult;

/// Everything initialization needs, in one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogOptions {
    pub file_name: PathBuf,
    #[serde(default)]
    pub mirror_to_console: bool,
    #[serde(default)]
    pub format_flags: FormatFlags,
    #[serde(default = "all_levels")]
    pub level_mask: LevelMask,
}

fn all_levels() -> LevelMask {
    LevelMask::ALL
}

impl LogOptions {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            mirror_to_console: false,
            format_flags: FormatFlags::STD,
            level_mask: LevelMask::ALL,
        }
    }

    pub fn from_json_file(path: &Path) -> LogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
