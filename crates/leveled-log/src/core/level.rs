use std::{fmt, ops::BitOr, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Declaration order; also the order of the mask bits.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warning, Level::Error];

    pub fn bit(self) -> u32 {
        match self {
            Level::Debug => 1,
            Level::Info => 1 << 1,
            Level::Warning => 1 << 2,
            Level::Error => 1 << 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Level::Debug => "Debug: ",
            Level::Info => "Info: ",
            Level::Warning => "Warning: ",
            Level::Error => "Error: ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> LogResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

/// Set of levels to activate. Bits outside the four levels are carried
/// along and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelMask(pub u32);

impl LevelMask {
    pub const NONE: LevelMask = LevelMask(0);
    pub const DEBUG: LevelMask = LevelMask(1);
    pub const INFO: LevelMask = LevelMask(1 << 1);
    pub const WARNING: LevelMask = LevelMask(1 << 2);
    pub const ERROR: LevelMask = LevelMask(1 << 3);
    pub const ALL: LevelMask = LevelMask(0b1111);

    pub fn contains(self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }

    pub fn levels(self) -> impl Iterator<Item = Level> {
        Level::ALL.into_iter().filter(move |l| self.contains(*l))
    }
}

impl From<Level> for LevelMask {
    fn from(level: Level) -> Self {
        LevelMask(level.bit())
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: Self) -> Self {
        LevelMask(self.0 | rhs.0)
    }
}

impl FromStr for LevelMask {
    type Err = LogError;

    /// Accepts a decimal integer or level names joined by `|` or `,`.
    fn from_str(s: &str) -> LogResult<Self> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u32>() {
            return Ok(LevelMask(bits));
        }
        let mut mask = LevelMask::NONE;
        for part in s.split(['|', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            let bits = match part.to_ascii_lowercase().as_str() {
                "all" => LevelMask::ALL,
                "none" => LevelMask::NONE,
                _ => part.parse::<Level>()?.into(),
            };
            mask = mask | bits;
        }
        Ok(mask)
    }
}
