use std::{ops::BitOr, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};

/// Which metadata each line carries ahead of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatFlags(pub u32);

impl FormatFlags {
    pub const NONE: FormatFlags = FormatFlags(0);
    /// Local date: 2009/01/23
    pub const DATE: FormatFlags = FormatFlags(1);
    /// Local time: 01:23:23
    pub const TIME: FormatFlags = FormatFlags(1 << 1);
    /// Microsecond resolution: 01:23:23.123123. Implies TIME.
    pub const MICROSECONDS: FormatFlags = FormatFlags(1 << 2);
    /// Full source path and line: /a/b/c.rs:23
    pub const LONG_FILE: FormatFlags = FormatFlags(1 << 3);
    /// Final path element and line: c.rs:23. Overrides LONG_FILE.
    pub const SHORT_FILE: FormatFlags = FormatFlags(1 << 4);
    /// Use UTC rather than the local time zone.
    pub const UTC: FormatFlags = FormatFlags(1 << 5);
    /// Move the prefix from the start of the line to right before the message.
    pub const MSG_PREFIX: FormatFlags = FormatFlags(1 << 6);
    pub const STD: FormatFlags = FormatFlags(Self::DATE.0 | Self::TIME.0);

    pub fn contains(self, other: FormatFlags) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub(crate) fn wants_timestamp(self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    pub(crate) fn wants_location(self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        FormatFlags::STD
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: Self) -> Self {
        FormatFlags(self.0 | rhs.0)
    }
}

impl FromStr for FormatFlags {
    type Err = LogError;

    /// Accepts a decimal integer or flag names joined by `|` or `,`.
    fn from_str(s: &str) -> LogResult<Self> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u32>() {
            return Ok(FormatFlags(bits));
        }
        let mut flags = FormatFlags::NONE;
        for part in s.split(['|', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            let bits = match part.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
                "none" => FormatFlags::NONE,
                "date" => FormatFlags::DATE,
                "time" => FormatFlags::TIME,
                "microseconds" | "micro" => FormatFlags::MICROSECONDS,
                "longfile" => FormatFlags::LONG_FILE,
                "shortfile" => FormatFlags::SHORT_FILE,
                "utc" => FormatFlags::UTC,
                "msgprefix" => FormatFlags::MSG_PREFIX,
                "std" => FormatFlags::STD,
                _ => return Err(LogError::UnknownFlag(part.to_string())),
            };
            flags = flags | bits;
        }
        Ok(flags)
    }
}
