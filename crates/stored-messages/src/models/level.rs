//! Message severity levels

use serde::{Deserialize, Serialize};

/// Severity code of a message
///
/// Levels are plain integers so hosts can define their own. The well-known
/// ones match the host framework's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(10);
    pub const INFO: Level = Level(20);
    pub const SUCCESS: Level = Level(25);
    pub const WARNING: Level = Level(30);
    pub const ERROR: Level = Level(40);

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Default tag for well-known levels, empty for custom ones
    pub fn tag(&self) -> &'static str {
        match *self {
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::SUCCESS => "success",
            Level::WARNING => "warning",
            Level::ERROR => "error",
            _ => "",
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
