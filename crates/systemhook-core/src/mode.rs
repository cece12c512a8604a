//! Capture modes understood by the native hook library.
//!
//! The native side consumes these by ordinal, so the order of the variants is
//! part of the contract and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the native hook captures keyboard and mouse events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalHookMode {
    /// Capture via the low-level system hook; hooks registered after this one
    /// are still invoked.
    #[default]
    Default,
    /// Capture via the low-level system hook without invoking any further hooks.
    Final,
    /// Capture raw input, which carries additional device information.
    Raw,
}

impl GlobalHookMode {
    /// All modes in ordinal order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Final, Self::Raw];

    /// Ordinal passed across the native boundary.
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Final => 1,
            Self::Raw => 2,
        }
    }

    /// Look up a mode by its native ordinal.
    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Default),
            1 => Some(Self::Final),
            2 => Some(Self::Raw),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Final => "final",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for GlobalHookMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`GlobalHookMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hook mode '{0}' (expected default, final or raw)")]
pub struct ParseModeError(pub String);

impl FromStr for GlobalHookMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "final" => Ok(Self::Final),
            "raw" => Ok(Self::Raw),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
