//! Belgian regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCode;

/// Region choices as (code, label) pairs, in display order.
pub const REGION_CHOICES: [(&str, &str); 3] = [
    ("BRU", "Brussels Capital Region"),
    ("VLG", "Flemish Region"),
    ("WAL", "Wallonia"),
];

/// One of the three regions of Belgium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Brussels-Capital Region (`BRU`).
    #[serde(rename = "BRU")]
    Brussels,
    /// Flemish Region (`VLG`).
    #[serde(rename = "VLG")]
    Flanders,
    /// Walloon Region (`WAL`).
    #[serde(rename = "WAL")]
    Wallonia,
}

impl Region {
    /// All regions, in the order of [`REGION_CHOICES`].
    pub const ALL: [Self; 3] = [Self::Brussels, Self::Flanders, Self::Wallonia];

    /// Returns the choice value.
    pub const fn code(self) -> &'static str {
        REGION_CHOICES[self as usize].0
    }

    /// Returns the untranslated display label.
    pub const fn label(self) -> &'static str {
        REGION_CHOICES[self as usize].1
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = UnknownCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| UnknownCode::new("region", code))
    }
}
