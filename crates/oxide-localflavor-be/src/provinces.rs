//! Belgian provinces.
//!
//! Brussels is listed alongside the ten provinces: the capital region
//! belongs to none of them but is addressed like one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCode;

/// Province choices as (code, label) pairs, in display order.
pub const PROVINCE_CHOICES: [(&str, &str); 11] = [
    ("VAN", "Antwerp"),
    ("BRU", "Brussels"),
    ("VOV", "East Flanders"),
    ("VBR", "Flemish Brabant"),
    ("WHT", "Hainaut"),
    ("WLG", "Liege"),
    ("VLI", "Limburg"),
    ("WLX", "Luxembourg"),
    ("WNA", "Namur"),
    ("WBR", "Walloon Brabant"),
    ("VWV", "West Flanders"),
];

/// A province of Belgium, or Brussels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    /// Antwerp (`VAN`).
    #[serde(rename = "VAN")]
    Antwerp,
    /// Brussels-Capital Region (`BRU`).
    #[serde(rename = "BRU")]
    Brussels,
    /// East Flanders (`VOV`).
    #[serde(rename = "VOV")]
    EastFlanders,
    /// Flemish Brabant (`VBR`).
    #[serde(rename = "VBR")]
    FlemishBrabant,
    /// Hainaut (`WHT`).
    #[serde(rename = "WHT")]
    Hainaut,
    /// Liège (`WLG`).
    #[serde(rename = "WLG")]
    Liege,
    /// Limburg (`VLI`).
    #[serde(rename = "VLI")]
    Limburg,
    /// Luxembourg (`WLX`).
    #[serde(rename = "WLX")]
    Luxembourg,
    /// Namur (`WNA`).
    #[serde(rename = "WNA")]
    Namur,
    /// Walloon Brabant (`WBR`).
    #[serde(rename = "WBR")]
    WalloonBrabant,
    /// West Flanders (`VWV`).
    #[serde(rename = "VWV")]
    WestFlanders,
}

impl Province {
    /// All provinces, in the order of [`PROVINCE_CHOICES`].
    pub const ALL: [Self; 11] = [
        Self::Antwerp,
        Self::Brussels,
        Self::EastFlanders,
        Self::FlemishBrabant,
        Self::Hainaut,
        Self::Liege,
        Self::Limburg,
        Self::Luxembourg,
        Self::Namur,
        Self::WalloonBrabant,
        Self::WestFlanders,
    ];

    /// Returns the choice value.
    pub const fn code(self) -> &'static str {
        PROVINCE_CHOICES[self as usize].0
    }

    /// Returns the untranslated display label.
    pub const fn label(self) -> &'static str {
        PROVINCE_CHOICES[self as usize].1
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Province {
    type Err = UnknownCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|province| province.code() == code)
            .ok_or_else(|| UnknownCode::new("province", code))
    }
}
