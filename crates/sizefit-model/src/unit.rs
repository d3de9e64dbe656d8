use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chart::ShoeEntry;

/// One sizing-system axis of a shoe chart. Each variant corresponds to a
/// column of the array-layout chart and doubles as the conversion key the
/// matcher compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Foot length in centimeters (`length_cm` in chart files).
    Cm,
    /// US men's sizing.
    UsMen,
    /// US women's sizing.
    UsWomen,
    /// UK sizing.
    Uk,
    /// EU sizing.
    Eu,
}

/// Canonical column order for shoe tables: CM, US Men, US Women, UK, EU.
pub const ALL_UNITS: [Unit; 5] = [Unit::Cm, Unit::UsMen, Unit::UsWomen, Unit::Uk, Unit::Eu];

impl Unit {
    /// The canonical key used in chart JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::UsMen => "us_men",
            Unit::UsWomen => "us_women",
            Unit::Uk => "uk",
            Unit::Eu => "eu",
        }
    }

    /// Default English column label, used when no locale dictionary applies.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Cm => "CM",
            Unit::UsMen => "US Men",
            Unit::UsWomen => "US Women",
            Unit::Uk => "UK",
            Unit::Eu => "EU",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    /// Parse a unit key. Accepts the raw chart-file spellings
    /// (case-insensitive, `-` treated as `_`); `length_cm` aliases `cm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "cm" | "length_cm" => Ok(Unit::Cm),
            "us_men" | "us men" => Ok(Unit::UsMen),
            "us_women" | "us women" => Ok(Unit::UsWomen),
            "uk" => Ok(Unit::Uk),
            "eu" => Ok(Unit::Eu),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

/// Units exposed by a shoe table, derived from its first entry.
///
/// A unit is offered only when the leading record carries a non-empty
/// value for it; an empty table offers nothing.
pub fn available_units(entries: &[ShoeEntry]) -> Vec<Unit> {
    let Some(first) = entries.first() else {
        return Vec::new();
    };
    ALL_UNITS
        .into_iter()
        .filter(|unit| first.value(*unit).is_some())
        .collect()
}
