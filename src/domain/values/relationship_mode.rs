use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which relationship signal the scorer is wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipMode {
    /// Constant configured points.
    #[default]
    Fixed,
    /// Share of the source unit's clients already using the target unit.
    Historical,
    /// Uniform random draw. Not reproducible.
    Random,
}

impl fmt::Display for RelationshipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipMode::Fixed => write!(f, "fixed"),
            RelationshipMode::Historical => write!(f, "historical"),
            RelationshipMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for RelationshipMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(RelationshipMode::Fixed),
            "historical" => Ok(RelationshipMode::Historical),
            "random" => Ok(RelationshipMode::Random),
            _ => Err(format!(
                "Unknown relationship mode: {s} (expected fixed, historical or random)"
            )),
        }
    }
}
