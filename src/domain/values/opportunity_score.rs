use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer opportunity score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OpportunityScore(u8);

impl OpportunityScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, String> {
        if value > Self::MAX {
            return Err(format!(
                "Opportunity score must be between 0 and {}, got {value}",
                Self::MAX
            ));
        }
        Ok(OpportunityScore(value))
    }

    /// Round a raw factor sum and clamp it into range.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return OpportunityScore(0);
        }
        OpportunityScore(raw.round().clamp(0.0, Self::MAX as f64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OpportunityScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        OpportunityScore::new(value)
    }
}

impl From<OpportunityScore> for u8 {
    fn from(score: OpportunityScore) -> Self {
        score.0
    }
}

impl fmt::Display for OpportunityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
