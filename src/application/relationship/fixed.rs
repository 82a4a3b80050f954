use crate::domain::ports::relationship_signal::{RelationshipContext, RelationshipSignal};

/// Same points for every pairing.
pub struct FixedRelationship {
    points: f64,
}

impl FixedRelationship {
    pub fn new(points: f64) -> Self {
        Self { points }
    }
}

impl Default for FixedRelationship {
    /// Ten points: the expected value of a uniform draw over `[0, 20)`.
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl RelationshipSignal for FixedRelationship {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn points(&self, _ctx: &RelationshipContext<'_>) -> f64 {
        self.points
    }
}
