//! Historical relationship signal.
//!
//! Rewards target units that clients of the same source unit already buy
//! from: if 3 of the 4 clients whose primary unit is "Content" also use a
//! "Video" service, every Content→Video pairing gets `0.75 × cap` points.

use crate::domain::ports::relationship_signal::{RelationshipContext, RelationshipSignal};

pub struct HistoricalRelationship;

impl RelationshipSignal for HistoricalRelationship {
    fn name(&self) -> &'static str {
        "historical"
    }

    fn points(&self, ctx: &RelationshipContext<'_>) -> f64 {
        if ctx.source_peers == 0 {
            return 0.0;
        }
        let adoption = ctx.source_peers_engaged_with_target as f64 / ctx.source_peers as f64;
        adoption.clamp(0.0, 1.0) * ctx.cap
    }

    fn uses_adoption(&self) -> bool {
        true
    }
}
