use rand::Rng;

use crate::domain::ports::relationship_signal::{RelationshipContext, RelationshipSignal};

/// Uniform draw in `[0, cap)` on every call.
///
/// Identical snapshots produce different scores across calls, so results
/// are neither reproducible nor cacheable. Only selected explicitly.
pub struct RandomRelationship;

impl RelationshipSignal for RandomRelationship {
    fn name(&self) -> &'static str {
        "random"
    }

    fn points(&self, ctx: &RelationshipContext<'_>) -> f64 {
        if ctx.cap <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(0.0..ctx.cap)
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}
