//! Built-in [`RelationshipSignal`] implementations.

pub mod fixed;
pub mod historical;
pub mod random;

use std::sync::Arc;

use crate::domain::ports::relationship_signal::RelationshipSignal;
use crate::domain::values::relationship_mode::RelationshipMode;

use self::fixed::FixedRelationship;
use self::historical::HistoricalRelationship;
use self::random::RandomRelationship;

/// Build the signal for a configured mode. `fixed_points` is only used by
/// [`RelationshipMode::Fixed`].
pub fn signal_for(mode: RelationshipMode, fixed_points: f64) -> Arc<dyn RelationshipSignal> {
    match mode {
        RelationshipMode::Fixed => Arc::new(FixedRelationship::new(fixed_points)),
        RelationshipMode::Historical => Arc::new(HistoricalRelationship),
        RelationshipMode::Random => Arc::new(RandomRelationship),
    }
}
