//! Relationship signal port.
//!
//! The relationship factor is the one scoring term that is not derived from
//! the candidate pairing itself. It is injected through [`RelationshipSignal`]
//! so callers decide what "relationship strength" between two business units
//! means for them, and so that tests can pin it to a known value.

use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::entities::client::Client;

/// What a relationship signal may look at for one candidate pairing.
pub struct RelationshipContext<'a> {
    pub client: &'a Client,
    pub source: &'a BusinessUnit,
    pub target: &'a BusinessUnit,
    /// Active clients whose primary business unit is `source`.
    pub source_peers: usize,
    /// How many of those peers already use a service of `target`.
    pub source_peers_engaged_with_target: usize,
    /// Upper bound the scorer will clamp the returned points to.
    pub cap: f64,
}

/// Produces the relationship factor for a candidate pairing.
///
/// # Example
///
/// ```ignore
/// struct Flat;
///
/// impl RelationshipSignal for Flat {
///     fn name(&self) -> &'static str { "flat" }
///
///     fn points(&self, ctx: &RelationshipContext<'_>) -> f64 {
///         ctx.cap / 2.0
///     }
/// }
/// ```
pub trait RelationshipSignal: Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Points in `[0, ctx.cap]`. Values outside are clamped by the scorer.
    fn points(&self, ctx: &RelationshipContext<'_>) -> f64;

    /// Whether [`RelationshipContext::source_peers`] and
    /// [`RelationshipContext::source_peers_engaged_with_target`] are read.
    /// When false the scorer leaves them at zero and skips counting them.
    fn uses_adoption(&self) -> bool {
        false
    }

    /// Whether two calls with the same context always return the same points.
    fn is_deterministic(&self) -> bool {
        true
    }
}
