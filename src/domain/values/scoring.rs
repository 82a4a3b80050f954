//! Opportunity scoring model.
//!
//! A cross-sell candidate is scored with an additive model of four factors.
//! Each factor is capped before summing, so no single factor can push the
//! total beyond its own budget:
//!
//! | factor            | formula                               | cap |
//! |-------------------|---------------------------------------|-----|
//! | breadth           | `potential_services × 10`             | 30  |
//! | client value      | `revenue / 1_000_000 × 3`             | 30  |
//! | category affinity | `matching_potential_services × 5`     | 20  |
//! | relationship      | supplied by a relationship signal     | 20  |
//!
//! The final score is the rounded sum, clamped to `0..=100`.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::service::Service;
use crate::domain::values::opportunity_score::OpportunityScore;

/// Multipliers and caps for each scoring factor.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringConfig {
    /// Points per cross-sellable service.
    pub breadth_points_per_service: f64,
    pub breadth_cap: f64,
    /// Points per one million of client value.
    pub value_points_per_million: f64,
    pub value_cap: f64,
    /// Points per potential service sharing a category with an existing one.
    pub affinity_points_per_match: f64,
    pub affinity_cap: f64,
    /// Upper bound for whatever the relationship signal returns.
    pub relationship_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            breadth_points_per_service: 10.0,
            breadth_cap: 30.0,
            value_points_per_million: 3.0,
            value_cap: 30.0,
            affinity_points_per_match: 5.0,
            affinity_cap: 20.0,
            relationship_cap: 20.0,
        }
    }
}

/// Per-factor contributions of a single score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub breadth: f64,
    pub client_value: f64,
    pub category_affinity: f64,
    pub relationship: f64,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> f64 {
        self.breadth + self.client_value + self.category_affinity + self.relationship
    }

    pub fn total(&self) -> OpportunityScore {
        OpportunityScore::from_raw(self.raw_total())
    }
}

/// Count potential services whose category already appears among the
/// client's existing services. Services without a category never match.
pub fn category_affinity_matches(existing: &[&Service], potential: &[&Service]) -> usize {
    let existing_categories: HashSet<&str> = existing
        .iter()
        .filter_map(|s| s.category.as_deref())
        .collect();

    potential
        .iter()
        .filter_map(|s| s.category.as_deref())
        .filter(|c| existing_categories.contains(c))
        .count()
}

/// Combine raw factor inputs into a capped breakdown.
///
/// Negative or non-finite inputs contribute nothing.
pub fn compute_breakdown(
    potential_count: usize,
    client_value: f64,
    affinity_matches: usize,
    relationship_points: f64,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    ScoreBreakdown {
        breadth: capped(
            potential_count as f64 * config.breadth_points_per_service,
            config.breadth_cap,
        ),
        client_value: capped(
            client_value / 1_000_000.0 * config.value_points_per_million,
            config.value_cap,
        ),
        category_affinity: capped(
            affinity_matches as f64 * config.affinity_points_per_match,
            config.affinity_cap,
        ),
        relationship: capped(relationship_points, config.relationship_cap),
    }
}

fn capped(value: f64, cap: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    value.min(cap)
}
