//! Opportunity scorer: turns a [`Candidate`] into a [`ScoreBreakdown`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::application::engagement::resolve_engagement;
use crate::application::enumerate::Candidate;
use crate::application::snapshot::SnapshotIndex;
use crate::domain::ports::relationship_signal::{RelationshipContext, RelationshipSignal};
use crate::domain::values::scoring::{
    category_affinity_matches, compute_breakdown, ScoreBreakdown, ScoringConfig,
};

/// Business-unit adoption counts used by relationship signals.
#[derive(Debug, Default)]
pub struct RelationshipStats<'a> {
    peers_by_source: HashMap<&'a str, usize>,
    engaged_by_pair: HashMap<&'a str, HashMap<&'a str, usize>>,
}

impl<'a> RelationshipStats<'a> {
    pub fn build(index: &SnapshotIndex<'a>) -> Self {
        let mut stats = RelationshipStats::default();

        for &client in &index.clients {
            let source = client.primary_business_unit_id.as_str();
            if !index.business_units_by_id.contains_key(source) {
                continue;
            }
            *stats.peers_by_source.entry(source).or_default() += 1;

            let used: HashSet<&str> = resolve_engagement(&client.id, index)
                .services
                .iter()
                .map(|&s| s.business_unit_id.as_str())
                .filter(|bu| *bu != source)
                .collect();
            for target in used {
                *stats
                    .engaged_by_pair
                    .entry(source)
                    .or_default()
                    .entry(target)
                    .or_default() += 1;
            }
        }

        stats
    }

    pub fn peers(&self, source: &str) -> usize {
        self.peers_by_source.get(source).copied().unwrap_or(0)
    }

    pub fn engaged(&self, source: &str, target: &str) -> usize {
        self.engaged_by_pair
            .get(source)
            .and_then(|targets| targets.get(target))
            .copied()
            .unwrap_or(0)
    }
}

pub struct OpportunityScorer {
    config: ScoringConfig,
    relationship: Arc<dyn RelationshipSignal>,
}

impl OpportunityScorer {
    pub fn new(config: ScoringConfig, relationship: Arc<dyn RelationshipSignal>) -> Self {
        Self {
            config,
            relationship,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn relationship(&self) -> &dyn RelationshipSignal {
        self.relationship.as_ref()
    }

    /// Adoption counts for the configured signal; empty when it ignores them.
    pub fn stats_for<'a>(&self, index: &SnapshotIndex<'a>) -> RelationshipStats<'a> {
        if self.relationship.uses_adoption() {
            RelationshipStats::build(index)
        } else {
            RelationshipStats::default()
        }
    }

    pub fn score(&self, candidate: &Candidate<'_>, stats: &RelationshipStats<'_>) -> ScoreBreakdown {
        let ctx = RelationshipContext {
            client: candidate.client,
            source: candidate.source,
            target: candidate.target,
            source_peers: stats.peers(&candidate.source.id),
            source_peers_engaged_with_target: stats
                .engaged(&candidate.source.id, &candidate.target.id),
            cap: self.config.relationship_cap,
        };

        compute_breakdown(
            candidate.potential_services.len(),
            candidate.client.revenue(),
            category_affinity_matches(&candidate.existing_services, &candidate.potential_services),
            self.relationship.points(&ctx),
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::relationship::signal_for;
    use crate::application::snapshot::EntitySnapshot;
    use crate::domain::entities::business_unit::BusinessUnit;
    use crate::domain::entities::client::Client;
    use crate::domain::entities::opportunity::Opportunity;
    use crate::domain::entities::service::Service;
    use crate::domain::values::relationship_mode::RelationshipMode;

    fn snapshot() -> EntitySnapshot {
        let mut content = BusinessUnit::new("Content".into(), None);
        content.id = "bu-content".into();
        let mut video = BusinessUnit::new("Video".into(), None);
        video.id = "bu-video".into();
        let mut clip = Service::new("Clip".into(), None, None, "bu-video".into());
        clip.id = "svc-clip".into();

        let mut first = Client::new("First".into(), None, None, "bu-content".into(), None);
        first.id = "c-1".into();
        let mut second = Client::new("Second".into(), None, None, "bu-content".into(), None);
        second.id = "c-2".into();
        let opp = Opportunity::new("c-1".into(), Some("svc-clip".into()), "clips".into());

        EntitySnapshot {
            clients: vec![first, second],
            business_units: vec![content, video],
            services: vec![clip],
            opportunities: vec![opp],
        }
    }

    fn scorer(mode: RelationshipMode) -> OpportunityScorer {
        OpportunityScorer::new(ScoringConfig::default(), signal_for(mode, 10.0))
    }

    #[test]
    fn test_adoption_counted_only_for_signals_that_read_it() {
        let snap = snapshot();
        let index = SnapshotIndex::build(&snap);

        let historical = scorer(RelationshipMode::Historical).stats_for(&index);
        assert_eq!(historical.peers("bu-content"), 2);
        assert_eq!(historical.engaged("bu-content", "bu-video"), 1);

        let fixed = scorer(RelationshipMode::Fixed).stats_for(&index);
        assert_eq!(fixed.peers("bu-content"), 0);
        assert_eq!(fixed.engaged("bu-content", "bu-video"), 0);
    }
}
