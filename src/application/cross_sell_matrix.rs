//! Cross-sell matrix use case: snapshot, enumerate, score, filter, rank.

use serde::Serialize;

use crate::application::enumerate::{enumerate_candidates, Candidate};
use crate::application::matrix_filter::MatrixFilter;
use crate::application::scoring::OpportunityScorer;
use crate::application::snapshot::{EntitySnapshot, SnapshotIndex, SnapshotReader};
use crate::application::summary::MatrixSummary;
use crate::domain::entities::matrix_item::{MatrixItem, ServiceSummary};
use crate::domain::error::DomainError;
use crate::domain::values::opportunity_score::OpportunityScore;
use crate::domain::values::scoring::ScoreBreakdown;

/// A matrix item together with the factors behind its score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    pub item: MatrixItem,
    pub breakdown: ScoreBreakdown,
}

pub struct CrossSellMatrixUseCase {
    reader: SnapshotReader,
    scorer: OpportunityScorer,
    high_opportunity_threshold: OpportunityScore,
}

impl CrossSellMatrixUseCase {
    pub fn new(
        reader: SnapshotReader,
        scorer: OpportunityScorer,
        high_opportunity_threshold: OpportunityScore,
    ) -> Self {
        Self {
            reader,
            scorer,
            high_opportunity_threshold,
        }
    }

    pub fn high_opportunity_threshold(&self) -> OpportunityScore {
        self.high_opportunity_threshold
    }

    /// Generate the matrix for one fresh snapshot and filter/rank it.
    pub fn execute(&self, filter: &MatrixFilter) -> Result<Vec<MatrixItem>, DomainError> {
        let snapshot = self.reader.read()?;
        let index = SnapshotIndex::build(&snapshot);
        let items = self.generate(&index, filter);

        tracing::info!(
            relationship = self.scorer.relationship().name(),
            clients = index.clients.len(),
            business_units = index.business_units.len(),
            items = items.len(),
            "cross-sell matrix generated"
        );

        Ok(filter.apply(items))
    }

    pub fn for_client(&self, client_id: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.execute(&MatrixFilter::for_client(client_id))
    }

    pub fn for_source_business_unit(&self, business_unit_id: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.execute(&MatrixFilter::for_source_business_unit(business_unit_id))
    }

    pub fn for_target_business_unit(&self, business_unit_id: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.execute(&MatrixFilter::for_target_business_unit(business_unit_id))
    }

    pub fn for_industry(&self, industry: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.execute(&MatrixFilter::for_industry(industry))
    }

    pub fn for_region(&self, region: &str) -> Result<Vec<MatrixItem>, DomainError> {
        self.execute(&MatrixFilter::for_region(region))
    }

    /// Items scoring at least `min_score`, or the configured threshold when `None`.
    pub fn high_opportunity(&self, min_score: Option<i64>) -> Result<Vec<MatrixItem>, DomainError> {
        let min = min_score.unwrap_or_else(|| i64::from(self.high_opportunity_threshold.value()));
        self.execute(&MatrixFilter::min_score(min))
    }

    pub fn summary(&self, filter: &MatrixFilter) -> Result<MatrixSummary, DomainError> {
        let snapshot = self.reader.read()?;
        let index = SnapshotIndex::build(&snapshot);
        let items = filter.apply(self.generate(&index, filter));
        Ok(MatrixSummary::from_items(&items))
    }

    /// Score breakdown for one pairing, `None` when it is not a candidate.
    pub fn explain(
        &self,
        client_id: &str,
        target_business_unit_id: &str,
    ) -> Result<Option<ScoredItem>, DomainError> {
        let snapshot = self.reader.read()?;
        Ok(self.explain_in(&snapshot, client_id, target_business_unit_id))
    }

    fn explain_in(
        &self,
        snapshot: &EntitySnapshot,
        client_id: &str,
        target_business_unit_id: &str,
    ) -> Option<ScoredItem> {
        let index = SnapshotIndex::build(snapshot);
        let stats = self.scorer.stats_for(&index);
        let candidate = enumerate_candidates(&index, |client, _, target| {
            client.id == client_id && target.id == target_business_unit_id
        })
        .into_iter()
        .next()?;

        let breakdown = self.scorer.score(&candidate, &stats);
        Some(ScoredItem {
            item: to_item(&candidate, breakdown.total()),
            breakdown,
        })
    }

    fn generate(&self, index: &SnapshotIndex<'_>, filter: &MatrixFilter) -> Vec<MatrixItem> {
        let stats = self.scorer.stats_for(index);
        enumerate_candidates(index, |client, source, target| {
            filter.admits(client, source, target)
        })
        .iter()
        .map(|candidate| to_item(candidate, self.scorer.score(candidate, &stats).total()))
        .collect()
    }
}

fn to_item(candidate: &Candidate<'_>, score: OpportunityScore) -> MatrixItem {
    MatrixItem {
        client_id: candidate.client.id.clone(),
        client_name: candidate.client.name.clone(),
        client_industry: candidate.client.industry.clone(),
        client_region: candidate.client.region.clone(),
        source_business_unit_id: candidate.source.id.clone(),
        source_business_unit_name: candidate.source.name.clone(),
        target_business_unit_id: candidate.target.id.clone(),
        target_business_unit_name: candidate.target.name.clone(),
        potential_services: candidate
            .potential_services
            .iter()
            .map(|&s| ServiceSummary::from(s))
            .collect(),
        existing_services: candidate
            .existing_services
            .iter()
            .map(|&s| ServiceSummary::from(s))
            .collect(),
        opportunity_score: score,
        last_engagement_date: candidate.last_engagement_date,
    }
}
