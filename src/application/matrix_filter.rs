//! Filter and sort pipeline for generated matrix items.

use serde::{Deserialize, Serialize};

use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::entities::client::Client;
use crate::domain::entities::matrix_item::MatrixItem;
use crate::domain::error::DomainError;

/// Validated matrix filter. Every field is optional and all present fields
/// must hold (logical AND). String matches are exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixFilter {
    pub client_id: Option<String>,
    pub client_industry: Option<String>,
    pub client_region: Option<String>,
    pub source_business_unit_id: Option<String>,
    pub target_business_unit_id: Option<String>,
    /// Inclusive lower bound on the score. Not clamped: above 100 keeps
    /// nothing, below 0 keeps everything.
    pub min_opportunity_score: Option<i64>,
    /// Keep only the first `limit` items after sorting.
    pub limit: Option<usize>,
}

impl MatrixFilter {
    pub fn for_client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Default::default()
        }
    }

    pub fn for_source_business_unit(business_unit_id: impl Into<String>) -> Self {
        Self {
            source_business_unit_id: Some(business_unit_id.into()),
            ..Default::default()
        }
    }

    pub fn for_target_business_unit(business_unit_id: impl Into<String>) -> Self {
        Self {
            target_business_unit_id: Some(business_unit_id.into()),
            ..Default::default()
        }
    }

    pub fn for_industry(industry: impl Into<String>) -> Self {
        Self {
            client_industry: Some(industry.into()),
            ..Default::default()
        }
    }

    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            client_region: Some(region.into()),
            ..Default::default()
        }
    }

    pub fn min_score(score: i64) -> Self {
        Self {
            min_opportunity_score: Some(score),
            ..Default::default()
        }
    }

    /// Pre-score check of a pairing against the fields that do not depend
    /// on the score. Pairings rejected here can never pass [`Self::matches`].
    pub fn admits(&self, client: &Client, source: &BusinessUnit, target: &BusinessUnit) -> bool {
        eq_opt(&self.client_id, Some(&client.id))
            && eq_opt(&self.client_industry, client.industry.as_ref())
            && eq_opt(&self.client_region, client.region.as_ref())
            && eq_opt(&self.source_business_unit_id, Some(&source.id))
            && eq_opt(&self.target_business_unit_id, Some(&target.id))
    }

    pub fn matches(&self, item: &MatrixItem) -> bool {
        eq_opt(&self.client_id, Some(&item.client_id))
            && eq_opt(&self.client_industry, item.client_industry.as_ref())
            && eq_opt(&self.client_region, item.client_region.as_ref())
            && eq_opt(&self.source_business_unit_id, Some(&item.source_business_unit_id))
            && eq_opt(&self.target_business_unit_id, Some(&item.target_business_unit_id))
            && self
                .min_opportunity_score
                .map_or(true, |min| i64::from(item.opportunity_score.value()) >= min)
    }

    /// Filter, sort by score descending and apply the limit.
    pub fn apply(&self, items: Vec<MatrixItem>) -> Vec<MatrixItem> {
        let mut kept: Vec<MatrixItem> = items.into_iter().filter(|i| self.matches(i)).collect();
        sort_matrix(&mut kept);
        if let Some(max) = self.limit {
            kept.truncate(max);
        }
        kept
    }
}

fn eq_opt(wanted: &Option<String>, actual: Option<&String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}

/// Score descending; ties by client name, target unit name, then client id.
pub fn sort_matrix(items: &mut [MatrixItem]) {
    items.sort_by(|a, b| {
        b.opportunity_score
            .cmp(&a.opportunity_score)
            .then_with(|| a.client_name.cmp(&b.client_name))
            .then_with(|| a.target_business_unit_name.cmp(&b.target_business_unit_name))
            .then_with(|| a.client_id.cmp(&b.client_id))
    });
}

/// Unvalidated filter as it arrives from a query string or the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixQuery {
    pub client_id: Option<String>,
    pub client_industry: Option<String>,
    pub client_region: Option<String>,
    pub source_business_unit_id: Option<String>,
    pub target_business_unit_id: Option<String>,
    pub min_opportunity_score: Option<String>,
    pub limit: Option<String>,
}

impl TryFrom<MatrixQuery> for MatrixFilter {
    type Error = DomainError;

    fn try_from(query: MatrixQuery) -> Result<Self, Self::Error> {
        Ok(MatrixFilter {
            client_id: non_blank(query.client_id),
            client_industry: non_blank(query.client_industry),
            client_region: non_blank(query.client_region),
            source_business_unit_id: non_blank(query.source_business_unit_id),
            target_business_unit_id: non_blank(query.target_business_unit_id),
            min_opportunity_score: non_blank(query.min_opportunity_score)
                .map(|raw| parse_score("minOpportunityScore", &raw))
                .transpose()?,
            limit: non_blank(query.limit)
                .map(|raw| parse_limit("limit", &raw))
                .transpose()?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a score threshold. Any integer is accepted; thresholds outside
/// `0..=100` simply match nothing or everything.
pub fn parse_score(field: &'static str, raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::invalid_filter(field, raw, "expected an integer"))
}

pub fn parse_limit(field: &'static str, raw: &str) -> Result<usize, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::invalid_filter(field, raw, "expected a non-negative integer"))
}
