use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::matrix_item::MatrixItem;

/// Roll-up of a filtered matrix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    pub generated_at: DateTime<Utc>,
    /// Distinct clients among the summarised items.
    pub distinct_clients: usize,
    /// Distinct business units among the summarised items, source or target.
    pub distinct_business_units: usize,
    pub total_items: usize,
    pub average_score: f64,
    pub by_target_business_unit: Vec<BusinessUnitRollup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnitRollup {
    pub business_unit_id: String,
    pub business_unit_name: String,
    pub items: usize,
    pub average_score: f64,
    pub top_score: u8,
}

impl MatrixSummary {
    pub fn from_items(items: &[MatrixItem]) -> Self {
        let mut groups: HashMap<&str, (&str, Vec<u8>)> = HashMap::new();
        for item in items {
            groups
                .entry(item.target_business_unit_id.as_str())
                .or_insert_with(|| (item.target_business_unit_name.as_str(), Vec::new()))
                .1
                .push(item.opportunity_score.value());
        }

        let mut by_target_business_unit: Vec<BusinessUnitRollup> = groups
            .into_iter()
            .map(|(id, (name, scores))| BusinessUnitRollup {
                business_unit_id: id.to_string(),
                business_unit_name: name.to_string(),
                items: scores.len(),
                average_score: mean(&scores),
                top_score: scores.iter().copied().max().unwrap_or(0),
            })
            .collect();
        by_target_business_unit.sort_by(|a, b| {
            b.items
                .cmp(&a.items)
                .then_with(|| a.business_unit_name.cmp(&b.business_unit_name))
        });

        let clients: HashSet<&str> = items.iter().map(|i| i.client_id.as_str()).collect();
        let business_units: HashSet<&str> = items
            .iter()
            .flat_map(|i| [i.source_business_unit_id.as_str(), i.target_business_unit_id.as_str()])
            .collect();

        let all: Vec<u8> = items.iter().map(|i| i.opportunity_score.value()).collect();

        Self {
            generated_at: Utc::now(),
            distinct_clients: clients.len(),
            distinct_business_units: business_units.len(),
            total_items: items.len(),
            average_score: mean(&all),
            by_target_business_unit,
        }
    }
}

fn mean(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u32 = scores.iter().map(|&s| s as u32).sum();
    // two decimals are enough for a dashboard figure
    (sum as f64 / scores.len() as f64 * 100.0).round() / 100.0
}
