use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::service::Service;
use crate::domain::values::opportunity_score::OpportunityScore;

/// Wire form of a service inside a [`MatrixItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl From<&Service> for ServiceSummary {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            category: service.category.clone(),
            description: service.description.clone(),
        }
    }
}

/// One scored (client, target business unit) cross-sell candidate.
///
/// Built fresh for every query and never persisted. `potential_services`
/// is never empty and never shares a service with `existing_services`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixItem {
    pub client_id: String,
    pub client_name: String,
    pub client_industry: Option<String>,
    pub client_region: Option<String>,
    pub source_business_unit_id: String,
    pub source_business_unit_name: String,
    pub target_business_unit_id: String,
    pub target_business_unit_name: String,
    pub potential_services: Vec<ServiceSummary>,
    pub existing_services: Vec<ServiceSummary>,
    pub opportunity_score: OpportunityScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_engagement_date: Option<DateTime<Utc>>,
}
