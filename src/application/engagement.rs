//! Existing-engagement resolution: which services a client already has, and
//! when it was last engaged.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::application::snapshot::SnapshotIndex;
use crate::domain::entities::service::Service;

#[derive(Debug, Clone, Default)]
pub struct ExistingEngagement<'a> {
    /// Distinct services referenced by the client's opportunities, first-seen order.
    pub services: Vec<&'a Service>,
    service_ids: HashSet<&'a str>,
    /// Latest `updated_at` across the client's opportunities.
    pub last_engagement_date: Option<DateTime<Utc>>,
}

impl ExistingEngagement<'_> {
    pub fn has_service(&self, service_id: &str) -> bool {
        self.service_ids.contains(service_id)
    }
}

/// Resolve a client's current engagement from the indexed opportunities.
///
/// Opportunities pointing at a service outside the index (unknown or
/// inactive) still count toward the engagement date.
pub fn resolve_engagement<'a>(client_id: &str, index: &SnapshotIndex<'a>) -> ExistingEngagement<'a> {
    let mut service_ids = HashSet::new();
    let mut services = Vec::new();
    let mut last_engagement_date: Option<DateTime<Utc>> = None;

    for opp in index.opportunities_of(client_id) {
        last_engagement_date = Some(match last_engagement_date {
            Some(current) if current >= opp.updated_at => current,
            _ => opp.updated_at,
        });

        let Some(service_id) = opp.service_id.as_deref() else {
            continue;
        };
        match index.services_by_id.get(service_id) {
            Some(service) => {
                if service_ids.insert(service.id.as_str()) {
                    services.push(*service);
                }
            }
            None => tracing::debug!(
                client_id,
                opportunity_id = %opp.id,
                service_id,
                "opportunity references a service outside the snapshot"
            ),
        }
    }

    ExistingEngagement {
        services,
        service_ids,
        last_engagement_date,
    }
}
