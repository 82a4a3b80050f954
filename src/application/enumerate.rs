//! Candidate enumeration: every (active client, active non-primary business
//! unit) pairing that still has at least one service to pitch.

use chrono::{DateTime, Utc};

use crate::application::engagement::resolve_engagement;
use crate::application::snapshot::SnapshotIndex;
use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::entities::client::Client;
use crate::domain::entities::service::Service;

/// An unscored cross-sell pairing.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub client: &'a Client,
    pub source: &'a BusinessUnit,
    pub target: &'a BusinessUnit,
    pub potential_services: Vec<&'a Service>,
    pub existing_services: Vec<&'a Service>,
    pub last_engagement_date: Option<DateTime<Utc>>,
}

/// Enumerate candidates in snapshot order (clients, then business units).
///
/// `admit` is asked about each (client, source, target) pairing before any
/// service arithmetic happens; pairings it rejects are skipped.
pub fn enumerate_candidates<'a, F>(index: &SnapshotIndex<'a>, admit: F) -> Vec<Candidate<'a>>
where
    F: Fn(&Client, &BusinessUnit, &BusinessUnit) -> bool,
{
    let mut candidates = Vec::new();

    for &client in &index.clients {
        let Some(&source) = index
            .business_units_by_id
            .get(client.primary_business_unit_id.as_str())
        else {
            tracing::warn!(
                client_id = %client.id,
                business_unit_id = %client.primary_business_unit_id,
                "client skipped: primary business unit is missing or inactive"
            );
            continue;
        };

        let engagement = resolve_engagement(&client.id, index);

        for &target in &index.business_units {
            if target.id == source.id || !admit(client, source, target) {
                continue;
            }

            let potential_services: Vec<&Service> = index
                .services_of(&target.id)
                .iter()
                .copied()
                .filter(|s| !engagement.has_service(&s.id))
                .collect();

            if potential_services.is_empty() {
                continue;
            }

            candidates.push(Candidate {
                client,
                source,
                target,
                potential_services,
                existing_services: engagement.services.clone(),
                last_engagement_date: engagement.last_engagement_date,
            });
        }
    }

    candidates
}
