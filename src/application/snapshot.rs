//! Entity snapshot reader and per-call index.
//!
//! Every matrix query starts by reading one snapshot of the four CRM
//! collections and indexing it. Nothing is cached between calls.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::entities::client::Client;
use crate::domain::entities::opportunity::Opportunity;
use crate::domain::entities::service::Service;
use crate::domain::error::DomainError;
use crate::domain::ports::business_unit_repository::BusinessUnitRepository;
use crate::domain::ports::client_repository::ClientRepository;
use crate::domain::ports::opportunity_repository::OpportunityRepository;
use crate::domain::ports::service_repository::ServiceRepository;

/// Active clients, business units and services, plus every opportunity.
#[derive(Debug, Clone, Default)]
pub struct EntitySnapshot {
    pub clients: Vec<Client>,
    pub business_units: Vec<BusinessUnit>,
    pub services: Vec<Service>,
    pub opportunities: Vec<Opportunity>,
}

pub struct SnapshotReader {
    clients: Arc<dyn ClientRepository>,
    business_units: Arc<dyn BusinessUnitRepository>,
    services: Arc<dyn ServiceRepository>,
    opportunities: Arc<dyn OpportunityRepository>,
}

impl SnapshotReader {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        business_units: Arc<dyn BusinessUnitRepository>,
        services: Arc<dyn ServiceRepository>,
        opportunities: Arc<dyn OpportunityRepository>,
    ) -> Self {
        Self {
            clients,
            business_units,
            services,
            opportunities,
        }
    }

    /// Read all four collections. The first failing read aborts the snapshot.
    pub fn read(&self) -> Result<EntitySnapshot, DomainError> {
        let snapshot = EntitySnapshot {
            clients: self.clients.list_clients(true)?,
            business_units: self.business_units.list_business_units(true)?,
            services: self.services.list_services(true)?,
            opportunities: self.opportunities.list_opportunities()?,
        };

        tracing::debug!(
            clients = snapshot.clients.len(),
            business_units = snapshot.business_units.len(),
            services = snapshot.services.len(),
            opportunities = snapshot.opportunities.len(),
            "snapshot read"
        );

        Ok(snapshot)
    }
}

/// Lookup maps over a snapshot, built once per query.
///
/// Inactive records that slipped through a repository are dropped here, so
/// every reference reachable from the index is active.
pub struct SnapshotIndex<'a> {
    pub clients: Vec<&'a Client>,
    pub business_units: Vec<&'a BusinessUnit>,
    pub business_units_by_id: HashMap<&'a str, &'a BusinessUnit>,
    pub services_by_id: HashMap<&'a str, &'a Service>,
    pub services_by_business_unit: HashMap<&'a str, Vec<&'a Service>>,
    pub opportunities_by_client: HashMap<&'a str, Vec<&'a Opportunity>>,
}

impl<'a> SnapshotIndex<'a> {
    pub fn build(snapshot: &'a EntitySnapshot) -> Self {
        let clients: Vec<&Client> = snapshot.clients.iter().filter(|c| c.active).collect();
        let business_units: Vec<&BusinessUnit> = snapshot
            .business_units
            .iter()
            .filter(|b| b.active)
            .collect();

        let business_units_by_id: HashMap<&str, &BusinessUnit> =
            business_units.iter().map(|&b| (b.id.as_str(), b)).collect();

        let mut services_by_id = HashMap::new();
        let mut services_by_business_unit: HashMap<&str, Vec<&Service>> = HashMap::new();
        for service in snapshot.services.iter().filter(|s| s.active) {
            services_by_id.insert(service.id.as_str(), service);
            services_by_business_unit
                .entry(service.business_unit_id.as_str())
                .or_default()
                .push(service);
        }

        let mut opportunities_by_client: HashMap<&str, Vec<&Opportunity>> = HashMap::new();
        for opp in &snapshot.opportunities {
            opportunities_by_client
                .entry(opp.client_id.as_str())
                .or_default()
                .push(opp);
        }

        Self {
            clients,
            business_units,
            business_units_by_id,
            services_by_id,
            services_by_business_unit,
            opportunities_by_client,
        }
    }

    pub fn services_of(&self, business_unit_id: &str) -> &[&'a Service] {
        self.services_by_business_unit
            .get(business_unit_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn opportunities_of(&self, client_id: &str) -> &[&'a Opportunity] {
        self.opportunities_by_client
            .get(client_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
