//! JSON dataset used to load a CRM snapshot into storage.
//!
//! ```json
//! {
//!   "businessUnits": [{"id": "bu-content", "name": "Content"}],
//!   "clients": [{"id": "c-1", "name": "Acme", "primaryBusinessUnitId": "bu-content"}],
//!   "services": [{"id": "s-1", "name": "Blog Writing", "category": "Writing", "businessUnitId": "bu-content"}],
//!   "opportunities": [{"id": "o-1", "clientId": "c-1", "serviceId": "s-1", "title": "Blog retainer"}]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::entities::business_unit::BusinessUnit;
use crate::domain::entities::client::Client;
use crate::domain::entities::opportunity::Opportunity;
use crate::domain::entities::service::Service;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmDataset {
    #[serde(default)]
    pub business_units: Vec<BusinessUnit>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCounts {
    pub business_units: usize,
    pub clients: usize,
    pub services: usize,
    pub opportunities: usize,
}

impl CrmDataset {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("Invalid dataset JSON: {e}")))
    }
}
