use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub primary_business_unit_id: String,
    /// Monetary value used for scoring. Treated as zero when absent.
    pub annual_revenue: Option<f64>,
    #[serde(default = "super::active_by_default")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn new(
        name: String,
        industry: Option<String>,
        region: Option<String>,
        primary_business_unit_id: String,
        annual_revenue: Option<f64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            industry,
            region,
            primary_business_unit_id,
            annual_revenue,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn revenue(&self) -> f64 {
        self.annual_revenue.unwrap_or(0.0)
    }
}
