use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Free-text grouping used for category-affinity scoring.
    pub category: Option<String>,
    pub description: Option<String>,
    pub business_unit_id: String,
    #[serde(default = "super::active_by_default")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn new(
        name: String,
        category: Option<String>,
        description: Option<String>,
        business_unit_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            category,
            description,
            business_unit_id,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
