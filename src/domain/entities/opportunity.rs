use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An existing engagement between a client and (optionally) one service.
///
/// The matrix engine only reads these to learn which services a client
/// already has and when the client was last engaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub client_id: String,
    pub service_id: Option<String>,
    pub title: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Opportunity {
    pub fn new(client_id: String, service_id: Option<String>, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_id,
            service_id,
            title,
            created_at: now,
            updated_at: now,
        }
    }
}
