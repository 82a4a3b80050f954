//! Shared test fixtures.
//!
//! Scenario dataset (relationship signal fixed at 10 unless stated):
//!
//! | client       | primary | revenue | existing                 |
//! |--------------|---------|---------|--------------------------|
//! | Client A     | Content | 2M      | Blog Writing             |
//! | Beacon Retail| Video   | 12M     | Video Production, Logo   |
//! | Cobalt Labs  | Design  | none    | none                     |
//! | Dormant Co   | Content | inactive client                    |
//! | Orphan Inc   | Legacy  | primary unit inactive              |
#![allow(dead_code)]

use chrono::{Duration, Utc};
use crosssell::config::EngineConfig;
use crosssell::domain::entities::business_unit::BusinessUnit;
use crosssell::domain::entities::client::Client;
use crosssell::domain::entities::matrix_item::MatrixItem;
use crosssell::domain::entities::opportunity::Opportunity;
use crosssell::domain::entities::service::Service;
use crosssell::infrastructure::dataset::CrmDataset;
use crosssell::infrastructure::sqlite::crm_repo::SqliteCrmRepo;
use crosssell::CrossSell;
use std::sync::Arc;

pub fn config() -> EngineConfig {
    EngineConfig {
        db_path: ":memory:".into(),
        ..Default::default()
    }
}

pub fn setup() -> CrossSell {
    setup_with(&config(), &scenario_dataset())
}

pub fn setup_with(config: &EngineConfig, dataset: &CrmDataset) -> CrossSell {
    let store = Arc::new(SqliteCrmRepo::open(":memory:").unwrap());
    store.import(dataset).unwrap();
    CrossSell::with_store(store, config)
}

pub fn business_unit(id: &str, name: &str) -> BusinessUnit {
    let mut bu = BusinessUnit::new(name.to_string(), None);
    bu.id = id.to_string();
    bu
}

pub fn service(id: &str, name: &str, category: &str, business_unit_id: &str) -> Service {
    let mut s = Service::new(
        name.to_string(),
        Some(category.to_string()),
        Some(format!("{name} engagements")),
        business_unit_id.to_string(),
    );
    s.id = id.to_string();
    s
}

pub fn client(
    id: &str,
    name: &str,
    industry: &str,
    region: &str,
    primary: &str,
    revenue: Option<f64>,
) -> Client {
    let mut c = Client::new(
        name.to_string(),
        Some(industry.to_string()),
        Some(region.to_string()),
        primary.to_string(),
        revenue,
    );
    c.id = id.to_string();
    c
}

pub fn engagement(id: &str, client_id: &str, service_id: &str, days_ago: i64) -> Opportunity {
    let mut o = Opportunity::new(
        client_id.to_string(),
        Some(service_id.to_string()),
        format!("{client_id} / {service_id}"),
    );
    o.id = id.to_string();
    o.updated_at = Utc::now() - Duration::days(days_ago);
    o
}

pub fn scenario_dataset() -> CrmDataset {
    let mut legacy = business_unit("bu-legacy", "Legacy");
    legacy.active = false;

    let mut retired = service("svc-print", "Print Ads", "Production", "bu-video");
    retired.active = false;

    let mut dormant = client("c-dormant", "Dormant Co", "Media", "NA", "bu-content", Some(9_000_000.0));
    dormant.active = false;

    CrmDataset {
        business_units: vec![
            business_unit("bu-content", "Content"),
            business_unit("bu-video", "Video"),
            business_unit("bu-design", "Design"),
            legacy,
        ],
        services: vec![
            service("svc-blog", "Blog Writing", "Writing", "bu-content"),
            service("svc-copy", "Copywriting", "Writing", "bu-content"),
            service("svc-video", "Video Production", "Production", "bu-video"),
            service("svc-photo", "Photography", "Production", "bu-video"),
            retired,
            service("svc-logo", "Logo Design", "Design", "bu-design"),
            service("svc-brand", "Brand Guidelines", "Writing", "bu-design"),
            service("svc-fax", "Fax Campaigns", "Outbound", "bu-legacy"),
        ],
        clients: vec![
            client("c-a", "Client A", "Media", "NA", "bu-content", Some(2_000_000.0)),
            client("c-beacon", "Beacon Retail", "Retail", "EMEA", "bu-video", Some(12_000_000.0)),
            client("c-cobalt", "Cobalt Labs", "Technology", "EMEA", "bu-design", None),
            dormant,
            client("c-orphan", "Orphan Inc", "Retail", "EMEA", "bu-legacy", Some(1_000_000.0)),
        ],
        opportunities: vec![
            engagement("o-1", "c-a", "svc-blog", 3),
            engagement("o-2", "c-beacon", "svc-video", 30),
            engagement("o-3", "c-beacon", "svc-logo", 7),
            engagement("o-4", "c-dormant", "svc-video", 1),
        ],
    }
}

pub fn find<'a>(items: &'a [MatrixItem], client_id: &str, target_id: &str) -> Option<&'a MatrixItem> {
    items
        .iter()
        .find(|i| i.client_id == client_id && i.target_business_unit_id == target_id)
}

pub fn names(services: &[crosssell::domain::entities::matrix_item::ServiceSummary]) -> Vec<&str> {
    services.iter().map(|s| s.name.as_str()).collect()
}

pub fn scores(items: &[MatrixItem]) -> Vec<u8> {
    items.iter().map(|i| i.opportunity_score.value()).collect()
}
