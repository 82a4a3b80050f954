//! Loading datasets and reading them back through an on-disk database.

mod common;

use crosssell::application::matrix_filter::MatrixFilter;
use crosssell::config::EngineConfig;
use crosssell::infrastructure::dataset::CrmDataset;
use crosssell::infrastructure::sqlite::crm_repo::SqliteCrmRepo;
use crosssell::CrossSell;

const DATASET_JSON: &str = r#"{
  "businessUnits": [
    {"id": "bu-content", "name": "Content"},
    {"id": "bu-video", "name": "Video"}
  ],
  "clients": [
    {"id": "c-a", "name": "Client A", "industry": "Media", "region": "NA",
     "primaryBusinessUnitId": "bu-content", "annualRevenue": 2000000}
  ],
  "services": [
    {"id": "svc-blog", "name": "Blog Writing", "category": "Writing", "businessUnitId": "bu-content"},
    {"id": "svc-video", "name": "Video Production", "category": "Production", "businessUnitId": "bu-video"},
    {"id": "svc-photo", "name": "Photography", "category": "Production", "businessUnitId": "bu-video"}
  ],
  "opportunities": [
    {"id": "o-1", "clientId": "c-a", "serviceId": "svc-blog", "title": "Blog retainer",
     "updatedAt": "2026-03-01T12:00:00Z"}
  ]
}"#;

#[test]
fn test_dataset_json_applies_defaults() {
    let dataset = CrmDataset::from_json(DATASET_JSON).unwrap();
    assert_eq!(dataset.business_units.len(), 2);
    assert!(dataset.business_units.iter().all(|b| b.active));
    assert!(dataset.clients[0].active);
    assert_eq!(dataset.clients[0].annual_revenue, Some(2_000_000.0));
    assert_eq!(dataset.services[0].description, None);
}

#[test]
fn test_invalid_dataset_is_rejected() {
    let err = CrmDataset::from_json(r#"{"clients": [{"name": "no id"}]}"#).unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_import_into_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("crm.db");
    let db_path = db_path.to_str().unwrap().to_string();

    {
        let store = SqliteCrmRepo::open(&db_path).unwrap();
        let counts = store
            .import(&CrmDataset::from_json(DATASET_JSON).unwrap())
            .unwrap();
        assert_eq!(counts.services, 3);
        assert_eq!(counts.opportunities, 1);
    }

    let config = EngineConfig {
        db_path,
        ..Default::default()
    };
    let cs = CrossSell::new(&config).unwrap();
    let items = cs.matrix(MatrixFilter::default()).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].target_business_unit_name, "Video");
    assert_eq!(items[0].opportunity_score.value(), 36);
    assert_eq!(
        items[0].last_engagement_date.map(|d| d.to_rfc3339()),
        Some("2026-03-01T12:00:00+00:00".to_string())
    );
}

#[tokio::test]
async fn test_reimport_replaces_records() {
    let store = std::sync::Arc::new(SqliteCrmRepo::open(":memory:").unwrap());
    let mut dataset = CrmDataset::from_json(DATASET_JSON).unwrap();
    store.import(&dataset).unwrap();

    dataset.services.retain(|s| s.id != "svc-photo");
    dataset.clients[0].annual_revenue = Some(10_000_000.0);
    store.import(&dataset).unwrap();

    let cs = CrossSell::with_store(store, &common::config());
    let items = cs.matrix(MatrixFilter::default()).await.unwrap();

    // INSERT OR REPLACE keeps Photography; revenue is updated: 20 + 30 + 0 + 10
    assert_eq!(items[0].potential_services.len(), 2);
    assert_eq!(items[0].opportunity_score.value(), 60);
}
