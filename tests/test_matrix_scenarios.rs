//! Concrete matrix scenarios with hand-computed scores.

mod common;

use common::{business_unit, client, config, engagement, find, names, scores, service, setup, setup_with};
use crosssell::domain::values::relationship_mode::RelationshipMode;
use crosssell::infrastructure::dataset::CrmDataset;

#[tokio::test]
async fn test_client_a_video_pairing() {
    let cs = setup();
    let items = cs.matrix_for_client("c-a").await.unwrap();

    let video: Vec<_> = items
        .iter()
        .filter(|i| i.target_business_unit_name == "Video")
        .collect();
    assert_eq!(video.len(), 1);
    let item = video[0];

    assert_eq!(names(&item.potential_services), vec!["Video Production", "Photography"]);
    assert_eq!(names(&item.existing_services), vec!["Blog Writing"]);
    assert_eq!(item.source_business_unit_name, "Content");
    // breadth 20 + value 6 + affinity 0 + relationship 10
    assert_eq!(item.opportunity_score.value(), 36);
}

#[tokio::test]
async fn test_client_a_breakdown_factors() {
    let cs = setup();
    let scored = cs.explain("c-a", "bu-video").await.unwrap().expect("candidate");

    assert_eq!(scored.breakdown.breadth, 20.0);
    assert_eq!(scored.breakdown.client_value, 6.0);
    assert_eq!(scored.breakdown.category_affinity, 0.0);
    assert_eq!(scored.breakdown.relationship, 10.0);
    assert_eq!(scored.item.opportunity_score.value(), 36);
}

#[tokio::test]
async fn test_explain_returns_none_for_own_unit() {
    let cs = setup();
    assert!(cs.explain("c-a", "bu-content").await.unwrap().is_none());
    assert!(cs.explain("c-a", "bu-nowhere").await.unwrap().is_none());
}

#[tokio::test]
async fn test_category_affinity_rewards_existing_categories() {
    let cs = setup();
    let items = cs.matrix_for_client("c-a").await.unwrap();

    // Brand Guidelines shares "Writing" with Blog Writing: +5
    let design = find(&items, "c-a", "bu-design").unwrap();
    assert_eq!(design.opportunity_score.value(), 41);
    assert_eq!(items[0].target_business_unit_id, "bu-design");
}

#[tokio::test]
async fn test_full_matrix_ranking() {
    let cs = setup();
    let items = cs.matrix(Default::default()).await.unwrap();

    let pairs: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i.client_id.as_str(), i.target_business_unit_id.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("c-beacon", "bu-content"),
            ("c-beacon", "bu-design"),
            ("c-a", "bu-design"),
            ("c-a", "bu-video"),
            ("c-cobalt", "bu-content"),
            ("c-cobalt", "bu-video"),
        ]
    );
    assert_eq!(scores(&items), vec![60, 50, 41, 36, 30, 30]);
}

#[tokio::test]
async fn test_already_engaged_service_is_not_proposed() {
    let cs = setup();
    let items = cs.matrix_for_client("c-beacon").await.unwrap();

    let design = find(&items, "c-beacon", "bu-design").unwrap();
    assert_eq!(names(&design.potential_services), vec!["Brand Guidelines"]);
    assert_eq!(
        names(&design.existing_services),
        vec!["Video Production", "Logo Design"]
    );
}

#[tokio::test]
async fn test_inactive_records_are_ignored() {
    let cs = setup();
    let items = cs.matrix(Default::default()).await.unwrap();

    assert!(items.iter().all(|i| i.client_id != "c-dormant"));
    assert!(items.iter().all(|i| i.client_id != "c-orphan"));
    assert!(items.iter().all(|i| i.target_business_unit_id != "bu-legacy"));
    assert!(items
        .iter()
        .flat_map(|i| i.potential_services.iter())
        .all(|s| s.id != "svc-print"));
}

#[tokio::test]
async fn test_last_engagement_date() {
    let data = common::scenario_dataset();
    let cs = setup_with(&config(), &data);
    let items = cs.matrix_for_client("c-beacon").await.unwrap();

    let latest = data
        .opportunities
        .iter()
        .filter(|o| o.client_id == "c-beacon")
        .map(|o| o.updated_at)
        .max();
    assert!(items.iter().all(|i| i.last_engagement_date == latest));

    let cobalt = cs.matrix_for_client("c-cobalt").await.unwrap();
    assert!(cobalt.iter().all(|i| i.last_engagement_date.is_none()));
}

#[tokio::test]
async fn test_high_opportunity_above_85_is_empty() {
    let cs = setup();
    let items = cs
        .high_opportunity_matrix(Some(90))
        .await
        .unwrap();
    assert!(items.is_empty());

    let all = cs.matrix(Default::default()).await.unwrap();
    assert!(all.iter().all(|i| i.opportunity_score.value() <= 85));
}

#[tokio::test]
async fn test_high_opportunity_defaults_to_seventy() {
    let mut cfg = config();
    cfg.relationship_points = 20.0;
    let cs = setup_with(&cfg, &common::scenario_dataset());

    // Beacon -> Content: 20 + 30 + 0 + 20
    let items = cs.high_opportunity_matrix(None).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].client_id, "c-beacon");
    assert_eq!(items[0].opportunity_score.value(), 70);
}

#[tokio::test]
async fn test_client_without_other_units_yields_nothing() {
    let dataset = CrmDataset {
        business_units: vec![business_unit("bu-only", "Only")],
        services: vec![service("svc-1", "Audit", "Finance", "bu-only")],
        clients: vec![client("c-solo", "Solo", "Retail", "NA", "bu-only", Some(5_000_000.0))],
        opportunities: vec![],
    };
    let cs = setup_with(&config(), &dataset);

    assert!(cs.matrix_for_client("c-solo").await.unwrap().is_empty());
    assert!(cs.matrix(Default::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fully_engaged_target_is_skipped() {
    let mut dataset = common::scenario_dataset();
    dataset.opportunities.push(engagement("o-5", "c-a", "svc-video", 1));
    dataset.opportunities.push(engagement("o-6", "c-a", "svc-photo", 2));
    let cs = setup_with(&config(), &dataset);

    let items = cs.matrix_for_client("c-a").await.unwrap();
    assert!(find(&items, "c-a", "bu-video").is_none());
    assert!(find(&items, "c-a", "bu-design").is_some());
}

#[tokio::test]
async fn test_historical_relationship_uses_peer_adoption() {
    let mut cfg = config();
    cfg.relationship = RelationshipMode::Historical;
    let cs = setup_with(&cfg, &common::scenario_dataset());

    // Beacon is the only Video client and already uses Design: full 20 points.
    let items = cs.matrix_for_client("c-beacon").await.unwrap();
    assert_eq!(items[0].target_business_unit_id, "bu-design");
    assert_eq!(items[0].opportunity_score.value(), 60);
    let content = find(&items, "c-beacon", "bu-content").unwrap();
    assert_eq!(content.opportunity_score.value(), 50);
}

#[tokio::test]
async fn test_summary_rolls_up_by_target() {
    let cs = setup();
    let summary = cs.summary(Default::default()).await.unwrap();

    // the orphan client never yields an item
    assert_eq!(summary.distinct_clients, 3);
    assert_eq!(summary.distinct_business_units, 3);
    assert_eq!(summary.total_items, 6);
    assert_eq!(summary.average_score, 41.17);

    let content = summary
        .by_target_business_unit
        .iter()
        .find(|r| r.business_unit_id == "bu-content")
        .unwrap();
    assert_eq!(content.items, 2);
    assert_eq!(content.top_score, 60);
    assert_eq!(content.average_score, 45.0);
}

#[tokio::test]
async fn test_filtered_summary_counts_only_matching_items() {
    let cs = setup();
    let summary = cs
        .summary(crosssell::application::matrix_filter::MatrixFilter::for_source_business_unit("bu-video"))
        .await
        .unwrap();

    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.distinct_clients, 1);
    assert_eq!(summary.distinct_business_units, 3);

    let nothing = cs
        .summary(crosssell::application::matrix_filter::MatrixFilter::min_score(150))
        .await
        .unwrap();
    assert_eq!(nothing.total_items, 0);
    assert_eq!(nothing.distinct_clients, 0);
    assert_eq!(nothing.average_score, 0.0);
}
