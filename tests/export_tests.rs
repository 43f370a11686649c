use std::path::{Path, PathBuf};

use pharos::data::export::{export_all, flatten_timeline, map_features, resources_by_category};
use pharos::data::loader::{
    load_essay_content, load_lighthouses, load_resources, stats_for, NullSink,
};

fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn map_features_use_lon_lat_order() {
    let lighthouses = load_lighthouses(&shipped_data_dir(), &NullSink).expect("load");
    let features = map_features(&lighthouses);
    assert_eq!(features.len(), 3);

    let cape = features
        .iter()
        .find(|f| f.id == "cape-d-aguilar")
        .expect("cape should be present");
    assert_eq!(cape.coordinates, [114.2547, 22.2094]);
    assert_eq!(cape.heritage, "declared_monument");
    assert_eq!(cape.status, "automated");
    assert_eq!(cape.built, 1875);
}

#[test]
fn grouping_preserves_source_order_within_category() {
    let resources = load_resources(&shipped_data_dir(), &NullSink).expect("load");
    let grouped = resources_by_category(&resources);

    let government = grouped.get("government").expect("government group");
    let expected: Vec<&str> = resources
        .iter()
        .filter(|r| r.category == "government")
        .map(|r| r.id.as_str())
        .collect();
    let actual: Vec<&str> = government.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(actual, expected);

    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, resources.len());
}

#[test]
fn timeline_is_sorted_non_decreasing_by_year() {
    let lighthouses = load_lighthouses(&shipped_data_dir(), &NullSink).expect("load");
    let timeline = flatten_timeline(&lighthouses);
    assert!(!timeline.is_empty());
    assert!(timeline.windows(2).all(|pair| pair[0].year <= pair[1].year));
}

#[test]
fn timeline_ties_keep_source_order() {
    // Cape D'Aguilar and Green Island were both lit in 1875; cape comes
    // first in declaration order so its event must stay first.
    let lighthouses = load_lighthouses(&shipped_data_dir(), &NullSink).expect("load");
    let timeline = flatten_timeline(&lighthouses);
    let from_1875: Vec<&str> = timeline
        .iter()
        .filter(|entry| entry.year == 1875)
        .map(|entry| entry.lighthouse_id.as_str())
        .collect();
    assert_eq!(from_1875, vec!["cape-d-aguilar", "green-island"]);
}

#[test]
fn export_envelope_counts_match_inputs() {
    let lighthouses = load_lighthouses(&shipped_data_dir(), &NullSink).expect("load");
    let resources = load_resources(&shipped_data_dir(), &NullSink).expect("load");
    let essay = load_essay_content(&shipped_data_dir(), &NullSink).expect("load");
    let stats = stats_for(&lighthouses);

    let export = export_all(lighthouses, resources, essay, stats);
    assert_eq!(export.metadata.total_lighthouses, export.lighthouses.len());
    assert_eq!(export.metadata.total_resources, export.resources.len());
    assert!(export.metadata.essay_loaded);
    assert!(export.metadata.export_date.contains('T'));
}

#[test]
fn export_envelope_without_essay_flags_it() {
    let export = export_all(Vec::new(), Vec::new(), None, stats_for(&[]));
    assert!(!export.metadata.essay_loaded);
    assert_eq!(export.stats.total, 0);
    assert_eq!(export.stats.oldest_year, None);
    assert_eq!(export.stats.newest_year, None);
}

#[test]
fn export_serializes_with_camel_case_keys() {
    let export = export_all(Vec::new(), Vec::new(), None, stats_for(&[]));
    let payload = serde_json::to_value(&export).expect("serialize");
    assert!(payload["metadata"]["exportDate"].is_string());
    assert!(payload["metadata"]["totalLighthouses"].is_number());
    assert!(payload["stats"]["oldestYear"].is_null());
}
