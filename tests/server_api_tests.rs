use pharos::server::routes::route_request;

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/api/health");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn lighthouses_endpoint_lists_the_dataset() {
    let response = route_request("GET", "/api/lighthouses");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let list = payload.as_array().expect("payload should be an array");
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["id"], "cape-d-aguilar");
}

#[test]
fn lighthouse_detail_endpoint_returns_the_match() {
    let response = route_request("GET", "/api/lighthouses/waglan-island");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["name"], "Waglan Island Lighthouse");
    assert_eq!(payload["technical"]["currentStatus"], "active");
}

#[test]
fn unknown_lighthouse_is_404() {
    let response = route_request("GET", "/api/lighthouses/nonexistent-id");
    assert_eq!(response.status_code, 404);
    assert!(response.body.contains("not found"));
}

#[test]
fn search_endpoint_filters_by_query() {
    let response = route_request("GET", "/api/search?q=waglan");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let list = payload.as_array().expect("payload should be an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "waglan-island");
}

#[test]
fn resources_endpoint_filters_by_category() {
    let response = route_request("GET", "/api/resources?category=video");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let list = payload.as_array().expect("payload should be an array");
    assert!(!list.is_empty());
    assert!(list.iter().all(|r| r["category"] == "video"));
}

#[test]
fn resources_endpoint_rejects_unknown_category() {
    let response = route_request("GET", "/api/resources?category=bogus");
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("unknown category"));
}

#[test]
fn resources_endpoint_filters_by_lighthouse() {
    let response = route_request("GET", "/api/resources?lighthouse=green-island");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let list = payload.as_array().expect("payload should be an array");
    assert!(!list.is_empty());
    for resource in list {
        let related = resource["relatedLighthouses"]
            .as_array()
            .expect("relatedLighthouses should be an array");
        assert!(related.iter().any(|id| id == "green-island"));
    }
}

#[test]
fn essay_endpoint_returns_sections_and_references() {
    let response = route_request("GET", "/api/essay");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["id"], "guiding-lights");
    assert!(payload["sections"].as_array().is_some_and(|s| !s.is_empty()));
    assert!(payload["references"].is_array());
}

#[test]
fn map_endpoint_returns_lon_lat_pairs() {
    let response = route_request("GET", "/api/map");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    for feature in payload.as_array().expect("array") {
        let coordinates = feature["coordinates"].as_array().expect("pair");
        assert_eq!(coordinates.len(), 2);
        let lon = coordinates[0].as_f64().expect("lon");
        let lat = coordinates[1].as_f64().expect("lat");
        assert!((113.8..=114.5).contains(&lon));
        assert!((22.1..=22.6).contains(&lat));
    }
}

#[test]
fn timeline_endpoint_is_sorted_by_year() {
    let response = route_request("GET", "/api/timeline");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let years: Vec<i64> = payload
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["year"].as_i64().expect("year"))
        .collect();
    assert!(years.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn stats_endpoint_reports_counts() {
    let response = route_request("GET", "/api/stats");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["total"], 3);
    assert_eq!(payload["oldestYear"], 1875);
    assert_eq!(payload["newestYear"], 1893);
}

#[test]
fn export_endpoint_bundles_everything() {
    let response = route_request("GET", "/api/export");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["metadata"]["totalLighthouses"], 3);
    assert_eq!(payload["metadata"]["essayLoaded"], true);
    assert!(payload["lighthouses"].is_array());
    assert!(payload["resources"].is_array());
    assert!(payload["stats"].is_object());
}

#[test]
fn unknown_route_is_404() {
    let response = route_request("GET", "/api/nope");
    assert_eq!(response.status_code, 404);
    assert!(response.body.contains("Route not found"));
}

#[test]
fn post_to_read_only_route_is_404() {
    let response = route_request("POST", "/api/lighthouses");
    assert_eq!(response.status_code, 404);
}
