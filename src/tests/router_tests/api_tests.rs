// src/tests/router_tests/api_tests.rs

use crate::tests::utils::{get, make_app, property_json, results_payload, StubSource};
use serde_json::{json, Value};

#[test]
fn proxy_passes_the_upstream_payload_through() {
    let payload = json!({
        "results": [property_json(Some(450_000.0), "A tidy three-bedder.")],
        "report_id": "abc-123",
    });
    let app = make_app(StubSource::ok(payload.clone()));

    let (status, body) = get(&app, "/api/properties/Belmont");

    assert_eq!(status, 200);
    let value: Value = serde_json::from_str(&body).unwrap();
    // Verbatim passthrough, unknown upstream fields included.
    assert_eq!(value, payload);
}

#[test]
fn proxy_decodes_the_percent_encoded_suburb() {
    let source = StubSource::ok(results_payload(vec![property_json(Some(1.0), "x")]));
    let app = make_app(source.clone());

    let (status, _) = get(&app, "/api/properties/Belmont%20North");

    assert_eq!(status, 200);
    assert_eq!(
        source.last_suburb.lock().unwrap().as_deref(),
        Some("Belmont North")
    );
}

#[test]
fn empty_results_are_a_404_on_the_api_surface() {
    let app = make_app(StubSource::ok(results_payload(vec![])));

    let (status, body) = get(&app, "/api/properties/Belmont");

    assert_eq!(status, 404);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value["error"],
        "No properties found for 'Belmont' or the suburb is invalid."
    );
}

#[test]
fn missing_results_field_counts_as_no_results() {
    let app = make_app(StubSource::ok(json!({ "unexpected": true })));

    let (status, _) = get(&app, "/api/properties/Belmont");

    assert_eq!(status, 404);
}

#[test]
fn blank_suburb_is_a_400() {
    let source = StubSource::ok(results_payload(vec![]));
    let app = make_app(source.clone());

    let (status, body) = get(&app, "/api/properties/%20");

    assert_eq!(status, 400);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"], "Suburb parameter is required.");
    assert_eq!(source.call_count(), 0);
}

#[test]
fn upstream_status_and_message_pass_through() {
    let app = make_app(StubSource::upstream_error(403, "Invalid API token."));

    let (status, body) = get(&app, "/api/properties/Belmont");

    assert_eq!(status, 403);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"], "API request failed: Invalid API token.");
}

#[test]
fn transport_failure_is_a_500() {
    let app = make_app(StubSource::network_error("connection refused"));

    let (status, body) = get(&app, "/api/properties/Belmont");

    assert_eq!(status, 500);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value["error"],
        "A network error occurred: connection refused"
    );
}
