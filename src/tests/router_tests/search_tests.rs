// src/tests/router_tests/search_tests.rs

use crate::tests::utils::{get, make_app, property_json, results_payload, StubSource};

#[test]
fn home_page_serves_the_search_shell() {
    let app = make_app(StubSource::ok(results_payload(vec![])));
    let (status, body) = get(&app, "/");

    assert_eq!(status, 200);
    assert!(body.contains(r#"id="suburbInput""#));
    assert!(body.contains(r#"id="results-panel""#));
    assert!(body.contains("htmx.org"));
}

#[test]
fn search_renders_header_and_one_card_per_property() {
    let app = make_app(StubSource::ok(results_payload(vec![
        property_json(Some(450_000.0), "A tidy three-bedder."),
        property_json(None, "A knock-down rebuild opportunity."),
    ])));

    let (status, body) = get(&app, "/search?suburb=Belmont");

    assert_eq!(status, 200);
    assert!(body.contains("Showing 2 properties in Belmont"));
    assert_eq!(body.matches("property-card").count(), 2);
    assert!(body.contains("$450,000"));
    assert!(body.contains("Price on request"));
}

#[test]
fn search_decodes_the_suburb_and_trims_it() {
    let source = StubSource::ok(results_payload(vec![property_json(Some(1.0), "x")]));
    let app = make_app(source.clone());

    let (_, body) = get(&app, "/search?suburb=%20Belmont%20North%20");

    assert!(body.contains("Showing 1 properties in Belmont North"));
    assert_eq!(
        source.last_suburb.lock().unwrap().as_deref(),
        Some("Belmont North")
    );
}

#[test]
fn empty_suburb_shows_error_without_fetching() {
    let source = StubSource::ok(results_payload(vec![]));
    let app = make_app(source.clone());

    let (status, body) = get(&app, "/search?suburb=");

    assert_eq!(status, 200);
    assert!(body.contains("Please enter a suburb."));
    assert_eq!(source.call_count(), 0);
}

#[test]
fn whitespace_suburb_counts_as_empty() {
    let source = StubSource::ok(results_payload(vec![]));
    let app = make_app(source.clone());

    let (_, body) = get(&app, "/search?suburb=%20%20");

    assert!(body.contains("Please enter a suburb."));
    assert_eq!(source.call_count(), 0);
}

#[test]
fn missing_suburb_parameter_counts_as_empty() {
    let source = StubSource::ok(results_payload(vec![]));
    let app = make_app(source.clone());

    let (_, body) = get(&app, "/search");

    assert!(body.contains("Please enter a suburb."));
    assert_eq!(source.call_count(), 0);
}

#[test]
fn empty_results_render_the_neutral_header() {
    let app = make_app(StubSource::ok(results_payload(vec![])));

    let (status, body) = get(&app, "/search?suburb=Belmont");

    assert_eq!(status, 200);
    assert!(body.contains("No properties found."));
    assert!(!body.contains("property-card"));
    // The error region stays hidden: an empty result set is not an error.
    assert!(body.contains(r#"class="error hidden""#));
}

#[test]
fn upstream_error_text_is_surfaced_verbatim() {
    let app = make_app(StubSource::upstream_error(403, "Invalid API token."));

    let (status, body) = get(&app, "/search?suburb=Belmont");

    // Fragment swaps always come back 200; the message lands in the
    // error region of the panel.
    assert_eq!(status, 200);
    assert!(body.contains("Invalid API token."));
    assert!(!body.contains("property-card"));
}

#[test]
fn network_failure_reads_as_a_network_error() {
    let app = make_app(StubSource::network_error("connection refused"));

    let (_, body) = get(&app, "/search?suburb=Belmont");

    assert!(body.contains("A network error occurred: connection refused"));
}

#[test]
fn search_response_resets_the_sort_dropdown() {
    let app = make_app(StubSource::ok(results_payload(vec![property_json(
        Some(1.0),
        "x",
    )])));

    let (_, body) = get(&app, "/search?suburb=Belmont");

    assert!(body.contains("hx-swap-oob"));
    assert!(body.contains(r#"option value="default" selected"#));
}

#[test]
fn long_description_truncates_with_read_more() {
    let long = "y".repeat(200);
    let app = make_app(StubSource::ok(results_payload(vec![property_json(
        Some(1.0),
        &long,
    )])));

    let (_, body) = get(&app, "/search?suburb=Belmont");

    assert!(body.contains("Read More"));
    assert!(body.contains("/description/0"));
    assert!(body.contains(&"y".repeat(150)));
    assert!(!body.contains(&"y".repeat(151)));
}

#[test]
fn short_description_has_no_read_more() {
    let app = make_app(StubSource::ok(results_payload(vec![property_json(
        Some(1.0),
        "Small but neat.",
    )])));

    let (_, body) = get(&app, "/search?suburb=Belmont");

    assert!(!body.contains("Read More"));
}

#[test]
fn read_more_returns_the_full_description() {
    let long = "z".repeat(200);
    let app = make_app(StubSource::ok(results_payload(vec![property_json(
        Some(1.0),
        &long,
    )])));

    get(&app, "/search?suburb=Belmont");
    let (status, body) = get(&app, "/description/0");

    assert_eq!(status, 200);
    assert!(body.contains(&long));
    assert!(!body.contains("Read More"));
}

#[test]
fn read_more_for_unknown_card_is_not_found() {
    let app = make_app(StubSource::ok(results_payload(vec![])));

    get(&app, "/search?suburb=Belmont");
    let (status, _) = get(&app, "/description/9");

    assert_eq!(status, 404);
}

#[test]
fn unknown_route_is_not_found() {
    let app = make_app(StubSource::ok(results_payload(vec![])));
    let (status, _) = get(&app, "/nope");
    assert_eq!(status, 404);
}
