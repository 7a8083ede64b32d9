use crate::errors::ServerError;
use crate::listings::ListingsError;
use crate::responses::{html_response, json_response, serve_asset, ResultResp};
use crate::search::SortKey;
use crate::state::AppState;
use crate::templates::components::{error_panel, results_panel, search_response};
use crate::templates::pages::home_page;
use astra::Request;
use maud::html;
use serde_json::{json, Value};
use std::collections::HashMap;

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path().to_string();

    match (method, path.as_str()) {
        ("GET", "/") => html_response(home_page()),

        ("GET", "/search") => {
            let params = parse_query(&req);
            let suburb = params.get("suburb").map(String::as_str).unwrap_or("");
            search(app, suburb)
        }

        ("GET", "/sort") => {
            let params = parse_query(&req);
            let key = SortKey::parse(params.get("sort").map(String::as_str));
            html_response(results_panel(&app.controller.sorted(key)))
        }

        ("GET", p) if p.starts_with("/description/") => {
            let index = p["/description/".len()..]
                .parse::<usize>()
                .map_err(|_| ServerError::BadRequest("invalid card index".into()))?;
            description(app, index)
        }

        ("GET", p) if p.starts_with("/api/properties/") => {
            let suburb = decode_segment(&p["/api/properties/".len()..]);
            api_properties(app, &suburb)
        }

        ("GET", p) if p.starts_with("/static/") => serve_asset(p),

        _ => Err(ServerError::NotFound),
    }
}

/// One search round-trip: validate, fetch, store, render. Errors render
/// into the panel's error region; either way the response also resets the
/// sort dropdown.
fn search(app: &AppState, suburb: &str) -> ResultResp {
    let panel = match app.controller.search(suburb) {
        Ok(snapshot) => results_panel(&snapshot),
        Err(err) => error_panel(&err.to_string()),
    };

    html_response(search_response(panel))
}

/// Read-More expansion: the full stored description as a text fragment.
fn description(app: &AppState, index: usize) -> ResultResp {
    match app.controller.description(index) {
        Some(text) => html_response(html! { (text) }),
        None => Err(ServerError::NotFound),
    }
}

/// JSON proxy over the upstream search API.
fn api_properties(app: &AppState, suburb: &str) -> ResultResp {
    if suburb.trim().is_empty() {
        return json_response(400, &json!({ "error": "Suburb parameter is required." }));
    }

    match app.source.fetch_raw(suburb) {
        Ok(raw) => {
            let has_results = raw
                .get("results")
                .and_then(Value::as_array)
                .map(|results| !results.is_empty())
                .unwrap_or(false);

            if has_results {
                json_response(200, &raw)
            } else {
                json_response(
                    404,
                    &json!({
                        "error": format!(
                            "No properties found for '{suburb}' or the suburb is invalid."
                        )
                    }),
                )
            }
        }
        Err(ListingsError::Upstream { status, message }) => json_response(
            status,
            &json!({ "error": format!("API request failed: {message}") }),
        ),
        Err(err) => json_response(500, &json!({ "error": err.to_string() })),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Percent-decodes one path segment (suburbs arrive URL-escaped).
fn decode_segment(segment: &str) -> String {
    url::form_urlencoded::parse(format!("s={segment}").as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
