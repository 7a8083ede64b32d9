use crate::search::Card;
use maud::{html, Markup};

/// Description preview length, in characters.
const DESCRIPTION_PREVIEW_CHARS: usize = 150;

pub fn property_card(card: &Card) -> Markup {
    let prop = &card.property;

    let price = format_price(prop.price);
    let property_type = prop.property_type.as_deref().unwrap_or("Property");
    let land_size = prop
        .attributes
        .land_size
        .as_deref()
        .filter(|size| !size.is_empty() && !size.eq_ignore_ascii_case("none"));
    let description = prop.attributes.description.as_deref().unwrap_or("");
    let (preview, truncated) = truncate_description(description);
    let map_link = format!(
        "https://www.google.com/maps?q={},{}",
        prop.coordinates.latitude, prop.coordinates.longitude
    );

    html! {
        div class="property-card" {
            div class="card-header" {
                h2 { (price) }
                p { (prop.area_name) }
            }
            div class="card-body" {
                div class="meta-info" {
                    span class="property-type" { (property_type) }
                    @if let Some(size) = land_size {
                        span class="land-size" { i class="fas fa-ruler-combined" {} " " (size) }
                    }
                }
                div class="attributes" {
                    span class="attribute" { i class="fas fa-bed" {} " " (format_count(prop.attributes.bedrooms)) }
                    span class="attribute" { i class="fas fa-bath" {} " " (format_count(prop.attributes.bathrooms)) }
                    span class="attribute" { i class="fas fa-car" {} " " (format_count(prop.attributes.garage_spaces)) }
                }
                p class="description" {
                    (preview)
                    @if truncated {
                        "..."
                        span class="read-more"
                            hx-get=(format!("/description/{}", card.index))
                            hx-target="closest p"
                            hx-swap="innerHTML"
                        { " Read More" }
                    }
                }
            }
            div class="card-footer" {
                a href=(map_link) target="_blank" rel="noopener" class="map-link" { "View on Map" }
            }
        }
    }
}

/// AUD with no cents, e.g. $450,000. Absent (or zero) prices read as
/// "Price on request", matching the search page's historical behavior.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value != 0.0 => format_aud(value),
        _ => "Price on request".to_string(),
    }
}

fn format_aud(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Bed/bath/garage counts; absent (or zero) values read as "N/A".
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => {
            if v.fract() == 0.0 {
                format!("{}", v as i64)
            } else {
                format!("{v}")
            }
        }
        _ => "N/A".to_string(),
    }
}

/// Splits a description into its preview and whether anything was cut.
/// Counted in characters, cut on a char boundary.
pub fn truncate_description(text: &str) -> (&str, bool) {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}
