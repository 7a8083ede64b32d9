use crate::search::{SearchSnapshot, SortKey};
use crate::templates::components::property_card;
use maud::{html, Markup};

/// The results panel: error region, header and card container. Every
/// render replaces the whole panel, keeping stored state and visible
/// output in sync.
pub fn results_panel(snapshot: &SearchSnapshot) -> Markup {
    html! {
        div id="error" class="error hidden" {}
        @if snapshot.cards.is_empty() {
            div id="results-header" { "No properties found." }
            div id="results-container" {}
        } @else {
            div id="results-header" {
                "Showing " (snapshot.cards.len()) " properties in " (snapshot.suburb)
            }
            div id="results-container" {
                @for card in &snapshot.cards {
                    (property_card(card))
                }
            }
        }
    }
}

/// Panel variant for a failed search: the message lands in the error
/// region and any previous header/cards are wiped.
pub fn error_panel(message: &str) -> Markup {
    html! {
        div id="error" class="error" { (message) }
        div id="results-header" {}
        div id="results-container" {}
    }
}

/// The sort dropdown. With `oob` set the markup rides along a /search
/// response as an out-of-band swap, resetting the selector to default.
pub fn sort_select(selected: SortKey, oob: bool) -> Markup {
    html! {
        select id="sort-select"
            name="sort"
            hx-get="/sort"
            hx-trigger="change"
            hx-target="#results-panel"
            hx-indicator="#loading"
            hx-swap-oob=[oob.then_some("true")]
        {
            option value="default" selected[selected == SortKey::Default] { "Default" }
            option value="price-asc" selected[selected == SortKey::PriceAsc] { "Price: Low to High" }
            option value="price-desc" selected[selected == SortKey::PriceDesc] { "Price: High to Low" }
        }
    }
}

/// A /search response: the fresh panel plus the sort selector reset.
pub fn search_response(panel: Markup) -> Markup {
    html! {
        (panel)
        (sort_select(SortKey::Default, true))
    }
}
