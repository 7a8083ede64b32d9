// templates/pages/home.rs

use crate::search::SortKey;
use crate::templates::{components::sort_select, desktop_layout};
use maud::{html, Markup};

/// The search page. The form fires on submit (button click or Enter) and
/// once on page load, which performs the automatic first search; the
/// selector re-renders the stored list without re-fetching.
pub fn home_page() -> Markup {
    desktop_layout(
        "Suburb Property Search",
        html! {
            main class="container" {
                section class="search-bar" {
                    form id="search-form"
                        hx-get="/search"
                        hx-trigger="submit, load"
                        hx-target="#results-panel"
                        hx-indicator="#loading"
                    {
                        input id="suburbInput"
                            type="text"
                            name="suburb"
                            placeholder="Enter a suburb, e.g. Belmont";
                        button id="searchBtn" type="submit" { "Search" }
                    }
                    (sort_select(SortKey::Default, false))
                }

                div id="loading" class="htmx-indicator" { "Loading properties..." }

                div id="results-panel" {
                    div id="error" class="error hidden" {}
                    div id="results-header" {}
                    div id="results-container" {}
                }
            }
        },
    )
}
