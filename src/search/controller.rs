use crate::listings::{ListingsError, Property, PropertySource};
use crate::search::sort::{self, SortKey};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One rendered card: the property plus its position in the stored list.
/// The index stays stable across re-sorted renders so the Read-More
/// expansion can always address the stored property.
#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub property: Property,
}

/// What a render works from: the searched suburb and the card list.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub suburb: String,
    pub cards: Vec<Card>,
}

impl SearchSnapshot {
    fn new(suburb: String, properties: Vec<Property>) -> Self {
        let cards = properties
            .into_iter()
            .enumerate()
            .map(|(index, property)| Card { index, property })
            .collect();
        Self { suburb, cards }
    }
}

#[derive(Debug)]
pub enum SearchError {
    EmptySuburb,
    Listings(ListingsError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptySuburb => write!(f, "Please enter a suburb."),
            SearchError::Listings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// The stored result set. Lives for one search, until the next search
/// replaces it or an error clears it. `epoch` identifies the newest
/// search so a slow, superseded fetch cannot overwrite newer state.
#[derive(Default)]
struct SearchState {
    epoch: u64,
    suburb: String,
    properties: Vec<Property>,
}

impl SearchState {
    fn clear_results(&mut self) {
        self.suburb.clear();
        self.properties.clear();
    }
}

pub struct SearchController {
    source: Arc<dyn PropertySource>,
    state: Mutex<SearchState>,
}

impl SearchController {
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self {
            source,
            state: Mutex::new(SearchState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one search: trims and validates the suburb, fetches the list
    /// and stores it. Any outcome replaces the previous result set; the
    /// lock is never held across the upstream request.
    pub fn search(&self, raw_suburb: &str) -> Result<SearchSnapshot, SearchError> {
        let suburb = raw_suburb.trim();

        if suburb.is_empty() {
            let mut state = self.state();
            state.epoch += 1;
            state.clear_results();
            return Err(SearchError::EmptySuburb);
        }

        let epoch = {
            let mut state = self.state();
            state.epoch += 1;
            state.clear_results();
            state.epoch
        };

        match self.source.fetch_properties(suburb) {
            Ok(properties) => {
                let mut state = self.state();
                if state.epoch == epoch {
                    state.suburb = suburb.to_string();
                    state.properties = properties.clone();
                } else {
                    eprintln!("🔁 Discarding superseded results for '{suburb}'");
                }
                eprintln!("✅ {} properties in '{suburb}'", properties.len());
                Ok(SearchSnapshot::new(suburb.to_string(), properties))
            }
            Err(err) => {
                let mut state = self.state();
                if state.epoch == epoch {
                    state.clear_results();
                }
                eprintln!("⚠️ Search for '{suburb}' failed: {err}");
                Err(SearchError::Listings(err))
            }
        }
    }

    /// A re-sorted copy of the stored list. Never mutates the stored
    /// order and never re-fetches.
    pub fn sorted(&self, key: SortKey) -> SearchSnapshot {
        let (suburb, properties) = {
            let state = self.state();
            (state.suburb.clone(), state.properties.clone())
        };

        let mut snapshot = SearchSnapshot::new(suburb, properties);
        sort::sort_cards(&mut snapshot.cards, key);
        snapshot
    }

    /// Full description of the stored property at `index`, for the
    /// Read-More expansion.
    pub fn description(&self, index: usize) -> Option<String> {
        self.state()
            .properties
            .get(index)
            .and_then(|p| p.attributes.description.clone())
    }
}
