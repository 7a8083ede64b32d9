mod error;
mod microburbs;
pub mod models;
mod sanitize;

pub use error::ListingsError;
pub use microburbs::MicroburbsClient;
pub use models::{Attributes, Coordinates, Property, SearchResults};

use serde_json::Value;

/// Anything that can answer a suburb search. The production implementation
/// talks to the Microburbs API; tests substitute a stub.
pub trait PropertySource: Send + Sync {
    /// Fetch the raw (already sanitized) JSON payload for a suburb.
    fn fetch_raw(&self, suburb: &str) -> Result<Value, ListingsError>;

    /// Fetch and deserialize the property list for a suburb.
    fn fetch_properties(&self, suburb: &str) -> Result<Vec<Property>, ListingsError> {
        let raw = self.fetch_raw(suburb)?;
        let parsed: SearchResults = serde_json::from_value(raw)
            .map_err(|e| ListingsError::UnexpectedShape(e.to_string()))?;
        Ok(parsed.results)
    }
}
