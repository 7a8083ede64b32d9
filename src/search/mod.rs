mod controller;
mod sort;

pub use controller::{Card, SearchController, SearchError, SearchSnapshot};
pub use sort::SortKey;
