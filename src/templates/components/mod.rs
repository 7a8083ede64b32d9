pub mod card;
pub mod results;

pub use card::property_card;
pub use results::{error_panel, results_panel, search_response, sort_select};
