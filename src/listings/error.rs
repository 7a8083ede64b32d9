use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ListingsError {
    Network(String),
    Upstream { status: u16, message: String },
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for ListingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingsError::Network(msg) => write!(f, "A network error occurred: {msg}"),
            // Upstream messages are shown to the user verbatim.
            ListingsError::Upstream { message, .. } => write!(f, "{message}"),
            ListingsError::JsonParse(msg) => {
                write!(f, "Invalid response from the property service: {msg}")
            }
            ListingsError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for ListingsError {}
