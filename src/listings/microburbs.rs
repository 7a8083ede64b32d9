use crate::listings::sanitize::scrub_non_finite;
use crate::listings::{ListingsError, PropertySource};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

const API_BASE_URL: &str =
    "https://www.microburbs.com.au/report_generator/api/suburb/properties";

pub struct MicroburbsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MicroburbsClient {
    /// Reads MICROBURBS_API_KEY from the environment, falling back to the
    /// public "test" key.
    pub fn from_env() -> Result<Self, ListingsError> {
        let api_key =
            std::env::var("MICROBURBS_API_KEY").unwrap_or_else(|_| "test".to_string());
        Self::new(API_BASE_URL, api_key)
    }

    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ListingsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ListingsError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl PropertySource for MicroburbsClient {
    fn fetch_raw(&self, suburb: &str) -> Result<Value, ListingsError> {
        eprintln!("🔎 Fetching properties for '{suburb}'");

        let resp = self
            .client
            .get(&self.base_url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&[("suburb", suburb)])
            .send()
            .map_err(|e| ListingsError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| ListingsError::Network(e.to_string()))?;

        let parsed: Result<Value, _> = serde_json::from_str(&scrub_non_finite(&text));

        if !status.is_success() {
            // Surface the body's own error text when the upstream sent one.
            let message = parsed
                .ok()
                .as_ref()
                .and_then(|v| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("API request failed with status {status}"));

            eprintln!("⚠️ Upstream returned {status} for '{suburb}': {message}");
            return Err(ListingsError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        parsed.map_err(|e| ListingsError::JsonParse(e.to_string()))
    }
}
