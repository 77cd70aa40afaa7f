//! Surfline `kbyg` spot forecast client.

use super::ConditionsProvider;
use crate::error::{QuiverError, Result};
use crate::types::config::ProviderSettings;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SurflineClient {
    client: Client,
    base_url: String,
    interval_hours: u32,
}

impl SurflineClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent)
                .map_err(|e| QuiverError::ConfigParse(format!("invalid user agent: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| QuiverError::Provider(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            interval_hours: settings.interval_hours,
        })
    }

    fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "requesting forecast");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| QuiverError::Provider(format!("{endpoint} request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(QuiverError::Provider(format!(
                "{endpoint} returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| QuiverError::Provider(format!("{endpoint} JSON parse error: {e}")))
    }

    fn hourly_query(&self, spot_id: &str, days: u32) -> Vec<(&'static str, String)> {
        vec![
            ("spotId", spot_id.to_string()),
            ("days", days.to_string()),
            ("intervalHours", self.interval_hours.to_string()),
        ]
    }
}

impl ConditionsProvider for SurflineClient {
    fn fetch_wave(&self, spot_id: &str, days: u32) -> Result<Value> {
        self.get("wave", &self.hourly_query(spot_id, days))
    }

    fn fetch_wind(&self, spot_id: &str, days: u32) -> Result<Value> {
        self.get("wind", &self.hourly_query(spot_id, days))
    }

    fn fetch_tides(&self, spot_id: &str, days: u32) -> Result<Value> {
        self.get(
            "tides",
            &[("spotId", spot_id.to_string()), ("days", days.to_string())],
        )
    }
}
