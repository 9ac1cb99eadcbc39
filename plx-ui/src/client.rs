//! Placement scoring API client
//!
//! One HTTP GET per (model, item) pair against the configured placement
//! endpoint. The response body is decoded as JSON and passed through
//! opaquely; the upstream owns its shape.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use plx_common::config::PlxConfig;

const USER_AGENT: &str = "PLX/0.1.0 (https://github.com/plx/plx)";
/// Uniform per-call timeout; expiry surfaces as a per-model error and never
/// aborts sibling calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Placement client errors
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Placement scoring API client
#[derive(Clone)]
pub struct PlacementClient {
    http_client: reqwest::Client,
    placement_url: String,
    minimum_items: u32,
    number_of_placements: u32,
}

impl PlacementClient {
    pub fn new(config: &PlxConfig) -> Result<Self, PlacementError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PlacementError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            placement_url: config.placement_url.clone(),
            minimum_items: config.minimum_items,
            number_of_placements: config.number_of_placements,
        })
    }

    /// Fetch placements for one model/item pair
    ///
    /// The static tuning parameters (`minimum_items`, `number_of_placements`)
    /// are sent with every call; values come from configuration.
    pub async fn fetch_placements(
        &self,
        model: &str,
        item_id: &str,
    ) -> Result<Value, PlacementError> {
        tracing::debug!(
            model = %model,
            item_id = %item_id,
            url = %self.placement_url,
            "Querying placement API"
        );

        let response = self
            .http_client
            .get(&self.placement_url)
            .query(&[
                ("model", model.to_string()),
                ("item_id", item_id.to_string()),
                ("minimum_items", self.minimum_items.to_string()),
                ("number_of_placements", self.number_of_placements.to_string()),
            ])
            .send()
            .await
            .map_err(|e| PlacementError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlacementError::Api(status.as_u16(), error_text));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| PlacementError::Decode(e.to_string()))?;

        tracing::debug!(model = %model, item_id = %item_id, "Placement API call succeeded");

        Ok(data)
    }
}
