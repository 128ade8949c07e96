// --- File: crates/hopigo_booking/src/adapter.rs ---
//! HTTP-backed [`AvailabilityProvider`] that talks to the availability API.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use hopigo_common::http::client::{create_client, HTTP_CLIENT};
use hopigo_common::models::AvailabilitySlot;
use hopigo_common::services::{AvailabilityProvider, BoxFuture};
use hopigo_config::AvailabilityConfig;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("HTTP Request Error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Availability API returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Wire shape of `GET /availability`. Timestamps arrive as RFC 3339 strings
/// and deserialize straight into `DateTime<Utc>`.
#[derive(Debug, Deserialize)]
struct AvailabilityPayload {
    slots: Vec<AvailabilitySlot>,
}

/// Fetches slots over HTTP from the configured availability base URL.
pub struct HttpAvailabilityProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAvailabilityProvider {
    /// Build a provider from config. A configured timeout gets its own
    /// client; otherwise the shared one is reused.
    pub fn from_config(config: &AvailabilityConfig) -> Result<Self, reqwest::Error> {
        let client = match config.timeout_seconds {
            Some(secs) => create_client(secs)?,
            None => HTTP_CLIENT.clone(),
        };
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, AdapterError> {
        let url = format!("{}/availability", self.base_url);
        debug!(%url, provider_id, %date, "fetching availability");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("provider_id", provider_id),
                ("date", &date.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::UnexpectedStatus(status));
        }

        let payload: AvailabilityPayload = response.json().await?;
        Ok(payload.slots)
    }
}

impl AvailabilityProvider for HttpAvailabilityProvider {
    type Error = AdapterError;

    fn fetch_availability(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error> {
        let provider_id = provider_id.to_string();
        Box::pin(async move { self.fetch(&provider_id, date).await })
    }
}
