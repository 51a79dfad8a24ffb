//! API client for the public launch-data REST API.
//!
//! This module provides the `ApiClient` struct, the HTTP implementation of
//! `LaunchSource` used outside of tests.

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::models::{Launch, Payload, Rocket};

use super::{ApiError, LaunchSource};

// ============================================================================
// Constants
// ============================================================================

/// Query parameter used to filter launches by date.
const LAUNCH_DATE_PARAM: &str = "date_utc";

/// Query parameter used to filter payloads by owning launch.
const PAYLOAD_LAUNCH_PARAM: &str = "launch";

/// API client for the launch-data service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        debug!(url = url, status = %response.status(), "Response received");
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e)))
    }

    // ===== Data Fetching Methods =====

    /// Fetch launches whose date matches the given year filter
    pub async fn fetch_launches(&self, year_filter: &str) -> Result<Vec<Launch>, ApiError> {
        let url = self.endpoint("launches");
        let launches: Vec<Launch> = self.get(&url, &[(LAUNCH_DATE_PARAM, year_filter)]).await?;
        debug!(year = year_filter, count = launches.len(), "Fetched launches");
        Ok(launches)
    }

    /// Fetch payloads attached to a launch
    pub async fn fetch_payloads(&self, launch_id: &str) -> Result<Vec<Payload>, ApiError> {
        let url = self.endpoint("payloads");
        let payloads: Vec<Payload> = self.get(&url, &[(PAYLOAD_LAUNCH_PARAM, launch_id)]).await?;
        debug!(launch_id = launch_id, count = payloads.len(), "Fetched payloads");
        Ok(payloads)
    }

    /// Fetch the full rocket catalog
    pub async fn fetch_rockets(&self) -> Result<Vec<Rocket>, ApiError> {
        let url = self.endpoint("rockets");
        let rockets: Vec<Rocket> = self.get(&url, &[]).await?;
        debug!(count = rockets.len(), "Fetched rocket catalog");
        Ok(rockets)
    }
}

impl LaunchSource for ApiClient {
    fn fetch_launches<'a>(
        &'a self,
        year_filter: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Launch>, ApiError>> {
        ApiClient::fetch_launches(self, year_filter).boxed()
    }

    fn fetch_payloads<'a>(
        &'a self,
        launch_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Payload>, ApiError>> {
        ApiClient::fetch_payloads(self, launch_id).boxed()
    }

    fn fetch_rockets(&self) -> BoxFuture<'_, Result<Vec<Rocket>, ApiError>> {
        ApiClient::fetch_rockets(self).boxed()
    }
}

// ============================================================================
// Tests
// ============================================================================
