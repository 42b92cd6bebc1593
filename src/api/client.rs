//! HTTP client for Rick and Morty API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the API and parsing responses into typed models.

use super::error::ApiError;
use log::*;
use serde::de::DeserializeOwned;

/// Makes requests to the API and tries to conform response data to the
/// given model.
///
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a GET request to the given path and parse the response body
    /// into `T`.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request_url = format!("{}/{}", self.base_url, path);
        debug!("Requesting {}...", request_url);

        let response = self.http_client.get(&request_url).send().await?;
        let status = response.status();
        let response_bytes = response.bytes().await?;

        // Check status before trying to deserialize
        if !status.is_success() {
            let body = String::from_utf8_lossy(&response_bytes).into_owned();
            error!("API request failed with status {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Try to deserialize, with better error message if it fails
        match serde_json::from_slice::<T>(&response_bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(ApiError::Deserialization(e))
            }
        }
    }
}
