mod client;
mod error;
mod models;

pub use error::ApiError;
pub use models::{Character, CharactersResponse};

use client::Client;
use log::*;

/// Base URL of the public Rick and Morty API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Responsible for asynchronous interaction with the Rick and Morty API
/// including transformation of response data into explicitly-defined types.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Api {
        debug!("Initializing API client for base URL {}...", base_url);
        Api {
            client: Client::new(base_url),
        }
    }

    /// Returns every character in the collection, in server order.
    ///
    pub async fn characters(&self) -> Result<Vec<Character>, ApiError> {
        debug!("Requesting character collection...");

        let response: CharactersResponse = self.client.get("character").await?;

        debug!("Retrieved {} characters", response.results.len());
        Ok(response.results)
    }
}
