//! Nominatim geocoding client

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{Coordinates, Place};

/// Nominatim API response
#[derive(Debug, Deserialize)]
pub struct NominatimResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl NominatimResult {
    fn into_place(self) -> Result<Place> {
        let lat: f64 = self.lat.parse().context("Invalid latitude")?;
        let lng: f64 = self.lon.parse().context("Invalid longitude")?;

        Ok(Place {
            display_name: self.display_name,
            coordinates: Coordinates { lat, lng },
        })
    }
}

/// Nominatim geocoding client
pub struct NominatimClient {
    base_url: String,
    client: reqwest::Client,
}

impl NominatimClient {
    /// Create a new client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("ReturnFlow/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?format=json&q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Free-text search returning every match Nominatim offers
    pub async fn search(&self, query: &str) -> Result<Vec<Place>> {
        let url = self.search_url(query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send geocoding request")?;

        if !response.status().is_success() {
            anyhow::bail!("Nominatim returned status {}", response.status());
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .context("Failed to parse geocoding response")?;

        results.into_iter().map(NominatimResult::into_place).collect()
    }
}
