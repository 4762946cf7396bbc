//! Configuration management

use anyhow::{Context, Result};

use crate::services::geocoding::DEFAULT_RATE_LIMIT_MS;
use crate::services::routing::GraphHopperConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Nominatim API URL (for geocoding)
    pub nominatim_url: String,

    /// Geocoder backend: "mock" or "nominatim"
    pub geocoder_backend: String,

    /// Minimum interval between Nominatim requests
    pub nominatim_rate_limit_ms: u64,

    /// GraphHopper API base URL
    pub graphhopper_url: String,

    /// GraphHopper API key (optional, falls back to mock routing if unset)
    pub graphhopper_api_key: Option<String>,

    /// Routing request timeout
    pub routing_timeout_secs: u64,

    /// JSON file holding the warehouse candidates
    pub candidate_store_path: String,

    /// Directory for rolling log files
    pub logs_dir: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let graphhopper_api_key = std::env::var("GRAPHHOPPER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            nominatim_url: env_or("NOMINATIM_URL", "https://nominatim.openstreetmap.org"),
            geocoder_backend: env_or("GEOCODER_BACKEND", "nominatim"),
            nominatim_rate_limit_ms: env_parse("NOMINATIM_RATE_LIMIT_MS", DEFAULT_RATE_LIMIT_MS)?,
            graphhopper_url: env_or("GRAPHHOPPER_URL", "https://graphhopper.com/api/1"),
            graphhopper_api_key,
            routing_timeout_secs: env_parse("ROUTING_TIMEOUT_SECS", 30)?,
            candidate_store_path: env_or("CANDIDATE_STORE_PATH", "warehouse_addresses.json"),
            logs_dir: env_or("LOGS_DIR", "logs"),
        })
    }

    /// GraphHopper settings, present only when an API key is configured
    pub fn graphhopper(&self) -> Option<GraphHopperConfig> {
        self.graphhopper_api_key.as_ref().map(|key| {
            GraphHopperConfig::new(key.clone())
                .with_base_url(self.graphhopper_url.clone())
                .with_timeout(self.routing_timeout_secs)
        })
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            geocoder_backend: "mock".to_string(),
            nominatim_rate_limit_ms: DEFAULT_RATE_LIMIT_MS,
            graphhopper_url: "https://graphhopper.com/api/1".to_string(),
            graphhopper_api_key: None,
            routing_timeout_secs: 30,
            candidate_store_path: "warehouse_addresses.json".to_string(),
            logs_dir: "logs".to_string(),
        }
    }
}
