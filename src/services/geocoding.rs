//! Geocoding abstraction layer
//!
//! - `MockGeocoder` for tests and offline use (deterministic, no network)
//! - `RateLimitedNominatimGeocoder` for real searches (minimum interval
//!   between requests, per the public Nominatim usage policy)
//!
//! Backend is chosen by `GEOCODER_BACKEND` ("mock" or "nominatim").

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::services::nominatim::NominatimClient;
use crate::types::{Coordinates, Place};

/// Geocoder trait - abstraction for all geocoding implementations
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Search for places matching free text. A blank query yields no places.
    async fn search(&self, query: &str) -> Result<Vec<Place>>;

    /// Get the name of this geocoder implementation
    fn name(&self) -> &'static str;
}

// ==========================================================================
// MockGeocoder
// ==========================================================================

/// Returns one deterministic place per query, inside greater Chennai
pub struct MockGeocoder;

impl MockGeocoder {
    pub fn new() -> Self {
        Self
    }

    fn hash_to_coordinates(query: &str) -> Coordinates {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        query.trim().to_lowercase().hash(&mut hasher);
        let hash = hasher.finish();

        const LAT_MIN: f64 = 12.90;
        const LAT_MAX: f64 = 13.20;
        const LNG_MIN: f64 = 80.10;
        const LNG_MAX: f64 = 80.30;

        let lat_normalized = ((hash >> 32) as f64) / (u32::MAX as f64);
        let lng_normalized = ((hash & 0xFFFF_FFFF) as f64) / (u32::MAX as f64);

        Coordinates {
            lat: LAT_MIN + lat_normalized * (LAT_MAX - LAT_MIN),
            lng: LNG_MIN + lng_normalized * (LNG_MAX - LNG_MIN),
        }
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Place>> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }

        Ok(vec![Place {
            display_name: format!("{}, Chennai, Tamil Nadu, India", query.trim()),
            coordinates: Self::hash_to_coordinates(query),
        }])
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// ==========================================================================
// RateLimiter
// ==========================================================================

/// Enforces a minimum interval between calls
pub struct RateLimiter {
    last_call: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_call: Arc::new(Mutex::new(None)),
            min_interval,
        }
    }

    /// Wait until the next call is allowed
    pub async fn wait(&self) {
        let mut last = self.last_call.lock().await;

        if let Some(remaining) = (*last)
            .map(|t| t.elapsed())
            .filter(|elapsed| *elapsed < self.min_interval)
            .map(|elapsed| self.min_interval - elapsed)
        {
            tokio::time::sleep(remaining).await;
        }

        *last = Some(Instant::now());
    }
}

// ==========================================================================
// RateLimitedNominatimGeocoder
// ==========================================================================

/// Default interval between Nominatim requests (public API allows 1 req/s)
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1500;

pub struct RateLimitedNominatimGeocoder {
    client: NominatimClient,
    rate_limiter: RateLimiter,
}

impl RateLimitedNominatimGeocoder {
    pub fn new(base_url: &str, rate_limit_interval: Duration) -> Result<Self> {
        Ok(Self {
            client: NominatimClient::new(base_url)?,
            rate_limiter: RateLimiter::new(rate_limit_interval),
        })
    }
}

#[async_trait]
impl Geocoder for RateLimitedNominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Place>> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }

        self.rate_limiter.wait().await;

        match self.client.search(query.trim()).await {
            Ok(places) => {
                tracing::debug!("Geocoding '{}' returned {} places", query, places.len());
                Ok(places)
            }
            Err(e) => {
                tracing::error!("Geocoding failed: {:#}", e);
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        "nominatim"
    }
}

/// Create geocoder based on configuration
pub fn create_geocoder(config: &Config) -> Result<Box<dyn Geocoder>> {
    match config.geocoder_backend.as_str() {
        "mock" => {
            tracing::info!("Using MockGeocoder");
            Ok(Box::new(MockGeocoder::new()))
        }
        "nominatim" => {
            tracing::info!("Using RateLimitedNominatimGeocoder at {}", config.nominatim_url);
            Ok(Box::new(RateLimitedNominatimGeocoder::new(
                &config.nominatim_url,
                Duration::from_millis(config.nominatim_rate_limit_ms),
            )?))
        }
        other => {
            tracing::warn!("Unknown GEOCODER_BACKEND '{}', using mock", other);
            Ok(Box::new(MockGeocoder::new()))
        }
    }
}
