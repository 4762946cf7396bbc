//! Routing service for point-to-point routes
//!
//! Uses GraphHopper in production, mock for tests and offline use.

mod graphhopper;
pub mod polyline;

pub use graphhopper::{GraphHopperClient, GraphHopperConfig};

use anyhow::Result;
use async_trait::async_trait;

use crate::services::geo::{self, AVERAGE_SPEED_KMH, ROAD_COEFFICIENT};
use crate::types::{Coordinates, Instruction, RoutePath};

/// Routing service trait for abstraction (GraphHopper, mock, etc.)
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Route a car from `from` to `to`.
    ///
    /// `Err` is a transport failure (network, HTTP status, undecodable body).
    /// `Ok(None)` means the service answered but produced no usable path.
    async fn route(&self, from: &Coordinates, to: &Coordinates) -> Result<Option<RoutePath>>;

    /// Get service name for logging
    fn name(&self) -> &str;
}

/// Mock routing service
/// Straight line at Haversine × road coefficient, constant speed
pub struct MockRoutingService {
    road_coefficient: f64,
    average_speed_kmh: f64,
}

impl Default for MockRoutingService {
    fn default() -> Self {
        Self {
            road_coefficient: ROAD_COEFFICIENT,
            average_speed_kmh: AVERAGE_SPEED_KMH,
        }
    }
}

impl MockRoutingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(road_coefficient: f64, average_speed_kmh: f64) -> Self {
        Self {
            road_coefficient,
            average_speed_kmh,
        }
    }
}

#[async_trait]
impl RoutingService for MockRoutingService {
    async fn route(&self, from: &Coordinates, to: &Coordinates) -> Result<Option<RoutePath>> {
        let distance_km = geo::road_distance(from, to, self.road_coefficient);
        let time_seconds = geo::travel_seconds(distance_km, self.average_speed_kmh);
        let distance_meters = distance_km * 1000.0;

        Ok(Some(RoutePath {
            time_seconds,
            distance_meters,
            points: vec![[from.lat, from.lng], [to.lat, to.lng]],
            instructions: vec![
                Instruction {
                    text: "Continue".to_string(),
                    distance: distance_meters,
                    time: (time_seconds * 1000.0) as u64,
                    sign: 0,
                    street_name: String::new(),
                },
                Instruction {
                    text: "Arrive at destination".to_string(),
                    distance: 0.0,
                    time: 0,
                    sign: 4,
                    street_name: String::new(),
                },
            ],
        }))
    }

    fn name(&self) -> &str {
        "MockRouting"
    }
}

/// Create routing service based on configuration
pub fn create_routing_service(config: Option<GraphHopperConfig>) -> Result<Box<dyn RoutingService>> {
    match config {
        Some(cfg) => {
            tracing::info!("Using GraphHopper routing at {}", cfg.base_url);
            Ok(Box::new(GraphHopperClient::new(cfg)?))
        }
        None => {
            tracing::info!("Using mock routing service (GraphHopper API key not configured)");
            Ok(Box::new(MockRoutingService::new()))
        }
    }
}
