//! GraphHopper routing client
//!
//! GraphHopper API documentation:
//! https://docs.graphhopper.com/#tag/Routing-API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::polyline::{self, GRAPHHOPPER_PRECISION};
use super::RoutingService;
use crate::types::{Coordinates, Instruction, RoutePath};

/// GraphHopper client configuration
#[derive(Debug, Clone)]
pub struct GraphHopperConfig {
    /// Base URL of the API (e.g., "https://graphhopper.com/api/1")
    pub base_url: String,
    pub api_key: String,
    /// Vehicle profile
    pub vehicle: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl GraphHopperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://graphhopper.com/api/1".to_string(),
            api_key: api_key.into(),
            vehicle: "car".to_string(),
            timeout_seconds: 30,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// GraphHopper routing client
pub struct GraphHopperClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperClient {
    pub fn new(config: GraphHopperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Point-to-point route URL
    fn build_route_url(&self, from: &Coordinates, to: &Coordinates) -> String {
        format!(
            "{}/route?point={},{}&point={},{}&vehicle={}&key={}",
            self.config.base_url.trim_end_matches('/'),
            from.lat,
            from.lng,
            to.lat,
            to.lng,
            urlencoding::encode(&self.config.vehicle),
            urlencoding::encode(&self.config.api_key),
        )
    }
}

#[async_trait]
impl RoutingService for GraphHopperClient {
    async fn route(&self, from: &Coordinates, to: &Coordinates) -> Result<Option<RoutePath>> {
        let url = self.build_route_url(from, to);

        debug!(
            "Requesting route from GraphHopper: ({}, {}) -> ({}, {})",
            from.lat, from.lng, to.lat, to.lng
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send route request to GraphHopper")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GraphHopper returned error {}: {}", status, body);
        }

        let body = response
            .text()
            .await
            .context("Failed to read GraphHopper response")?;

        parse_route_response(&body)
    }

    fn name(&self) -> &str {
        "GraphHopper"
    }
}

// GraphHopper API types

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    paths: Vec<ResponsePath>,
}

#[derive(Debug, Deserialize)]
struct ResponsePath {
    /// Meters
    distance: Option<f64>,
    /// Milliseconds
    time: Option<u64>,
    /// Encoded polyline (points_encoded=true, the default)
    points: Option<String>,
    #[serde(default)]
    instructions: Vec<Instruction>,
}

/// Turn a route response body into the first path, if it has one
fn parse_route_response(body: &str) -> Result<Option<RoutePath>> {
    let response: RouteResponse =
        serde_json::from_str(body).context("Failed to parse GraphHopper response")?;

    let Some(path) = response.paths.into_iter().next() else {
        warn!("GraphHopper response contained no paths");
        return Ok(None);
    };

    let (Some(distance), Some(time)) = (path.distance, path.time) else {
        warn!("GraphHopper path is missing distance or time");
        return Ok(None);
    };

    let encoded = match path.points {
        Some(points) if !points.is_empty() => points,
        _ => {
            warn!("GraphHopper path has no points");
            return Ok(None);
        }
    };

    let points = match polyline::decode(&encoded, GRAPHHOPPER_PRECISION) {
        Ok(points) => points,
        Err(e) => {
            warn!("Discarding GraphHopper path with undecodable points: {}", e);
            return Ok(None);
        }
    };

    debug!("GraphHopper path: {} points, {} instructions", points.len(), path.instructions.len());

    Ok(Some(RoutePath {
        time_seconds: time as f64 / 1000.0,
        distance_meters: distance,
        points,
        instructions: path.instructions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "hints": {"visited_nodes.sum": 58},
        "info": {"copyrights": ["GraphHopper", "OpenStreetMap contributors"], "took": 4},
        "paths": [{
            "distance": 9712.456,
            "weight": 801.2,
            "time": 845123,
            "transfers": 0,
            "points_encoded": true,
            "bbox": [80.22, 13.01, 80.2707, 13.0827],
            "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
            "instructions": [
                {"distance": 512.1, "heading": 180.2, "sign": 0, "interval": [0, 1], "text": "Continue onto Poonamallee High Road", "time": 61000, "street_name": "Poonamallee High Road"},
                {"distance": 9200.356, "sign": -2, "interval": [1, 2], "text": "Turn left onto Anna Salai", "time": 784123, "street_name": "Anna Salai"},
                {"distance": 0.0, "sign": 4, "last_heading": 190.1, "interval": [2, 2], "text": "Arrive at destination", "time": 0, "street_name": ""}
            ]
        }]
    }"#;

    #[test]
    fn test_graphhopper_config_defaults() {
        let config = GraphHopperConfig::new("secret");
        assert_eq!(config.base_url, "https://graphhopper.com/api/1");
        assert_eq!(config.vehicle, "car");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_build_route_url() {
        let config = GraphHopperConfig::new("a key").with_base_url("http://localhost:8989/");
        let client = GraphHopperClient::new(config).unwrap();

        let url = client.build_route_url(
            &Coordinates { lat: 13.0827, lng: 80.2707 },
            &Coordinates { lat: 13.01, lng: 80.22 },
        );

        assert_eq!(
            url,
            "http://localhost:8989/route?point=13.0827,80.2707&point=13.01,80.22&vehicle=car&key=a%20key"
        );
    }

    #[test]
    fn test_parse_route_response() {
        let path = parse_route_response(SAMPLE_RESPONSE).unwrap().unwrap();

        assert!((path.time_seconds - 845.123).abs() < 1e-9);
        assert!((path.distance_meters - 9712.456).abs() < 1e-9);
        assert_eq!(path.points.len(), 3);
        assert!((path.points[0][0] - 38.5).abs() < 1e-9);
        assert_eq!(path.instructions.len(), 3);
        assert_eq!(path.instructions[1].street_name, "Anna Salai");
        assert_eq!(path.instructions[2].sign, 4);
    }

    #[test]
    fn test_parse_response_without_paths_is_none() {
        assert!(parse_route_response(r#"{"paths": []}"#).unwrap().is_none());
        assert!(parse_route_response(r#"{"info": {}}"#).unwrap().is_none());
    }

    #[test]
    fn test_parse_path_without_points_is_none() {
        let body = r#"{"paths": [{"distance": 10.0, "time": 1000, "instructions": []}]}"#;
        assert!(parse_route_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_path_without_time_is_none() {
        let body = r#"{"paths": [{"distance": 10.0, "points": "_p~iF~ps|U"}]}"#;
        assert!(parse_route_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_path_without_distance_is_none() {
        let body = r#"{"paths": [{"time": 1000, "points": "_p~iF~ps|U"}]}"#;
        assert!(parse_route_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_path_with_corrupt_points_is_none() {
        let body = r#"{"paths": [{"distance": 10.0, "time": 1000, "points": "_p~iF"}]}"#;
        assert!(parse_route_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        assert!(parse_route_response("<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_graphhopper_client_name() {
        let client = GraphHopperClient::new(GraphHopperConfig::new("k")).unwrap();
        assert_eq!(client.name(), "GraphHopper");
    }

    #[tokio::test]
    #[ignore = "Requires GRAPHHOPPER_API_KEY and network access"]
    async fn test_graphhopper_integration_chennai() {
        let key = std::env::var("GRAPHHOPPER_API_KEY").unwrap();
        let client = GraphHopperClient::new(GraphHopperConfig::new(key)).unwrap();

        let path = client
            .route(
                &Coordinates { lat: 13.0827, lng: 80.2707 },
                &Coordinates { lat: 13.0100, lng: 80.2200 },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(path.points.len() > 10);
        assert!(path.distance_meters > 8_000.0 && path.distance_meters < 20_000.0);
    }
}
