//! Driver manifest sequencing
//!
//! Stops are ordered by straight-line distance from a fixed driver origin.
//! Completing a stop drops it and re-sorts the remainder against the same
//! origin; the position of the completed stop is not used as a new anchor.

use thiserror::Error;
use tracing::debug;

use crate::defaults::MANIFEST_AVERAGE_SPEED_KMH;
use crate::services::geo::haversine_distance;
use crate::types::{Coordinates, DeliveryStop, ManifestSummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("stop {0} is not on the active manifest")]
    UnknownStop(String),
}

/// Set every stop's origin distance and sort ascending (stable on ties)
pub fn sequence(origin: &Coordinates, mut stops: Vec<DeliveryStop>) -> Vec<DeliveryStop> {
    for stop in &mut stops {
        stop.distance_km = Some(haversine_distance(origin, &stop.coordinates));
    }
    stops.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(0.0);
        let db = b.distance_km.unwrap_or(0.0);
        da.total_cmp(&db)
    });
    stops
}

/// Remove the stop with `order_id` and re-sequence what is left
pub fn complete_stop(
    origin: &Coordinates,
    stops: Vec<DeliveryStop>,
    order_id: &str,
) -> Result<Vec<DeliveryStop>, ManifestError> {
    let before = stops.len();
    let remaining: Vec<DeliveryStop> = stops
        .into_iter()
        .filter(|stop| stop.order_id != order_id)
        .collect();

    if remaining.len() == before {
        return Err(ManifestError::UnknownStop(order_id.to_string()));
    }

    Ok(sequence(origin, remaining))
}

/// Stateful manifest for one driver shift
#[derive(Debug, Clone)]
pub struct DriverManifest {
    origin: Coordinates,
    stops: Vec<DeliveryStop>,
    completed: Vec<String>,
}

impl DriverManifest {
    pub fn new(origin: Coordinates, stops: Vec<DeliveryStop>) -> Self {
        let stops = sequence(&origin, stops);
        debug!("Manifest created with {} stops", stops.len());
        Self {
            origin,
            stops,
            completed: Vec::new(),
        }
    }

    pub fn origin(&self) -> &Coordinates {
        &self.origin
    }

    /// Active stops, nearest first
    pub fn stops(&self) -> &[DeliveryStop] {
        &self.stops
    }

    /// Order ids in the order they were picked up
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn next_stop(&self) -> Option<&DeliveryStop> {
        self.stops.first()
    }

    pub fn is_finished(&self) -> bool {
        self.stops.is_empty()
    }

    /// Mark a stop picked up. Returns the new next stop, `None` once the
    /// manifest is finished.
    pub fn complete(&mut self, order_id: &str) -> Result<Option<&DeliveryStop>, ManifestError> {
        if !self.stops.iter().any(|stop| stop.order_id == order_id) {
            return Err(ManifestError::UnknownStop(order_id.to_string()));
        }

        let stops = std::mem::take(&mut self.stops);
        self.stops = complete_stop(&self.origin, stops, order_id)?;
        self.completed.push(order_id.to_string());
        debug!("Stop {} picked up, {} remaining", order_id, self.stops.len());

        Ok(self.stops.first())
    }

    pub fn summary(&self) -> ManifestSummary {
        let total_distance_km: f64 = self.stops.iter().filter_map(|s| s.distance_km).sum();
        // Estimate from the distance as shown (one decimal), not the raw sum
        let shown_km = (total_distance_km * 10.0).round() / 10.0;
        let estimated_minutes = (shown_km / MANIFEST_AVERAGE_SPEED_KMH * 60.0).ceil() as u32;

        ManifestSummary {
            active_stops: self.stops.len(),
            completed_stops: self.completed.len(),
            total_distance_km,
            estimated_minutes,
        }
    }
}
