//! Delivery stop types (driver manifest)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A pickup/delivery stop on the driver's manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStop {
    pub order_id: String,
    pub customer_name: String,
    pub address: String,
    pub landmark: String,
    pub pincode: String,
    pub contact_number: String,
    pub estimated_delivery_time: NaiveDateTime,
    pub coordinates: Coordinates,
    /// Great-circle distance from the driver origin in km, set by sequencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Aggregates shown above the manifest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestSummary {
    pub active_stops: usize,
    pub completed_stops: usize,
    /// Sum of the per-stop origin distances
    pub total_distance_km: f64,
    pub estimated_minutes: u32,
}
