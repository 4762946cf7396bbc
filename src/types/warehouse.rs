//! Warehouse candidate types

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A warehouse address eligible as a return destination for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseCandidate {
    pub id: String,
    pub category: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl WarehouseCandidate {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// First segment of the address, used in compact listings
    pub fn short_address(&self) -> &str {
        self.address.split(',').next().unwrap_or(&self.address).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address_takes_first_segment() {
        let candidate = WarehouseCandidate {
            id: "1".to_string(),
            category: "Electronics".to_string(),
            address: "Ambattur Industrial Estate, Chennai, Tamil Nadu, India".to_string(),
            lat: 13.0983,
            lng: 80.1622,
        };
        assert_eq!(candidate.short_address(), "Ambattur Industrial Estate");
    }

    #[test]
    fn test_candidate_serializes_flat_coordinates() {
        let candidate = WarehouseCandidate {
            id: "1717000000000".to_string(),
            category: "Electronics".to_string(),
            address: "Guindy".to_string(),
            lat: 13.01,
            lng: 80.22,
        };
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["lat"], 13.01);
        assert_eq!(json["lng"], 80.22);
        assert_eq!(json["category"], "Electronics");
    }
}
