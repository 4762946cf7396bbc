//! Geographic calculations

use crate::types::Coordinates;

/// Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Road distance coefficient (straight line to road)
pub const ROAD_COEFFICIENT: f64 = 1.3;

/// Average speed in km/h for mock travel time estimation
pub const AVERAGE_SPEED_KMH: f64 = 40.0;

/// Great-circle distance between two points in kilometers (Haversine)
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimate road distance in kilometers from straight-line distance
pub fn road_distance(from: &Coordinates, to: &Coordinates, road_coefficient: f64) -> f64 {
    haversine_distance(from, to) * road_coefficient
}

/// Travel time in seconds for a distance at a constant speed
pub fn travel_seconds(distance_km: f64, speed_kmh: f64) -> f64 {
    distance_km / speed_kmh * 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chennai_central() -> Coordinates {
        Coordinates { lat: 13.0827, lng: 80.2707 }
    }

    fn mylapore() -> Coordinates {
        Coordinates { lat: 13.0359, lng: 80.2707 }
    }

    #[test]
    fn test_haversine_chennai_bengaluru() {
        let bengaluru = Coordinates { lat: 12.9716, lng: 77.5946 };

        let distance = haversine_distance(&chennai_central(), &bengaluru);

        // Chennai to Bengaluru is approximately 290 km as the crow flies
        assert!((distance - 290.0).abs() < 10.0, "got {} km", distance);
    }

    #[test]
    fn test_haversine_same_point() {
        let point = chennai_central();
        assert_eq!(haversine_distance(&point, &point), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = chennai_central();
        let b = Coordinates { lat: 12.9791, lng: 80.2200 };
        assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_along_meridian() {
        // Same longitude: 0.0468 degrees of latitude ~ 5.2 km
        let distance = haversine_distance(&chennai_central(), &mylapore());
        let expected = 0.0468_f64.to_radians() * EARTH_RADIUS_KM;
        assert!((distance - expected).abs() < 1e-6);
    }

    #[test]
    fn test_road_distance_applies_coefficient() {
        let straight = haversine_distance(&chennai_central(), &mylapore());
        let road = road_distance(&chennai_central(), &mylapore(), ROAD_COEFFICIENT);
        assert!((road / straight - ROAD_COEFFICIENT).abs() < 1e-9);
    }

    #[test]
    fn test_travel_seconds() {
        // 40 km at 40 km/h is one hour
        assert!((travel_seconds(40.0, AVERAGE_SPEED_KMH) - 3600.0).abs() < 1e-9);
    }
}
