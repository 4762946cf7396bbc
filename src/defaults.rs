//! Built-in data: driver depot, seeded pickups and the active return
//!
//! Stops start without a distance; the manifest fills it in when sequencing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{Coordinates, DeliveryStop, ReturnOrder, ReturnStatus};

/// Driver depot used as the fixed manifest origin (Chennai Central)
pub const DRIVER_ORIGIN: Coordinates = Coordinates::new(13.0827, 80.2707);

/// Average city speed used for the manifest time estimate
pub const MANIFEST_AVERAGE_SPEED_KMH: f64 = 30.0;

fn delivery_time(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 25)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid static delivery time")
}

/// Static description of a seeded pickup
struct SeedStop {
    order_id: &'static str,
    customer_name: &'static str,
    address: &'static str,
    landmark: &'static str,
    pincode: &'static str,
    contact_number: &'static str,
    due: (u32, u32),
    coordinates: Coordinates,
}

const SEED_STOPS: [SeedStop; 8] = [
    SeedStop {
        order_id: "ORD-2024-003",
        customer_name: "Ananya Srinivasan",
        address: "28, Gandhi Street, Mylapore",
        landmark: "Near Kapaleeshwarar Temple",
        pincode: "600004",
        contact_number: "+91 98765 43212",
        due: (12, 0),
        coordinates: Coordinates::new(13.0359, 80.2707),
    },
    SeedStop {
        order_id: "ORD-2024-004",
        customer_name: "Rahul Menon",
        address: "9, South Boag Road, T. Nagar",
        landmark: "Near Pondy Bazaar",
        pincode: "600017",
        contact_number: "+91 98765 43213",
        due: (13, 45),
        coordinates: Coordinates::new(13.0399, 80.2401),
    },
    SeedStop {
        order_id: "ORD-2024-005",
        customer_name: "Sneha Iyer",
        address: "12, 2nd Cross Street, Besant Nagar",
        landmark: "Near Elliot's Beach",
        pincode: "600090",
        contact_number: "+91 98765 43214",
        due: (14, 30),
        coordinates: Coordinates::new(12.9991, 80.2673),
    },
    SeedStop {
        order_id: "ORD-2024-006",
        customer_name: "Vikram Rajendran",
        address: "34, Velachery Main Road, Velachery",
        landmark: "Near Phoenix MarketCity",
        pincode: "600042",
        contact_number: "+91 98765 43215",
        due: (15, 15),
        coordinates: Coordinates::new(12.9791, 80.2200),
    },
    SeedStop {
        order_id: "ORD-2024-007",
        customer_name: "Meera Krishnan",
        address: "5, Anna Salai, Teynampet",
        landmark: "Near LIC Building",
        pincode: "600018",
        contact_number: "+91 98765 43216",
        due: (16, 0),
        coordinates: Coordinates::new(13.0367, 80.2507),
    },
    SeedStop {
        order_id: "ORD-2024-008",
        customer_name: "Arjun Balaji",
        address: "21, Greams Road, Thousand Lights",
        landmark: "Near Apollo Hospitals",
        pincode: "600006",
        contact_number: "+91 98765 43217",
        due: (17, 0),
        coordinates: Coordinates::new(13.0604, 80.2494),
    },
    SeedStop {
        order_id: "ORD-2024-009",
        customer_name: "Divya Narayanan",
        address: "7, Sardar Patel Road, Guindy",
        landmark: "Near Raj Bhavan",
        pincode: "600032",
        contact_number: "+91 98765 43218",
        due: (18, 0),
        coordinates: Coordinates::new(13.0100, 80.2200),
    },
    SeedStop {
        order_id: "ORD-2024-010",
        customer_name: "Suresh Venkatesan",
        address: "18, Cathedral Road, Gopalapuram",
        landmark: "Near Santhome Cathedral",
        pincode: "600086",
        contact_number: "+91 98765 43219",
        due: (19, 0),
        coordinates: Coordinates::new(13.0333, 80.2667),
    },
];

/// Today's pickups for the Chennai route
pub fn seed_stops() -> Vec<DeliveryStop> {
    SEED_STOPS
        .iter()
        .map(|seed| DeliveryStop {
            order_id: seed.order_id.to_string(),
            customer_name: seed.customer_name.to_string(),
            address: seed.address.to_string(),
            landmark: seed.landmark.to_string(),
            pincode: seed.pincode.to_string(),
            contact_number: seed.contact_number.to_string(),
            estimated_delivery_time: delivery_time(seed.due.0, seed.due.1),
            coordinates: seed.coordinates,
            distance_km: None,
        })
        .collect()
}

/// The return currently awaiting a warehouse
pub fn active_return_order() -> ReturnOrder {
    ReturnOrder {
        id: "RET-001".to_string(),
        product_name: "Nike Air Max 270".to_string(),
        category: "Electronics".to_string(),
        status: ReturnStatus::InProcess,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_stops_are_unsequenced_and_unique() {
        let stops = seed_stops();

        assert_eq!(stops.len(), SEED_STOPS.len());
        assert!(stops.iter().all(|s| s.distance_km.is_none()));

        let mut ids: Vec<_> = stops.iter().map(|s| s.order_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), stops.len());
    }

    #[test]
    fn test_seed_stop_due_times() {
        let stops = seed_stops();
        assert_eq!(stops[0].estimated_delivery_time.format("%H:%M").to_string(), "12:00");
        assert_eq!(stops[1].estimated_delivery_time.format("%H:%M").to_string(), "13:45");
    }
}
