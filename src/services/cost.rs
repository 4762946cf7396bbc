//! Fuel, cost and emission estimates for a routed trip

use serde::Serialize;

/// Vehicle fuel efficiency in km per liter
pub const FUEL_EFFICIENCY_KM_PER_L: f64 = 15.0;

/// Fuel price in rupees per liter
pub const FUEL_PRICE_PER_L: f64 = 101.77;

/// CO2 emitted per liter burned, in kg
pub const EMISSION_FACTOR_KG_PER_L: f64 = 2.3;

/// Constants used to turn a distance into trip costs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    pub fuel_efficiency_km_per_l: f64,
    pub fuel_price_per_l: f64,
    pub emission_factor_kg_per_l: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fuel_efficiency_km_per_l: FUEL_EFFICIENCY_KM_PER_L,
            fuel_price_per_l: FUEL_PRICE_PER_L,
            emission_factor_kg_per_l: EMISSION_FACTOR_KG_PER_L,
        }
    }
}

/// Derived trip metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCosts {
    pub distance_km: f64,
    pub fuel_liters: f64,
    pub cost_rupees: f64,
    pub emissions_kg: f64,
}

impl CostModel {
    /// Unrounded metrics, linear in distance
    pub fn estimate(&self, distance_meters: f64) -> TripCosts {
        let distance_km = distance_meters / 1000.0;
        let fuel_liters = distance_km / self.fuel_efficiency_km_per_l;

        TripCosts {
            distance_km,
            fuel_liters,
            cost_rupees: fuel_liters * self.fuel_price_per_l,
            emissions_kg: fuel_liters * self.emission_factor_kg_per_l,
        }
    }

    /// Two-decimal display values. Fuel is rounded first and cost and
    /// emissions are computed from the rounded fuel figure.
    pub fn estimate_display(&self, distance_meters: f64) -> TripCosts {
        let raw = self.estimate(distance_meters);
        let fuel_liters = round2(raw.fuel_liters);

        TripCosts {
            distance_km: round2(raw.distance_km),
            fuel_liters,
            cost_rupees: round2(fuel_liters * self.fuel_price_per_l),
            emissions_kg: round2(fuel_liters * self.emission_factor_kg_per_l),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
