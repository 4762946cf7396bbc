//! Business logic services

pub mod best_route;
pub mod candidate_store;
pub mod cost;
pub mod geo;
pub mod geocoding;
pub mod manifest;
pub mod nominatim;
pub mod routing;
