//! ReturnFlow - driver manifest sequencing and returns routing
//!
//! Two independent pieces:
//! - the driver manifest, ordering pickups nearest-first from a fixed depot
//! - the returns router, sending a return to the fastest warehouse of its
//!   category using an external routing service

pub mod config;
pub mod defaults;
pub mod services;
pub mod types;
