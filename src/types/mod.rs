//! Type definitions

pub mod location;
pub mod order;
pub mod route;
pub mod stop;
pub mod warehouse;

pub use location::*;
pub use order::*;
pub use route::*;
pub use stop::*;
pub use warehouse::*;
