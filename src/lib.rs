pub mod client;
pub mod config;
pub mod error;
pub mod geopoint;
pub mod haversine;
mod orchestrator;
mod requests;
pub mod types;

pub use client::GeoClient;
pub use config::ClientConfig;
pub use error::GeoError;
pub use geopoint::{Coordinate, Lookup, ResolvedLocation};
pub use haversine::{distance, km_to_miles, DistanceUnit, EARTH_RADIUS_KM, KM_TO_MILES};
