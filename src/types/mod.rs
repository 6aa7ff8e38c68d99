// src/types/mod.rs

pub mod common;
pub mod geocode;

pub use common::{AddressComponent, Geometry, LatLng, Viewport};
pub use geocode::{GeocodeResponse, GeocodeResult, GeocodeStatus};
