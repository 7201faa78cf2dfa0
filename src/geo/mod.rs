// src/geo/mod.rs

pub mod geojson;
pub mod world;

pub use geojson::{Geometry, Shape};
