// src/geo/world.rs
//
// World boundary assembly: the bundled low-resolution dataset, plus
// fifteen point seeds for micro-states the dataset omits, plus two
// disputed-territory merges and the Antarctica drop.

use std::error::Error;
use std::fs;
use std::path::Path;

use super::geojson::{self, Geometry, Shape};

/// Micro-states and territories absent from the low-res boundaries,
/// placed as single points (lon, lat).
pub const SEED_POINTS: [(&str, f64, f64); 15] = [
    ("Monaco", 7.4246, 43.7384),
    ("San Marino", 12.4578, 43.9424),
    ("Liechtenstein", 9.5554, 47.1660),
    ("Andorra", 1.5218, 42.5063),
    ("Malta", 14.3754, 35.9375),
    ("Bosnia & Herzegovina", 17.6791, 43.9159),
    ("Seychelles", 55.4919, -4.6796),
    ("Trinidad & Tobago", -61.2225, 10.6918),
    ("Singapore", 103.8198, 1.3521),
    ("Maldives", 73.2207, 3.2028),
    ("Bahrain", 50.5577, 26.0667),
    ("Hong Kong, China", 114.1694, 22.3193),
    ("Eswatini", 31.4659, -26.5225),
    ("Antigua and Barbuda", -61.7964, 17.0608),
    ("Cape Verde", -23.6042, 15.1201),
];

/// Disputed territories drawn as part of a parent country. A policy
/// choice, not a geometry necessity.
pub const ABSORB_POLICY: [(&str, &str); 2] =
    [("Somalia", "Somaliland"), ("Morocco", "W. Sahara")];

/// Carries no population or title data and would dominate the plot
/// extent.
pub const DROP_NAME: &str = "Antarctica";

pub fn load(path: &Path) -> Result<Vec<Shape>, Box<dyn Error>> {
    let text = fs::read_to_string(path).map_err(|e| {
        format!(
            "cannot read world boundaries {} ({e}); see data/README.md",
            path.display()
        )
    })?;
    geojson::parse_feature_collection(&text)
}

pub fn seed_micro_states(world: &mut Vec<Shape>) {
    for (name, lon, lat) in SEED_POINTS {
        world.push(Shape {
            name: s!(name),
            geometry: Geometry::Point(lon, lat),
        });
    }
}

/// If both names exist, the parent's geometry becomes the coverage
/// union of the two and the territory entry is removed. Silently
/// skipped when either side is absent — never an error.
pub fn absorb(world: &mut Vec<Shape>, parent: &str, territory: &str) -> bool {
    let Some(pi) = world.iter().position(|s| s.name == parent) else {
        return false;
    };
    let Some(ti) = world.iter().position(|s| s.name == territory) else {
        return false;
    };
    let t = world.remove(ti);
    let pi = if ti < pi { pi - 1 } else { pi };
    let parent_geom = world[pi].geometry.clone();
    world[pi].geometry = Geometry::coverage_union(parent_geom, t.geometry);
    true
}

pub fn drop_named(world: &mut Vec<Shape>, name: &str) {
    world.retain(|s| s.name != name);
}

/// Full assembly: load, seed the micro-states, apply the absorb
/// policy, drop Antarctica.
pub fn assemble(path: &Path) -> Result<Vec<Shape>, Box<dyn Error>> {
    let mut world = load(path)?;
    seed_micro_states(&mut world);
    for (parent, territory) in ABSORB_POLICY {
        if absorb(&mut world, parent, territory) {
            logf!("geometry: merged {territory} into {parent}");
        }
    }
    drop_named(&mut world, DROP_NAME);
    Ok(world)
}
