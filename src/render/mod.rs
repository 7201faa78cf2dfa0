// src/render/mod.rs
//
// Figure construction. One projected scene feeds two backends: the
// canonical SVG figure (legend + title baked in) and a CPU raster for
// the GUI texture / PNG export.

pub mod project;
pub mod raster;
pub mod svg;

use std::collections::HashMap;

use crate::data::MergedRecord;
use crate::geo::Shape;
use crate::pipeline::classify::{
    Band, FALLBACK_COLOR, NO_DATA_COLOR, NO_DATA_LABEL, NO_DATA_NAME,
};

/// A shape with its resolved fill color.
pub struct PaintedShape {
    pub name: String,
    pub color: &'static str,
    pub geometry: crate::geo::Geometry,
}

/// Left join: the geometry set decides which shapes are drawn. A shape
/// with no merged record (or a bandless one) gets the fallback color;
/// Greenland is always the "no data" silver, whatever its band.
pub fn build_scene(world: Vec<Shape>, merged: &[MergedRecord]) -> Vec<PaintedShape> {
    let bands: HashMap<&str, Option<Band>> =
        merged.iter().map(|r| (r.name.as_str(), r.band)).collect();

    world
        .into_iter()
        .map(|s| {
            let color = if s.name == NO_DATA_NAME {
                NO_DATA_COLOR
            } else {
                bands
                    .get(s.name.as_str())
                    .copied()
                    .flatten()
                    .map(Band::color)
                    .unwrap_or(FALLBACK_COLOR)
            };
            PaintedShape { name: s.name, color, geometry: s.geometry }
        })
        .collect()
}

/// Fixed-order legend: the seven bands densest-first, then the silver
/// "no data" swatch.
pub fn legend_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<(&'static str, &'static str)> = Band::LEGEND
        .iter()
        .map(|b| (b.color(), b.label()))
        .collect();
    entries.push((NO_DATA_COLOR, NO_DATA_LABEL));
    entries
}

/// `#RRGGBB` → rgb bytes. The inputs are the fixed band constants;
/// anything malformed just goes dark.
pub fn hex_rgb(hex: &str) -> [u8; 3] {
    let h = hex.trim_start_matches('#');
    let byte = |i: usize| {
        h.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    [byte(0), byte(2), byte(4)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Geometry;

    fn shape(name: &str) -> Shape {
        Shape { name: s!(name), geometry: Geometry::Point(0.0, 0.0) }
    }

    fn merged(name: &str, band: Option<Band>) -> MergedRecord {
        MergedRecord {
            name: s!(name),
            gm_count: 0,
            im_count: 0,
            total_titled: 0,
            population: 1,
            titled_per_million: 0.0,
            band,
        }
    }

    #[test]
    fn geometry_only_shapes_get_the_fallback_color() {
        let scene = build_scene(vec![shape("Nowhere")], &[]);
        assert_eq!(scene[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn greenland_is_forced_to_no_data_regardless_of_band() {
        let scene = build_scene(
            vec![shape("Greenland")],
            &[merged("Greenland", Some(Band::Over30))],
        );
        assert_eq!(scene[0].color, NO_DATA_COLOR);
    }

    #[test]
    fn legend_has_eight_fixed_entries() {
        let entries = legend_entries();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0], ("#001A00", "30+"));
        assert_eq!(entries[7], (NO_DATA_COLOR, NO_DATA_LABEL));
    }

    #[test]
    fn hex_parses_band_colors() {
        assert_eq!(hex_rgb("#FF852F"), [0xFF, 0x85, 0x2F]);
        assert_eq!(hex_rgb("#C0C0C0"), [0xC0, 0xC0, 0xC0]);
    }
}
