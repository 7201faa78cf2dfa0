// src/render/project.rs
//
// Plain equirectangular lon/lat → pixel mapping over the padded
// bounding box of the assembled world. With Antarctica already
// dropped, the fitted extent is what the figure shows.

use crate::geo::Shape;
use crate::params::FIG_MARGIN;

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    min_lon: f64,
    max_lat: f64,
    scale: f64,
    margin: f64,
}

impl Viewport {
    /// Fit the given shapes into `width` pixels; the height follows
    /// the latitude span at the same scale.
    pub fn fit(shapes: &[Shape], width: u32) -> Viewport {
        let mut bb = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for s in shapes {
            let (lo0, la0, lo1, la1) = s.geometry.bbox();
            bb.0 = bb.0.min(lo0);
            bb.1 = bb.1.min(la0);
            bb.2 = bb.2.max(lo1);
            bb.3 = bb.3.max(la1);
        }
        if bb.0 > bb.2 {
            // empty scene: whole-world extent
            bb = (-180.0, -90.0, 180.0, 90.0);
        }

        let lon_span = (bb.2 - bb.0).max(1e-9);
        let lat_span = (bb.3 - bb.1).max(1e-9);
        let margin = FIG_MARGIN;
        let inner_w = (width as f64 - 2.0 * margin).max(1.0);
        let scale = inner_w / lon_span;
        let height = (lat_span * scale + 2.0 * margin).ceil() as u32;

        Viewport {
            width,
            height: height.max(1),
            min_lon: bb.0,
            max_lat: bb.3,
            scale,
            margin,
        }
    }

    /// Pixel position of a lon/lat pair; y grows downward.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            self.margin + (lon - self.min_lon) * self.scale,
            self.margin + (self.max_lat - lat) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Geometry;

    #[test]
    fn corners_map_to_the_margins() {
        let shapes = vec![Shape {
            name: s!("box"),
            geometry: Geometry::Polygon(vec![vec![
                [-10.0, -5.0],
                [10.0, -5.0],
                [10.0, 5.0],
                [-10.0, 5.0],
                [-10.0, -5.0],
            ]]),
        }];
        let vp = Viewport::fit(&shapes, 400);

        let (x, y) = vp.project(-10.0, 5.0); // top-left of the extent
        assert!((x - FIG_MARGIN).abs() < 1e-6);
        assert!((y - FIG_MARGIN).abs() < 1e-6);

        let (x, _) = vp.project(10.0, 5.0); // top-right
        assert!((x - (400.0 - FIG_MARGIN)).abs() < 1e-6);

        // 20° of longitude over the inner width, 10° of latitude high
        assert_eq!(vp.height, (10.0 * (400.0 - 2.0 * FIG_MARGIN) / 20.0 + 2.0 * FIG_MARGIN).ceil() as u32);
    }
}
