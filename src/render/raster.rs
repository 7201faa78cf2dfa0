// src/render/raster.rs
//
// CPU rasterizer: scanline even-odd polygon fill, Bresenham outlines,
// filled discs for the point seeds. Output is an RGBA buffer the GUI
// shows as a texture and the PNG export encodes as-is.

use std::error::Error;
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::geo::Geometry;
use crate::params::{POINT_RADIUS, STROKE_RGB};
use crate::render::{hex_rgb, PaintedShape};
use crate::render::project::Viewport;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub fn render(scene: &[PaintedShape], vp: &Viewport) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(vp.width, vp.height, BACKGROUND);
    let stroke = Rgba([STROKE_RGB[0], STROKE_RGB[1], STROKE_RGB[2], 255]);

    for shape in scene {
        let [r, g, b] = hex_rgb(shape.color);
        let fill = Rgba([r, g, b, 255]);

        match &shape.geometry {
            Geometry::Point(lon, lat) => {
                let (x, y) = vp.project(*lon, *lat);
                fill_disc(&mut img, x, y, POINT_RADIUS, fill);
                ring_outline(&mut img, x, y, POINT_RADIUS, stroke);
            }
            Geometry::Polygon(rings) => {
                let px = project_rings(rings, vp);
                fill_rings(&mut img, &px, fill);
                stroke_rings(&mut img, &px, stroke);
            }
            Geometry::MultiPolygon(polys) => {
                for rings in polys {
                    let px = project_rings(rings, vp);
                    fill_rings(&mut img, &px, fill);
                    stroke_rings(&mut img, &px, stroke);
                }
            }
        }
    }
    img
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn project_rings(rings: &[Vec<[f64; 2]>], vp: &Viewport) -> Vec<Vec<(f64, f64)>> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|p| vp.project(p[0], p[1])).collect())
        .collect()
}

/// Even-odd scanline fill across all rings at once, so holes stay
/// unfilled.
fn fill_rings(img: &mut RgbaImage, rings: &[Vec<(f64, f64)>], color: Rgba<u8>) {
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for ring in rings {
        for &(_, y) in ring {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    if min_y > max_y {
        return;
    }

    let y0 = min_y.floor().max(0.0) as u32;
    let y1 = (max_y.ceil() as i64).min(img.height() as i64 - 1).max(0) as u32;

    let mut xs: Vec<f64> = Vec::new();
    for y in y0..=y1 {
        let yc = y as f64 + 0.5;
        xs.clear();
        for ring in rings {
            if ring.len() < 2 {
                continue;
            }
            for i in 0..ring.len() {
                let (x1, y1p) = ring[i];
                let (x2, y2p) = ring[(i + 1) % ring.len()];
                if (y1p <= yc) != (y2p <= yc) {
                    let t = (yc - y1p) / (y2p - y1p);
                    xs.push(x1 + t * (x2 - x1));
                }
            }
        }
        xs.sort_by(f64::total_cmp);
        for pair in xs.chunks_exact(2) {
            let a = pair[0].ceil().max(0.0) as i64;
            let b = (pair[1].floor() as i64).min(img.width() as i64 - 1);
            for x in a..=b {
                img.put_pixel(x as u32, y, color);
            }
        }
    }
}

fn stroke_rings(img: &mut RgbaImage, rings: &[Vec<(f64, f64)>], color: Rgba<u8>) {
    for ring in rings {
        if ring.len() < 2 {
            continue;
        }
        for i in 0..ring.len() {
            let (x1, y1) = ring[i];
            let (x2, y2) = ring[(i + 1) % ring.len()];
            draw_line(img, x1, y1, x2, y2, color);
        }
    }
}

fn draw_line(img: &mut RgbaImage, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba<u8>) {
    let mut x = x1.round() as i64;
    let mut y = y1.round() as i64;
    let xe = x2.round() as i64;
    let ye = y2.round() as i64;

    let dx = (xe - x).abs();
    let dy = -(ye - y).abs();
    let sx = if x < xe { 1 } else { -1 };
    let sy = if y < ye { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_clipped(img, x, y, color);
        if x == xe && y == ye {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn fill_disc(img: &mut RgbaImage, cx: f64, cy: f64, r: f64, color: Rgba<u8>) {
    let x0 = (cx - r).floor() as i64;
    let x1 = (cx + r).ceil() as i64;
    let y0 = (cy - r).floor() as i64;
    let y1 = (cy + r).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                put_clipped(img, x, y, color);
            }
        }
    }
}

fn ring_outline(img: &mut RgbaImage, cx: f64, cy: f64, r: f64, color: Rgba<u8>) {
    let x0 = (cx - r - 1.0).floor() as i64;
    let x1 = (cx + r + 1.0).ceil() as i64;
    let y0 = (cy - r - 1.0).floor() as i64;
    let y1 = (cy + r + 1.0).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            if (d - r).abs() <= 0.6 {
                put_clipped(img, x, y, color);
            }
        }
    }
}

fn put_clipped(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
