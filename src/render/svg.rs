// src/render/svg.rs
//
// The canonical figure file: hand-built SVG text with filled paths,
// point circles, a fixed-order legend and the fixed title. No axes are
// drawn at all. Self-contained — the written file carries its own
// legend, unlike the GUI where egui draws it.

use std::fmt::Write as _;

use crate::geo::Geometry;
use crate::params::{LEGEND_TITLE, MAP_TITLE, POINT_RADIUS, STROKE_RGB};
use crate::render::{legend_entries, PaintedShape};
use crate::render::project::Viewport;

const TITLE_FONT_PX: u32 = 20;
const LEGEND_FONT_PX: u32 = 12;
const LEGEND_ROW_PX: u32 = 18;
const LEGEND_SWATCH_PX: u32 = 12;

pub fn figure(scene: &[PaintedShape], vp: &Viewport) -> String {
    let stroke = format!(
        "#{:02X}{:02X}{:02X}",
        STROKE_RGB[0], STROKE_RGB[1], STROKE_RGB[2]
    );

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = vp.width,
        h = vp.height
    );
    let _ = writeln!(out, r#"<rect width="{}" height="{}" fill="white"/>"#, vp.width, vp.height);

    for shape in scene {
        match &shape.geometry {
            Geometry::Point(lon, lat) => {
                let (x, y) = vp.project(*lon, *lat);
                let _ = writeln!(
                    out,
                    r#"<circle cx="{x:.2}" cy="{y:.2}" r="{POINT_RADIUS}" fill="{}" stroke="{stroke}" stroke-width="0.5"/>"#,
                    shape.color
                );
            }
            Geometry::Polygon(rings) => {
                let _ = writeln!(
                    out,
                    r#"<path d="{}" fill="{}" fill-rule="evenodd" stroke="{stroke}" stroke-width="0.5"/>"#,
                    path_data(rings, vp),
                    shape.color
                );
            }
            Geometry::MultiPolygon(polys) => {
                let d: String = polys
                    .iter()
                    .map(|rings| path_data(rings, vp))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(
                    out,
                    r#"<path d="{d}" fill="{}" fill-rule="evenodd" stroke="{stroke}" stroke-width="0.5"/>"#,
                    shape.color
                );
            }
        }
    }

    write_title(&mut out, vp);
    write_legend(&mut out, vp, &stroke);
    out.push_str("</svg>\n");
    out
}

fn path_data(rings: &[Vec<[f64; 2]>], vp: &Viewport) -> String {
    let mut d = String::new();
    for ring in rings {
        for (i, p) in ring.iter().enumerate() {
            let (x, y) = vp.project(p[0], p[1]);
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x:.2} {y:.2} ");
        }
        d.push('Z');
        d.push(' ');
    }
    d.trim_end().to_string()
}

fn write_title(out: &mut String, vp: &Viewport) {
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="{TITLE_FONT_PX}">{}</text>"#,
        vp.width / 2,
        TITLE_FONT_PX + 4,
        escape_text(MAP_TITLE)
    );
}

/// Lower-left legend: seven bands densest-first, then "no data".
fn write_legend(out: &mut String, vp: &Viewport, stroke: &str) {
    let entries = legend_entries();
    let rows = entries.len() as u32 + 1; // + legend title
    let x = 12u32;
    let top = vp.height.saturating_sub(12 + rows * LEGEND_ROW_PX);

    let _ = writeln!(
        out,
        r#"<text x="{x}" y="{}" font-family="sans-serif" font-size="{LEGEND_FONT_PX}" font-weight="bold">{}</text>"#,
        top + LEGEND_FONT_PX,
        escape_text(LEGEND_TITLE)
    );
    for (i, (color, label)) in entries.iter().enumerate() {
        let y = top + (i as u32 + 1) * LEGEND_ROW_PX;
        let _ = writeln!(
            out,
            r#"<rect x="{x}" y="{y}" width="{LEGEND_SWATCH_PX}" height="{LEGEND_SWATCH_PX}" fill="{color}" stroke="{stroke}" stroke-width="0.5"/>"#
        );
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{LEGEND_FONT_PX}">{}</text>"#,
            x + LEGEND_SWATCH_PX + 6,
            y + LEGEND_SWATCH_PX - 2,
            escape_text(label)
        );
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Shape;

    #[test]
    fn figure_carries_title_legend_and_fills() {
        let scene = vec![PaintedShape {
            name: s!("box"),
            color: "#003C00",
            geometry: Geometry::Polygon(vec![vec![
                [0.0, 0.0],
                [10.0, 0.0],
                [10.0, 10.0],
                [0.0, 0.0],
            ]]),
        }];
        let shapes = vec![Shape { name: s!("box"), geometry: scene[0].geometry.clone() }];
        let vp = Viewport::fit(&shapes, 400);

        let svg = figure(&scene, &vp);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(MAP_TITLE));
        assert!(svg.contains(LEGEND_TITLE));
        assert!(svg.contains(r##"fill="#003C00""##));
        // all eight legend swatches present
        for (color, _) in legend_entries() {
            assert!(svg.contains(color), "legend missing {color}");
        }
        assert!(svg.contains("no data"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
