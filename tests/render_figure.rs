// tests/render_figure.rs
//
// Figure-level checks: scene coloring through both backends.

use titlemap::data::MergedRecord;
use titlemap::geo::{Geometry, Shape};
use titlemap::params::MAP_TITLE;
use titlemap::pipeline::classify::{Band, FALLBACK_COLOR, NO_DATA_COLOR};
use titlemap::render::{self, hex_rgb, raster, svg};
use titlemap::render::project::Viewport;

fn square(name: &str, x: f64) -> Shape {
    Shape {
        name: name.into(),
        geometry: Geometry::Polygon(vec![vec![
            [x, 0.0],
            [x + 10.0, 0.0],
            [x + 10.0, 10.0],
            [x, 10.0],
            [x, 0.0],
        ]]),
    }
}

fn merged(name: &str, metric: f64) -> MergedRecord {
    let mut r = MergedRecord {
        name: name.into(),
        gm_count: 0,
        im_count: 0,
        total_titled: 0,
        population: 1_000_000,
        titled_per_million: metric,
        band: None,
    };
    r.band = Band::classify(metric);
    r
}

#[test]
fn classified_country_gets_its_band_color_in_the_raster() {
    let world = vec![square("France", 0.0), square("Nomatchia", 20.0)];
    let records = vec![merged("France", 7.0)]; // [5,15) band
    let scene = render::build_scene(world.clone(), &records);
    let vp = Viewport::fit(&world, 300);
    let img = raster::render(&scene, &vp);

    let (x, y) = vp.project(5.0, 5.0); // center of France
    let [r, g, b] = hex_rgb(Band::Under15.color());
    assert_eq!(img.get_pixel(x as u32, y as u32).0, [r, g, b, 255]);

    // Geometry-only country: fallback color, not an error.
    let (x, y) = vp.project(25.0, 5.0);
    let [r, g, b] = hex_rgb(FALLBACK_COLOR);
    assert_eq!(img.get_pixel(x as u32, y as u32).0, [r, g, b, 255]);
}

#[test]
fn greenland_is_silver_even_with_a_dense_band() {
    let world = vec![square("Greenland", 0.0)];
    let records = vec![merged("Greenland", 100.0)];
    let scene = render::build_scene(world.clone(), &records);
    let vp = Viewport::fit(&world, 300);
    let img = raster::render(&scene, &vp);

    let (x, y) = vp.project(5.0, 5.0);
    let [r, g, b] = hex_rgb(NO_DATA_COLOR);
    assert_eq!(img.get_pixel(x as u32, y as u32).0, [r, g, b, 255]);
}

#[test]
fn svg_figure_is_self_contained() {
    let world = vec![square("France", 0.0)];
    let records = vec![merged("France", 33.0)];
    let scene = render::build_scene(world.clone(), &records);
    let vp = Viewport::fit(&world, 300);

    let figure = svg::figure(&scene, &vp);
    assert!(figure.contains(MAP_TITLE));
    assert!(figure.contains(r##"fill="#001A00""##), "30+ fill for France");
    for (color, label) in render::legend_entries() {
        assert!(figure.contains(color), "legend swatch {color}");
        assert!(figure.contains(label), "legend label {label}");
    }
    // no axes of any kind
    assert!(!figure.contains("axis"));
}

#[test]
fn point_seeds_are_drawn_as_discs() {
    let world = vec![
        square("France", 0.0),
        Shape { name: "Monaco".into(), geometry: Geometry::Point(5.0, 5.0) },
    ];
    let records = vec![merged("Monaco", 1000.0)];
    let scene = render::build_scene(world.clone(), &records);
    let vp = Viewport::fit(&world, 300);
    let img = raster::render(&scene, &vp);

    let (x, y) = vp.project(5.0, 5.0);
    let [r, g, b] = hex_rgb(Band::Over30.color());
    assert_eq!(img.get_pixel(x as u32, y as u32).0, [r, g, b, 255]);
}
