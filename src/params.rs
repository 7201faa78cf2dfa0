// src/params.rs
use std::path::PathBuf;

/* ---------------- Source pages ---------------- */

pub const FIDE_RANKING_URL: &str = "https://ratings.fide.com/topfed.phtml?tops=0&ina=2&country=";
pub const WIKI_POPULATION_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_countries_and_dependencies_by_population";

pub const USER_AGENT: &str = "titlemap/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/* ---------------- Local data & output ---------------- */

pub const DEFAULT_WORLD_PATH: &str = "data/world_lowres.geojson";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_SVG_FILENAME: &str = "titlemap.svg";
pub const DEFAULT_PNG_FILENAME: &str = "titlemap.png";
pub const DEFAULT_CSV_FILENAME: &str = "titlemap.csv";

/* ---------------- Figure ---------------- */

pub const DEFAULT_FIG_WIDTH: u32 = 1500;
pub const FIG_MARGIN: f64 = 16.0;
pub const POINT_RADIUS: f64 = 3.0;
pub const STROKE_RGB: [u8; 3] = [40, 40, 40];

pub const MAP_TITLE: &str = "Chess title density by FIDE federation";
pub const LEGEND_TITLE: &str = "Titled players per million";

#[derive(Clone)]
pub struct Params {
    pub out: Option<PathBuf>,   // output path (dir, or explicit .svg file)
    pub world: PathBuf,         // world boundaries GeoJSON
    pub write_csv: bool,        // also write the merged table
    pub write_png: bool,        // also write the raster bitmap
    pub fig_width: u32,         // figure width in pixels (height follows extent)
}

impl Params {
    pub fn new() -> Self {
        Self {
            out: Some(PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SVG_FILENAME)),
            world: PathBuf::from(DEFAULT_WORLD_PATH),
            write_csv: false,
            write_png: false,
            fig_width: DEFAULT_FIG_WIDTH,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
