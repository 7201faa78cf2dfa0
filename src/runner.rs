// src/runner.rs
//
// Staged pipeline driver: fetch both pages, aggregate, reconcile,
// join, classify, assemble the world, paint the scene — then (for the
// CLI path) write the figure and optional extras. Strictly sequential;
// every stage consumes the previous stage's output.

use std::error::Error;
use std::path::PathBuf;

use crate::{
    csv,
    data::MergedRecord,
    file,
    geo::world,
    params::{Params, DEFAULT_SVG_FILENAME},
    pipeline::{aggregate, classify, merge, names},
    progress::Progress,
    render::{self, project::Viewport, raster, svg, PaintedShape},
    scrape,
};

pub struct Artifacts {
    pub merged: Vec<MergedRecord>,
    pub scene: Vec<PaintedShape>,
    pub viewport: Viewport,
    pub dropped_federations: Vec<String>,
    pub dropped_countries: Vec<String>,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub merged_rows: usize,
    pub files_written: Vec<PathBuf>,
}

const STAGES: usize = 5;

/// Fetch, transform and paint — everything except file output.
pub fn build(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Artifacts, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
    }

    let mut titles = scrape::collect_titles(progress.as_deref_mut())?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("titles");
    }

    let mut pops = scrape::collect_population(progress.as_deref_mut())?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("population");
    }

    aggregate::append_uk_total(&mut titles);
    names::reconcile_titles(&mut titles);
    names::reconcile_population(&mut pops);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("reconcile");
    }

    let joined = merge::inner_join(&titles, &pops);
    let mut merged = joined.records;
    classify::apply(&mut merged);
    logf!(
        "merge: {} rows, dropped {} federations / {} countries",
        merged.len(),
        joined.dropped_federations.len(),
        joined.dropped_countries.len()
    );
    logd!("dropped federations: {:?}", joined.dropped_federations);
    logd!("dropped countries: {:?}", joined.dropped_countries);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Merged: {} rows", merged.len()));
        p.stage_done("merge");
    }

    let world = world::assemble(&params.world)?;
    let viewport = Viewport::fit(&world, params.fig_width);
    let scene = render::build_scene(world, &merged);
    logf!("scene: {} shapes", scene.len());
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("world");
    }

    Ok(Artifacts {
        merged,
        scene,
        viewport,
        dropped_federations: joined.dropped_federations,
        dropped_countries: joined.dropped_countries,
    })
}

/// Full run: build, write the SVG figure and any requested extras.
pub fn run(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let artifacts = build(params, progress.as_deref_mut())?;

    let default_svg = Params::new().out.unwrap_or_default();
    let svg_path = file::resolve_out_path(
        params.out.as_deref(),
        &default_svg,
        DEFAULT_SVG_FILENAME,
    )?;

    let mut written = Vec::new();

    let figure = svg::figure(&artifacts.scene, &artifacts.viewport);
    file::write_text(&svg_path, &figure)?;
    logf!("wrote {}", svg_path.display());
    written.push(svg_path.clone());

    if params.write_png {
        let png_path = svg_path.with_extension("png");
        let bitmap = raster::render(&artifacts.scene, &artifacts.viewport);
        file::write_binary(&png_path, &raster::encode_png(&bitmap)?)?;
        logf!("wrote {}", png_path.display());
        written.push(png_path);
    }

    if params.write_csv {
        let csv_path = svg_path.with_extension("csv");
        let rows = csv::merged_rows(&artifacts.merged);
        let text = csv::rows_to_string(&rows, &Some(csv::merged_headers()), ',');
        file::write_text(&csv_path, &text)?;
        logf!("wrote {}", csv_path.display());
        written.push(csv_path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        merged_rows: artifacts.merged.len(),
        files_written: written,
    })
}
