// src/gui.rs
use std::error::Error;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use image::RgbaImage;

use crate::{
    csv, file,
    gui_config::{self, GuiConfig, CONFIG_PATH},
    params::{Params, DEFAULT_SVG_FILENAME, MAP_TITLE},
    progress::Progress,
    render::{self, hex_rgb, raster, svg},
    runner::{self, Artifacts},
};

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "titlemap",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(params)))),
    )?;
    Ok(())
}

type WorkerResult = Result<(Artifacts, RgbaImage), String>;

pub struct App {
    params: Params,

    // option fields backed by .titlemap/gui.cfg
    out_path: String,
    world_path: String,

    // in-memory data
    artifacts: Option<Artifacts>,
    texture: Option<egui::TextureHandle>,

    // status/progress
    status: Arc<Mutex<String>>,
    result: Arc<Mutex<Option<WorkerResult>>>,
    running: bool,
}

impl App {
    pub fn new(mut params: Params) -> Self {
        let cfg = gui_config::load(CONFIG_PATH);
        params.write_csv = cfg.write_csv;
        params.write_png = cfg.write_png;
        params.fig_width = cfg.fig_width;

        Self {
            params,
            out_path: cfg.out_path,
            world_path: cfg.world_path,
            artifacts: None,
            texture: None,
            status: Arc::new(Mutex::new("Idle".into())),
            result: Arc::new(Mutex::new(None)),
            running: false,
        }
    }

    fn save_config(&self) {
        let cfg = GuiConfig {
            out_path: self.out_path.clone(),
            world_path: self.world_path.clone(),
            write_csv: self.params.write_csv,
            write_png: self.params.write_png,
            fig_width: self.params.fig_width,
        };
        gui_config::save(CONFIG_PATH, &cfg);
    }

    fn start_run(&mut self, ctx: &egui::Context) {
        if self.running { return; }
        self.running = true;
        self.params.world = PathBuf::from(&self.world_path);
        self.save_config();
        *self.status.lock().unwrap() = "Running…".to_string();

        let params_clone = self.params.clone();
        let status_arc = self.status.clone();
        let result_arc = self.result.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let mut progress = GuiProgress { status: status_arc };
            let out = runner::build(&params_clone, Some(&mut progress))
                .map(|a| {
                    let bitmap = raster::render(&a.scene, &a.viewport);
                    (a, bitmap)
                })
                .map_err(|e| e.to_string());
            *result_arc.lock().unwrap() = Some(out);
            ctx2.request_repaint();
        });
    }

    fn poll_worker(&mut self, ctx: &egui::Context) {
        if !self.running { return; }
        let Some(outcome) = self.result.lock().unwrap().take() else { return };
        self.running = false;
        match outcome {
            Ok((artifacts, bitmap)) => {
                let size = [bitmap.width() as usize, bitmap.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw());
                self.texture =
                    Some(ctx.load_texture("map", color, egui::TextureOptions::LINEAR));
                *self.status.lock().unwrap() = format!(
                    "Ready: {} federations, {} dropped",
                    artifacts.merged.len(),
                    artifacts.dropped_federations.len()
                );
                self.artifacts = Some(artifacts);
            }
            Err(e) => {
                loge!("run failed: {e}");
                *self.status.lock().unwrap() = format!("Error: {e}");
            }
        }
    }

    fn resolved_out(&self) -> Result<PathBuf, Box<dyn Error>> {
        let default = Params::new().out.unwrap_or_default();
        file::resolve_out_path(
            Some(Path::new(&self.out_path)),
            &default,
            DEFAULT_SVG_FILENAME,
        )
    }

    fn export(&mut self, what: Export) {
        let Some(a) = &self.artifacts else { return };
        let res = self.resolved_out().and_then(|svg_path| {
            let path = match what {
                Export::Svg => svg_path,
                Export::Png => svg_path.with_extension("png"),
                Export::Csv => svg_path.with_extension("csv"),
            };
            match what {
                Export::Svg => {
                    file::write_text(&path, &svg::figure(&a.scene, &a.viewport))?
                }
                Export::Png => {
                    let bitmap = raster::render(&a.scene, &a.viewport);
                    file::write_binary(&path, &raster::encode_png(&bitmap)?)?
                }
                Export::Csv => {
                    let rows = csv::merged_rows(&a.merged);
                    let text = csv::rows_to_string(&rows, &Some(csv::merged_headers()), ',');
                    file::write_text(&path, &text)?
                }
            }
            Ok(path)
        });
        *self.status.lock().unwrap() = match res {
            Ok(path) => format!("Wrote {}", path.display()),
            Err(e) => format!("Export error: {e}"),
        };
        self.save_config();
    }
}

#[derive(Clone, Copy)]
enum Export { Svg, Png, Csv }

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker(ctx);

        // Left: legend + options
        egui::SidePanel::left("legend").resizable(false).show(ctx, |ui| {
            ui.heading("Legend");
            ui.label("Titled players per million");
            ui.separator();
            for (hex, label) in render::legend_entries() {
                let [r, g, b] = hex_rgb(hex);
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));
                    ui.label(label);
                });
            }
            ui.separator();

            ui.label("World boundaries:");
            ui.text_edit_singleline(&mut self.world_path);
            ui.label("Output:");
            ui.text_edit_singleline(&mut self.out_path);
            ui.checkbox(&mut self.params.write_png, "Write PNG with figure");
            ui.checkbox(&mut self.params.write_csv, "Write CSV with figure");
        });

        // Center: run/export row, map, merged table
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(MAP_TITLE);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(!self.running, egui::Button::new("Run")).clicked() {
                    self.start_run(ctx);
                }
                let ready = self.artifacts.is_some();
                if ui.add_enabled(ready, egui::Button::new("Export SVG")).clicked() {
                    self.export(Export::Svg);
                }
                if ui.add_enabled(ready, egui::Button::new("Export PNG")).clicked() {
                    self.export(Export::Png);
                }
                if ui.add_enabled(ready, egui::Button::new("Export CSV")).clicked() {
                    self.export(Export::Csv);
                }
                if ui.add_enabled(ready, egui::Button::new("Copy")).clicked() {
                    if let Some(a) = &self.artifacts {
                        let rows = csv::merged_rows(&a.merged);
                        let txt =
                            csv::rows_to_string(&rows, &Some(csv::merged_headers()), ',');
                        ctx.copy_text(txt);
                        *self.status.lock().unwrap() = "Copied to clipboard.".into();
                    }
                }
            });

            let status = self.status.lock().unwrap().clone();
            ui.label(format!("Status: {}", status));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(tex) = &self.texture {
                    ui.add(egui::Image::new(tex).max_width(ui.available_width()));
                } else {
                    ui.label("No map yet — press Run.");
                }

                if let Some(a) = &self.artifacts {
                    ui.separator();
                    merged_table(ui, a);
                }
            });
        });
    }
}

fn merged_table(ui: &mut egui::Ui, artifacts: &Artifacts) {
    let headers = csv::merged_headers();
    let rows = csv::merged_rows(&artifacts.merged);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true).at_least(120.0));
    for _ in 1..headers.len() {
        table = table.column(Column::auto());
    }

    table
        .header(20.0, |mut header| {
            for h in &headers {
                header.col(|ui| { ui.label(h); });
            }
        })
        .body(|mut body| {
            body.rows(18.0, rows.len(), |mut row| {
                let row_idx = row.index();
                if let Some(data) = rows.get(row_idx) {
                    for cell in data {
                        row.col(|ui| { ui.label(cell); });
                    }
                }
            });
        });
}

/* ---------- Progress adapter ---------- */
struct GuiProgress { status: Arc<Mutex<String>> }
impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        *self.status.lock().unwrap() = format!("Starting… {} stage(s)", total);
    }
    fn log(&mut self, msg: &str) { *self.status.lock().unwrap() = msg.to_string(); }
    fn stage_done(&mut self, stage: &str) {
        *self.status.lock().unwrap() = format!("Stage done: {stage}");
    }
}
