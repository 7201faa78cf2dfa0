// src/gui_config.rs
use std::{fs, path::Path};

use crate::params::{DEFAULT_FIG_WIDTH, DEFAULT_OUT_DIR, DEFAULT_SVG_FILENAME, DEFAULT_WORLD_PATH};

pub const CONFIG_PATH: &str = ".titlemap/gui.cfg";

pub struct GuiConfig {
    pub out_path: String,
    pub world_path: String,
    pub write_csv: bool,
    pub write_png: bool,
    pub fig_width: u32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            out_path: format!("{DEFAULT_OUT_DIR}/{DEFAULT_SVG_FILENAME}"),
            world_path: DEFAULT_WORLD_PATH.into(),
            write_csv: false,
            write_png: false,
            fig_width: DEFAULT_FIG_WIDTH,
        }
    }
}

pub fn load(path: &str) -> GuiConfig {
    if !Path::new(path).exists() {
        return GuiConfig::default();
    }
    let text = match fs::read_to_string(path) { Ok(t) => t, Err(_) => return GuiConfig::default() };
    let mut cfg = GuiConfig::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if let Some(eq) = line.find('=') {
            let key = &line[..eq].trim();
            let val = &line[eq+1..].trim();
            match *key {
                "out_path" => cfg.out_path = val.to_string(),
                "world_path" => cfg.world_path = val.to_string(),
                "write_csv" => cfg.write_csv = *val == "1" || val.eq_ignore_ascii_case("true"),
                "write_png" => cfg.write_png = *val == "1" || val.eq_ignore_ascii_case("true"),
                "fig_width" => {
                    if let Ok(v) = val.parse::<u32>() { cfg.fig_width = v; }
                }
                _ => {}
            }
        }
    }
    cfg
}

pub fn save(path: &str, cfg: &GuiConfig) {
    let mut s = String::new();
    s.push_str(&format!("out_path={}\n", cfg.out_path));
    s.push_str(&format!("world_path={}\n", cfg.world_path));
    s.push_str(&format!("write_csv={}\n", if cfg.write_csv {1}else{0}));
    s.push_str(&format!("write_png={}\n", if cfg.write_png {1}else{0}));
    s.push_str(&format!("fig_width={}\n", cfg.fig_width));
    if let Some(parent) = Path::new(path).parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, s);
}
