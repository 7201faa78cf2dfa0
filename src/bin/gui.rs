// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use titlemap::{gui, params::Params};

fn main() {
    if let Err(e) = gui::run(Params::new()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
