// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;
pub mod params;
pub mod data;

pub mod core;
pub mod specs;
pub mod progress;
pub mod scrape;
pub mod pipeline;
pub mod geo;
pub mod render;

pub mod csv;
pub mod file;
pub mod runner;

pub mod cli;
pub mod gui;
pub mod gui_config;
