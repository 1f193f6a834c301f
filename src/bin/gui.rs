// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use cardfilter::{
    cli::GuiArgs,
    config::{consts::LOG_FILE, state::GuiState},
    gui, logging,
};
use clap::Parser;
use eframe::egui::ViewportBuilder;
use simplelog::LevelFilter;

fn main() {
    let args = GuiArgs::parse();

    if let Err(e) = logging::init(Path::new(LOG_FILE), LevelFilter::Debug) {
        eprintln!("Logging disabled: {e}");
    }

    let state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Card Filter")
            .with_inner_size([state.window_w as f32, state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, args) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
