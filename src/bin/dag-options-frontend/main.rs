//! # DAG Options Frontend
//!
//! Owns the canonical [`RenderOptions`](workflow_dag_render_options::render_options::RenderOptions)
//! value for a workflow DAG view and embeds the options panel from the
//! library crate. The panel itself never holds state; it reads the current
//! value each frame and proposes a full replacement via its change callback,
//! which this app applies before the next frame. The DAG layout engine that
//! would consume these options is a separate collaborator and not part of
//! this binary.
//!
use clap::Parser;

use cli::Cli;
use env_logger::Env;
use log::debug;
use model::Model;

mod cli;
mod model;
mod ui;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(960.0, 640.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Workflow DAG Render Options",
        options,
        Box::new(|_cc| Box::<Model>::default()),
    )
}
