use clap::Parser;
use log::{debug, info};
use workflow_dag_render_options::render_options::RenderOptions;

use crate::cli::Cli;
use crate::ui::render_ui;

pub struct Model {
    /// The canonical options value; the panel only ever proposes replacements
    pub render_options: RenderOptions,
    /// Node id typed into the expand-single-node affordance
    pub node_id_input: String,
}

impl Default for Model {
    fn default() -> Self {
        let cli = Cli::parse();

        let render_options = cli.initial_render_options();

        info!("DAG Options Frontend started OK");

        Model {
            render_options,
            node_id_input: String::new(),
        }
    }
}

impl Model {
    /// Make a proposed value the current one, within the same frame it was
    /// proposed in
    pub fn apply_render_options(&mut self, next: RenderOptions) {
        debug!("Render options changed: {:?}", next);
        self.render_options = next;
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render_ui(ctx, self);
    }
}
