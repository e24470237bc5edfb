mod info;

use info::render_info;
use workflow_dag_render_options::panel::render_options_panel;
use workflow_dag_render_options::render_options::RenderOptions;

use crate::model::Model;

pub const SPACING_AMOUNT: f32 = 16.0;

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::TopBottomPanel::top("options").show(ctx, |ui| {
        let mut next: Option<RenderOptions> = None;
        render_options_panel(&model.render_options, ui, |changed| next = Some(changed));
        if let Some(changed) = next {
            model.apply_render_options(changed);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        render_info(model, ui);
    });
}
