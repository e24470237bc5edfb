use egui::{Grid, Ui};
use workflow_dag_render_options::render_options::ExpandedNodes;

use crate::model::Model;

use super::SPACING_AMOUNT;

pub fn render_info(model: &mut Model, ui: &mut Ui) {
    ui.add_space(SPACING_AMOUNT);
    ui.heading("Current Options");

    Grid::new("options_grid").show(ui, |ui| {
        ui.label("Artifacts:");
        ui.label(if model.render_options.show_artifacts {
            "shown"
        } else {
            "hidden"
        });
        ui.end_row();

        ui.label("Expanded nodes:");
        match &model.render_options.expand_nodes {
            ExpandedNodes::All => {
                ui.label("all");
            }
            ExpandedNodes::Nodes(ids) if ids.is_empty() => {
                ui.label("none");
            }
            ExpandedNodes::Nodes(ids) => {
                ui.label(
                    ids.iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
        }
        ui.end_row();

        ui.label("Group by templateRefs:");
        ui.label(if model.render_options.show_template_refs_grouping {
            "on"
        } else {
            "off"
        });
        ui.end_row();

        ui.label("Invoking template name:");
        ui.label(if model.render_options.show_invoking_template_name {
            "on"
        } else {
            "off"
        });
        ui.end_row();
    });

    ui.add_space(SPACING_AMOUNT);
    ui.separator();

    ui.heading("Expand Single Node");
    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut model.node_id_input);
        if ui.button("Expand").clicked() && !model.node_id_input.is_empty() {
            let next = model.render_options.expand_node(&model.node_id_input);
            model.apply_render_options(next);
            model.node_id_input.clear();
        }
    });

    ui.add_space(SPACING_AMOUNT);
    ui.separator();

    ui.heading("Wire Format");
    ui.monospace(serde_json::to_string_pretty(&model.render_options).unwrap());
}
