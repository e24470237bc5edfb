use egui::Ui;

use crate::render_options::RenderOptions;

/// Render the row of display toggles for the DAG view.
///
/// The panel never touches `options` itself. Each interaction computes the
/// complete next value and hands it to `on_change`, once, on the click that
/// caused it. The embedding view is expected to make that value the current
/// one before the next frame.
pub fn render_options_panel(
    options: &RenderOptions,
    ui: &mut Ui,
    mut on_change: impl FnMut(RenderOptions),
) {
    ui.horizontal(|ui| {
        if ui
            .selectable_label(options.show_artifacts, "Artifacts")
            .on_hover_text("Toggle artifacts")
            .clicked()
        {
            on_change(options.toggle_artifacts());
        }

        // One-shot commands, no active state to reflect
        if ui
            .button("Collapse all")
            .on_hover_text("Collapse all nodes")
            .clicked()
        {
            on_change(options.collapse_all());
        }
        if ui
            .button("Expand all")
            .on_hover_text("Expand all nodes")
            .clicked()
        {
            on_change(options.expand_all());
        }

        if ui
            .selectable_label(options.show_template_refs_grouping, "Group templateRefs")
            .on_hover_text("Group by templateRefs")
            .clicked()
        {
            on_change(options.toggle_template_refs_grouping());
        }
        if ui
            .selectable_label(options.show_invoking_template_name, "Template names")
            .on_hover_text("Show invoking template name")
            .clicked()
        {
            on_change(options.toggle_invoking_template_name());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_interaction_means_no_change() {
        let options = RenderOptions::default();
        let mut calls = 0;

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_options_panel(&options, ui, |_| calls += 1);
            });
        });

        assert_eq!(calls, 0);
    }
}
