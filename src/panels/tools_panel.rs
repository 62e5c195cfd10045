use crate::components::ToolButton;
use crate::tools::Selection;
use crate::SketchpadApp;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            ui.horizontal_wrapped(|ui| {
                let can_undo = app.state().history().can_undo();
                let can_redo = app.state().history().can_redo();

                if ui.button("Clear").clicked() {
                    log::info!("Clear clicked");
                    app.clear();
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
                if ui.button("Export").clicked() {
                    log::info!("Export clicked");
                    app.export(ctx);
                }
            });

            ui.separator();
            ui.label("Marker");

            // Collect first: the buttons mutate the palette we'd be iterating.
            let markers: Vec<(String, bool)> = app
                .state()
                .palette()
                .presets()
                .iter()
                .enumerate()
                .map(|(i, preset)| {
                    let selected = app.state().palette().is_selected(Selection::Marker(i));
                    (preset.label.clone(), selected)
                })
                .collect();
            ui.horizontal_wrapped(|ui| {
                for (i, (label, selected)) in markers.iter().enumerate() {
                    if ToolButton::new(label, *selected).font_size(14.0).show(ui).clicked() {
                        app.state_mut().select_marker(i);
                    }
                }
            });

            ui.separator();
            ui.label("Stickers");

            let stickers: Vec<(String, bool)> = app
                .state()
                .palette()
                .catalog()
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let selected = app.state().palette().is_selected(Selection::Sticker(i));
                    (entry.label.clone(), selected)
                })
                .collect();
            ui.horizontal_wrapped(|ui| {
                for (i, (label, selected)) in stickers.iter().enumerate() {
                    if ToolButton::new(label, *selected).show(ui).clicked() {
                        app.state_mut().select_sticker(i);
                    }
                }
            });
            if ui
                .add_enabled(!app.is_sticker_prompt_open(), egui::Button::new("Custom sticker…"))
                .clicked()
            {
                app.open_sticker_prompt();
            }

            ui.separator();

            let history = app.state().history();
            ui.horizontal(|ui| {
                ui.label(format!("Strokes: {}", history.strokes().len()));
                ui.label(format!("Redo: {}", history.redo_stack().len()));
            });
            egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                for command in history.strokes().iter().rev() {
                    ui.small(command.describe());
                }
            });

            if let Some(status) = app.export_status() {
                ui.separator();
                ui.small(status);
            }
        });
}
