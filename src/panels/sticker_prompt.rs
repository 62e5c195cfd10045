use crate::SketchpadApp;

/// The "custom sticker" dialog. Confirming adds the typed text; cancelling
/// (or confirming blank text) adds the default glyph.
pub fn sticker_prompt(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(mut text) = app.take_sticker_prompt() else {
        return;
    };
    let default_glyph = app.state().palette().catalog().default_custom().to_owned();

    // Some(true) = OK, Some(false) = Cancel
    let mut outcome = None;
    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Enter an emoji or some text:");
            let edit =
                ui.add(egui::TextEdit::singleline(&mut text).hint_text(default_glyph.as_str()));
            let (enter, escape) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Escape),
                )
            });
            if edit.lost_focus() && enter {
                outcome = Some(true);
            } else if escape {
                outcome = Some(false);
            } else {
                edit.request_focus();
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(false);
                }
            });
        });

    match outcome {
        Some(true) => {
            app.state_mut().add_custom_sticker(Some(&text));
        }
        Some(false) => {
            log::debug!("Custom sticker prompt cancelled");
            app.state_mut().add_custom_sticker(None);
        }
        None => app.keep_sticker_prompt(text),
    }
}
