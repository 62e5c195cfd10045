use crate::SketchpadApp;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.title());
        ui.add_space(8.0);

        let (response, painter) =
            ui.allocate_painter(app.canvas_size(), egui::Sense::click_and_drag());

        app.handle_canvas_input(&response);
        if app.state().controller().hides_cursor() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        app.paint_canvas(&painter, response.rect);
    });
}
