use egui::epaint::ClippedShape;
use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Vec2};
use sticker_sketchpad::panels::{central_panel, sticker_prompt, tools_panel};
use sticker_sketchpad::{PointerState, SketchpadApp};

// Runs one full UI frame through the same panels eframe::App::update uses
fn frame(ctx: &Context, app: &mut SketchpadApp, events: Vec<Event>) -> Vec<ClippedShape> {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 768.0))),
        events,
        ..Default::default()
    };
    ctx.run(input, |ctx| {
        tools_panel(app, ctx);
        sticker_prompt(app, ctx);
        central_panel(app, ctx);
    })
    .shapes
}

fn moved(x: f32, y: f32) -> Vec<Event> {
    vec![Event::PointerMoved(Pos2::new(x, y))]
}

fn button(x: f32, y: f32, pressed: bool) -> Vec<Event> {
    vec![Event::PointerButton {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }]
}

fn collect_texts(shape: &Shape, out: &mut Vec<String>) {
    match shape {
        Shape::Text(text) => out.push(text.galley.text().to_owned()),
        Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_texts(s, out)),
        _ => {}
    }
}

fn count_sticker_buttons(app: &SketchpadApp, shapes: &[ClippedShape]) -> usize {
    let mut texts = Vec::new();
    for clipped in shapes {
        collect_texts(&clipped.shape, &mut texts);
    }
    let labels: Vec<&str> = app
        .state()
        .palette()
        .catalog()
        .entries()
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    texts.iter().filter(|text| labels.contains(&text.as_str())).count()
}

// Lay out once and hover the canvas until the pointer registers on it
fn hovered_app(ctx: &Context, x: f32, y: f32) -> SketchpadApp {
    let mut app = SketchpadApp::default();
    frame(ctx, &mut app, Vec::new());
    frame(ctx, &mut app, moved(x, y));
    frame(ctx, &mut app, Vec::new());
    app
}

#[test]
fn test_pointer_frames_commit_marker_line() {
    let ctx = Context::default();
    let mut app = hovered_app(&ctx, 400.0, 200.0);
    let origin = app.canvas_rect().expect("canvas laid out").min;

    frame(&ctx, &mut app, button(400.0, 200.0, true));
    frame(&ctx, &mut app, moved(420.0, 210.0));
    frame(&ctx, &mut app, moved(430.0, 230.0));
    frame(&ctx, &mut app, button(430.0, 230.0, false));

    let strokes = app.state().strokes();
    assert_eq!(strokes.len(), 1);
    let line = strokes[0].as_marker_line().expect("a marker line");
    let expected: Vec<Pos2> = [(400.0, 200.0), (420.0, 210.0), (430.0, 230.0)]
        .iter()
        .map(|&(x, y)| Pos2::new(x, y) - origin.to_vec2())
        .collect();
    assert_eq!(line.points(), expected.as_slice());
    assert_eq!(line.thickness(), 2.0);
    assert_eq!(app.state().controller().state(), PointerState::Previewing);
}

#[test]
fn test_preview_follows_last_notification() {
    let ctx = Context::default();
    let mut app = hovered_app(&ctx, 400.0, 200.0);
    assert_eq!(app.state().controller().state(), PointerState::Previewing);
    assert!(app.show_preview(), "hovering shows the tool preview");

    frame(&ctx, &mut app, button(400.0, 200.0, true));
    assert!(!app.show_preview(), "pressing repaints without the preview");

    frame(&ctx, &mut app, button(400.0, 200.0, false));
    assert!(app.show_preview(), "releasing brings the preview back");

    // Still inside the window, but off the canvas
    frame(&ctx, &mut app, moved(900.0, 700.0));
    assert_eq!(app.state().controller().state(), PointerState::Idle);
    assert!(!app.show_preview(), "leaving repaints without the preview");
}

#[test]
fn test_custom_sticker_adds_palette_button() {
    let ctx = Context::default();
    let mut app = SketchpadApp::default();
    frame(&ctx, &mut app, Vec::new());
    let shapes = frame(&ctx, &mut app, Vec::new());
    let before = count_sticker_buttons(&app, &shapes);
    assert_eq!(before, 3);

    app.state_mut().add_custom_sticker(Some("★"));
    let shapes = frame(&ctx, &mut app, Vec::new());
    let after = count_sticker_buttons(&app, &shapes);
    assert_eq!(after, before + 1);
}
