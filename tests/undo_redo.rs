use egui::Pos2;
use sticker_sketchpad::{InputEvent, SketchEvent, SketchState};
use sticker_sketchpad::event::EventRecorder;

// Helper to draw one stroke through the given points
fn draw(state: &mut SketchState, points: &[(f32, f32)]) {
    let mut points = points.iter().map(|&(x, y)| Pos2::new(x, y));
    let first = points.next().unwrap();
    state.handle_input(InputEvent::PointerDown { position: first });
    let mut last = first;
    for position in points {
        state.handle_input(InputEvent::PointerMove { position });
        last = position;
    }
    state.handle_input(InputEvent::PointerUp { position: last });
}

#[test]
fn test_undo_then_redo_restores_strokes() {
    let mut state = SketchState::default();
    draw(&mut state, &[(1.0, 1.0), (2.0, 2.0)]);
    state.select_sticker(1);
    draw(&mut state, &[(30.0, 30.0)]);
    draw(&mut state, &[(5.0, 5.0), (6.0, 9.0), (7.0, 2.0)]);

    let before = state.strokes().to_vec();
    for _ in 0..before.len() {
        assert!(state.undo());
        assert!(state.redo());
        assert_eq!(state.strokes(), before.as_slice());
    }

    state.undo();
    state.undo();
    state.redo();
    state.redo();
    assert_eq!(state.strokes(), before.as_slice());
}

#[test]
fn test_undo_redo_single_stroke() {
    let mut state = SketchState::default();
    draw(&mut state, &[(10.0, 10.0), (20.0, 20.0)]);
    let stroke = state.strokes()[0].clone();

    state.undo();
    assert!(state.history().strokes().is_empty());
    assert_eq!(state.history().redo_stack(), &[stroke.clone()]);

    state.redo();
    assert_eq!(state.history().strokes(), &[stroke]);
    assert!(state.history().redo_stack().is_empty());
}

#[test]
fn test_clear_then_undo_redo_are_noops() {
    let mut state = SketchState::default();
    draw(&mut state, &[(1.0, 1.0), (2.0, 2.0)]);
    draw(&mut state, &[(3.0, 3.0), (4.0, 4.0)]);
    state.undo();

    state.clear();
    assert!(state.history().strokes().is_empty());
    assert!(state.history().redo_stack().is_empty());
    assert!(!state.undo());
    assert!(!state.redo());
    assert!(state.history().strokes().is_empty());
    assert!(state.history().redo_stack().is_empty());
}

#[test]
fn test_new_stroke_after_undo_discards_redo() {
    let mut state = SketchState::default();
    draw(&mut state, &[(1.0, 1.0), (2.0, 2.0)]);
    state.undo();
    draw(&mut state, &[(8.0, 8.0), (9.0, 9.0)]);

    assert_eq!(state.strokes().len(), 1);
    assert!(!state.history().can_redo());
    assert!(!state.redo());
}

#[test]
fn test_history_changes_notify_drawing_changed() {
    let mut state = SketchState::default();
    let recorder = EventRecorder::new();
    state.subscribe(Box::new(recorder.clone()));

    draw(&mut state, &[(1.0, 1.0), (2.0, 2.0)]);
    recorder.drain();

    state.undo();
    state.redo();
    state.clear();
    assert_eq!(recorder.drain(), vec![SketchEvent::DrawingChanged; 3]);

    // Nothing left to undo: no repaint requested.
    state.undo();
    assert!(recorder.events().is_empty());
}

#[test]
fn test_undo_while_drawing_finalizes_active_stroke() {
    let mut state = SketchState::default();
    state.handle_input(InputEvent::PointerDown { position: Pos2::new(1.0, 1.0) });
    state.handle_input(InputEvent::PointerMove { position: Pos2::new(2.0, 2.0) });
    state.undo();

    state.handle_input(InputEvent::PointerMove { position: Pos2::new(3.0, 3.0) });
    assert!(state.strokes().is_empty());
    let undone = state.history().redo_stack()[0].as_marker_line().unwrap();
    assert_eq!(undone.points(), &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]);
}
