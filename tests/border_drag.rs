//! Border hit-testing and resize drag tests

mod common;

use common::test_model;
use pixruler::commands::{Cmd, CursorShape};
use pixruler::interaction::{
    hit_test, BorderDragController, Controllers, EventResult, InputController, MouseButton,
    MouseEvent, Zone,
};
use pixruler::model::{PixelRect, Point, RulerPosition};

fn down(x: i32, y: i32) -> MouseEvent {
    MouseEvent::Down {
        pos: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn up(x: i32, y: i32) -> MouseEvent {
    MouseEvent::Up {
        pos: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn drag_to(x: i32, y: i32) -> MouseEvent {
    MouseEvent::Moved {
        pos: Point::new(x, y),
        left_down: true,
    }
}

fn hover(x: i32, y: i32) -> MouseEvent {
    MouseEvent::Moved {
        pos: Point::new(x, y),
        left_down: false,
    }
}

// ========================================================================
// Hit-test Tests
// ========================================================================

#[test]
fn test_horizontal_ruler_never_reports_top_or_bottom() {
    let model = test_model(RulerPosition::Top, 800);
    let rect = model.window.rect;
    for x in (rect.x - 5..rect.right() + 5).step_by(7) {
        for y in rect.y - 5..rect.bottom() + 5 {
            let zone = hit_test(&model, Point::new(x, y)).zone;
            assert!(
                matches!(zone, Zone::Client | Zone::Left | Zone::Right),
                "{:?} at ({}, {})",
                zone,
                x,
                y
            );
        }
    }
}

#[test]
fn test_vertical_ruler_never_reports_left_or_right() {
    let model = test_model(RulerPosition::Left, 500);
    let rect = model.window.rect;
    for x in rect.x - 5..rect.right() + 5 {
        for y in (rect.y - 5..rect.bottom() + 5).step_by(7) {
            let zone = hit_test(&model, Point::new(x, y)).zone;
            assert!(
                matches!(zone, Zone::Client | Zone::Top | Zone::Bottom),
                "{:?} at ({}, {})",
                zone,
                x,
                y
            );
        }
    }
}

#[test]
fn test_maximized_window_has_no_borders() {
    let mut model = test_model(RulerPosition::Top, 800);
    model.window.maximized = true;
    let hit = hit_test(&model, Point::new(102, 230));
    assert_eq!(hit.zone, Zone::Client);
    assert_eq!(hit.direction, Point::new(0, 0));

    let mut border = BorderDragController::new();
    assert_eq!(border.handle(&mut model, &down(102, 230)), EventResult::Bubble);
    assert!(!border.is_dragging());
}

// ========================================================================
// Drag Tests
// ========================================================================

#[test]
fn test_drag_right_edge_resizes_and_updates_length() {
    let mut model = test_model(RulerPosition::Top, 800);
    let mut border = BorderDragController::new();

    let result = border.handle(&mut model, &down(895, 230));
    assert_eq!(
        result.into_cmd(),
        Some(Cmd::Batch(vec![
            Cmd::CaptureMouse,
            Cmd::SetCursor(CursorShape::ResizeEw)
        ]))
    );
    assert_eq!(border.mode(), Zone::Right);

    let result = border.handle(&mut model, &drag_to(995, 230));
    let expected = PixelRect::new(100, 200, 900, 60);
    assert_eq!(
        result.into_cmd(),
        Some(Cmd::Batch(vec![Cmd::SetWindowRect(expected), Cmd::Redraw]))
    );
    assert_eq!(model.window.rect, expected);
    assert_eq!(model.settings.length, 900);

    let result = border.handle(&mut model, &up(995, 230));
    assert!(result
        .into_cmd()
        .is_some_and(|cmd| cmd.contains(&|c: &Cmd| *c == Cmd::ReleaseMouse)));
    assert_eq!(border.mode(), Zone::Client);
}

#[test]
fn test_drag_measured_from_press_not_last_sample() {
    let mut model = test_model(RulerPosition::Top, 800);
    let mut border = BorderDragController::new();
    border.handle(&mut model, &down(895, 230));
    border.handle(&mut model, &drag_to(945, 230));
    border.handle(&mut model, &drag_to(925, 240));
    assert_eq!(model.window.rect, PixelRect::new(100, 200, 830, 60));
}

#[test]
fn test_drag_clamps_to_minimum_length() {
    let mut model = test_model(RulerPosition::Top, 800);
    let mut border = BorderDragController::new();
    border.handle(&mut model, &down(895, 230));
    border.handle(&mut model, &drag_to(150, 230));
    assert_eq!(model.settings.length, model.settings.minimum_length);
    assert_eq!(model.window.rect.width, model.settings.minimum_length as i32);
}

#[test]
fn test_drag_left_edge_keeps_right_edge_fixed() {
    let mut model = test_model(RulerPosition::Bottom, 800);
    let right = model.window.rect.right();
    let mut border = BorderDragController::new();

    border.handle(&mut model, &down(103, 230));
    assert_eq!(border.mode(), Zone::Left);
    border.handle(&mut model, &drag_to(203, 230));

    assert_eq!(model.window.rect.x, 200);
    assert_eq!(model.window.rect.right(), right);
    assert_eq!(model.settings.length, 700);
}

#[test]
fn test_drag_bottom_edge_of_vertical_ruler() {
    let mut model = test_model(RulerPosition::Left, 800);
    let mut border = BorderDragController::new();

    let result = border.handle(&mut model, &down(130, 995));
    assert!(result
        .into_cmd()
        .is_some_and(|cmd| cmd.contains(&|c: &Cmd| *c == Cmd::SetCursor(CursorShape::ResizeNs))));
    border.handle(&mut model, &drag_to(170, 895));

    // Cross-axis movement is ignored
    assert_eq!(model.window.rect, PixelRect::new(100, 200, 60, 700));
    assert_eq!(model.settings.length, 700);
}

#[test]
fn test_shrinking_clears_markers_past_the_end() {
    let mut model = test_model(RulerPosition::Top, 800);
    model.settings.first_marker = Some(600);
    model.settings.second_marker = Some(100);
    let mut border = BorderDragController::new();

    border.handle(&mut model, &down(895, 230));
    border.handle(&mut model, &drag_to(595, 230));

    assert_eq!(model.settings.length, 500);
    assert_eq!(model.settings.first_marker, None);
    assert_eq!(model.settings.second_marker, Some(100));
}

// ========================================================================
// Hover and Dispatch Tests
// ========================================================================

#[test]
fn test_hover_sets_cursor_for_zone() {
    let mut model = test_model(RulerPosition::Top, 800);
    let mut border = BorderDragController::new();

    let edge = border.handle(&mut model, &hover(105, 230));
    assert_eq!(edge.into_cmd(), Some(Cmd::SetCursor(CursorShape::ResizeEw)));

    let body = border.handle(&mut model, &hover(500, 230));
    assert_eq!(body.into_cmd(), Some(Cmd::SetCursor(CursorShape::Default)));
}

#[test]
fn test_right_click_bubbles_past_border() {
    let mut model = test_model(RulerPosition::Top, 800);
    let mut border = BorderDragController::new();
    let event = MouseEvent::Down {
        pos: Point::new(895, 230),
        button: MouseButton::Right,
    };
    assert_eq!(border.handle(&mut model, &event), EventResult::Bubble);
}

#[test]
fn test_dispatch_edge_press_does_not_pin_marker() {
    let mut model = test_model(RulerPosition::Top, 800);
    let mut controllers = Controllers::new();

    let result = controllers.dispatch(&mut model, &down(895, 230));
    assert!(result.is_consumed());
    assert!(controllers.border.is_dragging());
    assert!(!controllers.markers.is_dragging());
    assert_eq!(model.settings.second_marker, None);

    controllers.dispatch(&mut model, &drag_to(945, 230));
    assert_eq!(model.window.rect.x, 100);
    assert_eq!(model.settings.length, 850);

    controllers.dispatch(&mut model, &up(945, 230));
    assert!(!controllers.is_dragging());
}
