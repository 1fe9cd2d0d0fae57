//! Resizing the ruler by dragging one of its long-axis edges

use crate::commands::{Cmd, CursorShape};
use crate::model::{PixelRect, Point, RulerModel, RulerPosition, RULER_BREADTH};

use super::hit_test::{hit_test, Zone};
use super::{EventResult, InputController, MouseButton, MouseEvent};

/// Cursor to show over a zone
pub fn cursor_for_zone(zone: Zone) -> CursorShape {
    match zone {
        Zone::Top | Zone::Bottom => CursorShape::ResizeNs,
        Zone::Left | Zone::Right => CursorShape::ResizeEw,
        Zone::Client
        | Zone::TopLeft
        | Zone::TopRight
        | Zone::BottomLeft
        | Zone::BottomRight => CursorShape::Default,
    }
}

/// Window rectangle after dragging an edge by `delta`.
///
/// Only the long axis changes; the cross axis stays at [`RULER_BREADTH`]. The
/// dragged edge moves and the opposite edge stays put, with the long-axis
/// size clamped to `minimum`.
pub fn resized_rect(
    start: PixelRect,
    direction: Point,
    delta: Point,
    position: RulerPosition,
    minimum: i32,
) -> PixelRect {
    if position.is_horizontal() {
        let (x, width) = resize_span(start.x, start.width, direction.x, delta.x, minimum);
        PixelRect::new(x, start.y, width, RULER_BREADTH)
    } else {
        let (y, height) = resize_span(start.y, start.height, direction.y, delta.y, minimum);
        PixelRect::new(start.x, y, RULER_BREADTH, height)
    }
}

fn resize_span(start: i32, size: i32, direction: i32, delta: i32, minimum: i32) -> (i32, i32) {
    match direction.signum() {
        -1 => {
            let end = start + size;
            let size = (size - delta).max(minimum);
            (end - size, size)
        }
        1 => (start, (size + delta).max(minimum)),
        _ => (start, size),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragStart {
    screen: Point,
    rect: PixelRect,
    direction: Point,
}

/// Border drag state machine.
///
/// The mode is [`Zone::Client`] when idle, otherwise the edge being dragged.
#[derive(Debug, Default)]
pub struct BorderDragController {
    mode: Zone,
    start: Option<DragStart>,
}

impl BorderDragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Zone {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        !self.mode.is_client()
    }

    fn begin(&mut self, model: &RulerModel, pos: Point) -> EventResult {
        let hit = hit_test(model, pos);
        if hit.zone.is_client() {
            return EventResult::Bubble;
        }
        tracing::debug!("Border drag started on {:?} at {:?}", hit.zone, pos);
        self.mode = hit.zone;
        self.start = Some(DragStart {
            screen: pos,
            rect: model.window.rect,
            direction: hit.direction,
        });
        EventResult::consumed(Cmd::Batch(vec![
            Cmd::CaptureMouse,
            Cmd::SetCursor(cursor_for_zone(hit.zone)),
        ]))
    }

    fn end(&mut self, model: &RulerModel) -> EventResult {
        tracing::debug!(
            "Border drag on {:?} ended, length {}",
            self.mode,
            model.settings.length
        );
        self.mode = Zone::Client;
        self.start = None;
        EventResult::consumed(Cmd::Batch(vec![
            Cmd::ReleaseMouse,
            Cmd::SetCursor(CursorShape::Default),
        ]))
    }

    fn drag(&mut self, model: &mut RulerModel, pos: Point) -> EventResult {
        let Some(start) = self.start else {
            return EventResult::Bubble;
        };
        let rect = resized_rect(
            start.rect,
            start.direction,
            pos - start.screen,
            model.settings.position,
            model.settings.minimum_length as i32,
        );
        if rect == model.window.rect {
            return EventResult::consumed_no_cmd();
        }
        model.window.rect = rect;
        let long = model.long_size(&rect);
        model.settings.set_length(long.max(0) as u32);
        EventResult::consumed(Cmd::Batch(vec![Cmd::SetWindowRect(rect), Cmd::Redraw]))
    }

    fn hover(&self, model: &RulerModel, pos: Point) -> EventResult {
        let zone = hit_test(model, pos).zone;
        EventResult::consumed(Cmd::SetCursor(cursor_for_zone(zone)))
    }
}

impl InputController for BorderDragController {
    fn handle(&mut self, model: &mut RulerModel, event: &MouseEvent) -> EventResult {
        match *event {
            MouseEvent::Down {
                pos,
                button: MouseButton::Left,
            } if !self.is_dragging() => self.begin(model, pos),
            MouseEvent::Up {
                button: MouseButton::Left,
                ..
            } if self.is_dragging() => self.end(model),
            MouseEvent::Moved {
                pos,
                left_down: true,
            } if self.is_dragging() => self.drag(model, pos),
            MouseEvent::Moved {
                pos,
                left_down: false,
            }
            | MouseEvent::Entered { pos }
            | MouseEvent::Left { pos }
                if !self.is_dragging() =>
            {
                self.hover(model, pos)
            }
            _ => EventResult::Bubble,
        }
    }
}
