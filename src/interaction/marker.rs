//! Marker placement, whole-window dragging and the context-menu trigger

use crate::commands::{Cmd, CursorShape};
use crate::model::{Point, RulerModel};

use super::hit_test::{hit_test, in_drag_region};
use super::{EventResult, InputController, MouseButton, MouseEvent};

/// Tracks the live/pinned markers and moves the window when its body is dragged
#[derive(Debug)]
pub struct MarkerInteractionController {
    /// Last screen sample while dragging the window
    drag_from: Option<Point>,
    /// False when the host cannot report the window position; body drags
    /// are then handed to the window system
    tracks_window: bool,
}

impl Default for MarkerInteractionController {
    fn default() -> Self {
        Self {
            drag_from: None,
            tracks_window: true,
        }
    }
}

impl MarkerInteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tracks_window(&mut self, tracks_window: bool) {
        self.tracks_window = tracks_window;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// First marker follows the cursor inside the live band
    fn track(&self, model: &mut RulerModel, pos: Point) -> EventResult {
        let offset = model.long_offset(pos);
        let Some(marker) = model.settings.marker_for_offset(offset) else {
            return EventResult::Bubble;
        };
        if model.settings.first_marker == Some(marker) {
            return EventResult::consumed_no_cmd();
        }
        model.settings.first_marker = Some(marker);
        EventResult::consumed(Cmd::Redraw)
    }

    fn press(&mut self, model: &mut RulerModel, pos: Point) -> EventResult {
        if !hit_test(model, pos).zone.is_client() {
            return EventResult::Bubble;
        }

        let mut cmds = Vec::new();
        let offset = model.long_offset(pos);
        if let Some(marker) = model.settings.marker_for_offset(offset) {
            tracing::debug!("Pinned second marker at {}", marker);
            model.settings.second_marker = Some(marker);
            cmds.push(Cmd::Redraw);
        }
        if in_drag_region(model.window.rect, pos) {
            if self.tracks_window {
                tracing::debug!("Window drag started at {:?}", pos);
                self.drag_from = Some(pos);
                cmds.push(Cmd::CaptureMouse);
            } else {
                tracing::debug!("Window drag handed to the window system at {:?}", pos);
                cmds.push(Cmd::DragWindow);
            }
        }

        if cmds.is_empty() {
            EventResult::Bubble
        } else {
            EventResult::consumed(Cmd::batch(cmds))
        }
    }

    /// Move by the delta since the last sample, then make this the new sample
    fn drag(&mut self, model: &mut RulerModel, last: Point, pos: Point) -> EventResult {
        self.drag_from = Some(pos);
        let delta = pos - last;
        if delta == Point::default() {
            return EventResult::consumed_no_cmd();
        }
        model.window.rect = model.window.rect.offset(delta);
        EventResult::consumed(Cmd::SetWindowRect(model.window.rect))
    }

    fn release(&mut self, model: &RulerModel) -> EventResult {
        tracing::debug!("Window drag ended at {:?}", model.window.rect.origin());
        self.drag_from = None;
        EventResult::consumed(Cmd::ReleaseMouse)
    }
}

impl InputController for MarkerInteractionController {
    fn handle(&mut self, model: &mut RulerModel, event: &MouseEvent) -> EventResult {
        match (*event, self.drag_from) {
            (MouseEvent::Moved { pos, .. }, Some(last)) => self.drag(model, last, pos),
            (
                MouseEvent::Up {
                    button: MouseButton::Left,
                    ..
                },
                Some(_),
            ) => self.release(model),
            (MouseEvent::Moved { pos, left_down: false }, None) => self.track(model, pos),
            (
                MouseEvent::Down {
                    pos,
                    button: MouseButton::Left,
                },
                None,
            ) => self.press(model, pos),
            (
                MouseEvent::Down {
                    pos,
                    button: MouseButton::Right,
                },
                None,
            ) => EventResult::consumed(Cmd::ShowContextMenu { x: pos.x, y: pos.y }),
            (MouseEvent::Left { .. }, None) => {
                EventResult::consumed(Cmd::SetCursor(CursorShape::Default))
            }
            _ => EventResult::Bubble,
        }
    }
}
