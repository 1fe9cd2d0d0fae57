//! Pointer event translation
//!
//! winit reports positions relative to the window's client area. The
//! controllers work in screen space, so every position is offset by the
//! window origin before dispatch.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton, WindowEvent};

use pixruler::interaction::{MouseButton, MouseEvent};
use pixruler::model::Point;

fn map_button(button: WinitButton) -> Option<MouseButton> {
    match button {
        WinitButton::Left => Some(MouseButton::Left),
        WinitButton::Right => Some(MouseButton::Right),
        WinitButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.floor() as i32, position.y.floor() as i32)
}

/// Last known pointer state
#[derive(Debug, Default)]
pub struct MouseTracker {
    /// Last client-area position
    local: Option<Point>,
    left_down: bool,
}

impl MouseTracker {
    /// Translate a window event into a screen-space mouse event.
    ///
    /// `origin` is the client area's top-left corner in screen pixels.
    pub fn translate(&mut self, event: &WindowEvent, origin: Point) -> Option<MouseEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let local = to_point(*position);
                self.local = Some(local);
                Some(MouseEvent::Moved {
                    pos: origin + local,
                    left_down: self.left_down,
                })
            }
            WindowEvent::CursorEntered { .. } => Some(MouseEvent::Entered {
                pos: origin + self.local.unwrap_or_default(),
            }),
            WindowEvent::CursorLeft { .. } => Some(MouseEvent::Left {
                pos: origin + self.local.unwrap_or_default(),
            }),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_button(*button)?;
                let pos = origin + self.local.unwrap_or_default();
                match state {
                    ElementState::Pressed => {
                        if button == MouseButton::Left {
                            self.left_down = true;
                        }
                        Some(MouseEvent::Down { pos, button })
                    }
                    ElementState::Released => {
                        if button == MouseButton::Left {
                            self.left_down = false;
                        }
                        Some(MouseEvent::Up { pos, button })
                    }
                }
            }
            _ => None,
        }
    }
}
