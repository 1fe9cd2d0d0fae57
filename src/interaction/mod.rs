//! Mouse input handling
//!
//! The runtime converts window events into screen-space [`MouseEvent`]s and
//! hands them to [`Controllers::dispatch`]. Each controller returns an
//! [`EventResult`]; consumed results carry the [`Cmd`] the runtime should run.
//!
//! At most one controller holds mouse capture at a time: border drags start
//! only on a border zone and window drags only on the client zone.

pub mod border_drag;
pub mod marker;

pub use border_drag::{cursor_for_zone, resized_rect, BorderDragController};
pub use hit_test::{classify_point, hit_test, in_drag_region, HitTest, Zone, BORDER_OFFSET};
pub use marker::MarkerInteractionController;

use crate::commands::Cmd;
use crate::model::{Point, RulerModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A mouse event with its position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Down { pos: Point, button: MouseButton },
    Up { pos: Point, button: MouseButton },
    Moved { pos: Point, left_down: bool },
    Entered { pos: Point },
    Left { pos: Point },
}

impl MouseEvent {
    pub fn pos(&self) -> Point {
        match *self {
            MouseEvent::Down { pos, .. }
            | MouseEvent::Up { pos, .. }
            | MouseEvent::Moved { pos, .. }
            | MouseEvent::Entered { pos }
            | MouseEvent::Left { pos } => pos,
        }
    }
}

/// Result of handling a mouse event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled
    Consumed {
        /// Optional command to execute
        cmd: Option<Cmd>,
    },

    /// Event was not handled; pass it on
    Bubble,
}

impl EventResult {
    pub fn consumed(cmd: Cmd) -> Self {
        Self::Consumed { cmd: Some(cmd) }
    }

    /// Handled, but nothing changed
    pub fn consumed_no_cmd() -> Self {
        Self::Consumed { cmd: None }
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }

    pub fn into_cmd(self) -> Option<Cmd> {
        match self {
            Self::Consumed { cmd } => cmd,
            Self::Bubble => None,
        }
    }
}

/// A mouse-driven controller over the ruler model
pub trait InputController {
    fn handle(&mut self, model: &mut RulerModel, event: &MouseEvent) -> EventResult;
}

/// Both controllers, dispatched in order: border first, then markers
#[derive(Debug, Default)]
pub struct Controllers {
    pub border: BorderDragController,
    pub markers: MarkerInteractionController,
}

impl Controllers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether either controller is mid-drag
    pub fn is_dragging(&self) -> bool {
        self.border.is_dragging() || self.markers.is_dragging()
    }

    /// Feed `event` to every controller and merge their commands.
    ///
    /// Bubbles only if no controller consumed it.
    pub fn dispatch(&mut self, model: &mut RulerModel, event: &MouseEvent) -> EventResult {
        let border = self.border.handle(model, event);
        let markers = self.markers.handle(model, event);
        if !border.is_consumed() && !markers.is_consumed() {
            return EventResult::Bubble;
        }
        EventResult::Consumed {
            cmd: Cmd::merge(border.into_cmd(), markers.into_cmd()),
        }
    }
}
