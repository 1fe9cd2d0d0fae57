//! Message types for the Elm-style architecture
//!
//! Settings changes requested by the context menu or keyboard shortcuts, and
//! window changes reported by the host, all flow through [`Msg`].

use crate::model::{Point, RulerPosition};
use crate::units::Units;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Move the scale to another screen edge (swaps the long axis)
    SetPosition(RulerPosition),
    SetUnits(Units),
    ToggleAlwaysOnTop,
    /// New long-axis length in pixels ("set new length")
    SetLength(u32),
    /// Host reports the window's outer origin in screen pixels
    WindowMoved(Point),
    /// Host reports the window's size in pixels
    WindowResized { width: i32, height: i32 },
    SetMaximized(bool),
    /// Window is now on this display (index into the PPI table)
    DisplayChanged(usize),
    Close,
}
