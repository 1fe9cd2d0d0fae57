//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update
//! or an input event. The runtime owns the window and executes them.

use crate::model::PixelRect;

/// Mouse cursor shapes the ruler asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    /// North-south resize, for vertical rulers
    ResizeNs,
    /// East-west resize, for horizontal rulers
    ResizeEw,
}

/// Side effects for the runtime to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Repaint the ruler surface
    Redraw,
    /// Move and/or resize the window to this outer rectangle (screen pixels)
    SetWindowRect(PixelRect),
    SetCursor(CursorShape),
    /// Keep receiving mouse events while the pointer is outside the window
    CaptureMouse,
    ReleaseMouse,
    /// Let the window system move the window for the rest of this button press
    DragWindow,
    SetAlwaysOnTop(bool),
    /// Right-click: open the context menu at a screen position
    ShowContextMenu { x: i32, y: i32 },
    /// Persist the current settings
    SaveConfig,
    Quit,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial batches
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        if cmds.len() == 1 {
            if let Some(cmd) = cmds.pop() {
                return cmd;
            }
        }
        Cmd::Batch(cmds)
    }

    /// Combine two optional commands, preserving order
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            // Resizing exposes new pixels
            Cmd::SetWindowRect(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::SetCursor(_)
            | Cmd::CaptureMouse
            | Cmd::ReleaseMouse
            | Cmd::DragWindow
            | Cmd::SetAlwaysOnTop(_)
            | Cmd::ShowContextMenu { .. }
            | Cmd::SaveConfig
            | Cmd::Quit => false,
        }
    }

    /// Visit every leaf command in execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Whether any leaf command matches `pred`
    pub fn contains(&self, pred: &impl Fn(&Cmd) -> bool) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.contains(pred)),
            cmd => pred(cmd),
        }
    }
}
