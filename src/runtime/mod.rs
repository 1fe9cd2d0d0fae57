//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and command execution
//! - `input` - Keyboard shortcuts to message mapping
//! - `mouse` - Window-local pointer events to screen-space [`MouseEvent`]s
//!
//! [`MouseEvent`]: pixruler::interaction::MouseEvent

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
