//! pixruler - Elm-style on-screen ruler
//!
//! This crate provides the core types and logic for a desktop ruler: unit
//! conversion, CPU rendering of the scale and markers, and the mouse-driven
//! resize/drag state machines. The binary hosts it in a winit window.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod interaction;
pub mod logging;
pub mod messages;
pub mod model;
pub mod theme;
pub mod units;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::RulerConfig;
pub use messages::Msg;
pub use model::RulerModel;
pub use theme::Theme;
