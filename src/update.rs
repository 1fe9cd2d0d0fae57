//! Update function for the Elm-style architecture
//!
//! All settings mutations outside of mouse interaction flow through here.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{PixelRect, RulerModel};

/// Apply a message to the model, returning the side effects to run
pub fn update(model: &mut RulerModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::SetPosition(position) => {
            if model.settings.position == position {
                return None;
            }
            tracing::debug!(
                "Ruler position {:?} -> {:?}",
                model.settings.position,
                position
            );
            model.settings.position = position;
            let rect = model.fit_window();
            Some(Cmd::Batch(vec![
                Cmd::SetWindowRect(rect),
                Cmd::Redraw,
                Cmd::SaveConfig,
            ]))
        }

        Msg::SetUnits(units) => {
            if model.settings.units == units {
                return None;
            }
            tracing::debug!("Units {:?} -> {:?}", model.settings.units, units);
            model.settings.units = units;
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }

        Msg::ToggleAlwaysOnTop => {
            let on_top = !model.settings.always_on_top;
            tracing::debug!("Always on top: {}", on_top);
            model.settings.always_on_top = on_top;
            Some(Cmd::Batch(vec![Cmd::SetAlwaysOnTop(on_top), Cmd::SaveConfig]))
        }

        Msg::SetLength(length) => {
            model.settings.set_length(length);
            tracing::debug!(
                "Length set to {} (requested {})",
                model.settings.length,
                length
            );
            let rect = model.fit_window();
            Some(Cmd::Batch(vec![
                Cmd::SetWindowRect(rect),
                Cmd::Redraw,
                Cmd::SaveConfig,
            ]))
        }

        Msg::WindowMoved(origin) => {
            let rect = model.window.rect;
            model.window.rect = PixelRect::new(origin.x, origin.y, rect.width, rect.height);
            None
        }

        Msg::WindowResized { width, height } => {
            let rect = model.window.rect;
            if rect.width == width && rect.height == height {
                return None;
            }
            model.window.rect = PixelRect::new(rect.x, rect.y, width, height);
            let long = model.long_size(&model.window.rect);
            model.settings.set_length(long.max(0) as u32);
            Some(Cmd::Redraw)
        }

        Msg::SetMaximized(maximized) => {
            model.window.maximized = maximized;
            None
        }

        Msg::DisplayChanged(index) => {
            if model.display == index {
                return None;
            }
            tracing::debug!("Ruler moved to display {}", index);
            model.display = index;
            Some(Cmd::Redraw)
        }

        // Settings are saved by the runtime as the event loop exits
        Msg::Close => Some(Cmd::Quit),
    }
}
