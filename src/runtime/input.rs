//! Keyboard shortcuts
//!
//! Without a native context menu, every menu entry has a key:
//! - `1`-`4`: scale on the left, top, right, bottom edge
//! - `P`/`C`/`I`/`A`: pixels, centimetres, inches, picas
//! - `T`: toggle always-on-top
//! - `+`/`-`: lengthen or shorten the ruler
//! - `Esc`/`Q`: close

use winit::keyboard::{Key, NamedKey};

use pixruler::messages::Msg;
use pixruler::model::{RulerModel, RulerPosition};
use pixruler::units::Units;

/// Pixels added or removed per `+`/`-` press
pub const LENGTH_STEP: u32 = 10;

/// Map a pressed key to a message
pub fn handle_key(model: &RulerModel, key: &Key) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Msg::Close),
        Key::Character(text) => {
            let length = model.settings.length;
            let msg = match text.to_lowercase().as_str() {
                "1" => Msg::SetPosition(RulerPosition::Left),
                "2" => Msg::SetPosition(RulerPosition::Top),
                "3" => Msg::SetPosition(RulerPosition::Right),
                "4" => Msg::SetPosition(RulerPosition::Bottom),
                "p" => Msg::SetUnits(Units::Pixels),
                "c" => Msg::SetUnits(Units::Centimetres),
                "i" => Msg::SetUnits(Units::Inches),
                "a" => Msg::SetUnits(Units::Picas),
                "t" => Msg::ToggleAlwaysOnTop,
                "+" | "=" => Msg::SetLength(length.saturating_add(LENGTH_STEP)),
                "-" | "_" => Msg::SetLength(length.saturating_sub(LENGTH_STEP)),
                "q" => Msg::Close,
                _ => return None,
            };
            Some(msg)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixruler::model::{Point, RulerSettings};
    use pixruler::units::PpiTable;

    fn model() -> RulerModel {
        RulerModel::new(RulerSettings::default(), PpiTable::default(), Point::default())
    }

    #[test]
    fn test_length_keys_step_from_current_length() {
        let model = model();
        let longer = handle_key(&model, &Key::Character("+".into()));
        assert_eq!(longer, Some(Msg::SetLength(model.settings.length + LENGTH_STEP)));
        let shorter = handle_key(&model, &Key::Character("-".into()));
        assert_eq!(shorter, Some(Msg::SetLength(model.settings.length - LENGTH_STEP)));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        let model = model();
        assert_eq!(
            handle_key(&model, &Key::Character("C".into())),
            Some(Msg::SetUnits(Units::Centimetres))
        );
        assert_eq!(
            handle_key(&model, &Key::Named(NamedKey::Escape)),
            Some(Msg::Close)
        );
        assert_eq!(handle_key(&model, &Key::Character("z".into())), None);
    }
}
