//! Live ruler settings read by every renderer each frame

use serde::{Deserialize, Serialize};

use crate::theme::{Color, Theme};
use crate::units::{Axis, Units};

/// Fixed size of the ruler window across its measuring axis
pub const RULER_BREADTH: i32 = 60;

/// Distance of the scale origin (and markers) from the ruler's start edge
pub const ORIGIN_INSET: i32 = 4;

/// Markers cannot be placed within this many pixels of the far end
pub const MARKER_END_MARGIN: i32 = 5;

pub const DEFAULT_LENGTH: u32 = 800;
pub const DEFAULT_MINIMUM_LENGTH: u32 = 120;

/// Which screen edge the graduated scale faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulerPosition {
    Left,
    #[default]
    Top,
    Right,
    Bottom,
}

impl RulerPosition {
    pub const ALL: [RulerPosition; 4] = [
        RulerPosition::Left,
        RulerPosition::Top,
        RulerPosition::Right,
        RulerPosition::Bottom,
    ];

    /// Top/Bottom rulers measure horizontally
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, RulerPosition::Top | RulerPosition::Bottom)
    }

    /// Axis the ruler measures along
    #[inline]
    pub fn axis(self) -> Axis {
        if self.is_horizontal() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// How the ruler background is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Solid,
    #[default]
    Gradient,
    Image,
}

/// Current ruler settings.
///
/// Marker positions are offsets from the scale origin; `None` means unset.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerSettings {
    pub position: RulerPosition,
    pub units: Units,
    pub background_type: BackgroundType,
    pub background_colour: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub scale_colour: Color,
    pub first_marker_colour: Color,
    pub second_marker_colour: Color,
    pub length: u32,
    pub minimum_length: u32,
    pub first_marker: Option<u32>,
    pub second_marker: Option<u32>,
    pub always_on_top: bool,
}

impl Default for RulerSettings {
    fn default() -> Self {
        let mut settings = Self {
            position: RulerPosition::default(),
            units: Units::default(),
            background_type: BackgroundType::default(),
            background_colour: Color::WHITE,
            gradient_start: Color::WHITE,
            gradient_end: Color::WHITE,
            scale_colour: Color::BLACK,
            first_marker_colour: Color::BLACK,
            second_marker_colour: Color::BLACK,
            length: DEFAULT_LENGTH,
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            first_marker: None,
            second_marker: None,
            always_on_top: true,
        };
        settings.apply_theme(&Theme::default());
        settings
    }
}

impl RulerSettings {
    /// Copy the palette colours into the settings
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.background_colour = theme.background;
        self.gradient_start = theme.gradient_start;
        self.gradient_end = theme.gradient_end;
        self.scale_colour = theme.scale;
        self.first_marker_colour = theme.first_marker;
        self.second_marker_colour = theme.second_marker;
    }

    /// Set the long-axis length, clamped to `minimum_length`.
    ///
    /// Markers that no longer fit are cleared.
    pub fn set_length(&mut self, length: u32) {
        self.length = length.max(self.minimum_length);
        if self.first_marker.is_some_and(|m| m >= self.length) {
            self.first_marker = None;
        }
        if self.second_marker.is_some_and(|m| m >= self.length) {
            self.second_marker = None;
        }
    }

    /// Largest cursor offset (from the window's start edge) a marker may follow
    pub fn marker_band(&self) -> (i32, i32) {
        (ORIGIN_INSET, self.length as i32 - MARKER_END_MARGIN)
    }

    /// Convert a cursor offset along the long axis into a marker position,
    /// or `None` if the offset lies outside the live band
    pub fn marker_for_offset(&self, offset: i32) -> Option<u32> {
        let (lo, hi) = self.marker_band();
        if offset >= lo && offset <= hi {
            Some((offset - ORIGIN_INSET) as u32)
        } else {
            None
        }
    }

    pub fn clear_markers(&mut self) {
        self.first_marker = None;
        self.second_marker = None;
    }
}
