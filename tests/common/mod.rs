//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pixruler::model::{
    GradientDirection, PixelRect, Point, RulerModel, RulerPosition, RulerSettings,
};
use pixruler::theme::Color;
use pixruler::units::{Ppi, PpiTable, Units};
use pixruler::view::{Bitmap, DrawSurface};

/// Fixed text cell used to measure labels
pub const CELL_WIDTH: i32 = 6;
pub const CELL_HEIGHT: i32 = 10;

/// Window origin used by [`test_model`]
pub const ORIGIN: Point = Point::new(100, 200);

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    FillRect {
        rect: PixelRect,
        color: Color,
    },
    Gradient {
        rect: PixelRect,
        start: Color,
        end: Color,
        direction: GradientDirection,
    },
    Blit {
        at: Point,
        width: u32,
        height: u32,
    },
    Text {
        at: Point,
        text: String,
        color: Color,
    },
}

/// A [`DrawSurface`] that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Point, Point, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(Point, String, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { at, text, color } => Some((*at, text.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<(Point, u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Blit { at, width, height } => Some((*at, *width, *height)),
                _ => None,
            })
            .collect()
    }

    pub fn text(&self, text: &str) -> Option<Point> {
        self.texts()
            .into_iter()
            .find(|(_, t, _)| t == text)
            .map(|(at, _, _)| at)
    }
}

impl DrawSurface for RecordingSurface {
    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn gradient_rect(
        &mut self,
        rect: PixelRect,
        start: Color,
        end: Color,
        direction: GradientDirection,
    ) {
        self.calls.push(DrawCall::Gradient {
            rect,
            start,
            end,
            direction,
        });
    }

    fn blit(&mut self, bitmap: &Bitmap, at: Point) {
        self.calls.push(DrawCall::Blit {
            at,
            width: bitmap.width(),
            height: bitmap.height(),
        });
    }

    fn text_extent(&mut self, text: &str) -> (i32, i32) {
        (text.chars().count() as i32 * CELL_WIDTH, CELL_HEIGHT)
    }

    fn text(&mut self, at: Point, text: &str, color: Color) {
        self.calls.push(DrawCall::Text {
            at,
            text: text.to_string(),
            color,
        });
    }
}

/// A tick as (long-axis coordinate, tick length), read back from a line
pub fn tick(position: RulerPosition, from: Point, to: Point) -> (i32, i32) {
    if position.is_horizontal() {
        (from.x, (to.y - from.y).abs() + 1)
    } else {
        (from.y, (to.x - from.x).abs() + 1)
    }
}

/// Surface rectangle for a ruler of `length` at `position`
pub fn surface_rect(position: RulerPosition, length: i32) -> PixelRect {
    if position.is_horizontal() {
        PixelRect::new(0, 0, length, 60)
    } else {
        PixelRect::new(0, 0, 60, length)
    }
}

/// A 96 ppi table with one display
pub fn ppi_96() -> PpiTable {
    PpiTable::uniform(Ppi::new(96.0, 96.0))
}

/// Create a test model at [`ORIGIN`] with the given position and length
pub fn test_model(position: RulerPosition, length: u32) -> RulerModel {
    test_model_with_units(position, length, Units::Pixels)
}

pub fn test_model_with_units(position: RulerPosition, length: u32, units: Units) -> RulerModel {
    let settings = RulerSettings {
        position,
        units,
        length,
        ..Default::default()
    };
    RulerModel::new(settings, ppi_96(), ORIGIN)
}
