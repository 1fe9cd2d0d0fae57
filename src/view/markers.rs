//! Marker rendering
//!
//! A marker is a full-span line across the ruler plus a label with its
//! distance from the scale origin in the current units. Labels sit after the
//! line unless that would run past the far edge, in which case they flip to
//! the other side.

use crate::model::{Orientation, PixelRect, RulerPosition, ORIGIN_INSET};
use crate::theme::Color;
use crate::units::{DisplayContext, Units};

use super::surface::DrawSurface;

const LABEL_GAP: i32 = 2;

/// One marker to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Offset from the scale origin in pixels
    pub offset: u32,
    pub colour: Color,
}

/// Label for a marker offset, e.g. `"2.54 cm"` or `"96 px"`
pub fn marker_label(
    display: DisplayContext<'_>,
    position: RulerPosition,
    units: Units,
    offset: u32,
) -> String {
    match units {
        Units::Pixels => format!("{} {}", offset, units.suffix()),
        Units::Centimetres | Units::Inches | Units::Picas => {
            let value = display.from_pixels(position.axis(), units, offset as f64);
            format!("{:.2} {}", value, units.suffix())
        }
    }
}

/// Start of a marker label along the long axis.
///
/// `outward` is where the label would start after the line; if the label
/// would not fit before `extent` it is placed before the line instead.
pub fn label_start(line: i32, text_long: i32, extent: i32) -> i32 {
    let outward = line + LABEL_GAP;
    if outward + text_long > extent {
        line - LABEL_GAP - text_long
    } else {
        outward
    }
}

/// Draw the first marker and, in front of it, the second.
///
/// Nothing is drawn when the first marker is unset.
pub fn draw_markers(
    surface: &mut dyn DrawSurface,
    display: DisplayContext<'_>,
    rect: PixelRect,
    position: RulerPosition,
    units: Units,
    first: Option<Marker>,
    second: Option<Marker>,
) {
    let Some(first) = first else {
        return;
    };
    let o = Orientation::new(position, rect);
    draw_marker(surface, display, &o, units, first);
    if let Some(second) = second {
        draw_marker(surface, display, &o, units, second);
    }
}

fn draw_marker(
    surface: &mut dyn DrawSurface,
    display: DisplayContext<'_>,
    o: &Orientation,
    units: Units,
    marker: Marker,
) {
    let line = ORIGIN_INSET + marker.offset as i32;
    let cross = o.cross_extent();
    surface.line(o.point(line, 0), o.point(line, cross - 1), marker.colour);

    let text = marker_label(display, o.position(), units, marker.offset);
    let (w, h) = surface.text_extent(&text);
    let (text_long, text_cross) = o.split_extent(w, h);

    let long = label_start(line, text_long, o.long_extent());
    // Two thirds of the way across, clear of the scale's own labels
    let cross_start = (cross * 2 / 3 - text_cross / 2).clamp(0, (cross - text_cross).max(0));

    let r = o.rect_at(long, cross_start, text_long, text_cross);
    surface.text(r.origin(), &text, marker.colour);
}
