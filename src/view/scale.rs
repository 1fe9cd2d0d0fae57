//! Scale rendering: tick marks and numeric labels along the long axis
//!
//! A running unit coordinate is stepped from zero and converted to a pixel
//! offset from the scale origin. Each step draws a tick whose length depends
//! on its tier; the stepped loop stops short of the cap, and a final tick is
//! always drawn exactly `CAP_MARGIN` pixels before the far edge.

use crate::model::{Orientation, PixelRect, RulerPosition, ORIGIN_INSET};
use crate::theme::Color;
use crate::units::{DisplayContext, Units};

use super::surface::DrawSurface;

pub const TICK_LONG: i32 = 12;
pub const TICK_MEDIUM: i32 = 5;
/// Whole-pica ticks between the labelled six-pica divisions
pub const TICK_PICA: i32 = 8;
pub const TICK_SHORT: i32 = 3;

/// Distance of the closing tick from the far edge
pub const CAP_MARGIN: i32 = 10;

/// Unit step for centimetres, inches and picas
pub const UNIT_STEP: f64 = 0.125;
/// Pixel step for the pixel scale (only even offsets are marked)
pub const PIXEL_STEP: i32 = 2;
/// Every n-th pixel step gets a labelled medium tick
pub const PIXEL_LABEL_EVERY: i32 = 10;

const LABEL_GAP: i32 = 2;
const EPSILON: f64 = 1e-6;

/// Tolerant equality for accumulated unit coordinates
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Whether `value` is a whole multiple of `of`, tolerating rounding drift
#[inline]
pub fn is_multiple_of(value: f64, of: f64) -> bool {
    let q = value / of;
    nearly_equal(q, q.round())
}

/// Tick classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTier {
    /// Zero and the closing cap
    Boundary,
    /// Whole unit (six picas for the pica scale, every 20 px for pixels)
    Major,
    /// Whole pica
    Pica,
    Minor,
}

impl TickTier {
    pub fn length(self) -> i32 {
        match self {
            TickTier::Boundary => TICK_LONG,
            TickTier::Major => TICK_MEDIUM,
            TickTier::Pica => TICK_PICA,
            TickTier::Minor => TICK_SHORT,
        }
    }

    pub fn labelled(self) -> bool {
        matches!(self, TickTier::Boundary | TickTier::Major)
    }
}

/// Tier of the tick at unit coordinate `u` for a physical unit scale
pub fn unit_tier(units: Units, u: f64) -> TickTier {
    if nearly_equal(u, 0.0) {
        return TickTier::Boundary;
    }
    match units {
        Units::Picas if is_multiple_of(u, 6.0) => TickTier::Major,
        Units::Picas if is_multiple_of(u, 1.0) => TickTier::Pica,
        Units::Centimetres | Units::Inches if is_multiple_of(u, 1.0) => TickTier::Major,
        Units::Pixels | Units::Centimetres | Units::Inches | Units::Picas => TickTier::Minor,
    }
}

/// Tier of the tick at an even pixel offset for the pixel scale
pub fn pixel_tier(offset: i32) -> TickTier {
    if offset == 0 {
        TickTier::Boundary
    } else if (offset / PIXEL_STEP) % PIXEL_LABEL_EVERY == 0 {
        TickTier::Major
    } else {
        TickTier::Minor
    }
}

/// Label text for a tick value
pub fn scale_label(units: Units, value: f64) -> String {
    match units {
        Units::Pixels => format!("{}", value.trunc() as i64),
        Units::Centimetres | Units::Inches | Units::Picas => format!("{:.2}", value),
    }
}

/// Draw the ruler scale onto `surface`
pub fn draw_scale(
    surface: &mut dyn DrawSurface,
    display: DisplayContext<'_>,
    rect: PixelRect,
    position: RulerPosition,
    units: Units,
    colour: Color,
) {
    let o = Orientation::new(position, rect);
    let cap = o.long_extent() - CAP_MARGIN;
    if cap < ORIGIN_INSET {
        return;
    }
    // Pixel offsets from the origin are valid strictly below this
    let limit = cap - ORIGIN_INSET;
    let axis = position.axis();

    match units {
        Units::Pixels => {
            let mut offset = 0;
            while offset < limit {
                let tier = pixel_tier(offset);
                draw_tick(surface, &o, ORIGIN_INSET + offset, tier, colour);
                if tier.labelled() {
                    let text = scale_label(units, offset as f64);
                    draw_label(surface, &o, ORIGIN_INSET + offset, &text, colour);
                }
                offset += PIXEL_STEP;
            }
        }
        Units::Centimetres | Units::Inches | Units::Picas => {
            // Ends on the pixel limit; the unit bound only matters at densities
            // so low that a unit truncates to under 1 px
            let last_unit = limit as f64 + 1.0;
            let mut u = 0.0;
            while u <= last_unit {
                let offset = display.to_pixels(axis, units, u);
                if offset >= limit {
                    break;
                }
                let tier = unit_tier(units, u);
                draw_tick(surface, &o, ORIGIN_INSET + offset, tier, colour);
                if tier.labelled() {
                    let text = scale_label(units, u.round());
                    draw_label(surface, &o, ORIGIN_INSET + offset, &text, colour);
                }
                u += UNIT_STEP;
            }
        }
    }

    draw_tick(surface, &o, cap, TickTier::Boundary, colour);
    let cap_value = display.from_pixels(axis, units, limit as f64);
    draw_label(surface, &o, cap, &scale_label(units, cap_value), colour);
}

fn draw_tick(
    surface: &mut dyn DrawSurface,
    o: &Orientation,
    long: i32,
    tier: TickTier,
    colour: Color,
) {
    let from = o.point(long, 0);
    let to = o.point(long, tier.length() - 1);
    surface.line(from, to, colour);
}

/// Centre a label on its tick, beyond the longest tick, kept inside the surface
fn draw_label(
    surface: &mut dyn DrawSurface,
    o: &Orientation,
    long: i32,
    text: &str,
    colour: Color,
) {
    let (w, h) = surface.text_extent(text);
    let (text_long, text_cross) = o.split_extent(w, h);
    let max_start = (o.long_extent() - text_long).max(0);
    let start = (long - text_long / 2).clamp(0, max_start);
    let r = o.rect_at(start, TICK_LONG + LABEL_GAP, text_long, text_cross);
    surface.text(r.origin(), text, colour);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulated_steps_hit_whole_units() {
        let mut u = 0.0;
        for _ in 0..80 {
            u += 0.1; // deliberately inexact
        }
        assert!(is_multiple_of(u, 1.0));
        assert!(is_multiple_of(u, 4.0));
    }

    #[test]
    fn test_unit_tiers() {
        assert_eq!(unit_tier(Units::Centimetres, 0.0), TickTier::Boundary);
        assert_eq!(unit_tier(Units::Centimetres, 1.0), TickTier::Major);
        assert_eq!(unit_tier(Units::Inches, 0.375), TickTier::Minor);
        assert_eq!(unit_tier(Units::Picas, 6.0), TickTier::Major);
        assert_eq!(unit_tier(Units::Picas, 5.0), TickTier::Pica);
        assert_eq!(unit_tier(Units::Picas, 5.5), TickTier::Minor);
    }

    #[test]
    fn test_pixel_tiers() {
        assert_eq!(pixel_tier(0), TickTier::Boundary);
        assert_eq!(pixel_tier(2), TickTier::Minor);
        assert_eq!(pixel_tier(20), TickTier::Major);
        assert_eq!(pixel_tier(38), TickTier::Minor);
    }

    #[test]
    fn test_labels() {
        assert_eq!(scale_label(Units::Pixels, 0.0), "0");
        assert_eq!(scale_label(Units::Pixels, 140.0), "140");
        assert_eq!(scale_label(Units::Centimetres, 3.0), "3.00");
        assert_eq!(scale_label(Units::Inches, 2.456), "2.46");
    }
}
