//! Marker rendering tests

mod common;

use common::{ppi_96, surface_rect, RecordingSurface};
use pixruler::model::{PixelRect, Point, RulerPosition};
use pixruler::theme::Color;
use pixruler::units::{DisplayContext, Units};
use pixruler::view::{draw_markers, Marker};

const FIRST: Color = Color::rgb(200, 0, 0);
const SECOND: Color = Color::rgb(0, 0, 200);

fn render(
    rect: PixelRect,
    position: RulerPosition,
    units: Units,
    first: Option<u32>,
    second: Option<u32>,
) -> RecordingSurface {
    let table = ppi_96();
    let mut surface = RecordingSurface::new();
    draw_markers(
        &mut surface,
        DisplayContext::new(&table, 0),
        rect,
        position,
        units,
        first.map(|offset| Marker {
            offset,
            colour: FIRST,
        }),
        second.map(|offset| Marker {
            offset,
            colour: SECOND,
        }),
    );
    surface
}

#[test]
fn test_unset_first_marker_draws_nothing() {
    let rect = surface_rect(RulerPosition::Top, 800);
    let surface = render(rect, RulerPosition::Top, Units::Pixels, None, Some(100));
    assert!(surface.calls.is_empty());
}

#[test]
fn test_single_marker_draws_one_line_and_one_label() {
    let rect = surface_rect(RulerPosition::Top, 800);
    let surface = render(rect, RulerPosition::Top, Units::Pixels, Some(50), None);

    assert_eq!(surface.calls.len(), 2);
    assert_eq!(
        surface.lines(),
        vec![(Point::new(54, 0), Point::new(54, 59), FIRST)]
    );
    // Two thirds across, after the line
    assert_eq!(
        surface.texts(),
        vec![(Point::new(56, 35), "50 px".to_string(), FIRST)]
    );
}

#[test]
fn test_second_marker_drawn_after_first() {
    let rect = surface_rect(RulerPosition::Bottom, 800);
    let surface = render(rect, RulerPosition::Bottom, Units::Pixels, Some(300), Some(120));

    let lines = surface.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].2, FIRST);
    assert_eq!(lines[1].2, SECOND);
    // Bottom rulers span the full breadth too
    assert_eq!(lines[1].0, Point::new(124, 59));
    assert_eq!(lines[1].1, Point::new(124, 0));

    let texts = surface.texts();
    assert_eq!(texts[0].1, "300 px");
    assert_eq!(texts[1].1, "120 px");
}

#[test]
fn test_labels_in_physical_units() {
    let rect = surface_rect(RulerPosition::Top, 800);
    let cm = render(rect, RulerPosition::Top, Units::Centimetres, Some(96), None);
    assert_eq!(cm.texts()[0].1, "2.54 cm");

    let inches = render(rect, RulerPosition::Top, Units::Inches, Some(48), None);
    assert_eq!(inches.texts()[0].1, "0.50 in");

    let picas = render(rect, RulerPosition::Top, Units::Picas, Some(40), None);
    assert_eq!(picas.texts()[0].1, "2.50 pica");
}

#[test]
fn test_label_flips_near_bottom_of_short_vertical_surface() {
    let rect = PixelRect::new(0, 0, 60, 50);
    let surface = render(rect, RulerPosition::Left, Units::Pixels, Some(40), None);

    let line = 4 + 40;
    let naive_outward = line + 2;
    let (at, text, _) = surface.texts()[0].clone();
    assert_eq!(text, "40 px");
    assert!(at.y < naive_outward, "label at {:?} was not flipped", at);
    // Upright label is 10 px tall along the ruler
    assert_eq!(at.y, line - 2 - 10);
    assert!(at.y + 10 <= rect.bottom());
}

#[test]
fn test_each_marker_flips_independently() {
    let rect = surface_rect(RulerPosition::Top, 200);
    let surface = render(rect, RulerPosition::Top, Units::Pixels, Some(180), Some(20));

    let texts = surface.texts();
    // "180 px" is 36 px wide: 186 + 36 > 200, so it sits before the line
    assert_eq!(texts[0].0.x, 184 - 2 - 36);
    assert_eq!(texts[1].0.x, 24 + 2);
}

#[test]
fn test_right_marker_label_mirrors_cross_axis() {
    let rect = surface_rect(RulerPosition::Right, 400);
    let surface = render(rect, RulerPosition::Right, Units::Pixels, Some(100), None);

    let (from, to, _) = surface.lines()[0];
    assert_eq!(from, Point::new(59, 104));
    assert_eq!(to, Point::new(0, 104));

    // "100 px": 36 wide across, 10 along; cross start 40 - 18 = 22
    let (at, _, _) = surface.texts()[0].clone();
    assert_eq!(at, Point::new(60 - 22 - 36, 106));
}
