//! Ruler background: solid fill, gradient, or tiled bitmaps

use crate::model::{
    BackgroundType, Orientation, PixelRect, Point, RulerPosition, RulerSettings,
};
use crate::theme::Color;

use super::bitmap::TileSet;
use super::surface::DrawSurface;

/// Middle tiles are repeated at this stride, matching the minor tick spacing
pub const TILE_STRIDE: i32 = 2;

/// Resolved background paint
#[derive(Debug, Clone, Copy)]
pub enum BackgroundFill<'a> {
    Solid(Color),
    Gradient { start: Color, end: Color },
    Image(&'a TileSet),
}

impl<'a> BackgroundFill<'a> {
    pub fn from_settings(settings: &RulerSettings, tiles: &'a TileSet) -> Self {
        match settings.background_type {
            BackgroundType::Solid => BackgroundFill::Solid(settings.background_colour),
            BackgroundType::Gradient => BackgroundFill::Gradient {
                start: settings.gradient_start,
                end: settings.gradient_end,
            },
            BackgroundType::Image => BackgroundFill::Image(tiles),
        }
    }
}

/// Paint the ruler background, then its outline unless tiles provide one
pub fn draw_background(
    surface: &mut dyn DrawSurface,
    rect: PixelRect,
    position: RulerPosition,
    fill: BackgroundFill<'_>,
) {
    let o = Orientation::new(position, rect);
    match fill {
        BackgroundFill::Solid(colour) => {
            surface.fill_rect(rect, colour);
            surface.outline_rect(rect, Color::BLACK);
        }
        BackgroundFill::Gradient { start, end } => {
            surface.gradient_rect(rect, start, end, o.inward());
            surface.outline_rect(rect, Color::BLACK);
        }
        BackgroundFill::Image(tiles) => draw_tiles(surface, &o, tiles),
    }
}

fn draw_tiles(surface: &mut dyn DrawSurface, o: &Orientation, tiles: &TileSet) {
    let horizontal = o.position().is_horizontal();
    let (start_cap, middle, end_cap) = tiles.for_axis(horizontal);
    let rect = o.rect();

    // Tiles are laid from the top-left corner; they are not mirrored
    let at = |long: i32| {
        if horizontal {
            Point::new(rect.x + long, rect.y)
        } else {
            Point::new(rect.x, rect.y + long)
        }
    };
    let long_len = |w: u32, h: u32| if horizontal { w as i32 } else { h as i32 };

    let start = long_len(start_cap.width(), start_cap.height());
    let end = o.long_extent() - long_len(end_cap.width(), end_cap.height());

    let mut long = start;
    while long < end {
        surface.blit(middle, at(long));
        long += TILE_STRIDE;
    }
    surface.blit(start_cap, at(0));
    surface.blit(end_cap, at(end));
}
