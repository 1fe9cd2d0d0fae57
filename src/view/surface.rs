//! Abstract drawing surface used by the ruler renderers
//!
//! The renderers only issue these primitives, so they can draw into the
//! software frame buffer or into anything else that implements the trait.

use crate::model::{GradientDirection, PixelRect, Point};
use crate::theme::Color;

use super::bitmap::Bitmap;
use super::frame::{Frame, TextPainter};

/// Drawing primitives the renderers need
pub trait DrawSurface {
    /// 1px line, both endpoints inclusive
    fn line(&mut self, from: Point, to: Point, color: Color);

    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    fn gradient_rect(
        &mut self,
        rect: PixelRect,
        start: Color,
        end: Color,
        direction: GradientDirection,
    );

    /// Copy a bitmap with its top-left corner at `at`. Empty bitmaps draw nothing.
    fn blit(&mut self, bitmap: &Bitmap, at: Point);

    /// (width, height) of `text` in pixels
    fn text_extent(&mut self, text: &str) -> (i32, i32);

    /// Draw text with its top-left corner at `at`
    fn text(&mut self, at: Point, text: &str, color: Color);

    /// 1px outline just inside `rect`
    fn outline_rect(&mut self, rect: PixelRect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (l, t) = (rect.x, rect.y);
        let (r, b) = (rect.right() - 1, rect.bottom() - 1);
        self.line(Point::new(l, t), Point::new(r, t), color);
        self.line(Point::new(l, b), Point::new(r, b), color);
        self.line(Point::new(l, t), Point::new(l, b), color);
        self.line(Point::new(r, t), Point::new(r, b), color);
    }
}

/// [`DrawSurface`] over a software [`Frame`].
///
/// Without a painter (no usable font) text calls are no-ops and measure as zero.
pub struct FrameSurface<'f, 'a> {
    frame: &'f mut Frame<'a>,
    painter: Option<TextPainter<'f>>,
}

impl<'f, 'a> FrameSurface<'f, 'a> {
    pub fn new(frame: &'f mut Frame<'a>, painter: Option<TextPainter<'f>>) -> Self {
        Self { frame, painter }
    }
}

impl DrawSurface for FrameSurface<'_, '_> {
    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.frame
            .draw_line(from.x, from.y, to.x, to.y, color.to_argb_u32());
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.frame.fill_rect(rect, color.to_argb_u32());
    }

    fn gradient_rect(
        &mut self,
        rect: PixelRect,
        start: Color,
        end: Color,
        direction: GradientDirection,
    ) {
        self.frame.fill_gradient(rect, start, end, direction);
    }

    fn blit(&mut self, bitmap: &Bitmap, at: Point) {
        self.frame.blit_bitmap(bitmap, at.x, at.y);
    }

    fn text_extent(&mut self, text: &str) -> (i32, i32) {
        match &mut self.painter {
            Some(painter) => (
                painter.measure_width(text).ceil() as i32,
                painter.line_height() as i32,
            ),
            None => (0, 0),
        }
    }

    fn text(&mut self, at: Point, text: &str, color: Color) {
        if let Some(painter) = &mut self.painter {
            painter.draw(self.frame, at.x, at.y, text, color.to_argb_u32());
        }
    }
}
