//! Integer geometry and the orientation transform
//!
//! Renderers are written once against "long axis" / "cross axis" coordinates.
//! [`Orientation`] maps those onto concrete surface x/y for each
//! [`RulerPosition`]. The cross coordinate is always measured from the edge
//! the scale is drawn against, so Right/Bottom rulers are mirrored.

use crate::model::settings::RulerPosition;

/// A point in pixels (screen or surface space)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Integer rectangle. `right()` and `bottom()` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn offset(&self, delta: Point) -> PixelRect {
        PixelRect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Same size, placed at the origin
    pub fn local(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }
}

/// Direction a linear gradient runs from its start colour to its end colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    Right,
    Down,
    Left,
    Up,
}

/// Long/cross coordinate transform for one ruler position over one surface rect
#[derive(Clone, Copy, Debug)]
pub struct Orientation {
    position: RulerPosition,
    rect: PixelRect,
}

impl Orientation {
    pub fn new(position: RulerPosition, rect: PixelRect) -> Self {
        Self { position, rect }
    }

    #[inline]
    pub fn position(&self) -> RulerPosition {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Size of the surface along the measuring axis
    pub fn long_extent(&self) -> i32 {
        if self.position.is_horizontal() {
            self.rect.width
        } else {
            self.rect.height
        }
    }

    /// Size of the surface across the measuring axis
    pub fn cross_extent(&self) -> i32 {
        if self.position.is_horizontal() {
            self.rect.height
        } else {
            self.rect.width
        }
    }

    /// Map a (long, cross) coordinate to a surface point
    pub fn point(&self, long: i32, cross: i32) -> Point {
        let r = self.rect;
        match self.position {
            RulerPosition::Top => Point::new(r.x + long, r.y + cross),
            RulerPosition::Bottom => Point::new(r.x + long, r.bottom() - 1 - cross),
            RulerPosition::Left => Point::new(r.x + cross, r.y + long),
            RulerPosition::Right => Point::new(r.right() - 1 - cross, r.y + long),
        }
    }

    /// Map a rectangle given in (long, cross) space to a surface rectangle
    pub fn rect_at(&self, long: i32, cross: i32, long_len: i32, cross_len: i32) -> PixelRect {
        let r = self.rect;
        match self.position {
            RulerPosition::Top => PixelRect::new(r.x + long, r.y + cross, long_len, cross_len),
            RulerPosition::Bottom => PixelRect::new(
                r.x + long,
                r.bottom() - cross - cross_len,
                long_len,
                cross_len,
            ),
            RulerPosition::Left => PixelRect::new(r.x + cross, r.y + long, cross_len, long_len),
            RulerPosition::Right => PixelRect::new(
                r.right() - cross - cross_len,
                r.y + long,
                cross_len,
                long_len,
            ),
        }
    }

    /// Split a (width, height) extent into (long, cross) lengths
    pub fn split_extent(&self, width: i32, height: i32) -> (i32, i32) {
        if self.position.is_horizontal() {
            (width, height)
        } else {
            (height, width)
        }
    }

    /// Gradient direction pointing from the scale edge to the far edge
    pub fn inward(&self) -> GradientDirection {
        match self.position {
            RulerPosition::Left => GradientDirection::Right,
            RulerPosition::Top => GradientDirection::Down,
            RulerPosition::Right => GradientDirection::Left,
            RulerPosition::Bottom => GradientDirection::Up,
        }
    }
}
