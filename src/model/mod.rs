//! Application model - the complete state of the ruler
//!
//! Settings, window geometry and display densities live here. Interaction
//! state belongs to the controllers in [`crate::interaction`].

pub mod geometry;
pub mod settings;

pub use geometry::{GradientDirection, Orientation, PixelRect, Point};
pub use settings::{
    BackgroundType, RulerPosition, RulerSettings, DEFAULT_LENGTH, DEFAULT_MINIMUM_LENGTH,
    MARKER_END_MARGIN, ORIGIN_INSET, RULER_BREADTH,
};

use crate::units::PpiTable;

/// Host window geometry as last reported or commanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowState {
    /// Outer window rectangle in screen pixels
    pub rect: PixelRect,
    pub maximized: bool,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct RulerModel {
    pub settings: RulerSettings,
    pub window: WindowState,
    /// Display densities, built once at startup
    pub ppi: PpiTable,
    /// Index into `ppi` of the display the window is on
    pub display: usize,
}

impl RulerModel {
    /// Create a model with the window placed at `origin`, sized from the settings
    pub fn new(settings: RulerSettings, ppi: PpiTable, origin: Point) -> Self {
        let mut model = Self {
            settings,
            window: WindowState::default(),
            ppi,
            display: 0,
        };
        let length = model.settings.length;
        model.settings.set_length(length);
        model.window.rect = model.rect_for_length(origin, model.settings.length as i32);
        model
    }

    /// Window rectangle at `origin` with the given long-axis length
    pub fn rect_for_length(&self, origin: Point, length: i32) -> PixelRect {
        if self.settings.position.is_horizontal() {
            PixelRect::new(origin.x, origin.y, length, RULER_BREADTH)
        } else {
            PixelRect::new(origin.x, origin.y, RULER_BREADTH, length)
        }
    }

    /// Reshape the window to match the current position and length, keeping its origin
    pub fn fit_window(&mut self) -> PixelRect {
        let origin = self.window.rect.origin();
        self.window.rect = self.rect_for_length(origin, self.settings.length as i32);
        self.window.rect
    }

    /// Long-axis size of a window rectangle for the current orientation
    pub fn long_size(&self, rect: &PixelRect) -> i32 {
        if self.settings.position.is_horizontal() {
            rect.width
        } else {
            rect.height
        }
    }

    /// Offset of a screen point from the window's start edge along the long axis
    pub fn long_offset(&self, screen: Point) -> i32 {
        let local = screen - self.window.rect.origin();
        if self.settings.position.is_horizontal() {
            local.x
        } else {
            local.y
        }
    }

    /// Drawing surface rectangle (client area in local coordinates)
    pub fn surface_rect(&self) -> PixelRect {
        self.window.rect.local()
    }

    // Read-only values for the context menu's checked state

    pub fn position(&self) -> RulerPosition {
        self.settings.position
    }

    pub fn units(&self) -> crate::units::Units {
        self.settings.units
    }

    pub fn always_on_top(&self) -> bool {
        self.settings.always_on_top
    }
}
