//! Pixel <-> physical unit conversion
//!
//! Conversions are parameterized by a display index (selecting an entry in the
//! [`PpiTable`]) and an [`Axis`] (horizontal uses the x density, vertical the
//! y density). Truncation order matters: the scale renderer relies on these
//! exact results to place boundary ticks.

use serde::{Deserialize, Serialize};

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Picas per inch
pub const PICAS_PER_INCH: f64 = 6.0;

/// Fallback density used when no display information is available
pub const DEFAULT_PPI: f64 = 96.0;

/// Unit system of the ruler scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    #[serde(alias = "px")]
    Pixels,
    #[serde(alias = "cm")]
    Centimetres,
    #[serde(alias = "in")]
    Inches,
    #[serde(alias = "pica")]
    Picas,
}

impl Units {
    pub const ALL: [Units; 4] = [
        Units::Pixels,
        Units::Centimetres,
        Units::Inches,
        Units::Picas,
    ];

    /// Suffix used in marker labels
    pub fn suffix(self) -> &'static str {
        match self {
            Units::Pixels => "px",
            Units::Centimetres => "cm",
            Units::Inches => "in",
            Units::Picas => "pica",
        }
    }
}

/// Axis along which a distance is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Pixels-per-inch of one display, per axis. Never below 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ppi {
    x: f64,
    y: f64,
}

impl Ppi {
    /// Create a density pair, clamping each component to at least 1.0
    pub fn new(x: f64, y: f64) -> Self {
        let clamp = |v: f64| {
            if v.is_finite() && v >= 1.0 {
                v
            } else {
                tracing::warn!("Clamping invalid pixels-per-inch value {} to 1", v);
                1.0
            }
        };
        Self {
            x: clamp(x),
            y: clamp(y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl Default for Ppi {
    fn default() -> Self {
        Self {
            x: DEFAULT_PPI,
            y: DEFAULT_PPI,
        }
    }
}

/// Per-display density table.
///
/// Entry 0 is the fallback used when a display index is unknown. Built once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PpiTable {
    entries: Vec<Ppi>,
}

impl Default for PpiTable {
    fn default() -> Self {
        Self {
            entries: vec![Ppi::default()],
        }
    }
}

impl PpiTable {
    /// Build a table from the fallback entry followed by one entry per display
    pub fn new(fallback: Ppi, displays: impl IntoIterator<Item = Ppi>) -> Self {
        let mut entries = vec![fallback];
        entries.extend(displays);
        Self { entries }
    }

    /// Table with a single entry used for every display
    pub fn uniform(ppi: Ppi) -> Self {
        Self { entries: vec![ppi] }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Density for a display, falling back to entry 0
    pub fn get(&self, display: usize) -> Ppi {
        self.entries
            .get(display)
            .or_else(|| self.entries.first())
            .copied()
            .unwrap_or_default()
    }

    fn density(&self, display: usize, axis: Axis) -> f64 {
        self.get(display).along(axis)
    }

    pub fn inches_to_pixels(&self, display: usize, axis: Axis, inches: f64) -> i32 {
        (self.density(display, axis) * inches).trunc() as i32
    }

    pub fn pixels_to_inches(&self, display: usize, axis: Axis, pixels: f64) -> f64 {
        pixels / self.density(display, axis)
    }

    /// The per-centimetre factor is truncated before multiplying.
    pub fn centimetres_to_pixels(&self, display: usize, axis: Axis, cm: f64) -> i32 {
        ((self.density(display, axis) / CM_PER_INCH).trunc() * cm).trunc() as i32
    }

    pub fn pixels_to_centimetres(&self, display: usize, axis: Axis, pixels: f64) -> f64 {
        pixels / (self.density(display, axis) / CM_PER_INCH)
    }

    pub fn picas_to_pixels(&self, display: usize, axis: Axis, picas: f64) -> i32 {
        ((self.density(display, axis) / PICAS_PER_INCH) * picas).trunc() as i32
    }

    pub fn pixels_to_picas(&self, display: usize, axis: Axis, pixels: f64) -> f64 {
        pixels / (self.density(display, axis) / PICAS_PER_INCH)
    }

    /// Convert a distance in `units` to pixels
    pub fn to_pixels(&self, display: usize, axis: Axis, units: Units, value: f64) -> i32 {
        match units {
            Units::Pixels => value.trunc() as i32,
            Units::Centimetres => self.centimetres_to_pixels(display, axis, value),
            Units::Inches => self.inches_to_pixels(display, axis, value),
            Units::Picas => self.picas_to_pixels(display, axis, value),
        }
    }

    /// Convert a pixel distance to `units`
    pub fn from_pixels(&self, display: usize, axis: Axis, units: Units, pixels: f64) -> f64 {
        match units {
            Units::Pixels => pixels,
            Units::Centimetres => self.pixels_to_centimetres(display, axis, pixels),
            Units::Inches => self.pixels_to_inches(display, axis, pixels),
            Units::Picas => self.pixels_to_picas(display, axis, pixels),
        }
    }
}

/// A [`PpiTable`] bound to the display the ruler is currently on
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext<'a> {
    table: &'a PpiTable,
    index: usize,
}

impl<'a> DisplayContext<'a> {
    pub fn new(table: &'a PpiTable, index: usize) -> Self {
        Self { table, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ppi(&self) -> Ppi {
        self.table.get(self.index)
    }

    pub fn to_pixels(&self, axis: Axis, units: Units, value: f64) -> i32 {
        self.table.to_pixels(self.index, axis, units, value)
    }

    pub fn from_pixels(&self, axis: Axis, units: Units, pixels: f64) -> f64 {
        self.table.from_pixels(self.index, axis, units, pixels)
    }
}
