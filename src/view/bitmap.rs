//! Background tile bitmaps
//!
//! Tiles are decoded once at startup with the `image` crate. A tile that
//! fails to load becomes an empty bitmap, which draws as nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Decoded ARGB bitmap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Bitmap with no pixels
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap raw ARGB pixels, checking the buffer matches the dimensions
    pub fn from_argb(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, String> {
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(format!(
                "Bitmap buffer has {} pixels, expected {}x{}",
                pixels.len(),
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode an image file into ARGB pixels
    pub fn load(path: &Path) -> Result<Self, String> {
        let rgba = image::open(path)
            .map_err(|e| format!("Failed to load image {}: {}", path.display(), e))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();
        Self::from_argb(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)`; callers stay within bounds
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width as usize + x]
    }
}

/// Configured tile image paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilePaths {
    pub left: Option<PathBuf>,
    pub middle_horizontal: Option<PathBuf>,
    pub right: Option<PathBuf>,
    pub top: Option<PathBuf>,
    pub middle_vertical: Option<PathBuf>,
    pub bottom: Option<PathBuf>,
}

/// The six background tiles: end caps and a repeating middle segment per axis
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    pub left: Bitmap,
    pub middle_horizontal: Bitmap,
    pub right: Bitmap,
    pub top: Bitmap,
    pub middle_vertical: Bitmap,
    pub bottom: Bitmap,
}

impl TileSet {
    /// Load every configured tile; missing or broken files become empty bitmaps
    pub fn load(paths: &TilePaths) -> Self {
        fn load_one(path: &Option<PathBuf>) -> Bitmap {
            let Some(path) = path else {
                return Bitmap::empty();
            };
            match Bitmap::load(path) {
                Ok(bitmap) => bitmap,
                Err(e) => {
                    tracing::warn!("{}", e);
                    Bitmap::empty()
                }
            }
        }

        Self {
            left: load_one(&paths.left),
            middle_horizontal: load_one(&paths.middle_horizontal),
            right: load_one(&paths.right),
            top: load_one(&paths.top),
            middle_vertical: load_one(&paths.middle_vertical),
            bottom: load_one(&paths.bottom),
        }
    }

    /// (start cap, middle, end cap) for one orientation
    pub fn for_axis(&self, horizontal: bool) -> (&Bitmap, &Bitmap, &Bitmap) {
        if horizontal {
            (&self.left, &self.middle_horizontal, &self.right)
        } else {
            (&self.top, &self.middle_vertical, &self.bottom)
        }
    }
}
