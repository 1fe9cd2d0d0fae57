//! View module - CPU rendering of the ruler
//!
//! [`render_ruler`] composes the background, scale and markers against any
//! [`DrawSurface`]. [`Renderer`] owns the softbuffer surface and presents a
//! composed frame to the window.

pub mod background;
pub mod bitmap;
pub mod frame;
pub mod markers;
pub mod scale;
pub mod surface;

pub use background::{draw_background, BackgroundFill};
pub use bitmap::{Bitmap, TilePaths, TileSet};
pub use frame::{Frame, TextPainter};
pub use markers::{draw_markers, Marker};
pub use scale::draw_scale;
pub use surface::{DrawSurface, FrameSurface};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use crate::model::RulerModel;
use crate::units::DisplayContext;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Font size in logical pixels when the config does not set one
pub const DEFAULT_FONT_SIZE: f32 = 11.0;

/// Fonts tried in order when no `font_path` is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Draw a complete ruler frame: background, then scale, then markers
pub fn render_ruler(surface: &mut dyn DrawSurface, model: &RulerModel, tiles: &TileSet) {
    let settings = &model.settings;
    let rect = model.surface_rect();
    let display = DisplayContext::new(&model.ppi, model.display);

    draw_background(
        surface,
        rect,
        settings.position,
        BackgroundFill::from_settings(settings, tiles),
    );
    draw_scale(
        surface,
        display,
        rect,
        settings.position,
        settings.units,
        settings.scale_colour,
    );

    let first = settings.first_marker.map(|offset| Marker {
        offset,
        colour: settings.first_marker_colour,
    });
    let second = settings.second_marker.map(|offset| Marker {
        offset,
        colour: settings.second_marker_colour,
    });
    draw_markers(
        surface,
        display,
        rect,
        settings.position,
        settings.units,
        first,
        second,
    );
}

fn read_font(path: &Path) -> Result<Font, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read font {}: {}", path.display(), e))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| format!("Failed to parse font {}: {}", path.display(), e))
}

/// Load the configured font, or the first usable system font.
///
/// Returns `None` (labels are skipped) when nothing can be loaded.
pub fn load_font(configured: Option<&Path>) -> Option<Font> {
    if let Some(path) = configured {
        match read_font(path) {
            Ok(font) => {
                tracing::debug!("Loaded font {}", path.display());
                return Some(font);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    let font = SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|path| path.exists())
        .find_map(|path| match read_font(&path) {
            Ok(font) => {
                tracing::debug!("Loaded system font {}", path.display());
                Some(font)
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        });

    if font.is_none() {
        tracing::warn!("No usable font found; scale and marker labels will not be drawn");
    }
    font
}

pub struct Renderer {
    font: Option<Font>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames, so frames
    /// are composed here and copied to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: Option<LineMetrics>,
    glyph_cache: GlyphCache,
}

impl Renderer {
    /// Create a renderer for `window`. `font_size` is in logical pixels.
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Option<Font>,
        font_size: f32,
    ) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(nonzero(width), nonzero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font_size = font_size * window.scale_factor() as f32;
        let line_metrics = font
            .as_ref()
            .and_then(|font| font.horizontal_line_metrics(font_size));
        if font.is_some() && line_metrics.is_none() {
            tracing::warn!("Font has no horizontal line metrics; labels disabled");
        }

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0; (width as usize) * (height as usize)],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn has_text(&self) -> bool {
        self.font.is_some() && self.line_metrics.is_some()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        self.surface
            .resize(nonzero(width), nonzero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
    }

    /// Compose the ruler into the back buffer and present it
    pub fn render(&mut self, model: &RulerModel, tiles: &TileSet) -> Result<()> {
        let rect = model.window.rect;
        let (width, height) = (rect.width.max(1) as u32, rect.height.max(1) as u32);
        if width != self.width || height != self.height {
            tracing::debug!("Resizing render surface to {}x{}", width, height);
            self.resize(width, height)?;
        }

        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            frame.clear(0xFF000000);

            let painter = match (&self.font, &self.line_metrics) {
                (Some(font), Some(metrics)) => Some(TextPainter::new(
                    font,
                    &mut self.glyph_cache,
                    self.font_size,
                    metrics.ascent,
                    metrics.new_line_size.ceil() as usize,
                )),
                _ => None,
            };
            let mut surface = FrameSurface::new(&mut frame, painter);
            render_ruler(&mut surface, model, tiles);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        let len = buffer.len().min(self.back_buffer.len());
        buffer[..len].copy_from_slice(&self.back_buffer[..len]);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

#[inline]
fn nonzero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}
