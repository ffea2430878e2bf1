//! Paints a `DisplayList` into a bitmap.
//!
//! `Rasterizer` is the seam the export pipeline draws through. The default
//! `CanvasRasterizer` paints with `imageproc`. Glyphs come from a TrueType font
//! when one is configured; without one, each text run is drawn as a bar of its
//! measured width so the page structure still reads.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use tracing::{debug, warn};

use crate::errors::ExportError;
use crate::layout::display::{Area, DisplayList, Paint};
use crate::models::theme::Rgb;

/// Greeked text bar: fraction of the font size, and its offset from the top of the glyph box.
const BAR_HEIGHT: f32 = 0.45;
const BAR_OFFSET: f32 = 0.35;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Turns a laid-out document into pixels at `scale` device pixels per CSS pixel.
///
/// Painting works band by band: a band is a run of device rows of the full
/// document, so an exporter only ever holds one page worth of pixels.
pub trait Rasterizer: Send + Sync {
    /// Paints device rows `[top, top + rows)` of `list`.
    fn rasterize_band(
        &self,
        list: &DisplayList,
        scale: f32,
        top: u32,
        rows: u32,
    ) -> Result<RgbImage, ExportError>;

    /// Paints the whole document at once.
    fn rasterize(&self, list: &DisplayList, scale: f32) -> Result<RgbImage, ExportError> {
        let (_, height) = device_size(list, scale)?;
        self.rasterize_band(list, scale, 0, height)
    }
}

/// Full document size in device pixels.
pub fn device_size(list: &DisplayList, scale: f32) -> Result<(u32, u32), ExportError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(ExportError::Rasterize(format!("invalid scale {scale}")));
    }
    let width = (list.width * scale).ceil().max(1.0) as u32;
    let height = (list.height * scale).ceil().max(1.0) as u32;
    Ok((width, height))
}

// ────────────────────────────────────────────────────────────────────────────
// CanvasRasterizer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CanvasRasterizer {
    font: Option<Font<'static>>,
}

impl CanvasRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the TrueType font at `path` for glyphs.
    pub fn with_font_file(path: &Path) -> Result<Self, ExportError> {
        let bytes = std::fs::read(path)?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            ExportError::Rasterize(format!("{} is not a usable TrueType font", path.display()))
        })?;
        debug!(font = %path.display(), "loaded glyph font");
        Ok(Self { font: Some(font) })
    }

    /// Falls back to greeked text when the font cannot be loaded.
    pub fn from_optional_font(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::with_font_file(path).unwrap_or_else(|e| {
                warn!("Glyph font unavailable, text will be greeked: {e}");
                Self::new()
            }),
            None => Self::new(),
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

impl Rasterizer for CanvasRasterizer {
    fn rasterize_band(
        &self,
        list: &DisplayList,
        scale: f32,
        top: u32,
        rows: u32,
    ) -> Result<RgbImage, ExportError> {
        let (width, _) = device_size(list, scale)?;
        let band = Band {
            scale,
            top: top as i32,
            css_top: top as f32 / scale,
            css_bottom: (top + rows) as f32 / scale,
        };

        let mut canvas = RgbaImage::from_pixel(width, rows, rgba(list.background));
        let mut painted = 0usize;
        for op in list.ops.iter().filter(|op| band.touches(op)) {
            self.paint(&mut canvas, op, &band);
            painted += 1;
        }
        debug!(width, top, rows, painted, "rasterized band");

        Ok(DynamicImage::ImageRgba8(canvas).to_rgb8())
    }
}

/// Maps CSS coordinates into one band of device rows.
struct Band {
    scale: f32,
    /// First device row of the band.
    top: i32,
    css_top: f32,
    css_bottom: f32,
}

impl Band {
    fn x(&self, v: f32) -> i32 {
        (v * self.scale).round() as i32
    }

    /// Rows are rounded in document space first, so bands line up exactly.
    fn y(&self, v: f32) -> i32 {
        (v * self.scale).round() as i32 - self.top
    }

    fn touches(&self, op: &Paint) -> bool {
        let (from, to) = match op {
            Paint::Rect { area, .. } | Paint::Image { area, .. } => (area.y, area.y + area.h),
            Paint::Circle { cy, radius, .. } => (cy - radius, cy + radius),
            // glyphs may overshoot their box
            Paint::Text { y, size, .. } => (y - size, y + 2.0 * size),
        };
        to + 1.0 >= self.css_top && from - 1.0 <= self.css_bottom
    }

    fn rect(&self, area: &Area) -> Option<Rect> {
        let w = (area.w * self.scale).round();
        let h = (area.h * self.scale).round();
        if w < 1.0 || h < 1.0 {
            return None;
        }
        Some(Rect::at(self.x(area.x), self.y(area.y)).of_size(w as u32, h as u32))
    }
}

impl CanvasRasterizer {
    fn paint(&self, canvas: &mut RgbaImage, op: &Paint, band: &Band) {
        match op {
            Paint::Rect { area, color } => {
                if let Some(rect) = band.rect(area) {
                    draw_filled_rect_mut(canvas, rect, rgba(*color));
                }
            }
            Paint::Circle {
                cx,
                cy,
                radius,
                color,
            } => {
                let r = (radius * band.scale).round() as i32;
                if r > 0 {
                    draw_filled_circle_mut(canvas, (band.x(*cx), band.y(*cy)), r, rgba(*color));
                }
            }
            Paint::Text {
                x,
                y,
                size,
                width,
                color,
                text,
                ..
            } => match &self.font {
                Some(font) => draw_text_mut(
                    canvas,
                    rgba(*color),
                    band.x(*x),
                    band.y(*y),
                    Scale::uniform(size * band.scale),
                    font,
                    text,
                ),
                None => {
                    let bar = Area {
                        x: *x,
                        y: y + size * BAR_OFFSET,
                        w: *width,
                        h: size * BAR_HEIGHT,
                    };
                    if let Some(rect) = band.rect(&bar) {
                        draw_filled_rect_mut(canvas, rect, rgba(*color));
                    }
                }
            },
            Paint::Image { area, photo } => {
                let w = (area.w * band.scale).round().max(1.0) as u32;
                let h = (area.h * band.scale).round().max(1.0) as u32;
                let mut fitted = imageops::resize(photo.image(), w, h, FilterType::Triangle);
                clip_to_circle(&mut fitted);
                imageops::overlay(
                    canvas,
                    &fitted,
                    i64::from(band.x(area.x)),
                    i64::from(band.y(area.y)),
                );
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn rgba(Rgb(r, g, b): Rgb) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Profile photos are shown as discs.
fn clip_to_circle(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    let cx = w as f32 / 2.0;
    let cy = h as f32 / 2.0;
    let r2 = cx.min(cy).powi(2);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy > r2 {
            px.0[3] = 0;
        }
    }
}
