//! Splits one tall raster into A4 pages.
//!
//! The raster width is mapped onto the page width, so one millimetre is
//! `width_px / 210` pixels and a page holds `297 * width_px / 210` pixel rows.
//! Slices are contiguous and cover the whole image exactly once; the last page
//! may end with blank paper.

/// Physical page, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
}

pub const A4: PageGeometry = PageGeometry {
    width_mm: 210.0,
    height_mm: 297.0,
};

impl Default for PageGeometry {
    fn default() -> Self {
        A4
    }
}

impl PageGeometry {
    /// Pixel rows that fit on one page when the raster is `width_px` wide.
    pub fn page_height_px(&self, width_px: u32) -> f64 {
        f64::from(self.height_mm) * f64::from(width_px) / f64::from(self.width_mm)
    }

    /// Height of `rows` pixel rows once scaled to the page width, in millimetres.
    pub fn rows_to_mm(&self, rows: u32, width_px: u32) -> f32 {
        if width_px == 0 {
            return 0.0;
        }
        (f64::from(rows) * f64::from(self.width_mm) / f64::from(width_px)) as f32
    }

    /// DPI at which a `width_px` wide image spans exactly the page width.
    pub fn dpi_for(&self, width_px: u32) -> f32 {
        (f64::from(width_px) * 25.4 / f64::from(self.width_mm)) as f32
    }

    /// Cuts `height_px` rows into per-page slices.
    pub fn plan(&self, width_px: u32, height_px: u32) -> Vec<Slice> {
        let page = self.page_height_px(width_px);
        if height_px == 0 || page <= 0.0 {
            return vec![Slice { top: 0, height: 0 }];
        }

        let count = (f64::from(height_px) / page).ceil().max(1.0) as u32;
        (0..count)
            .map(|k| {
                let top = (f64::from(k) * page).round() as u32;
                let bottom = ((f64::from(k + 1) * page).round() as u32).min(height_px);
                Slice {
                    top: top.min(height_px),
                    height: bottom.saturating_sub(top),
                }
            })
            .collect()
    }
}

/// Pixel rows `[top, top + height)` printed on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub top: u32,
    pub height: u32,
}

impl Slice {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}
