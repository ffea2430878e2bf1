//! The four layouts. Each file only arranges sections built by `render::sections`.

mod centered;
mod classic;
mod elegant;
mod simple;

pub use centered::Centered;
pub use classic::Classic;
pub use elegant::Elegant;
pub use simple::Simple;

/// Width of the screen templates (A, B, C), in CSS pixels.
pub(crate) const SCREEN_WIDTH: f32 = 950.0;

/// A4 at 96 dpi: 210 × 297 mm.
pub(crate) const A4_WIDTH: f32 = 794.0;
pub(crate) const A4_HEIGHT: f32 = 1123.0;
