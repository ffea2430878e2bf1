//! samacv: résumé rendering and PDF export.
//!
//! `models` holds the résumé data and themes, `render` turns a context into a
//! page document through one of four templates, `layout` positions it, and
//! `export` paints, paginates and writes the PDF. `preview::PreviewController`
//! ties them together behind the editor's entry points.

pub mod config;
pub mod errors;
pub mod export;
pub mod format;
pub mod layout;
pub mod models;
pub mod photo;
pub mod preview;
pub mod render;
