// Layout: font metrics and the box layout pass that positions a rendered
// document for painting. Pure and synchronous; the export pipeline calls it
// from inside its blocking task.

pub mod display;
pub mod font_metrics;

pub use display::{lay_out, Area, DisplayList, Paint};
pub use font_metrics::{get_metrics, FontFamily};
