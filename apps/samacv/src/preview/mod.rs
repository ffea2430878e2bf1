pub mod controller;

pub use controller::{PreviewController, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
