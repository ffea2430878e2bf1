// PDF export: cut a rendered document into A4 pages, paint each page band and write the file.

pub mod observer;
pub mod paginate;
pub mod pdf;
pub mod pipeline;
pub mod raster;

pub use observer::{Celebration, ExportObserver, LoggingObserver};
pub use paginate::{PageGeometry, Slice, A4};
pub use pipeline::{ExportPipeline, ExportReport, ExportStatus, DEFAULT_FILE_NAME};
pub use raster::{device_size, CanvasRasterizer, Rasterizer};
