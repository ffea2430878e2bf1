//! Export pipeline: Document → layout → A4 slices → raster bands → PDF file.
//!
//! Slices are planned from the device size alone, then each one is painted as
//! its own band while the PDF is assembled, so no bitmap taller than a page is
//! ever allocated.
//!
//! # spawn_blocking pattern
//! Layout, painting and PDF encoding are CPU-bound and the file write is
//! blocking I/O, so the whole chain runs inside one `spawn_blocking` task. Its
//! `await` is the only suspension point of an export.
//!
//! # One export at a time
//! `in_flight` is raised by an RAII guard for the duration of a request. A
//! request that finds it raised is skipped, not queued.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::errors::ExportError;
use crate::export::observer::{
    Celebration, ExportObserver, LoggingObserver, CELEBRATION_DELAY_MS,
};
use crate::export::paginate::{PageGeometry, A4};
use crate::export::pdf;
use crate::export::raster::{device_size, CanvasRasterizer, Rasterizer};
use crate::layout::lay_out;
use crate::render::Document;

pub const DEFAULT_FILE_NAME: &str = "mon_cv.pdf";
pub const DEFAULT_SCALE: f32 = 2.0;

/// What a finished export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub pages: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    Completed(ExportReport),
    /// Another export was already running on this pipeline.
    Skipped,
}

pub struct ExportPipeline {
    rasterizer: Arc<dyn Rasterizer>,
    observer: Arc<dyn ExportObserver>,
    output_dir: PathBuf,
    file_name: String,
    scale: f32,
    page: PageGeometry,
    in_flight: AtomicBool,
}

impl ExportPipeline {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            rasterizer: Arc::new(CanvasRasterizer::new()),
            observer: Arc::new(LoggingObserver),
            output_dir: output_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            scale: DEFAULT_SCALE,
            page: A4,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_rasterizer(mut self, rasterizer: Arc<dyn Rasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ExportObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Exports `doc` to `<output_dir>/<file_name>`.
    ///
    /// The file is written to a temporary sibling and renamed into place, so a
    /// failed export never leaves a partial PDF behind.
    pub async fn export(&self, doc: &Document) -> Result<ExportStatus, ExportError> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            warn!("Export already in progress, request ignored");
            return Ok(ExportStatus::Skipped);
        };

        let doc = doc.clone();
        let rasterizer = Arc::clone(&self.rasterizer);
        let dir = self.output_dir.clone();
        let file_name = self.file_name.clone();
        let scale = self.scale;
        let page = self.page;

        info!(
            variant = %doc.variant,
            scale,
            path = %self.output_path().display(),
            "Export started"
        );

        let report = tokio::task::spawn_blocking(move || -> Result<ExportReport, ExportError> {
            let display = lay_out(&doc);
            let (width, height) = device_size(&display, scale)?;
            let slices = page.plan(width, height);

            let title = file_name.trim_end_matches(".pdf");
            let bytes = pdf::encode(title, width, &slices, page, |slice| {
                rasterizer.rasterize_band(&display, scale, slice.top, slice.height)
            })?;

            let path = write_atomically(&dir, &file_name, &bytes)?;
            Ok(ExportReport {
                path,
                pages: slices.len(),
                image_width: width,
                image_height: height,
                bytes: bytes.len(),
            })
        })
        .await??;

        info!(
            path = %report.path.display(),
            pages = report.pages,
            bytes = report.bytes,
            "Export complete"
        );
        Ok(ExportStatus::Completed(report))
    }

    /// Waits out the celebration delay, then notifies the observer.
    pub async fn celebrate(&self) {
        tokio::time::sleep(Duration::from_millis(CELEBRATION_DELAY_MS)).await;
        self.observer.on_success(Celebration::default()).await;
    }

    pub async fn report_failure(&self, err: &ExportError) {
        self.observer.on_failure(err).await;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Holds the in-flight flag raised until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn write_atomically(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let path = dir.join(file_name);
    tmp.persist(&path).map_err(|e| ExportError::Io(e.error))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::pdf::tests::page_count;
    use crate::layout::DisplayList;
    use crate::models::{presets, RenderContext, ResumeData, TemplateVariant, Theme};
    use crate::render::{render, RenderOptions};
    use async_trait::async_trait;
    use image::RgbImage;
    use std::sync::Mutex;

    fn document(data: ResumeData, variant: TemplateVariant) -> Document {
        let ctx = RenderContext::new(data, Theme::default(), variant);
        render(&ctx, RenderOptions { download: true })
    }

    /// Delegates to the canvas after a pause, to keep a request in flight.
    struct SlowRasterizer(CanvasRasterizer);

    impl Rasterizer for SlowRasterizer {
        fn rasterize_band(
            &self,
            list: &DisplayList,
            scale: f32,
            top: u32,
            rows: u32,
        ) -> Result<RgbImage, ExportError> {
            std::thread::sleep(Duration::from_millis(200));
            self.0.rasterize_band(list, scale, top, rows)
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize_band(
            &self,
            _list: &DisplayList,
            _scale: f32,
            _top: u32,
            _rows: u32,
        ) -> Result<RgbImage, ExportError> {
            Err(ExportError::Rasterize("canvas lost".into()))
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        celebrations: Mutex<Vec<Celebration>>,
        failures: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ExportObserver for RecordingObserver {
        async fn on_success(&self, celebration: Celebration) {
            self.celebrations.lock().unwrap().push(celebration);
        }

        async fn on_failure(&self, error: &ExportError) {
            self.failures.lock().unwrap().push(error.to_string());
        }
    }

    #[tokio::test]
    async fn test_empty_model_exports_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ExportPipeline::new(dir.path()).with_scale(1.0);

        let status = pipeline
            .export(&document(ResumeData::default(), TemplateVariant::A))
            .await
            .unwrap();

        let ExportStatus::Completed(report) = status else {
            panic!("expected a completed export");
        };
        assert_eq!(report.pages, 1);
        assert_eq!(report.path, dir.path().join(DEFAULT_FILE_NAME));
        let written = std::fs::read(&report.path).unwrap();
        assert!(written.starts_with(b"%PDF"));
        assert_eq!(written.len(), report.bytes);
    }

    #[tokio::test]
    async fn test_page_count_matches_raster_height() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ExportPipeline::new(dir.path())
            .with_scale(1.0)
            .with_file_name("cv_d.pdf");

        let status = pipeline
            .export(&document(presets::resume(), TemplateVariant::D))
            .await
            .unwrap();

        let ExportStatus::Completed(report) = status else {
            panic!("expected a completed export");
        };
        let page_px = A4.page_height_px(report.image_width);
        let expected = (f64::from(report.image_height) / page_px).ceil() as usize;
        assert_eq!(report.pages, expected.max(1));
        assert!(report.pages >= 2, "two A4 pages of content need at least two sheets");

        let written = std::fs::read(&report.path).unwrap();
        assert_eq!(page_count(&written), report.pages);
    }

    #[tokio::test]
    async fn test_tall_document_exports_at_default_scale() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ExportPipeline::new(dir.path());
        let mut data = presets::resume();
        data.experiences = data.experiences.iter().cycle().take(240).cloned().collect();

        let status = pipeline
            .export(&document(data, TemplateVariant::A))
            .await
            .unwrap();

        let ExportStatus::Completed(report) = status else {
            panic!("expected a completed export");
        };
        assert!(report.image_height > 32_768, "raster is {} rows", report.image_height);
        let page_px = A4.page_height_px(report.image_width);
        let expected = (f64::from(report.image_height) / page_px).ceil() as usize;
        assert_eq!(report.pages, expected);

        let written = std::fs::read(&report.path).unwrap();
        assert_eq!(page_count(&written), report.pages);
    }

    #[tokio::test]
    async fn test_concurrent_requests_one_runs_one_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ExportPipeline::new(dir.path())
            .with_scale(1.0)
            .with_rasterizer(Arc::new(SlowRasterizer(CanvasRasterizer::new())));
        let doc = document(presets::resume(), TemplateVariant::C);

        let (a, b) = tokio::join!(pipeline.export(&doc), pipeline.export(&doc));
        let statuses = [a.unwrap(), b.unwrap()];

        let completed = statuses
            .iter()
            .filter(|s| matches!(s, ExportStatus::Completed(_)))
            .count();
        let skipped = statuses.iter().filter(|s| **s == ExportStatus::Skipped).count();
        assert_eq!((completed, skipped), (1, 1));
        assert!(!pipeline.is_busy());
    }

    #[tokio::test]
    async fn test_failure_leaves_no_file_and_releases_flag() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline =
            ExportPipeline::new(dir.path()).with_rasterizer(Arc::new(FailingRasterizer));

        let err = pipeline
            .export(&document(presets::resume(), TemplateVariant::A))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Rasterize(_)));
        assert!(!pipeline.output_path().exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(!pipeline.is_busy());
    }

    #[tokio::test]
    async fn test_celebration_reaches_observer() {
        let observer = Arc::new(RecordingObserver::default());
        let pipeline = ExportPipeline::new(".").with_observer(observer.clone());

        pipeline.celebrate().await;
        pipeline.report_failure(&ExportError::NoSurface).await;

        assert_eq!(*observer.celebrations.lock().unwrap(), vec![Celebration::default()]);
        assert_eq!(observer.failures.lock().unwrap().len(), 1);
    }
}
