//! The single owner of editor state.
//!
//! Every entry point replaces one value wholesale and re-renders synchronously,
//! so the preview document always reflects the current context. While the
//! export dialog is open, a second document rendered in download mode is kept
//! as the export surface.

use tracing::debug;

use crate::errors::{ExportError, PhotoError};
use crate::export::{ExportPipeline, ExportStatus};
use crate::models::resume::{
    Education, Experience, Hobby, Language, PersonalDetails, ResumeData, Skill,
};
use crate::models::{presets, RenderContext, TemplateVariant, Theme};
use crate::photo::{PhotoRegistry, PhotoResource};
use crate::render::{render, Document, RenderOptions};

pub const DEFAULT_ZOOM: u16 = 163;
pub const MIN_ZOOM: u16 = 50;
pub const MAX_ZOOM: u16 = 200;

pub struct PreviewController {
    ctx: RenderContext,
    zoom: u16,
    photos: PhotoRegistry,
    preview: Document,
    export_surface: Option<Document>,
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new(presets::resume(), Theme::default(), TemplateVariant::default())
    }
}

impl PreviewController {
    pub fn new(data: ResumeData, theme: Theme, variant: TemplateVariant) -> Self {
        let ctx = RenderContext::new(data, theme, variant);
        let preview = render(&ctx, RenderOptions::default());
        Self {
            ctx,
            zoom: DEFAULT_ZOOM,
            photos: PhotoRegistry::new(),
            preview,
            export_surface: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn preview(&self) -> &Document {
        &self.preview
    }

    pub fn export_surface(&self) -> Option<&Document> {
        self.export_surface.as_ref()
    }

    pub fn is_export_dialog_open(&self) -> bool {
        self.export_surface.is_some()
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    /// Transform applied to the preview pane.
    pub fn preview_scale(&self) -> f32 {
        f32::from(self.zoom) / 200.0
    }

    pub fn photo_registry(&self) -> &PhotoRegistry {
        &self.photos
    }

    // ── Model updates ───────────────────────────────────────────────────────

    pub fn set_personal_details(&mut self, details: PersonalDetails) {
        self.ctx.data.personal_details = details;
        self.refresh();
    }

    pub fn set_experiences(&mut self, experiences: Vec<Experience>) {
        self.ctx.data.experiences = experiences;
        self.refresh();
    }

    pub fn set_educations(&mut self, educations: Vec<Education>) {
        self.ctx.data.educations = educations;
        self.refresh();
    }

    pub fn set_languages(&mut self, languages: Vec<Language>) {
        self.ctx.data.languages = languages;
        self.refresh();
    }

    pub fn set_skills(&mut self, skills: Vec<Skill>) {
        self.ctx.data.skills = skills;
        self.refresh();
    }

    pub fn set_hobbies(&mut self, hobbies: Vec<Hobby>) {
        self.ctx.data.hobbies = hobbies;
        self.refresh();
    }

    pub fn set_resume(&mut self, data: ResumeData) {
        self.ctx.data = data;
        self.refresh();
    }

    /// Decodes and shows a new photo. The previous one is released; on a decode
    /// error nothing changes.
    pub fn set_photo(&mut self, resource: &PhotoResource) -> Result<(), PhotoError> {
        let handle = self.photos.acquire(resource)?;
        self.ctx.data.personal_details.photo_url = resource.name.clone();
        self.ctx.photo = Some(handle);
        self.refresh();
        Ok(())
    }

    pub fn clear_photo(&mut self) {
        self.ctx.photo = None;
        self.ctx.data.personal_details.photo_url.clear();
        self.refresh();
    }

    pub fn select_template(&mut self, variant: TemplateVariant) {
        self.ctx.variant = variant;
        self.refresh();
    }

    pub fn select_theme(&mut self, theme: Theme) {
        self.ctx.theme = theme;
        self.refresh();
    }

    /// Clamped to 50–200 %.
    pub fn set_zoom(&mut self, zoom: u16) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    // ── Resets ──────────────────────────────────────────────────────────────

    pub fn reset_personal_details(&mut self) {
        self.ctx.photo = None;
        self.set_personal_details(PersonalDetails::default());
    }

    pub fn reset_experiences(&mut self) {
        self.set_experiences(Vec::new());
    }

    pub fn reset_educations(&mut self) {
        self.set_educations(Vec::new());
    }

    pub fn reset_languages(&mut self) {
        self.set_languages(Vec::new());
    }

    pub fn reset_skills(&mut self) {
        self.set_skills(Vec::new());
    }

    pub fn reset_hobbies(&mut self) {
        self.set_hobbies(Vec::new());
    }

    /// Brings back the sample résumé. The photo is kept.
    pub fn restore_presets(&mut self) {
        let photo_url = std::mem::take(&mut self.ctx.data.personal_details.photo_url);
        self.ctx.data = presets::resume();
        if self.ctx.photo.is_some() {
            self.ctx.data.personal_details.photo_url = photo_url;
        }
        self.refresh();
    }

    // ── Export ──────────────────────────────────────────────────────────────

    pub fn open_export_dialog(&mut self) {
        self.export_surface = Some(render(&self.ctx, RenderOptions { download: true }));
        debug!("export dialog opened");
    }

    pub fn close_export_dialog(&mut self) {
        self.export_surface = None;
        debug!("export dialog closed");
    }

    /// Exports the download surface. On success the dialog closes and the
    /// pipeline's observer is celebrated; on failure the observer is told and
    /// the controller is left as it was.
    ///
    /// This borrows the controller for the whole export. Callers that keep
    /// editing while the PDF is produced use `begin_export` and
    /// `finish_export` around `ExportPipeline::export` instead.
    pub async fn export(&mut self, pipeline: &ExportPipeline) -> Result<ExportStatus, ExportError> {
        let result = match self.begin_export() {
            Ok(surface) => pipeline.export(&surface).await,
            Err(err) => Err(err),
        };
        self.finish_export(pipeline, result).await
    }

    /// Snapshot of the download surface to hand to the pipeline.
    pub fn begin_export(&self) -> Result<Document, ExportError> {
        self.export_surface.clone().ok_or(ExportError::NoSurface)
    }

    /// Applies the outcome of an export started with `begin_export`.
    pub async fn finish_export(
        &mut self,
        pipeline: &ExportPipeline,
        result: Result<ExportStatus, ExportError>,
    ) -> Result<ExportStatus, ExportError> {
        match result {
            Ok(ExportStatus::Completed(report)) => {
                self.close_export_dialog();
                pipeline.celebrate().await;
                Ok(ExportStatus::Completed(report))
            }
            Ok(ExportStatus::Skipped) => Ok(ExportStatus::Skipped),
            Err(err) => {
                pipeline.report_failure(&err).await;
                Err(err)
            }
        }
    }

    fn refresh(&mut self) {
        self.preview = render(&self.ctx, RenderOptions::default());
        if self.export_surface.is_some() {
            self.export_surface = Some(render(&self.ctx, RenderOptions { download: true }));
        }
        debug!(
            variant = %self.ctx.variant,
            theme = %self.ctx.theme,
            "preview refreshed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Celebration, ExportObserver};
    use crate::photo::tests::png_resource;
    use crate::render::Role;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ExportObserver for Recorder {
        async fn on_success(&self, celebration: Celebration) {
            self.events
                .lock()
                .unwrap()
                .push(format!("success {}", celebration.particle_count));
        }

        async fn on_failure(&self, error: &ExportError) {
            self.events.lock().unwrap().push(format!("failure {error}"));
        }
    }

    #[test]
    fn test_starts_with_presets() {
        let c = PreviewController::default();
        assert_eq!(c.zoom(), DEFAULT_ZOOM);
        assert_eq!(c.context().variant, TemplateVariant::A);
        assert_eq!(c.preview().texts(Role::FullName), vec![presets::personal_details().full_name]);
    }

    #[test]
    fn test_default_controller_has_no_photo() {
        let c = PreviewController::default();
        assert!(c.context().photo.is_none());
        assert!(c.context().data.personal_details.photo_url.is_empty());
        assert!(!c.preview().has(Role::Photo));
        assert_eq!(c.photo_registry().live_handles(), 0);
    }

    #[test]
    fn test_updates_rerender_immediately() {
        let mut c = PreviewController::default();
        c.set_skills(vec![Skill { name: "Rust".into() }]);
        assert_eq!(c.preview().texts(Role::Skill), vec!["Rust"]);

        c.select_template(TemplateVariant::D);
        assert_eq!(c.preview().variant, TemplateVariant::D);
        assert_eq!(c.preview().pages.len(), 2);

        let dark = Theme::from_name("dark").unwrap();
        c.select_theme(dark);
        assert_eq!(c.preview().theme, dark);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut c = PreviewController::default();
        c.set_zoom(10);
        assert_eq!(c.zoom(), MIN_ZOOM);
        c.set_zoom(500);
        assert_eq!(c.zoom(), MAX_ZOOM);
        c.set_zoom(100);
        assert!((c.preview_scale() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_repeated_photo_selection_keeps_one_live_handle() {
        let mut c = PreviewController::default();
        for size in [8, 16, 24, 32, 40] {
            c.set_photo(&png_resource(size, size)).unwrap();
            assert_eq!(c.photo_registry().live_handles(), 1);
        }
        c.open_export_dialog();
        c.set_photo(&png_resource(12, 12)).unwrap();
        assert_eq!(c.photo_registry().live_handles(), 1);

        c.clear_photo();
        assert_eq!(c.photo_registry().live_handles(), 0);
        assert!(!c.preview().has(Role::Photo));
    }

    #[test]
    fn test_bad_photo_leaves_state_untouched() {
        let mut c = PreviewController::default();
        c.set_photo(&png_resource(8, 8)).unwrap();
        let before = c.preview().clone();

        let broken = PhotoResource::new("cassée.png", Bytes::from_static(b"\x89PNG garbage"));
        assert!(c.set_photo(&broken).is_err());

        assert_eq!(c.preview(), &before);
        assert_eq!(c.context().data.personal_details.photo_url, "profile.png");
        assert_eq!(c.photo_registry().live_handles(), 1);
    }

    #[test]
    fn test_resets_and_restore() {
        let mut c = PreviewController::default();
        c.reset_experiences();
        c.reset_skills();
        assert_eq!(c.preview().count(Role::Experience), 0);
        assert_eq!(c.preview().count(Role::Skill), 0);

        c.reset_personal_details();
        assert_eq!(c.context().data.personal_details, PersonalDetails::default());

        c.restore_presets();
        assert_eq!(c.context().data, presets::resume());
    }

    #[test]
    fn test_export_dialog_binds_download_surface() {
        let mut c = PreviewController::default();
        assert!(c.export_surface().is_none());

        c.open_export_dialog();
        let surface = c.export_surface().unwrap();
        assert!(surface.bottom_margin > 0.0);
        assert_eq!(surface.pages, c.preview().pages);

        c.set_hobbies(Vec::new());
        assert_eq!(c.export_surface().unwrap().count(Role::Hobby), 0);

        c.close_export_dialog();
        assert!(!c.is_export_dialog_open());
    }

    #[tokio::test]
    async fn test_export_without_dialog_is_no_surface() {
        let recorder = Arc::new(Recorder::default());
        let pipeline = ExportPipeline::new(".").with_observer(recorder.clone());
        let mut c = PreviewController::default();

        let err = c.export(&pipeline).await.unwrap_err();
        assert!(matches!(err, ExportError::NoSurface));
        assert_eq!(recorder.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_successful_export_closes_dialog_and_celebrates() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Arc::new(Recorder::default());
        let pipeline = ExportPipeline::new(dir.path())
            .with_scale(1.0)
            .with_observer(recorder.clone());
        let mut c = PreviewController::default();
        c.set_photo(&png_resource(20, 20)).unwrap();
        c.open_export_dialog();

        let status = c.export(&pipeline).await.unwrap();

        assert!(matches!(status, ExportStatus::Completed(_)));
        assert!(!c.is_export_dialog_open());
        assert!(dir.path().join("mon_cv.pdf").exists());
        assert_eq!(*recorder.events.lock().unwrap(), vec!["success 100".to_string()]);
    }

    #[tokio::test]
    async fn test_editing_continues_while_export_runs() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Arc::new(Recorder::default());
        let pipeline = ExportPipeline::new(dir.path())
            .with_scale(1.0)
            .with_observer(recorder.clone());
        let mut c = PreviewController::default();
        c.open_export_dialog();

        let surface = c.begin_export().unwrap();
        let (result, ()) = tokio::join!(pipeline.export(&surface), async {
            c.close_export_dialog();
            c.set_skills(vec![Skill { name: "Tokio".into() }]);
        });

        assert!(!c.is_export_dialog_open());
        assert_eq!(c.preview().texts(Role::Skill), vec!["Tokio"]);
        let status = c.finish_export(&pipeline, result).await.unwrap();
        assert!(matches!(status, ExportStatus::Completed(_)));
        assert!(dir.path().join("mon_cv.pdf").exists());
        assert_eq!(*recorder.events.lock().unwrap(), vec!["success 100".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_export_is_reported_once_by_the_observer() {
        let recorder = Arc::new(Recorder::default());
        let pipeline = ExportPipeline::new(".").with_observer(recorder.clone());
        let mut c = PreviewController::default();
        c.open_export_dialog();

        let err = c
            .finish_export(&pipeline, Err(ExportError::Encode("flux tronqué".into())))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Encode(_)));
        assert!(c.is_export_dialog_open());
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec!["failure PDF encoding failed: flux tronqué".to_string()]
        );
    }

    #[test]
    fn test_begin_export_without_dialog_is_no_surface() {
        let c = PreviewController::default();
        assert!(matches!(c.begin_export(), Err(ExportError::NoSurface)));
    }
}
