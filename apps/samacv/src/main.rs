use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use samacv::config::Config;
use samacv::export::{CanvasRasterizer, ExportPipeline, ExportStatus};
use samacv::models::{presets, ResumeData};
use samacv::photo::PhotoResource;
use samacv::preview::PreviewController;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting samacv v{}", env!("CARGO_PKG_VERSION"));

    let data = match &config.input {
        Some(path) => load_resume(path).await?,
        None => {
            info!("No SAMACV_INPUT set, using the sample résumé");
            presets::resume()
        }
    };

    let mut controller = PreviewController::new(data, config.theme, config.template);
    controller.set_zoom(config.zoom);

    if let Some(path) = &config.photo {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read photo {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        controller.set_photo(&PhotoResource::new(name, bytes))?;
        info!("Photo loaded from {}", path.display());
    }

    let rasterizer = CanvasRasterizer::from_optional_font(config.font_path.as_deref());
    let pipeline = ExportPipeline::new(&config.output_dir)
        .with_file_name(&config.file_name)
        .with_scale(config.raster_scale)
        .with_rasterizer(Arc::new(rasterizer));

    info!(
        "Rendering template {} ({}) with theme {} at {}% zoom",
        config.template,
        config.template.label(),
        config.theme,
        controller.zoom()
    );

    controller.open_export_dialog();
    match controller.export(&pipeline).await? {
        ExportStatus::Completed(report) => info!(
            "Wrote {} ({} page(s), {}x{} px raster)",
            report.path.display(),
            report.pages,
            report.image_width,
            report.image_height
        ),
        ExportStatus::Skipped => info!("Export skipped"),
    }

    Ok(())
}

async fn load_resume(path: &Path) -> Result<ResumeData> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read résumé data from {}", path.display()))?;
    let data = ResumeData::from_json(&raw)
        .with_context(|| format!("Invalid résumé data in {}", path.display()))?;
    info!(
        experiences = data.experiences.len(),
        educations = data.educations.len(),
        "Résumé data loaded from {}",
        path.display()
    );
    Ok(data)
}
