use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::export::pipeline::{DEFAULT_FILE_NAME, DEFAULT_SCALE};
use crate::models::{TemplateVariant, Theme};
use crate::preview::DEFAULT_ZOOM;

const MIN_SCALE: f32 = 0.5;
const MAX_SCALE: f32 = 4.0;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub raster_scale: f32,
    pub template: TemplateVariant,
    pub theme: Theme,
    pub zoom: u16,
    pub font_path: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub photo: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let raster_scale = or("SAMACV_RASTER_SCALE", &DEFAULT_SCALE.to_string())
            .parse::<f32>()
            .context("SAMACV_RASTER_SCALE must be a number")?;
        if !(MIN_SCALE..=MAX_SCALE).contains(&raster_scale) {
            bail!(
                "SAMACV_RASTER_SCALE must be between {MIN_SCALE} and {MAX_SCALE}, \
                 got {raster_scale}"
            );
        }

        let file_name = or("SAMACV_FILE_NAME", DEFAULT_FILE_NAME);
        if file_name.trim().is_empty() || file_name.contains(['/', '\\']) {
            bail!("SAMACV_FILE_NAME must be a plain file name, got '{file_name}'");
        }

        Ok(Config {
            output_dir: PathBuf::from(or("SAMACV_OUTPUT_DIR", ".")),
            file_name,
            raster_scale,
            template: or("SAMACV_TEMPLATE", "A")
                .parse()
                .context("SAMACV_TEMPLATE must be one of A, B, C, D")?,
            theme: Theme::from_name(&or("SAMACV_THEME", Theme::default().name()))
                .context("SAMACV_THEME must name a catalog theme")?,
            zoom: or("SAMACV_ZOOM", &DEFAULT_ZOOM.to_string())
                .parse::<u16>()
                .context("SAMACV_ZOOM must be a whole percentage")?,
            font_path: get("SAMACV_FONT_PATH").map(PathBuf::from),
            input: get("SAMACV_INPUT").map(PathBuf::from),
            photo: get("SAMACV_PHOTO").map(PathBuf::from),
            rust_log: or("RUST_LOG", "info"),
        })
    }
}
