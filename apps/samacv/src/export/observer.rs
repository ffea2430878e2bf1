//! Export outcome notifications.
//!
//! The pipeline reports to an `ExportObserver` once a request finishes. A
//! successful export is followed by a short celebration effect; the observer
//! only receives its parameters and decides how to show them.

use async_trait::async_trait;
use tracing::{error, info};

use crate::errors::ExportError;

/// Confetti burst shown after a successful download.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Celebration {
    pub particle_count: u32,
    /// Cone angle, in degrees.
    pub spread: f32,
    /// Vertical launch point as a fraction of the viewport height.
    pub origin_y: f32,
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin_y: 0.6,
        }
    }
}

/// Delay between the file landing on disk and the celebration.
pub const CELEBRATION_DELAY_MS: u64 = 100;

#[async_trait]
pub trait ExportObserver: Send + Sync {
    async fn on_success(&self, celebration: Celebration);

    async fn on_failure(&self, error: &ExportError);
}

/// Default observer: reports outcomes to the log.
pub struct LoggingObserver;

#[async_trait]
impl ExportObserver for LoggingObserver {
    async fn on_success(&self, celebration: Celebration) {
        info!(
            particles = celebration.particle_count,
            spread = celebration.spread,
            origin_y = celebration.origin_y,
            "CV téléchargé"
        );
    }

    async fn on_failure(&self, err: &ExportError) {
        error!("Erreur lors de la génération du PDF: {err}");
    }
}
