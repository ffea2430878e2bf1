// Template rendering: RenderContext → Document.
// Rendering is a pure function of its input; the same context always yields an
// equal document. Variants differ in composition only, see `sections`.

pub mod document;
pub mod sections;
pub mod variants;

use tracing::debug;

use crate::layout::font_metrics::FontFamily;
use crate::models::{RenderContext, TemplateVariant};

pub use document::{Document, Node, Page, Role, Section};

/// Presentation-only switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rendering for export: adds room under the last page for print pagination.
    pub download: bool,
}

/// Bottom margin added in download mode, in CSS pixels.
pub const DOWNLOAD_BOTTOM_MARGIN: f32 = 40.0;

/// A layout strategy. All implementations consume the same context and must show
/// the same data in the same order.
pub trait Template: Send + Sync {
    fn variant(&self) -> TemplateVariant;

    fn font(&self) -> FontFamily {
        FontFamily::Sans
    }

    fn compose(&self, ctx: &RenderContext) -> Vec<Page>;
}

static CLASSIC: variants::Classic = variants::Classic;
static CENTERED: variants::Centered = variants::Centered;
static SIMPLE: variants::Simple = variants::Simple;
static ELEGANT: variants::Elegant = variants::Elegant;

impl TemplateVariant {
    pub fn template(self) -> &'static dyn Template {
        match self {
            TemplateVariant::A => &CLASSIC,
            TemplateVariant::B => &CENTERED,
            TemplateVariant::C => &SIMPLE,
            TemplateVariant::D => &ELEGANT,
        }
    }
}

/// Renders `ctx` with the template it selects.
pub fn render(ctx: &RenderContext, options: RenderOptions) -> Document {
    let template = ctx.variant.template();
    let pages = template.compose(ctx);
    debug!(
        variant = %ctx.variant,
        theme = %ctx.theme,
        pages = pages.len(),
        download = options.download,
        "rendered document"
    );

    Document {
        variant: template.variant(),
        theme: ctx.theme,
        font: template.font(),
        bottom_margin: if options.download {
            DOWNLOAD_BOTTOM_MARGIN
        } else {
            0.0
        },
        pages,
    }
}
