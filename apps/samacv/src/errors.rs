use thiserror::Error;

/// Errors raised while building or loading the document model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown template variant: {0} (expected A, B, C or D)")]
    UnknownTemplate(String),

    #[error("Invalid resume data: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

/// A raw field value the formatter could not interpret.
///
/// Never surfaced to the user: the formatter always resolves it to a fallback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unrecognized date: {0:?}")]
    UnrecognizedDate(String),
}

/// The externally supplied photo could not be turned into a display handle.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Photo '{name}' could not be decoded: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// Failures of the export pipeline. None of them alter the preview state.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No rendered surface is bound for export")]
    NoSurface,

    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("PDF encoding failed: {0}")]
    Encode(String),

    #[error("I/O error while writing export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ExportError {
    fn from(e: tokio::task::JoinError) -> Self {
        ExportError::Task(e.to_string())
    }
}
