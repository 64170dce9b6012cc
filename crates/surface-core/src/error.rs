use thiserror::Error;

/// Errors surfaced by configuration loading and figure export.
///
/// Evaluation and rendering never fail: unknown selectors fall back to the
/// zero surface and non-finite heights are propagated as-is.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown colormap '{name}' (supported: {supported})")]
    UnknownColormap { name: String, supported: String },

    #[error("unsupported output format '{0}' (expected .png or .svg)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
