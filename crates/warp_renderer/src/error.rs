use thiserror::Error;
use warp_core::SceneError;

/// Errors that can occur while rendering or writing results.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
