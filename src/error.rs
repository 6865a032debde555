//! Error types for icon rendering and export.

use thiserror::Error;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while exporting a rendered icon.
///
/// Rendering itself is infallible: the canvas is owned memory and every
/// draw command clips to it. Failures only arise at the filesystem and
/// codec boundary.
#[derive(Debug, Error)]
pub enum IconError {
    /// Failed to create or write an output file (permissions, missing
    /// directory, disk full).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image codec rejected or failed to encode the canvas.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
