// File: crates/chartlet-core/src/error.rs
// Summary: Error type shared across the rendering seams.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The backend could not produce a drawing surface.
    #[error("failed to create drawing surface: {0}")]
    Surface(String),
    /// The backend could not encode or write the rendered output.
    #[error("failed to encode output: {0}")]
    Encode(String),
}
