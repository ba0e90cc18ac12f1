// File: crates/figure-core/src/error.rs
// Summary: Render error type for surface allocation, PNG encoding, and file output.

/// Errors raised while rasterizing or writing a figure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to allocate {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
