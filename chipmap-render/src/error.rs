use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the zoom pyramid and its cache.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build zoom pyramid from {}: {source}", path.display())]
    PyramidBuild {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot read map source {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("zoom level cache missing or stale at {}", path.display())]
    ImageCacheMissing { path: PathBuf },

    #[error("failed to write cached level {}: {reason}", path.display())]
    CacheWrite { path: PathBuf, reason: String },

    #[error("invalid image dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
