pub mod cache;
pub mod error;
pub mod overlay;
pub mod pyramid;
pub mod view;

pub use cache::{LevelCache, SourceKey};
pub use error::RenderError;
pub use overlay::{MapOverlay, Marker, Reticle};
pub use pyramid::{level_size, ZoomLevel, ZoomPyramid, LEVEL_COUNT};
pub use view::MapView;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
