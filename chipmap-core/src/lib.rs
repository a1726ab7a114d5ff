pub mod console;
pub mod coords;
pub mod error;
pub mod focus;
pub mod input;
pub mod menu;
pub mod navigation;
pub mod projector;
pub mod zoom;

// Re-export primary types for convenience.
pub use console::{Console, SensorReadings, VOLUME_MAX};
pub use error::CoreError;
pub use focus::{FocusRect, VIEWPORT_SIZE};
pub use coords::{GeoBounds, GeoPoint, LatCardinal, LonCardinal, PixelPoint};
pub use input::{AudioCue, CueSink, InputEvent};
pub use menu::{Menu, MenuState, Tab};
pub use navigation::{InteractionMode, NavigationState, Target, RETICLE_STEP_DEG};
pub use projector::{GeoProjector, CHROME_OFFSET_PX};
pub use zoom::{ZoomControl, ZoomCursor};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
