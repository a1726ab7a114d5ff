use thiserror::Error;

/// Errors originating from the navigation core.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid bounds: {axis} span [{min}, {max}] must be finite and increasing")]
    InvalidBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}
