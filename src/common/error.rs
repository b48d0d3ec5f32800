//! Error type shared by every fallible engine operation.

use thiserror::Error;

/// Contract violations and configuration failures.
///
/// Degenerate geometry (touching or zero-area boxes) is not an error; it simply
/// never produces a collision.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Mass must be finite and strictly positive; the inverse mass is taken.
    #[error("mass must be finite and > 0, got {0}")]
    InvalidMass(f64),
    /// Box dimensions must be finite and non-negative.
    #[error("size must be finite and non-negative, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    /// A vector or scalar field held NaN or infinity.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
    /// Timesteps and elapsed frame times must be finite and non-negative.
    #[error("invalid timestep {0}")]
    InvalidTimestep(f64),
    /// A configuration value is outside its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A quadtree cannot be sized from zero bodies.
    #[error("cannot build a spatial index over an empty body list")]
    EmptyIndex,
    /// A body index does not refer to a live body.
    #[error("body index {index} out of range ({len} bodies)")]
    BodyOutOfRange { index: usize, len: usize },
    /// JSON configuration could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
