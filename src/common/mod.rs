pub mod config;
pub mod error;

pub use config::{BodyConfig, BroadPhaseConfig, PhysicsConfig};
pub use error::PhysicsError;
