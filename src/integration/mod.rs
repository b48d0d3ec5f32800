pub mod clock;
pub mod integrator;

pub use clock::{FixedStep, FrameReport};
pub use integrator::integrate;
