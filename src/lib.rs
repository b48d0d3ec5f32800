//! Fixed-timestep collision and physics engine for axis-aligned box bodies.
//!
//! A tick integrates every [`Body`] with velocity Verlet, keeps bodies inside
//! optional world [`Bounds`], finds candidate pairs with a brute-force or
//! quadtree broad phase, builds [`Manifold`]s with the box-box detector and
//! resolves them with impulses, unless a participant's [`CollisionHandler`]
//! claims the collision first.

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use collision::{
    attempt, box_box, candidate_pairs, detect, resolve, stack, Bounds, BroadPhase, BruteForce,
    CollisionHandler, Manifold, Quadtree, Resolution, AABB,
};
pub use common::{BodyConfig, BroadPhaseConfig, PhysicsConfig, PhysicsError};
pub use integration::{integrate, FixedStep, FrameReport};
pub use math::{Vec2, Vec3};
pub use objects::Body;
pub use world::{PhysicsWorld, StepReport};
