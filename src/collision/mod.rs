pub mod aabb;
pub mod bounds;
pub mod broad_phase;
pub mod detection;
pub mod manifold;
pub mod quadtree;
pub mod resolver;

// Re-export key types
pub use aabb::AABB;
pub use bounds::Bounds;
pub use broad_phase::{candidate_pairs, BroadPhase, BruteForce};
pub use detection::{box_box, detect};
pub use manifold::{Manifold, DEFAULT_CORRECTION};
pub use quadtree::Quadtree;
pub use resolver::{attempt, resolve, stack, CollisionHandler, Resolution};
