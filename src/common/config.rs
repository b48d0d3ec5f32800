//! Typed configuration for the engine, its broad phase and individual bodies.
//!
//! All structs deserialize from JSON with per-field defaults, so a config file
//! only has to name the values it overrides.

use serde::{Deserialize, Serialize};

use super::error::PhysicsError;
use crate::math::{Vec2, Vec3};

/// Broad-phase strategy selection and quadtree limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadPhaseConfig {
    /// Body count at which the quadtree replaces brute force.
    pub quadtree_threshold: usize,
    /// Proxies a quadtree cell holds before splitting.
    pub max_nodes: usize,
    /// Deepest level a quadtree cell may split to.
    pub max_depth: usize,
}

impl Default for BroadPhaseConfig {
    fn default() -> Self {
        BroadPhaseConfig {
            quadtree_threshold: 200,
            max_nodes: 10,
            max_depth: 10,
        }
    }
}

impl BroadPhaseConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.max_nodes == 0 {
            return Err(PhysicsError::InvalidConfig(
                "broad_phase.max_nodes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// World-wide simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed simulation step in seconds.
    pub timestep: f64,
    /// Largest frame delta fed to the accumulator; longer stalls are dropped.
    pub max_frame_delta: f64,
    /// Slow-motion factor applied to every fixed step.
    pub time_scale: f64,
    /// Acceleration applied to every movable body each step.
    pub gravity: Vec3,
    /// Fraction of penetration removed per resolution.
    pub correction: f64,
    /// Penetration tolerated before positional correction engages.
    pub slop: f64,
    pub broad_phase: BroadPhaseConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            timestep: 1.0 / 60.0,
            max_frame_delta: 1.0 / 15.0,
            time_scale: 1.0,
            gravity: Vec3::ZERO,
            correction: 0.7,
            slop: 0.0,
            broad_phase: BroadPhaseConfig::default(),
        }
    }
}

impl PhysicsConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(PhysicsError::InvalidTimestep(self.timestep));
        }
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "max_frame_delta must be > 0, got {}",
                self.max_frame_delta
            )));
        }
        if !(self.time_scale.is_finite() && self.time_scale >= 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "time_scale must be >= 0, got {}",
                self.time_scale
            )));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFinite("gravity"));
        }
        if !(0.0..=1.0).contains(&self.correction) {
            return Err(PhysicsError::InvalidConfig(format!(
                "correction must be within [0, 1], got {}",
                self.correction
            )));
        }
        if !(self.slop.is_finite() && self.slop >= 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "slop must be >= 0, got {}",
                self.slop
            )));
        }
        self.broad_phase.validate()
    }
}

/// Data description of a body. Entity archetypes are plain `BodyConfig`
/// values built with the `with_*` methods and turned into bodies by
/// [`crate::Body::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub pos: Vec3,
    pub size: Vec2,
    pub vel: Vec3,
    pub mass: f64,
    pub immovable: bool,
    pub restitution: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        BodyConfig {
            pos: Vec3::ZERO,
            size: Vec2::ZERO,
            vel: Vec3::ZERO,
            mass: 1.0,
            immovable: false,
            restitution: 0.0,
        }
    }
}

impl BodyConfig {
    /// An axis-aligned box with its top-left corner at `(x, y)`.
    pub fn boxed(x: f64, y: f64, width: f64, height: f64) -> Self {
        BodyConfig {
            pos: Vec3::new(x, y, 0.0),
            size: Vec2::new(width, height),
            ..Default::default()
        }
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_vel(mut self, vel: Vec3) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn immovable(mut self) -> Self {
        self.immovable = true;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::InvalidMass(self.mass));
        }
        if !self.size.is_finite() || self.size.x < 0.0 || self.size.y < 0.0 {
            return Err(PhysicsError::InvalidSize {
                width: self.size.x,
                height: self.size.y,
            });
        }
        if !self.pos.is_finite() {
            return Err(PhysicsError::NonFinite("pos"));
        }
        if !self.vel.is_finite() {
            return Err(PhysicsError::NonFinite("vel"));
        }
        if !self.restitution.is_finite() {
            return Err(PhysicsError::NonFinite("restitution"));
        }
        Ok(())
    }
}
