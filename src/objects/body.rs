use crate::collision::AABB;
use crate::common::{BodyConfig, PhysicsError};
use crate::math::{Vec2, Vec3};

/// Non-rotating axis-aligned box body.
///
/// `pos` is the top-left corner of the box, `far()` the opposite corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    // Geometry
    pub pos: Vec3,
    pub size: Vec2,

    // Kinematics
    pub vel: Vec3,
    pub acc: Vec3,     // Accumulated during the current tick
    pub pre_acc: Vec3, // Acceleration of the previous tick, kept for Verlet

    // Physical properties
    mass: f64,
    pub immovable: bool,
    pub restitution: f64,

    /// Position the renderer interpolated from last frame. `None` restarts
    /// interpolation on the next `lerp`.
    pub pre: Option<Vec3>,
}

impl Body {
    /// Creates a body from a validated config. Restitution is clamped to [0, 1].
    pub fn new(config: BodyConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            pos: config.pos,
            size: config.size,
            vel: config.vel,
            acc: Vec3::ZERO,
            pre_acc: Vec3::ZERO,
            mass: config.mass,
            immovable: config.immovable,
            restitution: config.restitution.clamp(0.0, 1.0),
            pre: None,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), PhysicsError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(())
    }

    /// 1 / mass, or 0 for immovable (infinite mass) bodies.
    pub fn inverse_mass(&self) -> f64 {
        if self.immovable {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// The corner opposite `pos`.
    pub fn far(&self) -> Vec3 {
        Vec3::new(self.pos.x + self.size.x, self.pos.y + self.size.y, self.pos.z)
    }

    /// Moves the body so its far corner lands on `far`.
    pub fn set_far(&mut self, far: Vec3) {
        self.pos = Vec3::new(far.x - self.size.x, far.y - self.size.y, far.z);
    }

    /// Planar bounding box of the body.
    pub fn aabb(&self) -> AABB {
        AABB::new(self.pos.xy(), self.far().xy())
    }

    /// Accumulates `force / mass` into this tick's acceleration.
    pub fn apply_force(&mut self, force: Vec3) {
        self.acc += force / self.mass;
    }

    /// Changes velocity instantly by `impulse / mass`.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.vel += impulse / self.mass;
    }

    /// Interpolated render position between the previous call and now.
    ///
    /// The first call (or the first after a collision correction cleared
    /// `pre`) returns the current position unchanged.
    pub fn lerp(&mut self, alpha: f64) -> Vec3 {
        let interpolated = match self.pre {
            Some(pre) => (self.pos - pre) * alpha + pre,
            None => self.pos,
        };
        self.pre = Some(self.pos);
        interpolated
    }
}
