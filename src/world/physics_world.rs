use tracing::debug;

use crate::collision::{self, Bounds, CollisionHandler, Manifold, Resolution};
use crate::common::{PhysicsConfig, PhysicsError};
use crate::integration::{integrator, FixedStep, FrameReport};
use crate::math::vec3::Vec3;
use crate::objects::Body;

/// Counters for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Candidate pairs produced by the broad phase.
    pub pairs_tested: usize,
    /// Candidate pairs that actually overlapped.
    pub collisions: usize,
    /// Collisions settled by default impulse resolution rather than a handler.
    pub resolved_by_physics: usize,
}

pub struct PhysicsWorld {
    bodies: Vec<Body>,
    // Parallel to `bodies`; a body with a handler is a participant
    handlers: Vec<Option<Box<dyn CollisionHandler>>>,
    pub bounds: Option<Bounds>,
    pub gravity: Vec3,
    // Store detected collisions from the last step
    pub contacts: Vec<Manifold>,
    config: PhysicsConfig,
    clock: FixedStep,
}

impl PhysicsWorld {
    /// Creates a new, empty world. Gravity is taken from the config.
    pub fn new(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            handlers: Vec::new(),
            bounds: None,
            gravity: config.gravity,
            contacts: Vec::new(),
            clock: FixedStep::from_config(&config)?,
            config,
        })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn clock(&self) -> &FixedStep {
        &self.clock
    }

    /// Time scale and frame cap can be changed between frames.
    pub fn clock_mut(&mut self) -> &mut FixedStep {
        &mut self.clock
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Adds a body to the world and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        self.handlers.push(None);
        index
    }

    /// Adds a body that is consulted before default resolution of each of its
    /// collisions. Returns its index.
    pub fn add_participant<H>(&mut self, body: Body, handler: H) -> usize
    where
        H: CollisionHandler + 'static,
    {
        let index = self.add_body(body);
        self.handlers[index] = Some(Box::new(handler));
        index
    }

    /// Attaches (or replaces) the handler of an existing body.
    pub fn set_handler<H>(&mut self, index: usize, handler: H) -> Result<(), PhysicsError>
    where
        H: CollisionHandler + 'static,
    {
        let len = self.handlers.len();
        let slot = self
            .handlers
            .get_mut(index)
            .ok_or(PhysicsError::BodyOutOfRange { index, len })?;
        *slot = Some(Box::new(handler));
        Ok(())
    }

    /// Detaches the handler of a body, if any.
    pub fn clear_handler(&mut self, index: usize) {
        if let Some(slot) = self.handlers.get_mut(index) {
            *slot = None;
        }
    }

    pub fn has_handler(&self, index: usize) -> bool {
        matches!(self.handlers.get(index), Some(Some(_)))
    }

    /// Removes a body and its handler. Indices above `index` shift down by one,
    /// and the contacts of the last step are discarded since they refer to
    /// the old indices.
    pub fn remove_body(&mut self, index: usize) -> Result<Body, PhysicsError> {
        let len = self.bodies.len();
        if index >= len {
            return Err(PhysicsError::BodyOutOfRange { index, len });
        }
        self.handlers.remove(index);
        self.contacts.clear();
        Ok(self.bodies.remove(index))
    }

    /// Advances the world by exactly `dt` seconds.
    ///
    /// Gravity is applied to movable bodies, every body is integrated and
    /// contained, then candidate pairs are detected and resolved in broad-phase
    /// order, each resolution seeing the effects of the previous ones.
    pub fn step(&mut self, dt: f64) -> Result<StepReport, PhysicsError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(PhysicsError::InvalidTimestep(dt));
        }

        for body in &mut self.bodies {
            if !body.immovable {
                body.acc += self.gravity;
            }
            integrator::integrate(body, dt);
            if let Some(bounds) = &self.bounds {
                bounds.contain(body);
            }
        }

        self.contacts.clear();
        let pairs = collision::candidate_pairs(&self.bodies, &self.config.broad_phase)?;
        let mut report = StepReport {
            pairs_tested: pairs.len(),
            ..Default::default()
        };

        let handlers = &mut self.handlers;
        for (a, b) in pairs {
            let Some(mut manifold) = collision::detect(&self.bodies, a, b) else {
                continue;
            };
            manifold.correction = self.config.correction;
            manifold.slop = self.config.slop;
            report.collisions += 1;

            let by_physics = collision::attempt(&mut manifold, &mut self.bodies, |m, bodies| {
                match handlers.get_mut(m.node1) {
                    Some(Some(handler)) => handler.resolve(m, bodies),
                    _ => Resolution::Default,
                }
            });
            if by_physics {
                report.resolved_by_physics += 1;
            }
            self.contacts.push(manifold);
        }

        debug!(
            dt,
            bodies = self.bodies.len(),
            pairs = report.pairs_tested,
            collisions = report.collisions,
            resolved = report.resolved_by_physics,
            "world step"
        );
        Ok(report)
    }

    /// Feeds a frame's elapsed wall time to the fixed-step clock and runs as
    /// many steps as it yields.
    pub fn advance(&mut self, elapsed: f64) -> Result<FrameReport, PhysicsError> {
        let mut clock = self.clock.clone();
        let frame = clock.advance(elapsed, |dt| self.step(dt).map(|_| ()));
        self.clock = clock;
        frame
    }

    /// Render positions of every body, blended by `alpha` between the
    /// previous call and the current state.
    pub fn interpolate(&mut self, alpha: f64) -> Vec<Vec3> {
        self.bodies.iter_mut().map(|body| body.lerp(alpha)).collect()
    }
}
