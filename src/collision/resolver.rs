//! Collision response: impulse resolution with positional correction, the
//! one-sided `stack` mode, and the participant override hook.

use tracing::{debug, trace, warn};

use super::manifold::Manifold;
use crate::objects::{body_pair_mut, Body};

/// A participant's answer when consulted about a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Leave the manifold to the default impulse resolution.
    #[default]
    Default,
    /// Consume the manifold with no physical response (pickups, damage).
    Prevent,
    /// Push this participant out of the other one and stop it on the approach
    /// axis (standing on platforms).
    Stack,
}

/// Custom per-collision behavior of a participant.
pub trait CollisionHandler {
    /// Called with the manifold from this participant's point of view:
    /// `manifold.node1` is the participant itself.
    fn resolve(&mut self, manifold: &Manifold, bodies: &[Body]) -> Resolution;
}

impl<F> CollisionHandler for F
where
    F: FnMut(&Manifold, &[Body]) -> Resolution,
{
    fn resolve(&mut self, manifold: &Manifold, bodies: &[Body]) -> Resolution {
        self(manifold, bodies)
    }
}

/// Applies impulse-based response and positional correction.
/// Returns true if either body was changed.
pub fn resolve(manifold: &mut Manifold, bodies: &mut [Body]) -> bool {
    if !manifold.claim() {
        return false;
    }

    let (body_a, body_b) = match body_pair_mut(bodies, manifold.node1, manifold.node2) {
        Ok(pair) => pair,
        Err(err) => {
            warn!(?manifold, %err, "dropping malformed manifold");
            return false;
        }
    };

    let magnitude = manifold.hit.magnitude();
    if magnitude == 0.0 || !magnitude.is_finite() {
        debug!(?manifold, "skipping manifold with degenerate hit vector");
        return false;
    }
    let normal = manifold.hit / magnitude;

    // Relative velocity along the normal; positive means already separating
    let normal_vel = (body_b.vel - body_a.vel).dot(normal);
    if normal_vel > 0.0 {
        return false;
    }

    let inv_mass_a = body_a.inverse_mass();
    let inv_mass_b = body_b.inverse_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;
    if total_inv_mass == 0.0 {
        return false;
    }

    let e = body_a.restitution.min(body_b.restitution);
    let j = -(1.0 + e) * normal_vel / total_inv_mass;

    let impulse = normal * j;
    body_a.vel -= impulse * inv_mass_a;
    body_b.vel += impulse * inv_mass_b;

    let correction =
        normal * ((magnitude - manifold.slop).max(0.0) / total_inv_mass * manifold.correction);
    body_a.pos -= correction * inv_mass_a;
    body_b.pos += correction * inv_mass_b;

    // Positions jumped; restart render interpolation
    body_a.pre = None;
    body_b.pre = None;

    trace!(
        node1 = manifold.node1,
        node2 = manifold.node2,
        j,
        normal_vel,
        "resolved collision"
    );
    true
}

/// Resolves purely by moving `node1` out along the hit vector. On each axis
/// where `node1` was moving into the collision, its velocity is set to that
/// of `node2`. Returns true if the body was changed.
pub fn stack(manifold: &mut Manifold, bodies: &mut [Body]) -> bool {
    if !manifold.claim() {
        return false;
    }

    let (body_a, body_b) = match body_pair_mut(bodies, manifold.node1, manifold.node2) {
        Ok(pair) => pair,
        Err(err) => {
            warn!(?manifold, %err, "dropping malformed manifold");
            return false;
        }
    };

    let hit = manifold.hit;
    body_a.pos -= hit;

    if body_a.vel.x * hit.x > 0.0 {
        body_a.vel.x = body_b.vel.x;
    }
    if body_a.vel.y * hit.y > 0.0 {
        body_a.vel.y = body_b.vel.y;
    }

    body_a.pre = Some(body_a.pos);
    true
}

fn apply(resolution: Resolution, manifold: &mut Manifold, bodies: &mut [Body]) {
    match resolution {
        Resolution::Default => {}
        Resolution::Prevent => {
            manifold.prevent();
        }
        Resolution::Stack => {
            stack(manifold, bodies);
        }
    }
}

/// Gives both participants first refusal, then falls back to [`resolve`].
///
/// `consult` is called once per participant with the manifold seen from that
/// participant (the second one receives it flipped with [`Manifold::alt`]).
/// Participants are notified even if the manifold is already resolved, but
/// their answer then has no effect. The manifold is returned to its original
/// orientation before default resolution runs.
///
/// Returns true if default resolution changed either body.
pub fn attempt<F>(manifold: &mut Manifold, bodies: &mut [Body], mut consult: F) -> bool
where
    F: FnMut(&Manifold, &[Body]) -> Resolution,
{
    let first = consult(manifold, bodies);
    apply(first, manifold, bodies);

    manifold.alt();
    let second = consult(manifold, bodies);
    apply(second, manifold, bodies);
    manifold.alt();

    resolve(manifold, bodies)
}
