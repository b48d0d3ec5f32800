use crate::math::vec3::Vec3;

/// Default fraction of penetration removed by positional correction.
pub const DEFAULT_CORRECTION: f64 = 0.7;

/// Describes one overlapping pair for one tick.
///
/// `hit` is the minimum-translation vector of `node1` relative to `node2`:
/// only the axis of least penetration is non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    pub hit: Vec3,
    /// Index of the body the manifold is relative to.
    pub node1: usize,
    /// Index of the other body.
    pub node2: usize,
    /// Fraction of penetration to correct, avoiding jitter from full de-penetration.
    pub correction: f64,
    /// Penetration depth tolerated before correction engages.
    pub slop: f64,
    resolved: bool,
}

impl Manifold {
    pub fn new(hit: Vec3, node1: usize, node2: usize) -> Self {
        Self {
            hit,
            node1,
            node2,
            correction: DEFAULT_CORRECTION,
            slop: 0.0,
            resolved: false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Flips the manifold to the second body's point of view: nodes swap and
    /// the hit vector is negated.
    pub fn alt(&mut self) -> &mut Self {
        self.hit = -self.hit;
        std::mem::swap(&mut self.node1, &mut self.node2);
        self
    }

    /// Marks the manifold resolved without any physical response.
    pub fn prevent(&mut self) -> &mut Self {
        self.resolved = true;
        self
    }

    /// Claims the manifold for resolution. Returns false if it was already
    /// resolved, so each manifold is consumed at most once.
    pub(crate) fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.resolved, true)
    }
}
