// Implements a region quadtree for broadphase collision detection.

use tracing::{debug, trace};

use super::aabb::AABB;
use super::broad_phase::BroadPhase;
use crate::common::{BroadPhaseConfig, PhysicsError};
use crate::math::vec2::Vec2;
use crate::objects::Body;

/// A body's index and its box at the time the tree was built.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Proxy {
    index: usize,
    aabb: AABB,
}

/// A quadtree cell. Bodies live in the deepest cell that fully contains them;
/// a body straddling a split line stays in the parent.
#[derive(Debug, Clone)]
pub struct Quadtree {
    region: AABB,
    depth: usize,
    max_nodes: usize,
    max_depth: usize,

    // Kept apart so immovable bodies are never paired with each other
    movable: Vec<Proxy>,
    immovable: Vec<Proxy>,

    // Empty until split, then exactly four quadrants
    quads: Vec<Quadtree>,
}

impl Quadtree {
    /// Creates an empty root covering `region`.
    pub fn new(region: AABB, max_nodes: usize, max_depth: usize) -> Self {
        Self::cell(region, 0, max_nodes, max_depth)
    }

    fn cell(region: AABB, depth: usize, max_nodes: usize, max_depth: usize) -> Self {
        Quadtree {
            region,
            depth,
            max_nodes,
            max_depth,
            movable: Vec::new(),
            immovable: Vec::new(),
            quads: Vec::new(),
        }
    }

    /// Builds a tree over all `bodies`.
    ///
    /// The root region is sized from the second most extreme edge on each side,
    /// so one far-flung body cannot inflate the tree. Bodies outside the root
    /// region are kept in the root and still paired with everything.
    pub fn from_bodies(bodies: &[Body], config: &BroadPhaseConfig) -> Result<Self, PhysicsError> {
        if bodies.is_empty() {
            return Err(PhysicsError::EmptyIndex);
        }

        // [first, second] most extreme value seen per side
        let mut left = [f64::INFINITY; 2];
        let mut top = [f64::INFINITY; 2];
        let mut right = [f64::NEG_INFINITY; 2];
        let mut bottom = [f64::NEG_INFINITY; 2];

        for body in bodies {
            if !body.pos.is_finite() || !body.size.is_finite() {
                return Err(PhysicsError::NonFinite("body geometry"));
            }
            let far = body.far();
            push_extreme(&mut left, body.pos.x, |v, e| v < e);
            push_extreme(&mut top, body.pos.y, |v, e| v < e);
            push_extreme(&mut right, far.x, |v, e| v > e);
            push_extreme(&mut bottom, far.y, |v, e| v > e);
        }

        let region = AABB::new(
            Vec2::new(second_or_first(left), second_or_first(top)),
            Vec2::new(second_or_first(right), second_or_first(bottom)),
        );
        debug!(bodies = bodies.len(), ?region, "building quadtree");

        let mut tree = Quadtree::new(region, config.max_nodes, config.max_depth);
        for (index, body) in bodies.iter().enumerate() {
            tree.insert(index, body);
        }
        Ok(tree)
    }

    pub fn region(&self) -> AABB {
        self.region
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_split(&self) -> bool {
        !self.quads.is_empty()
    }

    /// Number of bodies stored in this cell and all its descendants.
    pub fn len(&self) -> usize {
        self.movable.len()
            + self.immovable.len()
            + self.quads.iter().map(Quadtree::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts body `index` using its current box.
    pub fn insert(&mut self, index: usize, body: &Body) {
        self.add(
            Proxy {
                index,
                aabb: body.aabb(),
            },
            body.immovable,
        );
    }

    fn add(&mut self, proxy: Proxy, immovable: bool) {
        for quad in &mut self.quads {
            if quad.region.contains(&proxy.aabb) {
                quad.add(proxy, immovable);
                return;
            }
        }

        if immovable {
            self.immovable.push(proxy);
        } else {
            self.movable.push(proxy);
        }

        if self.movable.len() + self.immovable.len() > self.max_nodes
            && self.quads.is_empty()
            && self.depth < self.max_depth
        {
            self.split();
        }
    }

    /// Creates the four quadrants and pushes every proxy that fits down into them.
    fn split(&mut self) {
        trace!(depth = self.depth, region = ?self.region, "splitting quadtree cell");
        self.quads = self
            .region
            .quadrants()
            .into_iter()
            .map(|region| Quadtree::cell(region, self.depth + 1, self.max_nodes, self.max_depth))
            .collect();

        for proxy in std::mem::take(&mut self.movable) {
            self.add(proxy, false);
        }
        for proxy in std::mem::take(&mut self.immovable) {
            self.add(proxy, true);
        }
    }

    fn collect_pairs(&self, out: &mut Vec<(usize, usize)>) {
        for (i, proxy) in self.movable.iter().enumerate() {
            // Later movables in this cell, then all immovables in this cell
            for other in &self.movable[i + 1..] {
                out.push((proxy.index, other.index));
            }
            for other in &self.immovable {
                out.push((proxy.index, other.index));
            }
            self.rain(proxy.index, false, out);
        }

        for proxy in &self.immovable {
            self.rain(proxy.index, true, out);
        }

        for quad in &self.quads {
            quad.collect_pairs(out);
        }
    }

    /// Pairs `index` with every descendant of this cell. Immovable bodies only
    /// pair with movable descendants.
    fn rain(&self, index: usize, immovable: bool, out: &mut Vec<(usize, usize)>) {
        for quad in &self.quads {
            out.extend(quad.movable.iter().map(|other| (index, other.index)));
            if !immovable {
                out.extend(quad.immovable.iter().map(|other| (index, other.index)));
            }
            quad.rain(index, immovable, out);
        }
    }
}

impl BroadPhase for Quadtree {
    fn pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        self.collect_pairs(&mut pairs);
        pairs
    }
}

/// Tracks the most and second most extreme value under `beyond`.
fn push_extreme(extremes: &mut [f64; 2], value: f64, beyond: impl Fn(f64, f64) -> bool) {
    if beyond(value, extremes[0]) {
        extremes[1] = extremes[0];
        extremes[0] = value;
    } else if beyond(value, extremes[1]) {
        extremes[1] = value;
    }
}

// A single body has no second extreme
fn second_or_first(extremes: [f64; 2]) -> f64 {
    if extremes[1].is_finite() {
        extremes[1]
    } else {
        extremes[0]
    }
}
