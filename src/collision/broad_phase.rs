//! Broad-phase pair generation.
//!
//! Both strategies return candidate pairs as body indices. Each unordered pair
//! appears at most once and two immovable bodies are never paired.

use tracing::trace;

use super::quadtree::Quadtree;
use crate::common::{BroadPhaseConfig, PhysicsError};
use crate::objects::Body;

/// A spatial index that proposes possibly-colliding pairs.
pub trait BroadPhase {
    /// Returns candidate pairs of body indices, each unordered pair once.
    fn pairs(&self) -> Vec<(usize, usize)>;
}

/// All-pairs search, faster than a quadtree for small populations.
#[derive(Debug, Default, Clone)]
pub struct BruteForce {
    movable: Vec<usize>,
    immovable: Vec<usize>,
}

impl BruteForce {
    pub fn new(bodies: &[Body]) -> Self {
        let (immovable, movable): (Vec<usize>, Vec<usize>) =
            (0..bodies.len()).partition(|&i| bodies[i].immovable);
        Self { movable, immovable }
    }
}

impl BroadPhase for BruteForce {
    fn pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(
            self.movable.len() * (self.movable.len().saturating_sub(1) / 2 + self.immovable.len()),
        );
        for (i, &a) in self.movable.iter().enumerate() {
            for &b in &self.movable[i + 1..] {
                pairs.push((a, b));
            }
            for &b in &self.immovable {
                pairs.push((a, b));
            }
        }
        pairs
    }
}

/// Picks brute force below `quadtree_threshold` bodies and a quadtree at or
/// above it, and returns the candidate pairs.
///
/// Bodies with non-finite position or size are rejected whichever strategy
/// is picked.
pub fn candidate_pairs(
    bodies: &[Body],
    config: &BroadPhaseConfig,
) -> Result<Vec<(usize, usize)>, PhysicsError> {
    if bodies
        .iter()
        .any(|body| !body.pos.is_finite() || !body.size.is_finite())
    {
        return Err(PhysicsError::NonFinite("body geometry"));
    }
    if bodies.is_empty() || bodies.len() < config.quadtree_threshold {
        trace!(bodies = bodies.len(), "brute force broad phase");
        return Ok(BruteForce::new(bodies).pairs());
    }
    Ok(Quadtree::from_bodies(bodies, config)?.pairs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BodyConfig;
    use std::collections::HashSet;

    fn body(x: f64, immovable: bool) -> Body {
        let config = BodyConfig::boxed(x, 0.0, 1.0, 1.0);
        Body::new(if immovable { config.immovable() } else { config }).unwrap()
    }

    fn normalized(pairs: &[(usize, usize)]) -> HashSet<(usize, usize)> {
        pairs.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
    }

    #[test]
    fn test_brute_force_pairs() {
        // movable: 0, 2, 3; immovable: 1, 4
        let bodies = vec![
            body(0.0, false),
            body(1.0, true),
            body(2.0, false),
            body(3.0, false),
            body(4.0, true),
        ];
        let pairs = BruteForce::new(&bodies).pairs();
        let expected: HashSet<(usize, usize)> = [
            (0, 2),
            (0, 3),
            (2, 3),
            (0, 1),
            (0, 4),
            (1, 2),
            (2, 4),
            (1, 3),
            (3, 4),
        ]
        .into_iter()
        .collect();
        assert_eq!(pairs.len(), expected.len());
        assert_eq!(normalized(&pairs), expected);
    }

    #[test]
    fn test_brute_force_never_pairs_immovables() {
        let bodies = vec![body(0.0, true), body(0.5, true), body(0.7, true)];
        assert!(BruteForce::new(&bodies).pairs().is_empty());
    }

    #[test]
    fn test_candidate_pairs_empty() {
        let config = BroadPhaseConfig::default();
        assert!(candidate_pairs(&[], &config).unwrap().is_empty());
        let eager = BroadPhaseConfig {
            quadtree_threshold: 0,
            ..config
        };
        assert!(candidate_pairs(&[], &eager).unwrap().is_empty());
    }

    #[test]
    fn test_candidate_pairs_rejects_nan_geometry_on_both_paths() {
        let mut bodies = vec![body(0.0, false), body(0.5, false)];
        bodies[1].pos.y = f64::NAN;

        let brute = BroadPhaseConfig::default();
        let tree = BroadPhaseConfig {
            quadtree_threshold: 0,
            ..Default::default()
        };
        for config in [brute, tree] {
            assert!(matches!(
                candidate_pairs(&bodies, &config),
                Err(PhysicsError::NonFinite(_))
            ));
        }
    }

    #[test]
    fn test_candidate_pairs_strategies_agree_on_small_set() {
        let bodies: Vec<Body> = (0..12).map(|i| body(i as f64 * 0.6, i % 5 == 0)).collect();
        let brute = candidate_pairs(&bodies, &BroadPhaseConfig::default()).unwrap();
        let tree = candidate_pairs(
            &bodies,
            &BroadPhaseConfig {
                quadtree_threshold: 1,
                max_nodes: 2,
                ..Default::default()
            },
        )
        .unwrap();

        let overlapping = |pairs: &[(usize, usize)]| -> HashSet<(usize, usize)> {
            normalized(pairs)
                .into_iter()
                .filter(|&(a, b)| bodies[a].aabb().overlaps(&bodies[b].aabb()))
                .collect()
        };
        assert_eq!(overlapping(&brute), overlapping(&tree));
        assert!(!overlapping(&brute).is_empty());
    }
}
