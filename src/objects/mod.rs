pub mod body;

pub use body::Body;

use crate::common::PhysicsError;

/// Mutable references to two distinct bodies of a slice.
/// Fails if the indices are equal or out of bounds.
pub(crate) fn body_pair_mut(
    bodies: &mut [Body],
    idx_a: usize,
    idx_b: usize,
) -> Result<(&mut Body, &mut Body), PhysicsError> {
    let len = bodies.len();
    for index in [idx_a, idx_b] {
        if index >= len {
            return Err(PhysicsError::BodyOutOfRange { index, len });
        }
    }
    if idx_a == idx_b {
        return Err(PhysicsError::InvalidConfig(format!(
            "body {idx_a} cannot collide with itself"
        )));
    }

    // split_at_mut needs the lower index first
    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        Ok((&mut slice_a[idx_a], &mut slice_b[0]))
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        Ok((&mut slice_a[0], &mut slice_b[idx_b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BodyConfig;

    fn bodies(n: usize) -> Vec<Body> {
        (0..n)
            .map(|i| Body::new(BodyConfig::boxed(i as f64, 0.0, 1.0, 1.0)).unwrap())
            .collect()
    }

    #[test]
    fn test_body_pair_mut_both_orders() {
        let mut list = bodies(3);
        let (a, b) = body_pair_mut(&mut list, 2, 0).unwrap();
        assert_eq!(a.pos.x, 2.0);
        assert_eq!(b.pos.x, 0.0);

        let (a, b) = body_pair_mut(&mut list, 0, 2).unwrap();
        assert_eq!(a.pos.x, 0.0);
        assert_eq!(b.pos.x, 2.0);
    }

    #[test]
    fn test_body_pair_mut_rejects_bad_indices() {
        let mut list = bodies(2);
        assert!(matches!(
            body_pair_mut(&mut list, 0, 5),
            Err(PhysicsError::BodyOutOfRange { index: 5, len: 2 })
        ));
        assert!(body_pair_mut(&mut list, 1, 1).is_err());
    }
}
