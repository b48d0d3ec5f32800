use super::manifold::Manifold;
use crate::math::vec3::Vec3;
use crate::objects::Body;

/// Checks for overlap between two axis-aligned boxes (depth is ignored).
/// Returns a Manifold if they collide, None otherwise.
///
/// The manifold's hit vector is the shallowest way for `body_a` to escape
/// `body_b`: per axis the smaller of the two candidate separations is taken,
/// then the axis with the larger magnitude is zeroed.
pub fn box_box(
    body_a: &Body,
    body_a_idx: usize,
    body_b: &Body,
    body_b_idx: usize,
) -> Option<Manifold> {
    let a_far = body_a.far();
    let b_far = body_b.far();

    // Strict inequalities: touching edges are not a collision
    let overlapping = body_a.pos.x < b_far.x
        && a_far.x > body_b.pos.x
        && body_a.pos.y < b_far.y
        && a_far.y > body_b.pos.y;
    if !overlapping {
        return None;
    }

    let min = a_far - body_b.pos;
    let max = body_a.pos - b_far;

    let mut hit = Vec3::new(
        if min.x.abs() < max.x.abs() { min.x } else { max.x },
        if min.y.abs() < max.y.abs() { min.y } else { max.y },
        0.0,
    );

    if hit.x.abs() >= hit.y.abs() {
        hit.x = 0.0;
    } else {
        hit.y = 0.0;
    }

    Some(Manifold::new(hit, body_a_idx, body_b_idx))
}

/// Runs [`box_box`] on two bodies of a slice. Out-of-range indices never
/// collide.
pub fn detect(bodies: &[Body], idx_a: usize, idx_b: usize) -> Option<Manifold> {
    if idx_a == idx_b {
        return None;
    }
    let body_a = bodies.get(idx_a)?;
    let body_b = bodies.get(idx_b)?;
    box_box(body_a, idx_a, body_b, idx_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BodyConfig;
    const EPSILON: f64 = 1e-10;

    fn square(x: f64, y: f64, size: f64) -> Body {
        Body::new(BodyConfig::boxed(x, y, size, size)).unwrap()
    }

    #[test]
    fn test_box_box_shallow_x() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.9, 0.3, 1.0);
        let m = box_box(&a, 0, &b, 1).expect("boxes overlap");
        assert!((m.hit.x - 0.1).abs() < EPSILON);
        assert_eq!(m.hit.y, 0.0);
        assert_eq!(m.hit.z, 0.0);
        assert_eq!((m.node1, m.node2), (0, 1));
    }

    #[test]
    fn test_box_box_shallow_y() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.3, 0.9, 1.0);
        let m = box_box(&a, 0, &b, 1).expect("boxes overlap");
        assert_eq!(m.hit.x, 0.0);
        assert!((m.hit.y - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_box_box_hit_points_into_other_from_either_side() {
        // b to the left of a: escaping means moving a to the right, so hit is negative
        let a = square(0.8, 0.0, 1.0);
        let b = square(0.0, 0.0, 1.0);
        let m = box_box(&a, 0, &b, 1).unwrap();
        assert!((m.hit.x - -0.2).abs() < EPSILON);
        assert_eq!(m.hit.y, 0.0);
    }

    #[test]
    fn test_box_box_touching_is_not_a_collision() {
        let a = square(0.0, 0.0, 1.0);
        assert!(box_box(&a, 0, &square(1.0, 0.0, 1.0), 1).is_none());
        assert!(box_box(&a, 0, &square(0.0, 1.0, 1.0), 1).is_none());
        assert!(box_box(&a, 0, &square(5.0, 5.0, 1.0), 1).is_none());
    }

    #[test]
    fn test_box_box_zero_size_never_collides_on_edge() {
        let a = square(0.0, 0.0, 1.0);
        let point_on_edge = square(1.0, 0.5, 0.0);
        assert!(box_box(&a, 0, &point_on_edge, 1).is_none());
    }

    #[test]
    fn test_box_box_ignores_depth() {
        let a = square(0.0, 0.0, 1.0);
        let mut b = square(0.5, 0.0, 1.0);
        b.pos.z = 42.0;
        assert!(box_box(&a, 0, &b, 1).is_some());
    }

    #[test]
    fn test_detect_by_index() {
        let bodies = vec![square(0.0, 0.0, 10.0), square(5.0, 0.0, 10.0)];
        let m = detect(&bodies, 0, 1).unwrap();
        assert_eq!(m.hit, Vec3::new(5.0, 0.0, 0.0));
        assert!(detect(&bodies, 0, 0).is_none());
        assert!(detect(&bodies, 0, 9).is_none());
    }
}
