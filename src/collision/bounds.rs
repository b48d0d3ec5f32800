//! Rectangular containment region for the simulated space.

use super::aabb::AABB;
use crate::math::Vec2;
use crate::objects::Body;

/// World boundary. Each side can be switched off individually, e.g. to let
/// bodies leave through the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub region: AABB,
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Bounds {
    /// Bounds with all four sides active.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Bounds {
            region: AABB::from_pos_size(pos, size),
            left: true,
            top: true,
            right: true,
            bottom: true,
        }
    }

    /// Clamps `body` into the region and zeroes any velocity component still
    /// pointing out through a clamped side. Returns true if anything was clamped.
    pub fn contain(&self, body: &mut Body) -> bool {
        let min = self.region.min;
        let max = self.region.max;
        let mut clamped = false;

        if self.left && body.pos.x < min.x {
            body.pos.x = min.x;
            if body.vel.x < 0.0 {
                body.vel.x = 0.0;
            }
            clamped = true;
        }

        if self.right && body.pos.x > max.x - body.size.x {
            body.pos.x = max.x - body.size.x;
            if body.vel.x > 0.0 {
                body.vel.x = 0.0;
            }
            clamped = true;
        }

        if self.top && body.pos.y < min.y {
            body.pos.y = min.y;
            if body.vel.y < 0.0 {
                body.vel.y = 0.0;
            }
            clamped = true;
        }

        if self.bottom && body.pos.y > max.y - body.size.y {
            body.pos.y = max.y - body.size.y;
            if body.vel.y > 0.0 {
                body.vel.y = 0.0;
            }
            clamped = true;
        }

        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BodyConfig;
    use crate::math::Vec3;

    fn bounds() -> Bounds {
        Bounds::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0))
    }

    fn body_at(x: f64, y: f64, vel: Vec3) -> Body {
        Body::new(BodyConfig::boxed(x, y, 5.0, 5.0).with_vel(vel)).unwrap()
    }

    #[test]
    fn test_contain_left_edge_stops_leftward_motion() {
        let mut body = body_at(4.0, 30.0, Vec3::new(-3.0, 1.0, 0.0));
        assert!(bounds().contain(&mut body));
        assert_eq!(body.pos.x, 10.0);
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.vel.y, 1.0);
    }

    #[test]
    fn test_contain_keeps_inward_velocity() {
        let mut body = body_at(4.0, 30.0, Vec3::new(3.0, 0.0, 0.0));
        bounds().contain(&mut body);
        assert_eq!(body.pos.x, 10.0);
        assert_eq!(body.vel.x, 3.0);
    }

    #[test]
    fn test_contain_far_edges_account_for_size() {
        let mut body = body_at(200.0, 100.0, Vec3::new(1.0, 1.0, 0.0));
        bounds().contain(&mut body);
        assert_eq!(body.pos.x, 105.0);
        assert_eq!(body.pos.y, 65.0);
        assert_eq!(body.vel, Vec3::ZERO);
    }

    #[test]
    fn test_contain_inside_is_noop() {
        let mut body = body_at(50.0, 30.0, Vec3::new(-1.0, -1.0, 0.0));
        let before = body.clone();
        assert!(!bounds().contain(&mut body));
        assert_eq!(body, before);
    }

    #[test]
    fn test_contain_disabled_side() {
        let mut open_bottom = bounds();
        open_bottom.bottom = false;
        let mut body = body_at(50.0, 500.0, Vec3::new(0.0, 9.0, 0.0));
        assert!(!open_bottom.contain(&mut body));
        assert_eq!(body.pos.y, 500.0);
        assert_eq!(body.vel.y, 9.0);
    }
}
