use crate::math::Vec3;
use crate::objects::Body;

/// Advances the body's state by `dt` using velocity Verlet.
///
/// Position uses the current velocity plus half the previous acceleration;
/// velocity uses the average of the previous and current acceleration. The
/// current acceleration then becomes the previous one and is reset so forces
/// can accumulate for the next tick.
pub fn integrate(body: &mut Body, dt: f64) {
    // p = p + (v + a_prev/2 * dt) * dt
    body.pos += (body.vel + body.pre_acc / 2.0 * dt) * dt;
    // v = v + (a_prev + a) / 2 * dt
    body.vel += (body.pre_acc + body.acc) / 2.0 * dt;

    body.pre_acc = body.acc;
    body.acc = Vec3::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BodyConfig;
    const EPSILON: f64 = 1e-9;

    fn test_body(mass: f64) -> Body {
        Body::new(BodyConfig::boxed(0.0, 0.0, 1.0, 1.0).with_mass(mass)).unwrap()
    }

    #[test]
    fn test_integrate_at_rest_stays_put() {
        let mut body = test_body(1.0);
        body.pos = Vec3::new(3.0, -2.0, 1.0);
        for _ in 0..1000 {
            integrate(&mut body, 1.0 / 60.0);
        }
        assert_eq!(body.pos, Vec3::new(3.0, -2.0, 1.0));
        assert_eq!(body.vel, Vec3::ZERO);
    }

    #[test]
    fn test_integrate_constant_velocity() {
        let mut body = test_body(1.0);
        body.vel = Vec3::new(10.0, -5.0, 1.0);
        integrate(&mut body, 0.1);

        assert!((body.pos.x - 1.0).abs() < EPSILON);
        assert!((body.pos.y - -0.5).abs() < EPSILON);
        assert!((body.pos.z - 0.1).abs() < EPSILON);
        assert_eq!(body.vel, Vec3::new(10.0, -5.0, 1.0));
    }

    #[test]
    fn test_integrate_constant_force_two_steps() {
        let mut body = test_body(2.0);
        let dt = 0.1;

        // a = F/m = (2, 0, 0)
        body.apply_force(Vec3::new(4.0, 0.0, 0.0));
        integrate(&mut body, dt);
        // No previous acceleration: position unchanged, velocity gets half the ramp
        assert!(body.pos.x.abs() < EPSILON);
        assert!((body.vel.x - 0.1).abs() < EPSILON);
        assert_eq!(body.pre_acc, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(body.acc, Vec3::ZERO);

        body.apply_force(Vec3::new(4.0, 0.0, 0.0));
        integrate(&mut body, dt);
        // p = (0.1 + 2/2*0.1) * 0.1 = 0.02, v = 0.1 + (2+2)/2*0.1 = 0.3
        assert!((body.pos.x - 0.02).abs() < EPSILON);
        assert!((body.vel.x - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_uses_previous_acceleration_after_force_stops() {
        let mut body = test_body(1.0);
        body.apply_force(Vec3::new(0.0, 2.0, 0.0));
        integrate(&mut body, 1.0);
        // v = 1, pre_acc = 2
        integrate(&mut body, 1.0);
        // p = (1 + 2/2*1) * 1 = 2, v = 1 + (2 + 0)/2 = 2
        assert!((body.pos.y - 2.0).abs() < EPSILON);
        assert!((body.vel.y - 2.0).abs() < EPSILON);
        assert_eq!(body.pre_acc, Vec3::ZERO);
    }
}
