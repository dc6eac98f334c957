use nalgebra::Vector2;

use super::body::Body;
use super::state::{NetAccel, GRAVITY};

// ---------------------------------------------------------------------------
// Force model
// ---------------------------------------------------------------------------

/// Net linear and angular acceleration of `body` under gravity, drag,
/// wind, and its commanded forces.
///
/// Drag is `c * v^2` per axis with no sign restoration, so it always acts
/// in the direction of the coefficient's sign. Commanded xy force is
/// rotated by the heading. Angular acceleration is in deg/s^2.
pub fn accelerate(body: &Body, wind: &Vector2<f64>) -> NetAccel {
    let theta = body.heading.to_radians();
    let (sin, cos) = theta.sin_cos();
    let v = &body.velocity;
    let f = &body.xy_force;

    let fx = body.drag.x * v.x.powi(2) + wind.x + f.x * cos + f.y * sin;
    let fy = body.drag.y * v.y.powi(2) + wind.y + f.y * cos + f.x * sin;
    let fz = GRAVITY * body.mass + body.drag.z * v.z.powi(2);

    NetAccel::new(
        fx / body.mass,
        fy / body.mass,
        fz / body.mass,
        body.angular_force / body.moment_of_inertia(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::body::BodyBuilder;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn gravity_only() {
        let body = BodyBuilder::new().mass(3.0).build();
        let a = accelerate(&body, &Vector2::zeros());
        assert_abs_diff_eq!(a.linear.z, GRAVITY, epsilon = 1e-12);
        assert_eq!(a.linear.x, 0.0);
        assert_eq!(a.linear.y, 0.0);
        assert_eq!(a.angular, 0.0);
    }

    #[test]
    fn drag_ignores_velocity_sign() {
        let drag = Vector3::new(0.5, 0.5, 0.2);
        let up = BodyBuilder::new().drag(drag).velocity(Vector3::new(2.0, 0.0, 10.0)).build();
        let down = BodyBuilder::new().drag(drag).velocity(Vector3::new(-2.0, 0.0, -10.0)).build();
        let a_up = accelerate(&up, &Vector2::zeros());
        let a_down = accelerate(&down, &Vector2::zeros());

        assert_abs_diff_eq!(a_up.linear.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a_up.linear.x, a_down.linear.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a_up.linear.z, a_down.linear.z, epsilon = 1e-12);
        assert_abs_diff_eq!(a_down.linear.z, GRAVITY + 20.0, epsilon = 1e-12);
    }

    #[test]
    fn wind_is_divided_by_mass() {
        let body = BodyBuilder::new().mass(2.0).build();
        let a = accelerate(&body, &Vector2::new(1.0, -4.0));
        assert_abs_diff_eq!(a.linear.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a.linear.y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn force_rotates_with_heading() {
        let body = BodyBuilder::new()
            .heading(90.0)
            .xy_force(Vector2::new(3.0, 0.0))
            .build();
        let a = accelerate(&body, &Vector2::zeros());
        // x: fx cos + fy sin = 0, y: fy cos + fx sin = 3
        assert_abs_diff_eq!(a.linear.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.linear.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn torque_over_disk_inertia() {
        let body = BodyBuilder::new().mass(1.0).radius(0.05).angular_force(10.0).build();
        let a = accelerate(&body, &Vector2::zeros());
        assert_abs_diff_eq!(a.angular, 8_000.0, epsilon = 1e-9);
    }
}
