use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// PID controller: horizontal position loop + heading loop
// ---------------------------------------------------------------------------

/// Stateless PID steering law with symmetric output saturation.
///
/// Holds gains and limits only. Errors and integral terms come in as
/// arguments and forces go out as return values, so one instance can be
/// evaluated against any body state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidController {
    pub p: f64,
    pub i: f64,
    pub d: f64,
    pub ang_p: f64,
    pub ang_i: f64,
    pub ang_d: f64,
    pub force_limit: f64,          // N
    pub angular_force_limit: f64,  // N·m
}

impl PidController {
    pub fn new() -> Self {
        Self {
            p: 15.0,
            i: 0.15,
            d: 5.0,
            ang_p: 2.0,
            ang_i: 0.001,
            ang_d: 0.2,
            force_limit: 50.0,
            angular_force_limit: 10.0,
        }
    }

    pub fn xy_gains(mut self, p: f64, i: f64, d: f64) -> Self {
        self.p = p;
        self.i = i;
        self.d = d;
        self
    }

    pub fn angle_gains(mut self, p: f64, i: f64, d: f64) -> Self {
        self.ang_p = p;
        self.ang_i = i;
        self.ang_d = d;
        self
    }

    pub fn limits(mut self, force: f64, angular_force: f64) -> Self {
        self.force_limit = force;
        self.angular_force_limit = angular_force;
        self
    }

    /// Horizontal force command per axis.
    ///
    /// The derivative term acts on absolute velocity rather than velocity
    /// error; the target velocity is always zero.
    pub fn correct_xy(
        &self,
        position_error: Vector2<f64>,
        velocity: Vector2<f64>,
        integral: Vector2<f64>,
    ) -> Vector2<f64> {
        let raw = -self.p * position_error - self.d * velocity - self.i * integral;
        raw.map(|f| saturate(f, self.force_limit))
    }

    /// Angular force command from the signed heading error.
    pub fn correct_angle(&self, heading_error: f64, angular_velocity_error: f64, integral: f64) -> f64 {
        let raw = -self.ang_p * heading_error
            - self.ang_d * angular_velocity_error
            - self.ang_i * integral;
        saturate(raw, self.angular_force_limit)
    }
}

impl Default for PidController {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp `value` into `[-limit, limit]`.
pub fn saturate(value: f64, limit: f64) -> f64 {
    if value > limit {
        limit
    } else if value < -limit {
        -limit
    } else {
        value
    }
}
