use nalgebra::Vector3;

use crate::dynamics::state::ForceCommand;

// ---------------------------------------------------------------------------
// Recorded time series
// ---------------------------------------------------------------------------

/// One tick of recorded data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub accel: Vector3<f64>,
    pub heading: f64,
    pub angular_velocity: f64,
    pub angular_accel: f64,
    pub command: ForceCommand,
}

/// Aligned per-quantity arrays, one entry per tick.
///
/// Laid out column-wise so reporting code can hand each quantity to a
/// plot or table directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub time: Vec<f64>,
    pub x_pos: Vec<f64>,
    pub y_pos: Vec<f64>,
    pub z_pos: Vec<f64>,
    pub x_vel: Vec<f64>,
    pub y_vel: Vec<f64>,
    pub z_vel: Vec<f64>,
    pub x_accel: Vec<f64>,
    pub y_accel: Vec<f64>,
    pub z_accel: Vec<f64>,
    pub heading: Vec<f64>,
    pub angular_velocity: Vec<f64>,
    pub angular_accel: Vec<f64>,
    pub commands: Vec<ForceCommand>,
}

impl Series {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            time: Vec::with_capacity(n),
            x_pos: Vec::with_capacity(n),
            y_pos: Vec::with_capacity(n),
            z_pos: Vec::with_capacity(n),
            x_vel: Vec::with_capacity(n),
            y_vel: Vec::with_capacity(n),
            z_vel: Vec::with_capacity(n),
            x_accel: Vec::with_capacity(n),
            y_accel: Vec::with_capacity(n),
            z_accel: Vec::with_capacity(n),
            heading: Vec::with_capacity(n),
            angular_velocity: Vec::with_capacity(n),
            angular_accel: Vec::with_capacity(n),
            commands: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, s: &Sample) {
        self.time.push(s.time);
        self.x_pos.push(s.position.x);
        self.y_pos.push(s.position.y);
        self.z_pos.push(s.position.z);
        self.x_vel.push(s.velocity.x);
        self.y_vel.push(s.velocity.y);
        self.z_vel.push(s.velocity.z);
        self.x_accel.push(s.accel.x);
        self.y_accel.push(s.accel.y);
        self.z_accel.push(s.accel.z);
        self.heading.push(s.heading);
        self.angular_velocity.push(s.angular_velocity);
        self.angular_accel.push(s.angular_accel);
        self.commands.push(s.command);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Sample> {
        if i >= self.len() {
            return None;
        }
        Some(Sample {
            time: self.time[i],
            position: Vector3::new(self.x_pos[i], self.y_pos[i], self.z_pos[i]),
            velocity: Vector3::new(self.x_vel[i], self.y_vel[i], self.z_vel[i]),
            accel: Vector3::new(self.x_accel[i], self.y_accel[i], self.z_accel[i]),
            heading: self.heading[i],
            angular_velocity: self.angular_velocity[i],
            angular_accel: self.angular_accel[i],
            command: self.commands[i],
        })
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
