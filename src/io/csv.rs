use std::io::{self, Write};

use crate::sim::record::Series;

/// Write a recorded series in CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z,
///          accel_x, accel_y, accel_z, heading, angular_velocity,
///          angular_accel, force_x, force_y, angular_force
pub fn write_series<W: Write>(writer: &mut W, series: &Series) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,\
         accel_x,accel_y,accel_z,heading,angular_velocity,angular_accel,\
         force_x,force_y,angular_force"
    )?;

    for s in series.samples() {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},\
             {:.4},{:.4},{:.4},{:.4},{:.4},{:.4},\
             {:.4},{:.4},{:.4}",
            s.time,
            s.position.x, s.position.y, s.position.z,
            s.velocity.x, s.velocity.y, s.velocity.z,
            s.accel.x, s.accel.y, s.accel.z,
            s.heading, s.angular_velocity, s.angular_accel,
            s.command.xy.x, s.command.xy.y, s.command.angular,
        )?;
    }

    Ok(())
}

/// Write a recorded series to a CSV file at the given path.
pub fn write_series_file(path: &str, series: &Series) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_series(&mut file, series)
}
