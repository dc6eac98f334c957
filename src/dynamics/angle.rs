//! Heading arithmetic in degrees.

/// Wrap a heading into `[0, 360)`.
///
/// `f64::rem_euclid` can round a tiny negative input up to exactly `360.0`,
/// so the add-then-reduce form is used instead.
pub fn wrap_heading(heading: f64) -> f64 {
    ((heading % 360.0) + 360.0) % 360.0
}

/// Signed error of a wrapped heading relative to upright (heading 0),
/// mapped into `(-180, 180]`.
pub fn heading_error(heading: f64) -> f64 {
    if heading > 180.0 {
        heading - 360.0
    } else {
        heading
    }
}
