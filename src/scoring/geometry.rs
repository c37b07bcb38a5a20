//! Flat-plane bearing and angular-difference calculations
//!
//! Commutes are short, so the bearing uses a flat-plane approximation over
//! the raw degree deltas rather than a great-circle formula.

use crate::models::Coordinate;

use super::round2;

/// Direction of travel from `from` to `to` in degrees north, `[0, 360)`.
///
/// Undefined when both coordinates are identical; callers must guard the
/// degenerate case (`Subscription::validate` rejects zero-length routes).
#[must_use]
pub fn bearing_degrees(from: Coordinate, to: Coordinate) -> f64 {
    // delta_lat -> height, delta_lon -> width
    let height = to.latitude - from.latitude;
    let width = to.longitude - from.longitude;
    let hypotenuse = (height.powi(2) + width.powi(2)).sqrt();
    let asin_deg = (height / hypotenuse).asin().to_degrees();

    // Q1, Q2
    let deg = if width >= 0.0 {
        270.0 - asin_deg
    // Q3, Q4
    } else {
        90.0 + asin_deg
    };

    // Round before folding so 359.999.. cannot escape as 360.0
    let deg = round2(deg);
    if deg == 360.0 { 0.0 } else { deg }
}

/// Smallest angle between two directions, in `[0, 180]`.
///
/// Symmetric in its arguments; only the magnitude of the separation matters
/// for head/cross/tail-wind alignment.
#[must_use]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
