// src/utils/geometry.rs

use nalgebra::Vector3;

type Vec3 = [f64; 3];

/// Euclidean length of a moment vector
pub fn magnitude(v: Vec3) -> f64 {
    Vector3::from(v).norm()
}

/// Angle between two moments in degrees, in [0, 180].
///
/// If either vector has zero length the angle is reported as 0.0
/// instead of propagating a division by zero.
pub fn angle_between(a: Vec3, b: Vec3) -> f64 {
    let mags = magnitude(a) * magnitude(b);
    if mags == 0.0 {
        return 0.0;
    }

    (Vector3::from(a).dot(&Vector3::from(b)) / mags).clamp(-1.0, 1.0).acos().to_degrees()
}

pub fn scale_vec(v: Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}
