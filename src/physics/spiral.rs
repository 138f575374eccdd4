// src/physics/spiral.rs

use std::f64::consts::PI;

use crate::config::SpiralConfig;
use crate::error::SpiralError;
use crate::model::structure::SpiralStructure;
use crate::utils::geometry;

/// Rotation phase (radians) at an integer lattice site: 2π·(q·r).
pub fn phase_at(q: [f64; 3], site: [usize; 3]) -> f64 {
    (q[0] * site[0] as f64 + q[1] * site[1] as f64 + q[2] * site[2] as f64) * 2.0 * PI
}

/// Counter-clockwise rotation of `m` about +z. The z component is passed through untouched.
pub fn rotate_about_z(m: [f64; 3], phase: f64) -> [f64; 3] {
    let (sin, cos) = phase.sin_cos();
    [m[0] * cos - m[1] * sin, m[0] * sin + m[1] * cos, m[2]]
}

/// Angle in degrees of every moment relative to `moments[0]`.
/// The first entry is 0.0 by definition.
pub fn relative_angles(moments: &[[f64; 3]]) -> Vec<f64> {
    let Some(&first) = moments.first() else {
        return Vec::new();
    };

    let mut angles = Vec::with_capacity(moments.len());
    angles.push(0.0);
    angles.extend(moments[1..].iter().map(|&m| geometry::angle_between(m, first)));
    angles
}

/// Builds the spiral over an `extents` supercell.
///
/// Sites are emitted with `i` outermost and `k` innermost; the index of a
/// site in every returned array is `(i * Ny + j) * Nz + k`.
pub fn generate(extents: [usize; 3], q: [f64; 3], m0: [f64; 3]) -> SpiralStructure {
    let [nx, ny, nz] = extents;
    let n_sites = nx * ny * nz;

    let mut positions = Vec::with_capacity(n_sites);
    let mut moments = Vec::with_capacity(n_sites);

    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let site = [i, j, k];
                positions.push(site);
                moments.push(rotate_about_z(m0, phase_at(q, site)));
            }
        }
    }

    let angles = relative_angles(&moments);
    log::debug!("Generated {} spiral sites on a {}x{}x{} supercell", n_sites, nx, ny, nz);

    SpiralStructure {
        extents,
        positions,
        moments,
        angles,
    }
}

pub fn generate_from_config(config: &SpiralConfig) -> Result<SpiralStructure, SpiralError> {
    config.validate()?;
    Ok(generate(config.supercell, config.wave_vector, config.initial_moment))
}
