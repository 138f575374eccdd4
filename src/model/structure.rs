use crate::utils::geometry::scale_vec;

/// One lattice site viewed through the parallel arrays of a `SpiralStructure`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticSite {
    pub index: [usize; 3],
    pub moment: [f64; 3],
    pub angle: f64,
}

/// A site placed in cartesian space, ready for export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticAtom {
    pub position: [f64; 3],
    pub moment: [f64; 3],
}

#[derive(Clone, Debug, Default)]
pub struct SpiralStructure {
    // Supercell extents [Nx, Ny, Nz]
    pub extents: [usize; 3],
    // Parallel arrays in (i, j, k) row-major order
    pub positions: Vec<[usize; 3]>,
    pub moments: Vec<[f64; 3]>,
    pub angles: Vec<f64>,
}

impl SpiralStructure {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn sites(&self) -> impl Iterator<Item = MagneticSite> + '_ {
        self.positions
            .iter()
            .zip(&self.moments)
            .zip(&self.angles)
            .map(|((&index, &moment), &angle)| MagneticSite { index, moment, angle })
    }

    /// Cartesian atoms with positions and moments both multiplied by `scale`.
    pub fn to_atoms(&self, scale: f64) -> Vec<MagneticAtom> {
        scaled_atoms(&self.positions, &self.moments, scale)
    }

    pub fn into_parts(self) -> (Vec<[usize; 3]>, Vec<[f64; 3]>, Vec<f64>) {
        (self.positions, self.moments, self.angles)
    }
}

/// Zips grid indices with moments, scaling both. Extra entries on either side are dropped.
pub fn scaled_atoms(positions: &[[usize; 3]], moments: &[[f64; 3]], scale: f64) -> Vec<MagneticAtom> {
    positions
        .iter()
        .zip(moments)
        .map(|(&index, &moment)| MagneticAtom {
            position: scale_vec(index_to_f64(index), scale),
            moment: scale_vec(moment, scale),
        })
        .collect()
}

/// Orthogonal cell of the supercell, `extent * scale` along each axis.
pub fn cell_matrix(extents: [usize; 3], scale: f64) -> [[f64; 3]; 3] {
    let [nx, ny, nz] = extents;
    [
        [nx as f64 * scale, 0.0, 0.0],
        [0.0, ny as f64 * scale, 0.0],
        [0.0, 0.0, nz as f64 * scale],
    ]
}

pub fn index_to_f64(index: [usize; 3]) -> [f64; 3] {
    [index[0] as f64, index[1] as f64, index[2] as f64]
}
