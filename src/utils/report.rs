// src/utils/report.rs

use std::path::Path;

use crate::config::SpiralConfig;
use crate::model::structure::{MagneticSite, SpiralStructure};

/// Per-site table printed after generation
pub fn report(positions: &[[usize; 3]], moments: &[[f64; 3]], angles: &[f64]) -> String {
    let sites = positions
        .iter()
        .zip(moments)
        .zip(angles)
        .map(|((&index, &moment), &angle)| MagneticSite { index, moment, angle });
    site_table(positions.len(), sites)
}

pub fn report_structure(structure: &SpiralStructure) -> String {
    site_table(structure.len(), structure.sites())
}

fn site_table(count: usize, sites: impl Iterator<Item = MagneticSite>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Generated {} atomic positions\n", count));
    out.push('\n');
    out.push_str("Position (i,j,k) | Magnetic Moment (mx,my,mz) | Angle (deg)\n");
    out.push_str(&"-".repeat(65));
    out.push('\n');

    for site in sites {
        let [i, j, k] = site.index;
        let [mx, my, mz] = site.moment;
        out.push_str(&format!(
            "{:2} {:2} {:2} | {:7.3} {:7.3} {:7.3} | {:8.3}\n",
            i, j, k, mx, my, mz, site.angle
        ));
    }

    out
}

/// Run parameters, printed before generation
pub fn parameters_summary(config: &SpiralConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Spiral vector q = {:?}\n", config.wave_vector));
    out.push_str(&format!("Initial moment = {:?}\n", config.initial_moment));
    out.push_str(&format!("Supercell dimensions = {:?}\n", config.supercell));
    out
}

pub fn viewer_instructions(filename: &str, path: &Path) -> String {
    let mut out = String::new();
    out.push_str(&format!("XSF file '{}' created successfully!\n", filename));
    out.push_str(&format!("File saved at: {}\n", path.display()));
    out.push('\n');
    out.push_str("To visualize in VESTA:\n");
    out.push_str("1. Open VESTA\n");
    out.push_str("2. File -> Open -> Select the XSF file\n");
    out.push_str("3. Properties -> Vector to display magnetic moment vectors\n");
    out.push_str("4. Adjust vector scaling and colors as needed\n");
    out
}
