// src/io/mod.rs
pub mod xsf;

use std::path::{Path, PathBuf};

use crate::config::SpiralConfig;
use crate::error::SpiralError;
use crate::model::SpiralStructure;

/// Output location is always `dir/filename`; nothing is resolved against the executable.
pub fn resolve_output_path(dir: &Path, filename: &str) -> PathBuf {
    dir.join(filename)
}

/// Writes `structure` the way `config` describes (directory, name, scale, species).
pub fn save_structure(config: &SpiralConfig, structure: &SpiralStructure) -> Result<PathBuf, SpiralError> {
    let atomic_number = config.atomic_number()?;
    xsf::write(
        &config.output_dir,
        &config.filename,
        &structure.positions,
        &structure.moments,
        structure.extents,
        config.scale,
        atomic_number,
    )
}
