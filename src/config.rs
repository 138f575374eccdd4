// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SpiralError;
use crate::model::elements::get_atomic_number;

pub const DEFAULT_ATOMS_IN_SPIRAL: u32 = 3;
pub const DEFAULT_FILENAME: &str = "spiral.xsf";
pub const DEFAULT_SCALE: f64 = 3.0;
pub const DEFAULT_SPECIES: &str = "Fe";

/// Wave vector whose spiral closes after `n` sites along y and z.
pub fn wave_vector_for_period(n: u32) -> [f64; 3] {
  let q = 0.5 - 0.5 * (1.0 / n as f64);
  [0.0, q, q]
}

pub fn supercell_for_period(n: u32) -> [usize; 3] {
  let n = n as usize;
  [n, n * 2, n * 2]
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpiralConfig {
  /// Number of atoms for the spiral to complete one cycle
  pub atoms_in_spiral: u32,
  pub wave_vector: [f64; 3],
  pub initial_moment: [f64; 3],
  /// Supercell dimensions [Nx, Ny, Nz]
  pub supercell: [usize; 3],
  pub filename: String,
  /// Distance between neighbouring sites in the written file
  pub scale: f64,
  pub output_dir: PathBuf,
  pub species: String,
}

impl Default for SpiralConfig {
  fn default() -> Self {
    Self::from_spiral_period(DEFAULT_ATOMS_IN_SPIRAL)
  }
}

impl SpiralConfig {
  pub fn from_spiral_period(n: u32) -> Self {
    Self {
      atoms_in_spiral: n,
      wave_vector: wave_vector_for_period(n),
      initial_moment: [1.0, 0.0, 0.0],
      supercell: supercell_for_period(n),
      filename: DEFAULT_FILENAME.to_string(),
      scale: DEFAULT_SCALE,
      output_dir: PathBuf::from("."),
      species: DEFAULT_SPECIES.to_string(),
    }
  }

  /// Re-derives the wave vector and supercell from a new spiral period.
  pub fn with_spiral_period(mut self, n: u32) -> Self {
    self.atoms_in_spiral = n;
    self.wave_vector = wave_vector_for_period(n);
    self.supercell = supercell_for_period(n);
    self
  }

  /// Nx·Ny·Nz, or `None` when the product does not fit in memory-addressable sizes.
  pub fn site_count(&self) -> Option<usize> {
    let n = self.supercell.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n))?;
    let bytes = n.checked_mul(std::mem::size_of::<[f64; 3]>())?;
    (bytes <= isize::MAX as usize).then_some(n)
  }

  pub fn output_path(&self) -> PathBuf {
    self.output_dir.join(&self.filename)
  }

  /// Atomic number of the configured species. Call after `validate`.
  pub fn atomic_number(&self) -> Result<u32, SpiralError> {
    get_atomic_number(&self.species)
      .ok_or_else(|| SpiralError::invalid(format!("unknown species '{}'", self.species)))
  }

  pub fn validate(&self) -> Result<(), SpiralError> {
    if self.atoms_in_spiral == 0 {
      return Err(SpiralError::invalid("atoms_in_spiral must be at least 1"));
    }
    if let Some(axis) = self.supercell.iter().position(|&n| n == 0) {
      return Err(SpiralError::invalid(format!(
        "supercell extent along axis {} must be positive, got {:?}",
        axis, self.supercell
      )));
    }
    if self.site_count().is_none() {
      return Err(SpiralError::invalid(format!(
        "supercell {:?} has too many sites",
        self.supercell
      )));
    }
    if self.wave_vector.iter().any(|v| !v.is_finite()) {
      return Err(SpiralError::invalid(format!(
        "wave vector must be finite, got {:?}",
        self.wave_vector
      )));
    }
    if self.initial_moment.iter().any(|v| !v.is_finite()) {
      return Err(SpiralError::invalid(format!(
        "initial moment must be finite, got {:?}",
        self.initial_moment
      )));
    }
    if !(self.scale.is_finite() && self.scale > 0.0) {
      return Err(SpiralError::invalid(format!(
        "scale must be a positive number, got {}",
        self.scale
      )));
    }
    if self.filename.trim().is_empty() {
      return Err(SpiralError::invalid("output filename is empty"));
    }
    self.atomic_number().map(|_| ())
  }

  pub fn load_from(path: &Path) -> Result<Self, SpiralError> {
    let file = File::open(path).map_err(|e| SpiralError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| SpiralError::ConfigFormat {
      path: path.to_path_buf(),
      source: e,
    })
  }

  pub fn save_to(&self, path: &Path) -> Result<(), SpiralError> {
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent).map_err(|e| SpiralError::io(parent, e))?;
      }
    }
    let file = File::create(path).map_err(|e| SpiralError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, self).map_err(|e| SpiralError::ConfigFormat {
      path: path.to_path_buf(),
      source: e,
    })?;
    writer.flush().map_err(|e| SpiralError::io(path, e))
  }

  /// Loads config from standard OS location (e.g., ~/.config/mspiral/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match Self::load_from(&path) {
        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
        Err(e) => (Self::default(), format!("{}. Using defaults.", e)),
      }
    } else {
      (Self::default(), "No config found. Using defaults.".to_string())
    }
  }

  /// Standard OS location of the settings file, used by `load` and `--save-config`
  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mspiral", "mspiral") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
