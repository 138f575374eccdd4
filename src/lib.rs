//! Magnetic spiral supercell generator.
//!
//! Rotates an initial moment about +z by `2π·(q·r)` at every site of an
//! integer supercell and exports the result as an XSF file with one
//! moment vector per atom, ready for VESTA.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod utils;

pub use config::SpiralConfig;
pub use error::SpiralError;
pub use model::SpiralStructure;

pub type Result<T> = std::result::Result<T, SpiralError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
