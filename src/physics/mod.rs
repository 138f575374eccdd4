// src/physics/mod.rs
pub mod spiral;

pub use spiral::{generate, generate_from_config};
