//src/model/mod.rs
pub mod elements;
pub mod structure;

// Re-exports for cleaner imports
pub use elements::get_atomic_number;
pub use structure::SpiralStructure;
