//! Edit-distance primitives used across the alignment pipeline.

pub mod levenshtein;

pub use levenshtein::{bounded_distance, distance};
