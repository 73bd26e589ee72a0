//! # Muqabala
//!
//! A token alignment and OCR correction library for Arabic and mixed-script
//! text, named after the manuscript-collation practice of reading a copy
//! against its exemplar.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Whitespace and symbol-preserving tokenizers
//! - Levenshtein distance, full and cutoff-banded
//! - Global sequence alignment with backtracking
//! - Footnote-marker reconciliation (fusion, selection, pairing)
//! - Correction pipeline, segment regrouping, and fuzzy excerpt search
//!
//! Every public operation is a pure, synchronous function of its inputs;
//! the crate holds no cross-call state.

pub mod alignment;
pub mod analysis;
pub mod correction;
pub mod distance;
pub mod error;
pub mod footnote;
pub mod scoring;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
