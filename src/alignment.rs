//! Global sequence alignment over token sequences.
//!
//! A Needleman–Wunsch style dynamic program: [`matrix::AlignmentMatrix`]
//! holds the scoring grid with per-cell backtrack directions, and
//! [`backtrack::backtrack`] reconstructs the ordered list of
//! [`backtrack::AlignedPair`]s from it.
//!
//! The full `O(|A|·|B|)` grid is kept on purpose: reconstruction needs the
//! direction history, unlike the rolling-row distance routine in
//! [`crate::distance`]. For bulk matching over large inputs, prefer
//! [`crate::distance::bounded_distance`].

pub mod backtrack;
pub mod matrix;

pub use backtrack::{AlignedPair, backtrack};
pub use matrix::{AlignmentCell, AlignmentMatrix, Direction};

use crate::analysis::token::Token;

/// Align two token sequences and return the ordered aligned pairs.
///
/// `symbols` and `threshold` parameterize the pair reward; see
/// [`crate::scoring::alignment_score`].
///
/// # Examples
///
/// ```
/// use muqabala::alignment::align;
/// use muqabala::analysis::token::Token;
///
/// let a = vec![Token::new("قال", 0), Token::new("الشيخ", 1)];
/// let b = vec![Token::new("قال", 0)];
/// let pairs = align(&a, &b, &[], 0.5);
///
/// assert_eq!(pairs.len(), 2);
/// assert!(pairs[0].is_match());
/// assert!(pairs[1].right.is_none());
/// ```
pub fn align(a: &[Token], b: &[Token], symbols: &[String], threshold: f64) -> Vec<AlignedPair> {
    let matrix = AlignmentMatrix::build(a, b, symbols, threshold);
    backtrack(&matrix, a, b)
}
