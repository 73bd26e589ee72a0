//! Backtracking an [`AlignmentMatrix`] into ordered aligned pairs.

use serde::{Deserialize, Serialize};

use crate::alignment::matrix::{AlignmentMatrix, Direction};
use crate::analysis::token::Token;

/// One position of the reconstructed alignment.
///
/// At most one side is `None` (a gap); never both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Token contributed by the left sequence, if any.
    pub left: Option<Token>,
    /// Token contributed by the right sequence, if any.
    pub right: Option<Token>,
}

impl AlignedPair {
    /// Whether both sequences contributed a token at this position.
    pub fn is_match(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Whether one side of this pair is a gap.
    pub fn has_gap(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }
}

/// Walk the matrix directions from `(|A|, |B|)` back to the origin and
/// return the aligned pairs in left-to-right order.
pub fn backtrack(matrix: &AlignmentMatrix, a: &[Token], b: &[Token]) -> Vec<AlignedPair> {
    let mut pairs = Vec::with_capacity(a.len().max(b.len()));
    let mut i = a.len();
    let mut j = b.len();

    while i > 0 || j > 0 {
        match matrix.cell(i, j).direction {
            Direction::Diagonal => {
                pairs.push(AlignedPair {
                    left: Some(a[i - 1].clone()),
                    right: Some(b[j - 1].clone()),
                });
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                pairs.push(AlignedPair {
                    left: Some(a[i - 1].clone()),
                    right: None,
                });
                i -= 1;
            }
            Direction::Left => {
                pairs.push(AlignedPair {
                    left: None,
                    right: Some(b[j - 1].clone()),
                });
                j -= 1;
            }
            Direction::None => break,
        }
    }

    pairs.reverse();
    pairs
}
