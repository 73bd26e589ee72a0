//! Quote and bracket balance checking.
//!
//! Scanned lines often lose one half of a bracket pair. This check runs
//! upstream of alignment to reject malformed lines; the alignment engine
//! itself never calls it.

use serde::{Deserialize, Serialize};

/// Why a character is reported as unbalanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceErrorKind {
    /// An opener with no matching closer.
    UnmatchedOpener,
    /// A closer with no matching opener.
    UnmatchedCloser,
}

/// A single balance violation, positioned by character index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceError {
    /// Character (not byte) index of the offending character.
    pub position: usize,
    /// The offending character.
    pub character: char,
    /// Opener or closer.
    pub kind: BalanceErrorKind,
}

const PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('«', '»')];

fn closer_for(open: char) -> Option<char> {
    PAIRS.iter().find(|(o, _)| *o == open).map(|(_, c)| *c)
}

fn is_closer(c: char) -> bool {
    PAIRS.iter().any(|(_, close)| *close == c)
}

/// Report every unmatched bracket or straight double quote in `text`,
/// ordered by position.
pub fn check_balance(text: &str) -> Vec<BalanceError> {
    let mut errors = Vec::new();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut open_quote: Option<usize> = None;

    for (position, c) in text.chars().enumerate() {
        if c == '"' {
            open_quote = match open_quote {
                Some(_) => None,
                None => Some(position),
            };
        } else if closer_for(c).is_some() {
            stack.push((c, position));
        } else if is_closer(c) {
            match stack.last() {
                Some((open, _)) if closer_for(*open) == Some(c) => {
                    stack.pop();
                }
                _ => errors.push(BalanceError {
                    position,
                    character: c,
                    kind: BalanceErrorKind::UnmatchedCloser,
                }),
            }
        }
    }

    for (open, position) in stack {
        errors.push(BalanceError {
            position,
            character: open,
            kind: BalanceErrorKind::UnmatchedOpener,
        });
    }
    if let Some(position) = open_quote {
        errors.push(BalanceError {
            position,
            character: '"',
            kind: BalanceErrorKind::UnmatchedOpener,
        });
    }

    errors.sort_by_key(|e| e.position);
    errors
}
