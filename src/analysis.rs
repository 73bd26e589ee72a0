//! Text analysis: tokenization, normalization, and character statistics.
//!
//! This module prepares raw OCR lines for the alignment engine. Tokenizers
//! split a line into [`token::Token`]s, the normalizer applies preset-driven
//! character cleanup, and the composition/balance helpers classify fragments
//! before they reach alignment.

pub mod balance;
pub mod composition;
pub mod normalize;
pub mod token;
pub mod tokenizer;

pub use balance::{BalanceError, BalanceErrorKind, check_balance};
pub use composition::CharComposition;
pub use normalize::{NormalizationPreset, normalize};
pub use token::Token;
pub use tokenizer::{SymbolTokenizer, Tokenizer, WhitespaceTokenizer};
