//! Tokenizer implementations for text analysis.

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod symbol;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use symbol::SymbolTokenizer;
pub use whitespace::WhitespaceTokenizer;
