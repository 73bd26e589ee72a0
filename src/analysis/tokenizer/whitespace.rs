//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::Token;
use crate::error::Result;

/// A tokenizer that splits text on runs of whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(token_start) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[token_start..offset],
                        position,
                        token_start,
                        offset,
                    ));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(token_start) = start {
            tokens.push(Token::with_offsets(
                &text[token_start..],
                position,
                token_start,
                text.len(),
            ));
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
