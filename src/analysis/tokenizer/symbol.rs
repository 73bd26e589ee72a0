//! Symbol-preserving tokenizer implementation.
//!
//! Splits on whitespace like [`WhitespaceTokenizer`], but additionally
//! carves a configured set of preserved symbols out of the words they are
//! fused to. OCR output frequently glues honorific ligatures and similar
//! symbols onto neighboring words; the aligner needs them as atomic tokens.

use super::Tokenizer;
use super::whitespace::WhitespaceTokenizer;

use crate::analysis::token::Token;
use crate::error::{MuqabalaError, Result};

/// A tokenizer that emits each preserved symbol as its own token, even when
/// the symbol is not whitespace-bounded.
///
/// No character is dropped or duplicated: the neighbors of a carved symbol
/// become separate tokens on either side of it.
///
/// # Examples
///
/// ```
/// use muqabala::analysis::tokenizer::{SymbolTokenizer, Tokenizer};
///
/// let tokenizer = SymbolTokenizer::new(["ﷺ"]).unwrap();
/// let tokens = tokenizer.tokenize("محمدﷺ رسول").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["محمد", "ﷺ", "رسول"]);
/// ```
#[derive(Clone, Debug)]
pub struct SymbolTokenizer {
    symbols: Vec<String>,
}

impl SymbolTokenizer {
    /// Create a new symbol tokenizer with the given preserved symbols.
    ///
    /// Returns an error if any symbol is empty: an empty preserved symbol
    /// would match everywhere and produce an unbounded token stream.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.iter().any(|s| s.is_empty()) {
            return Err(MuqabalaError::analysis(
                "preserved symbols must not be empty",
            ));
        }
        Ok(SymbolTokenizer { symbols })
    }

    /// Get the preserved symbols of this tokenizer.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Find the leftmost preserved-symbol occurrence in `text`.
    ///
    /// When two symbols match at the same offset the longer one wins, so a
    /// symbol that is a prefix of another never shadows it.
    fn find_symbol(&self, text: &str) -> Option<(usize, usize)> {
        let mut found: Option<(usize, usize)> = None;
        for symbol in &self.symbols {
            if let Some(offset) = text.find(symbol.as_str()) {
                let candidate = (offset, symbol.len());
                found = match found {
                    None => Some(candidate),
                    Some(best) => {
                        if offset < best.0 || (offset == best.0 && symbol.len() > best.1) {
                            Some(candidate)
                        } else {
                            Some(best)
                        }
                    }
                };
            }
        }
        found
    }

    /// Carve preserved symbols out of a single whitespace-bounded word.
    fn carve(&self, word: &Token, tokens: &mut Vec<Token>, position: &mut usize) {
        let mut rest = word.text.as_str();
        let mut offset = word.start_offset;

        while let Some((start, len)) = self.find_symbol(rest) {
            if start > 0 {
                tokens.push(Token::with_offsets(
                    &rest[..start],
                    *position,
                    offset,
                    offset + start,
                ));
                *position += 1;
            }
            tokens.push(Token::with_offsets(
                &rest[start..start + len],
                *position,
                offset + start,
                offset + start + len,
            ));
            *position += 1;
            offset += start + len;
            rest = &rest[start + len..];
        }

        if !rest.is_empty() {
            tokens.push(Token::with_offsets(
                rest,
                *position,
                offset,
                offset + rest.len(),
            ));
            *position += 1;
        }
    }
}

impl Tokenizer for SymbolTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let words = WhitespaceTokenizer::new().tokenize(text)?;
        if self.symbols.is_empty() {
            return Ok(words);
        }

        let mut tokens = Vec::with_capacity(words.len());
        let mut position = 0;
        for word in &words {
            self.carve(word, &mut tokens, &mut position);
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "symbol"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_plain_text_matches_whitespace_tokenizer() {
        let tokenizer = SymbolTokenizer::new(["ﷺ"]).unwrap();
        let tokens = tokenizer.tokenize("hello world").unwrap();
        assert_eq!(texts(&tokens), ["hello", "world"]);
    }

    #[test]
    fn test_fused_symbol_is_carved() {
        let tokenizer = SymbolTokenizer::new(["ﷺ"]).unwrap();
        let tokens = tokenizer.tokenize("محمدﷺرسول").unwrap();
        assert_eq!(texts(&tokens), ["محمد", "ﷺ", "رسول"]);
    }

    #[test]
    fn test_symbol_alone_is_unchanged() {
        let tokenizer = SymbolTokenizer::new(["ﷺ"]).unwrap();
        let tokens = tokenizer.tokenize("محمد ﷺ").unwrap();
        assert_eq!(texts(&tokens), ["محمد", "ﷺ"]);
    }

    #[test]
    fn test_repeated_symbols_in_one_word() {
        let tokenizer = SymbolTokenizer::new(["*"]).unwrap();
        let tokens = tokenizer.tokenize("a*b*c").unwrap();
        assert_eq!(texts(&tokens), ["a", "*", "b", "*", "c"]);
    }

    #[test]
    fn test_offsets_survive_carving() {
        let tokenizer = SymbolTokenizer::new(["*"]).unwrap();
        let tokens = tokenizer.tokenize("ab*cd").unwrap();
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 2);
        assert_eq!(tokens[1].start_offset, 2);
        assert_eq!(tokens[1].end_offset, 3);
        assert_eq!(tokens[2].start_offset, 3);
        assert_eq!(tokens[2].end_offset, 5);
    }

    #[test]
    fn test_no_character_dropped_or_duplicated() {
        let tokenizer = SymbolTokenizer::new(["ﷺ", "*"]).unwrap();
        let input = "قالﷺ*ثم قام";
        let tokens = tokenizer.tokenize(input).unwrap();
        let rejoined: String = texts(&tokens).concat();
        let without_spaces: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rejoined, without_spaces);
    }

    #[test]
    fn test_longest_symbol_wins_at_same_offset() {
        let tokenizer = SymbolTokenizer::new(["(", "(("]).unwrap();
        let tokens = tokenizer.tokenize("((x").unwrap();
        assert_eq!(texts(&tokens), ["((", "x"]);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert!(SymbolTokenizer::new([""]).is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SymbolTokenizer::new(["x"]).unwrap().name(), "symbol");
    }
}
