//! Character-composition statistics.
//!
//! A [`CharComposition`] breaks a fragment down into per-script character
//! counts. The alignment engine never computes heuristics of its own on top
//! of the raw text; it reads this structure when deciding whether an aligned
//! fragment is scanner noise rather than content.

use serde::{Deserialize, Serialize};

/// Per-class character counts for a text fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharComposition {
    /// Arabic letters (including presentation forms).
    pub arabic: usize,
    /// Latin letters.
    pub latin: usize,
    /// Digits of any script.
    pub digit: usize,
    /// Punctuation, ASCII and Arabic.
    pub punctuation: usize,
    /// Everything else that is not whitespace.
    pub symbol: usize,
    /// Whitespace characters.
    pub whitespace: usize,
}

impl CharComposition {
    /// Count the characters of `text` into their classes.
    pub fn of(text: &str) -> Self {
        let mut composition = CharComposition::default();
        for c in text.chars() {
            if c.is_whitespace() {
                composition.whitespace += 1;
            } else if c.is_numeric() {
                composition.digit += 1;
            } else if is_punctuation(c) {
                composition.punctuation += 1;
            } else if is_arabic(c) {
                composition.arabic += 1;
            } else if c.is_ascii_alphabetic() {
                composition.latin += 1;
            } else {
                composition.symbol += 1;
            }
        }
        composition
    }

    /// Total number of characters counted.
    pub fn total(&self) -> usize {
        self.arabic + self.latin + self.digit + self.punctuation + self.symbol + self.whitespace
    }

    /// Number of letter characters (Arabic plus Latin).
    pub fn letters(&self) -> usize {
        self.arabic + self.latin
    }

    /// Share of letters among non-whitespace characters, in `[0, 1]`.
    pub fn letter_ratio(&self) -> f64 {
        let visible = self.total() - self.whitespace;
        if visible == 0 {
            return 0.0;
        }
        self.letters() as f64 / visible as f64
    }

    /// Conservative noise heuristic: a fragment dominated by punctuation
    /// and stray symbols rather than letters or digits.
    pub fn looks_like_noise(&self) -> bool {
        let visible = self.total() - self.whitespace;
        visible > 0 && self.letters() + self.digit < self.punctuation + self.symbol
    }
}

fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}' |
        '\u{0750}'..='\u{077F}' |
        '\u{08A0}'..='\u{08FF}' |
        '\u{FB50}'..='\u{FDFF}' |
        '\u{FE70}'..='\u{FEFF}'
    )
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '،' | '؛' | '؟' | '«' | '»' | '…')
}
