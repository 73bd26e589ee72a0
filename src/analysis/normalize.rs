//! Preset-driven text normalization.
//!
//! OCR sources disagree on diacritics, alef forms, and digit scripts; the
//! similarity scorer compares texts after normalizing both sides with the
//! same preset. Every preset is idempotent, and none of them lengthens a
//! digit sequence.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Arabic diacritics (tashkeel) and the dagger alef.
    static ref DIACRITICS: Regex =
        Regex::new("[\u{064B}-\u{0652}\u{0670}]").expect("diacritics pattern should be valid");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern should be valid");
}

/// How much character cleanup to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationPreset {
    /// Whitespace collapse, control-character and tatweel removal only.
    Display,
    /// [`Display`](NormalizationPreset::Display) plus diacritic removal,
    /// alef/ya folding, and digit unification. The preset the similarity
    /// scorer uses.
    Search,
    /// [`Search`](NormalizationPreset::Search) plus ta-marbuta and hamza
    /// folding and punctuation removal.
    Aggressive,
}

/// Normalize `text` according to `preset`.
///
/// # Examples
///
/// ```
/// use muqabala::analysis::normalize::{NormalizationPreset, normalize};
///
/// let cleaned = normalize("مُحَمَّد", NormalizationPreset::Search);
/// assert_eq!(cleaned, "محمد");
/// ```
pub fn normalize(text: &str, preset: NormalizationPreset) -> String {
    let mut out: String = text
        .chars()
        .filter(|c| !c.is_control() && *c != '\u{0640}')
        .collect();

    match preset {
        NormalizationPreset::Display => {}
        NormalizationPreset::Search => {
            out = search_pass(&out);
        }
        NormalizationPreset::Aggressive => {
            out = search_pass(&out);
            out = out
                .chars()
                .filter(|c| !is_stripped_punctuation(*c))
                .map(fold_aggressive_char)
                .collect();
        }
    }

    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Fold Arabic-Indic and extended Arabic-Indic digits to Western digits.
///
/// One character in, one character out: a digit sequence never changes
/// length under this mapping.
pub fn fold_digits(text: &str) -> String {
    text.chars().map(fold_digit_char).collect()
}

fn search_pass(text: &str) -> String {
    let stripped = DIACRITICS.replace_all(text, "");
    stripped.chars().map(fold_search_char).collect()
}

fn fold_digit_char(c: char) -> char {
    match c {
        '٠'..='٩' => char::from(b'0' + (c as u32 - 0x0660) as u8),
        '۰'..='۹' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
        _ => c,
    }
}

fn fold_search_char(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
        'ى' => 'ي',
        _ => fold_digit_char(c),
    }
}

fn fold_aggressive_char(c: char) -> char {
    match c {
        'ة' => 'ه',
        'ؤ' => 'و',
        'ئ' => 'ي',
        _ => c,
    }
}

fn is_stripped_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '،' | '؛' | '؟' | '«' | '»' | '…')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_collapses_whitespace() {
        assert_eq!(
            normalize("  قال \t الشيخ  ", NormalizationPreset::Display),
            "قال الشيخ"
        );
    }

    #[test]
    fn test_display_keeps_diacritics() {
        assert_eq!(
            normalize("مُحَمَّد", NormalizationPreset::Display),
            "مُحَمَّد"
        );
    }

    #[test]
    fn test_search_strips_diacritics_and_folds_alef() {
        assert_eq!(normalize("أَحْمَد", NormalizationPreset::Search), "احمد");
        assert_eq!(normalize("إلى", NormalizationPreset::Search), "الي");
    }

    #[test]
    fn test_search_unifies_digits() {
        assert_eq!(normalize("٥ و 5 و ۵", NormalizationPreset::Search), "5 و 5 و 5");
    }

    #[test]
    fn test_aggressive_strips_punctuation() {
        assert_eq!(
            normalize("قال: (نعم)، انتهى.", NormalizationPreset::Aggressive),
            "قال نعم انتهي"
        );
    }

    #[test]
    fn test_aggressive_folds_ta_marbuta() {
        assert_eq!(normalize("مدينة", NormalizationPreset::Aggressive), "مدينه");
    }

    #[test]
    fn test_idempotence() {
        let samples = ["مُحَمَّدٌ رَسُولُ الله", "صفحة ٥٤", "  a  b  (c). "];
        for preset in [
            NormalizationPreset::Display,
            NormalizationPreset::Search,
            NormalizationPreset::Aggressive,
        ] {
            for sample in samples {
                let once = normalize(sample, preset);
                assert_eq!(normalize(&once, preset), once, "{preset:?} on {sample:?}");
            }
        }
    }

    #[test]
    fn test_digit_sequences_never_lengthen() {
        for preset in [
            NormalizationPreset::Display,
            NormalizationPreset::Search,
            NormalizationPreset::Aggressive,
        ] {
            let normalized = normalize("١٢٣٤٥", preset);
            assert!(normalized.chars().count() <= 5);
        }
    }

    #[test]
    fn test_fold_digits() {
        assert_eq!(fold_digits("(٥)"), "(5)");
        assert_eq!(fold_digits("۱۲3"), "123");
    }
}
