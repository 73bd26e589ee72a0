//! Footnote-marker classification and reconciliation.
//!
//! OCR fragments footnote markers in predictable ways: a bare marker `(٥)`
//! followed by the word it belongs to, or the marker fused onto that word as
//! `(٥)أخرجه`, or both forms side by side. The fusion, selection, and
//! standalone-pairing rules here merge those variants during correction.
//!
//! All three rules consume the same classifier, [`classify`], so there is a
//! single definition of what counts as a marker.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::normalize::fold_digits;

lazy_static! {
    /// A parenthesized digit run (Arabic-Indic, extended Arabic-Indic, or
    /// Western), with whatever is fused after it captured separately.
    static ref MARKER: Regex =
        Regex::new(r"^\(([0-9٠-٩۰-۹]+)\)(.*)$").expect("marker pattern should be valid");
}

/// Classification of one token with respect to footnote markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerClass {
    /// Ordinary text.
    NotAMarker,
    /// A marker with nothing fused onto it beyond at most one trailing
    /// letter or punctuation mark, e.g. `(٥)` or `(٥)،`.
    Standalone {
        /// Digit run, folded to Western digits.
        digits: String,
    },
    /// A marker with further text concatenated directly onto it with no
    /// separating space, e.g. `(٥)أخرجه`.
    Embedded {
        /// Digit run, folded to Western digits.
        digits: String,
        /// The fused text after the closing parenthesis.
        trailing: String,
    },
}

/// Classify `token` as a standalone marker, an embedded marker, or ordinary
/// text.
///
/// Digit runs are folded to Western digits so `(٥)` and `(5)` compare equal
/// across the reconciliation rules.
pub fn classify(token: &str) -> MarkerClass {
    let Some(captures) = MARKER.captures(token) else {
        return MarkerClass::NotAMarker;
    };
    let digits = fold_digits(&captures[1]);
    let rest = &captures[2];

    let mut rest_graphemes = rest.graphemes(true);
    match (rest_graphemes.next(), rest_graphemes.next()) {
        (None, _) => MarkerClass::Standalone { digits },
        (Some(suffix), None) if !suffix.chars().all(|c| c.is_numeric()) => {
            MarkerClass::Standalone { digits }
        }
        _ => MarkerClass::Embedded {
            digits,
            trailing: rest.to_string(),
        },
    }
}

/// Whether `token` is a footnote marker of either kind.
pub fn is_marker(token: &str) -> bool {
    classify(token) != MarkerClass::NotAMarker
}

/// Fuse `current` into the already-emitted output when it and `previous`
/// are two renditions of the same marker.
///
/// `result` is only ever mutated by replacing its last element (assumed
/// equal to `previous`) or by leaving it untouched; nothing is inserted.
/// Returns whether a fusion rule applied:
///
/// - standalone `(d)` followed by embedded `(d)word`: the embedded form
///   carries strictly more information and replaces the bare marker;
/// - embedded `(d)word` followed by standalone `(d)`: the trailing bare
///   marker is a duplicate artifact and is swallowed;
/// - anything else, including a digit mismatch between two markers, fails.
pub fn fuse(result: &mut Vec<String>, previous: &str, current: &str) -> bool {
    match (classify(previous), classify(current)) {
        (
            MarkerClass::Standalone {
                digits: previous_digits,
            },
            MarkerClass::Embedded {
                digits: current_digits,
                ..
            },
        ) if previous_digits == current_digits => match result.last_mut() {
            Some(last) => {
                *last = current.to_string();
                true
            }
            None => false,
        },
        (
            MarkerClass::Embedded {
                digits: previous_digits,
                ..
            },
            MarkerClass::Standalone {
                digits: current_digits,
            },
        ) if previous_digits == current_digits => true,
        _ => false,
    }
}

/// Choose between two competing tokens when at least one is an embedded
/// marker.
///
/// Returns `None` when neither token is an embedded marker. When both are,
/// the shorter one (by grapheme count) wins, ties going to `a`; OCR tends
/// to smear extra material onto the longer variant. Digit equality between
/// the two is not required.
pub fn select_embedded<'a>(a: &'a str, b: &'a str) -> Option<&'a str> {
    let a_embedded = matches!(classify(a), MarkerClass::Embedded { .. });
    let b_embedded = matches!(classify(b), MarkerClass::Embedded { .. });

    match (a_embedded, b_embedded) {
        (false, false) => None,
        (true, false) => Some(a),
        (false, true) => Some(b),
        (true, true) => {
            if grapheme_len(b) < grapheme_len(a) {
                Some(b)
            } else {
                Some(a)
            }
        }
    }
}

/// Order a standalone marker ahead of the ordinary token it travels with.
///
/// - Exactly one token is a standalone marker and the other is ordinary
///   text: `[marker, other]`, marker first regardless of input order.
/// - Both are standalone markers: the shorter one alone.
/// - Neither is a standalone marker: `None`.
pub fn pair_standalone<'a>(a: &'a str, b: &'a str) -> Option<Vec<&'a str>> {
    let class_a = classify(a);
    let class_b = classify(b);
    let a_standalone = matches!(class_a, MarkerClass::Standalone { .. });
    let b_standalone = matches!(class_b, MarkerClass::Standalone { .. });

    match (a_standalone, b_standalone) {
        (true, true) => {
            let shorter = if grapheme_len(b) < grapheme_len(a) { b } else { a };
            Some(vec![shorter])
        }
        (true, false) if class_b == MarkerClass::NotAMarker => Some(vec![a, b]),
        (false, true) if class_a == MarkerClass::NotAMarker => Some(vec![b, a]),
        _ => None,
    }
}

fn grapheme_len(token: &str) -> usize {
    token.graphemes(true).count()
}
