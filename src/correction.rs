//! The correction pipeline: turn (original, reference) text pairs into
//! corrected output.
//!
//! The reference transcript is the trusted correction of a noisy OCR
//! original. [`correct`] aligns the two token streams and reconciles each
//! aligned pair, applying the footnote rules of [`crate::footnote`] before
//! falling back to similarity-based selection. [`align_segments`] regroups
//! out-of-order OCR segments onto target line boundaries, and
//! [`correct_lines`] runs the pipeline over footnote-flagged line pairs.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::alignment::align;
use crate::analysis::tokenizer::{SymbolTokenizer, Tokenizer};
use crate::error::Result;
use crate::footnote;
use crate::scoring::{alignment_score, similarity_ratio};

/// Configuration for the correction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Symbols tokenized atomically even when fused to neighboring text,
    /// e.g. honorific ligatures the reference uses where the original
    /// spells the phrase out.
    pub typo_symbols: Vec<String>,
    /// Ratio at or above which two tokens count as variants of the same
    /// word.
    pub similarity_threshold: f64,
    /// Ratio at or above which the reference token is a confirmed
    /// correction of the original token.
    pub high_similarity_threshold: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            typo_symbols: Vec::new(),
            similarity_threshold: 0.5,
            high_similarity_threshold: 0.8,
        }
    }
}

/// A line tagged by the footnote convention: a line whose first token is a
/// footnote marker belongs to the footnote block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteLine {
    /// Whether the line is part of the footnote block.
    pub is_footnote: bool,
    /// The trimmed line content.
    pub text: String,
}

impl FootnoteLine {
    /// Create a line with an explicit footnote flag; the text is trimmed.
    pub fn new<S: Into<String>>(is_footnote: bool, text: S) -> Self {
        FootnoteLine {
            is_footnote,
            text: text.into().trim().to_string(),
        }
    }

    /// Classify a raw line by the marker-prefix convention.
    pub fn from_line(line: &str) -> Self {
        let text = line.trim();
        let is_footnote = text
            .split_whitespace()
            .next()
            .is_some_and(footnote::is_marker);
        FootnoteLine {
            is_footnote,
            text: text.to_string(),
        }
    }
}

/// Merge a noisy original line with its reference correction.
///
/// Both inputs are tokenized with `typo_symbols` preserved, aligned
/// globally, and reconciled pair by pair:
///
/// 1. a token chosen for emission first attempts footnote fusion with the
///    previously emitted token;
/// 2. when both sides are present, embedded-marker selection, then
///    standalone pairing, then the similarity fallback decide the winner:
///    the reference wins confirmed corrections (ratio at or above
///    `high_similarity_threshold`) and unrelated tokens (ratio below
///    `similarity_threshold`), the original wins the band between;
/// 3. a reference token facing a gap is kept; an original token facing a
///    gap is kept only when it carries marker or preserved-symbol
///    information, and is otherwise dropped as uncorroborated OCR content.
///
/// # Examples
///
/// ```
/// use muqabala::correction::{CorrectionConfig, correct};
///
/// let config = CorrectionConfig {
///     typo_symbols: vec!["ﷺ".to_string()],
///     ..CorrectionConfig::default()
/// };
/// let corrected = correct(
///     "محمد صلى الله عليه وسلم رسول الله",
///     "محمد ﷺ رسول الله",
///     &config,
/// )
/// .unwrap();
/// assert_eq!(corrected, "محمد ﷺ رسول الله");
/// ```
pub fn correct(original: &str, reference: &str, config: &CorrectionConfig) -> Result<String> {
    let tokenizer = SymbolTokenizer::new(config.typo_symbols.iter().cloned())?;
    let left = tokenizer.tokenize(original)?;
    let right = tokenizer.tokenize(reference)?;

    let pairs = align(
        &left,
        &right,
        &config.typo_symbols,
        config.similarity_threshold,
    );
    let symbols: AHashSet<&str> = config.typo_symbols.iter().map(String::as_str).collect();

    let mut result: Vec<String> = Vec::new();
    for pair in &pairs {
        match (&pair.left, &pair.right) {
            (Some(left_token), Some(right_token)) => {
                if let Some(selected) = footnote::select_embedded(&left_token.text, &right_token.text)
                {
                    emit(&mut result, selected);
                } else if let Some(ordered) =
                    footnote::pair_standalone(&left_token.text, &right_token.text)
                {
                    for token in ordered {
                        emit(&mut result, token);
                    }
                } else {
                    let ratio = similarity_ratio(&left_token.text, &right_token.text);
                    if ratio >= config.high_similarity_threshold {
                        emit(&mut result, &right_token.text);
                    } else if ratio >= config.similarity_threshold {
                        emit(&mut result, &left_token.text);
                    } else {
                        emit(&mut result, &right_token.text);
                    }
                }
            }
            (Some(left_token), None) => {
                if footnote::is_marker(&left_token.text)
                    || symbols.contains(left_token.text.as_str())
                {
                    emit(&mut result, &left_token.text);
                }
            }
            (None, Some(right_token)) => emit(&mut result, &right_token.text),
            (None, None) => {}
        }
    }

    Ok(result.join(" "))
}

/// Correct paired lines, respecting footnote boundaries.
///
/// Lines are paired positionally; a pair is corrected only when both sides
/// agree on the footnote flag, otherwise the original line passes through
/// unchanged. Original lines beyond the reference also pass through.
pub fn correct_lines(
    original: &[FootnoteLine],
    reference: &[FootnoteLine],
    config: &CorrectionConfig,
) -> Result<Vec<String>> {
    let mut corrected = Vec::with_capacity(original.len());
    for (index, line) in original.iter().enumerate() {
        match reference.get(index) {
            Some(reference_line) if reference_line.is_footnote == line.is_footnote => {
                corrected.push(correct(&line.text, &reference_line.text, config)?);
            }
            _ => corrected.push(line.text.clone()),
        }
    }
    Ok(corrected)
}

/// Regroup OCR `segments` onto `target_lines` boundaries.
///
/// Every (line, segment) pair is scored with the line-granularity alignment
/// reward and each segment goes to its best-scoring line, earliest line on
/// ties. Lines carry no capacity limit, so per-segment assignment is the
/// exact maximizer of the cumulative score. A line's segments are
/// concatenated in their original order; lines no segment reaches come back
/// empty. The output length always equals `target_lines.len()`.
pub fn align_segments(
    target_lines: &[String],
    segments: &[String],
    config: &CorrectionConfig,
) -> Vec<String> {
    if target_lines.is_empty() {
        return Vec::new();
    }

    let mut assigned: Vec<Vec<usize>> = vec![Vec::new(); target_lines.len()];
    for (segment_index, segment) in segments.iter().enumerate() {
        let mut best_line = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (line_index, line) in target_lines.iter().enumerate() {
            let score = alignment_score(
                line,
                segment,
                &config.typo_symbols,
                config.similarity_threshold,
            );
            if score > best_score {
                best_score = score;
                best_line = line_index;
            }
        }
        assigned[best_line].push(segment_index);
    }

    assigned
        .into_iter()
        .map(|segment_indices| {
            segment_indices
                .into_iter()
                .map(|i| segments[i].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn emit(result: &mut Vec<String>, token: &str) {
    if let Some(previous) = result.last().cloned() {
        if footnote::fuse(result, &previous, token) {
            return;
        }
    }
    result.push(token.to_string());
}
