//! Fuzzy excerpt search over multi-line documents.
//!
//! Locates which page a noisy OCR excerpt belongs to. Containment of the
//! Search-normalized excerpt is a perfect score; everything else falls back
//! to normalized similarity, with [`bounded_distance`] pruning pages that
//! cannot reach the relevance floor before any full distance is computed.

use serde::{Deserialize, Serialize};

use crate::analysis::normalize::{NormalizationPreset, normalize};
use crate::distance::bounded_distance;

/// One page scored against an excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMatch {
    /// Index of the page in the input slice.
    pub index: usize,
    /// Relevance score in `[0, 1]`.
    pub score: f64,
}

/// Find the single best-matching page for `excerpt`.
///
/// Ties break toward the earliest page index. Returns `None` only when
/// `pages` is empty.
pub fn find_best_match(pages: &[String], excerpt: &str) -> Option<PageMatch> {
    let excerpt_normalized = normalize(excerpt, NormalizationPreset::Search);

    let mut best: Option<PageMatch> = None;
    for (index, page) in pages.iter().enumerate() {
        let score = page_score(page, &excerpt_normalized);
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(PageMatch { index, score });
        }
    }
    best
}

/// Find every page scoring at least `min_score` against `excerpt`, sorted
/// by descending score, then ascending page index.
pub fn find_all_matches(pages: &[String], excerpt: &str, min_score: f64) -> Vec<PageMatch> {
    let excerpt_normalized = normalize(excerpt, NormalizationPreset::Search);

    let mut matches = Vec::new();
    for (index, page) in pages.iter().enumerate() {
        let page_normalized = normalize(page, NormalizationPreset::Search);
        if page_normalized.contains(&excerpt_normalized) {
            matches.push(PageMatch { index, score: 1.0 });
            continue;
        }

        let max_len = page_normalized
            .chars()
            .count()
            .max(excerpt_normalized.chars().count());
        if max_len == 0 {
            matches.push(PageMatch { index, score: 1.0 });
            continue;
        }

        // Distances above this cutoff cannot reach the floor; the banded
        // variant stops early for them.
        let cutoff = ((1.0 - min_score.clamp(0.0, 1.0)) * max_len as f64).floor() as usize;
        let distance = bounded_distance(&page_normalized, &excerpt_normalized, cutoff);
        if distance > cutoff {
            continue;
        }
        let score = 1.0 - distance as f64 / max_len as f64;
        if score >= min_score {
            matches.push(PageMatch { index, score });
        }
    }

    matches.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    matches
}

fn page_score(page: &str, excerpt_normalized: &str) -> f64 {
    let page_normalized = normalize(page, NormalizationPreset::Search);
    if page_normalized.contains(excerpt_normalized) {
        return 1.0;
    }
    let max_len = page_normalized
        .chars()
        .count()
        .max(excerpt_normalized.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = crate::distance::distance(&page_normalized, excerpt_normalized);
    1.0 - distance as f64 / max_len as f64
}
