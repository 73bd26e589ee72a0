//! Randomized property checks for the distance, scoring, and alignment
//! contracts.

use rand::Rng;

use muqabala::alignment::align;
use muqabala::analysis::normalize::{NormalizationPreset, normalize};
use muqabala::analysis::token::Token;
use muqabala::distance::{bounded_distance, distance};
use muqabala::scoring::{alignment_score, similarity_ratio};

const ALPHABET: [char; 14] = [
    'ا', 'ب', 'ت', 'ق', 'ل', 'م', 'ن', 'و', 'ي', 'a', 'b', 'c', '٥', '5',
];

fn random_word(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

fn random_tokens(rng: &mut impl Rng, max_tokens: usize) -> Vec<Token> {
    let count = rng.random_range(0..=max_tokens);
    (0..count)
        .map(|i| {
            let mut word = random_word(rng, 6);
            if word.is_empty() {
                word.push('ا');
            }
            Token::new(word, i)
        })
        .collect()
}

#[test]
fn bounded_distance_equals_unbounded_up_to_sentinel() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let a = random_word(&mut rng, 12);
        let b = random_word(&mut rng, 12);
        let k = rng.random_range(0..6);

        let expected = distance(&a, &b).min(k + 1);
        assert_eq!(bounded_distance(&a, &b, k), expected, "{a:?} vs {b:?}, k={k}");
    }
}

#[test]
fn distance_is_a_metric_on_random_words() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let a = random_word(&mut rng, 10);
        let b = random_word(&mut rng, 10);
        let c = random_word(&mut rng, 10);

        assert_eq!(distance(&a, &a), 0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        // Triangle inequality.
        assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }
}

#[test]
fn similarity_ratio_stays_in_unit_interval() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let a = random_word(&mut rng, 10);
        let b = random_word(&mut rng, 10);
        let ratio = similarity_ratio(&a, &b);
        assert!((0.0..=1.0).contains(&ratio), "{a:?} vs {b:?} -> {ratio}");
    }
}

#[test]
fn alignment_score_contract() {
    let mut rng = rand::rng();
    let threshold = 0.5;
    for _ in 0..200 {
        let a = random_word(&mut rng, 8);
        let b = random_word(&mut rng, 8);

        let forward = alignment_score(&a, &b, &[], threshold);
        let backward = alignment_score(&b, &a, &[], threshold);
        assert_eq!(forward, backward, "symmetry for {a:?} vs {b:?}");

        let ratio = similarity_ratio(&a, &b);
        if ratio >= threshold {
            assert!(forward > 0.0, "{a:?} vs {b:?}: ratio {ratio} -> {forward}");
        } else {
            assert!(forward < 0.0, "{a:?} vs {b:?}: ratio {ratio} -> {forward}");
        }
    }
}

#[test]
fn self_alignment_is_gap_free() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let tokens = random_tokens(&mut rng, 8);
        let pairs = align(&tokens, &tokens, &[], 0.5);

        assert_eq!(pairs.len(), tokens.len());
        assert!(pairs.iter().all(|p| p.is_match()));
    }
}

#[test]
fn alignment_never_pairs_two_gaps() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_tokens(&mut rng, 8);
        let b = random_tokens(&mut rng, 8);
        let pairs = align(&a, &b, &[], 0.5);

        assert!(pairs.iter().all(|p| p.left.is_some() || p.right.is_some()));

        // Every input token appears exactly once, in order.
        let lefts: Vec<&Token> = pairs.iter().filter_map(|p| p.left.as_ref()).collect();
        let rights: Vec<&Token> = pairs.iter().filter_map(|p| p.right.as_ref()).collect();
        assert_eq!(lefts.len(), a.len());
        assert_eq!(rights.len(), b.len());
    }
}

#[test]
fn normalization_is_idempotent_on_random_input() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let words: Vec<String> = (0..rng.random_range(0..5))
            .map(|_| random_word(&mut rng, 8))
            .collect();
        let text = words.join(" ");

        for preset in [
            NormalizationPreset::Display,
            NormalizationPreset::Search,
            NormalizationPreset::Aggressive,
        ] {
            let once = normalize(&text, preset);
            assert_eq!(normalize(&once, preset), once, "{preset:?} on {text:?}");
        }
    }
}
