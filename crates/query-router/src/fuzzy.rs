//! Fuzzy typo correction against the synonym vocabulary.
//!
//! Misspelled tokens ("facutras", "invocies") are mapped back to known
//! surface forms with a weighted-ratio similarity on a 0-100 scale:
//! the plain edit-distance ratio, a partial ratio for substring-shaped
//! typos (scaled by 0.9), and a token-sort ratio for reordered words
//! (scaled by 0.95), taking the best of the three.
//!
//! Correction failure is a normal outcome, not an error.

use tracing::trace;

use crate::synonyms::SynonymTable;

/// Minimum weighted-ratio score for a correction to be accepted.
/// Inclusive: a score of exactly 80 is accepted.
const MIN_SCORE: u32 = 80;

/// Minimum input length in characters. Shorter tokens produce spurious
/// high-similarity matches against the vocabulary.
const MIN_TOKEN_CHARS: usize = 3;

/// Levenshtein edit distance over characters.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

/// Plain similarity ratio: `(len(a) + len(b) - distance) / (len(a) + len(b))`
/// scaled to 0-100 and rounded. Empty inputs score 0.
fn ratio(a: &str, b: &str) -> u32 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 0;
    }
    let distance = levenshtein(a, b);
    (((total - distance) as f64 / total as f64) * 100.0).round() as u32
}

/// Best ratio of the shorter string against every equal-length window of
/// the longer one. Catches typos of a term embedded in a longer token.
fn partial_ratio(a: &str, b: &str) -> u32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    if short.is_empty() {
        return 0;
    }
    if short.len() == long.len() {
        let short: String = short.into_iter().collect();
        let long: String = long.into_iter().collect();
        return ratio(&short, &long);
    }

    let short: String = short.iter().collect();
    let mut best = 0;
    for window in long.windows(short.chars().count()) {
        let window: String = window.iter().collect();
        best = best.max(ratio(&short, &window));
    }
    best
}

/// Ratio after sorting whitespace-separated tokens, tolerating reordering
/// ("week last" vs "last week").
fn token_sort_ratio(a: &str, b: &str) -> u32 {
    let mut a_tokens: Vec<&str> = a.split_whitespace().collect();
    let mut b_tokens: Vec<&str> = b.split_whitespace().collect();
    a_tokens.sort_unstable();
    b_tokens.sort_unstable();
    ratio(&a_tokens.join(" "), &b_tokens.join(" "))
}

/// Weighted-ratio similarity on a 0-100 scale.
///
/// Takes the best of the plain ratio, the partial ratio scaled by 0.9,
/// and the token-sort ratio scaled by 0.95.
pub fn weighted_ratio(a: &str, b: &str) -> u32 {
    let plain = ratio(a, b);
    let partial = (partial_ratio(a, b) as f64 * 0.9).round() as u32;
    let token_sort = (token_sort_ratio(a, b) as f64 * 0.95).round() as u32;
    plain.max(partial).max(token_sort)
}

/// Corrects misspelled tokens against a synonym table's vocabulary.
#[derive(Debug, Clone)]
pub struct FuzzyCorrector {
    min_score: u32,
    min_token_chars: usize,
}

impl FuzzyCorrector {
    /// Corrector with the standard threshold (80) and length guard (3).
    pub fn new() -> Self {
        Self {
            min_score: MIN_SCORE,
            min_token_chars: MIN_TOKEN_CHARS,
        }
    }

    /// Find the canonical term of the closest vocabulary entry.
    ///
    /// Returns `None` when the token is shorter than the length guard or
    /// no entry meets the threshold. Ties keep the earliest vocabulary
    /// entry, so results are stable across runs.
    pub fn correct<'a>(&self, token: &str, table: &'a SynonymTable) -> Option<&'a str> {
        if token.chars().count() < self.min_token_chars {
            return None;
        }

        let mut best: Option<(u32, &str)> = None;
        for surface in table.vocabulary() {
            let score = weighted_ratio(token, surface);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, surface));
            }
        }

        let (score, surface) = best?;
        if score < self.min_score {
            trace!("No confident correction for '{}' (best {})", token, score);
            return None;
        }
        trace!("Corrected '{}' -> '{}' (score {})", token, surface, score);
        table.normalize(surface)
    }
}

impl Default for FuzzyCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> SynonymTable {
        SynonymTable::with_defaults().unwrap()
    }

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("factura", "factura"), 0);
    }

    #[test]
    fn test_ratio_scale() {
        assert_eq!(ratio("factura", "factura"), 100);
        assert_eq!(ratio("", ""), 0);
        // 5+5 chars, distance 2 -> (10-2)/10 = 80.
        assert_eq!(ratio("sales", "salsa"), 80);
    }

    #[test]
    fn test_weighted_ratio_threshold_boundary() {
        // Exactly at the threshold: accepted downstream.
        assert_eq!(weighted_ratio("salsa", "sales"), 80);
        // One point below: the partial ratio (88 * 0.9) rounds to 79.
        assert_eq!(weighted_ratio("salsa", "sale"), 79);
    }

    #[test]
    fn test_weighted_ratio_token_reordering() {
        let score = weighted_ratio("week last", "last week");
        assert!(score >= 90, "got {score}");
    }

    #[test]
    fn test_correct_exact_match_is_idempotent() {
        let table = default_table();
        let corrector = FuzzyCorrector::new();
        // A vocabulary key corrects to its own canonical mapping.
        assert_eq!(corrector.correct("factura", &table), Some("invoice"));
        assert_eq!(corrector.correct("invoice", &table), Some("invoice"));
        assert_eq!(corrector.correct("ventas", &table), Some("sale"));
    }

    #[test]
    fn test_correct_typo() {
        let table = default_table();
        let corrector = FuzzyCorrector::new();
        assert_eq!(corrector.correct("facturra", &table), Some("invoice"));
        assert_eq!(corrector.correct("invoces", &table), Some("invoice"));
        assert_eq!(corrector.correct("clientte", &table), Some("customer"));
    }

    #[test]
    fn test_correct_rejects_short_tokens() {
        let table = default_table();
        let corrector = FuzzyCorrector::new();
        assert_eq!(corrector.correct("iv", &table), None);
        assert_eq!(corrector.correct("fa", &table), None);
    }

    #[test]
    fn test_correct_rejects_unrelated_tokens() {
        let table = default_table();
        let corrector = FuzzyCorrector::new();
        assert_eq!(corrector.correct("xyzzyq", &table), None);
    }

    #[test]
    fn test_threshold_boundary_through_corrector() {
        // "salsa" scores exactly 80 against "sales": accepted, inclusive.
        let pairs = [("sales", "sale")];
        let table = SynonymTable::from_pairs(&pairs, &[]).unwrap();
        let corrector = FuzzyCorrector::new();
        assert_eq!(corrector.correct("salsa", &table), Some("sale"));

        // Against only "sale" the best score is 79: rejected.
        let table = SynonymTable::from_pairs(&[("sale", "sale")], &[]).unwrap();
        assert_eq!(corrector.correct("salsa", &table), None);
    }
}
