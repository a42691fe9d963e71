//! Similarity scoring for title matching
//!
//! The matcher's control flow is independent of how titles are scored: any
//! [`SimilarityScorer`] can be substituted without touching the clustering
//! logic. The built-in default is a normalized Levenshtein ratio.

use strsim::normalized_levenshtein;

/// Strategy for scoring the closeness of two normalized titles.
pub trait SimilarityScorer {
    /// Score two strings on a 0-100 scale.
    ///
    /// Implementations must be symmetric (`score(a, b) == score(b, a)`) and
    /// must score identical strings as 100.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Edit-distance-ratio scorer: Levenshtein distance normalized by the
/// longer string's length, scaled to 0-100.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl SimilarityScorer for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        normalized_levenshtein(a, b) * 100.0
    }
}
