use crate::models::SynsetKey;
use crate::types::SimilarityScore;
use std::collections::HashMap;

/// Memoized pairwise scores for one measure instance.
///
/// Pairs are unordered: `(a, b)` and `(b, a)` share an entry.
#[derive(Debug, Clone, Default)]
pub struct SimilarityCache {
    scores: HashMap<(SynsetKey, SynsetKey), SimilarityScore>,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn pair_key(a: &SynsetKey, b: &SynsetKey) -> (SynsetKey, SynsetKey) {
        if a <= b {
            (*a, *b)
        } else {
            (*b, *a)
        }
    }

    pub fn get(&self, a: &SynsetKey, b: &SynsetKey) -> Option<SimilarityScore> {
        self.scores.get(&Self::pair_key(a, b)).copied()
    }

    /// Stores `score` for the pair and hands it back to the caller.
    pub fn put(&mut self, a: &SynsetKey, b: &SynsetKey, score: SimilarityScore) -> SimilarityScore {
        self.scores.insert(Self::pair_key(a, b), score);
        score
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}
