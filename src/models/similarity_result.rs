use crate::types::{SenseNumber, SimilarityScore};

/// Best score between two words, with the sense numbers that produced it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimilarityResult {
    score: SimilarityScore,
    sense_index_1: SenseNumber,
    sense_index_2: SenseNumber,
}

impl SimilarityResult {
    pub fn new(score: SimilarityScore, sense_index_1: SenseNumber, sense_index_2: SenseNumber) -> Self {
        SimilarityResult {
            score,
            sense_index_1,
            sense_index_2,
        }
    }

    pub fn score(&self) -> SimilarityScore {
        self.score
    }

    /// 1-based sense number of the first word.
    pub fn sense_index_1(&self) -> SenseNumber {
        self.sense_index_1
    }

    /// 1-based sense number of the second word.
    pub fn sense_index_2(&self) -> SenseNumber {
        self.sense_index_2
    }
}
