use crate::constants::MAX_COMPOUND_WORDS;
use crate::types::Lemma;
use std::collections::HashSet;

/// Appends every known compound found in `tokens` to the token stream.
///
/// For each position the token is joined with the following one and two tokens and the
/// result is checked against `compounds`. Matches are appended after the original
/// tokens, which are kept unchanged, so a word is counted both on its own and as part of
/// the compound.
pub fn compoundify(tokens: &[Lemma], compounds: &HashSet<Lemma>) -> Vec<Lemma> {
    let mut augmented = tokens.to_vec();

    for left_idx in 0..tokens.len() {
        let mut candidate = tokens[left_idx].clone();

        for right_idx in (left_idx + 1)..(left_idx + MAX_COMPOUND_WORDS).min(tokens.len()) {
            candidate.push(' ');
            candidate.push_str(&tokens[right_idx]);

            if compounds.contains(&candidate) {
                augmented.push(candidate.clone());
            }
        }
    }

    augmented
}
