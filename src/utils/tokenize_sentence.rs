use crate::types::Lemma;

/// Normalizes the terms of a sentence into countable tokens.
///
/// Each term is lower-cased, stripped of apostrophes, and every remaining
/// non-alphanumeric character becomes a space before splitting on whitespace. Terms that
/// contain only punctuation produce no tokens.
///
/// ```rust
/// use wordnet_similarity::tokenize_sentence;
///
/// assert_eq!(
///     tokenize_sentence(&["Dog's", "well-known", "..."]),
///     vec!["dogs", "well", "known"]
/// );
/// ```
pub fn tokenize_sentence<S: AsRef<str>>(terms: &[S]) -> Vec<Lemma> {
    terms
        .iter()
        .flat_map(|term| {
            let cleaned: String = term
                .as_ref()
                .to_lowercase()
                .chars()
                .filter(|c| *c != '\'' && *c != '\u{2019}')
                .map(|c| if c.is_alphanumeric() { c } else { ' ' })
                .collect();

            cleaned
                .split_whitespace()
                .map(|token| token.to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
