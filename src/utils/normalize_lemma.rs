use crate::types::{Lemma, LemmaRef};

/// Normalizes a lemma for dictionary lookup: trims, lower-cases and maps the WordNet
/// collocation separator `_` to a space.
///
/// ```rust
/// use wordnet_similarity::normalize_lemma;
///
/// assert_eq!(normalize_lemma("  New_York "), "new york");
/// ```
pub fn normalize_lemma(lemma: &LemmaRef) -> Lemma {
    lemma
        .trim()
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
