use crate::models::PartOfSpeech;
use crate::types::{Lemma, SenseNumber};
use crate::utils::normalize_lemma;
use crate::Error;

/// A word as given to the word-level API: `lemma`, `lemma#pos` or `lemma#pos#sense`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpec {
    pub lemma: Lemma,
    pub pos: Option<PartOfSpeech>,
    pub sense: Option<SenseNumber>,
}

/// Splits a word spec into its normalized lemma, optional part of speech and optional
/// 1-based sense number.
///
/// ```rust
/// use wordnet_similarity::{parse_word_spec, PartOfSpeech};
///
/// let spec = parse_word_spec("Dog#n#1").unwrap();
/// assert_eq!(spec.lemma, "dog");
/// assert_eq!(spec.pos, Some(PartOfSpeech::Noun));
/// assert_eq!(spec.sense, Some(1));
/// ```
pub fn parse_word_spec(word: &str) -> Result<WordSpec, Error> {
    let mut parts = word.split('#');

    let lemma = normalize_lemma(parts.next().unwrap_or_default());
    if lemma.is_empty() {
        return Err(Error::ParserError(format!("Empty lemma in word: {:?}", word)));
    }

    let pos = parts
        .next()
        .map(|pos| pos.parse::<PartOfSpeech>())
        .transpose()?;

    let sense = parts
        .next()
        .map(|sense| {
            sense
                .trim()
                .parse::<SenseNumber>()
                .ok()
                .filter(|sense| *sense > 0)
                .ok_or_else(|| Error::ParserError(format!("Invalid sense number in word: {}", word)))
        })
        .transpose()?;

    if parts.next().is_some() {
        return Err(Error::ParserError(format!(
            "Expected lemma[#pos[#sense]], got: {}",
            word
        )));
    }

    Ok(WordSpec { lemma, pos, sense })
}
