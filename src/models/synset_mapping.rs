use crate::models::{PartOfSpeech, SynsetKey, TextEncoding};
use crate::types::{Lemma, LemmaRef, SynsetOffset};
use crate::utils::{normalize_lemma, read_text_file};
use crate::Error;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Overrides from a `(lemma, part of speech)` pair to one specific synset.
///
/// Mapping files hold one `<lemma>#<pos> <offset>` record per line. Blank lines are
/// ignored; a repeated key replaces the earlier record.
#[derive(Debug, Clone, Default)]
pub struct SynsetMapping {
    mappings: HashMap<(Lemma, PartOfSpeech), SynsetKey>,
}

impl SynsetMapping {
    /// A mapping table with no overrides; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path, encoding: TextEncoding) -> Result<Self, Error> {
        let text = read_text_file(path, encoding)?;
        let mapping = Self::parse(&text)?;

        info!("Loaded {} synset mappings from {:?}", mapping.len(), path);

        Ok(mapping)
    }

    /// Parses mapping records. Any malformed line fails the whole parse.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut mapping = SynsetMapping::empty();

        for (line_idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let line_number = line_idx + 1;
            let fail = |reason: &str| Error::parse_failure("mapping", line_number, line, reason);

            let (word, offset) = trimmed
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| fail("expected <lemma>#<pos> <offset>"))?;

            let (lemma, pos) = word
                .trim()
                .rsplit_once('#')
                .ok_or_else(|| fail("missing #<pos> after lemma"))?;

            let pos: PartOfSpeech = pos.parse().map_err(|_| fail("unknown part of speech"))?;

            let lemma = normalize_lemma(lemma);
            if lemma.is_empty() {
                return Err(fail("empty lemma"));
            }

            // Offsets may carry their part-of-speech tag, as in IC files
            let offset = offset.strip_suffix(pos.tag()).unwrap_or(offset);
            let offset: SynsetOffset = offset.parse().map_err(|_| fail("invalid offset"))?;

            mapping.insert(lemma, SynsetKey::new(pos, offset));
        }

        Ok(mapping)
    }

    pub fn insert(&mut self, lemma: Lemma, key: SynsetKey) {
        if let Some(previous) = self.mappings.insert((lemma.clone(), key.pos), key) {
            warn!(
                "Mapping for {}#{} replaced: {} -> {}",
                lemma, key.pos, previous, key
            );
        }
    }

    /// The override for `lemma` in `pos`, if one was loaded.
    pub fn resolve(&self, lemma: &LemmaRef, pos: PartOfSpeech) -> Option<SynsetKey> {
        self.mappings.get(&(normalize_lemma(lemma), pos)).copied()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
