use crate::models::{PartOfSpeech, SynsetKey};
use crate::types::{Lemma, LemmaRef};
use crate::Error;

/// Read-only view over a lexical resource.
///
/// Measures and the IC counter hold a borrowed handle to one implementation; nothing is
/// global. Errors are fatal to the calling operation and are never retried.
pub trait Taxonomy {
    /// Version tag of the resource, written into the header of exported IC files.
    fn version(&self) -> &str;

    /// Direct hypernyms of `key`, in dictionary order.
    fn direct_hypernyms(&self, key: &SynsetKey) -> Result<Vec<SynsetKey>, Error>;

    /// Direct hyponyms of `key`, in dictionary order.
    fn direct_hyponyms(&self, key: &SynsetKey) -> Result<Vec<SynsetKey>, Error>;

    /// Synsets containing `lemma` for `pos`, ordered by ascending sense number. An unknown
    /// lemma yields an empty list.
    fn lookup_lemma(&self, lemma: &LemmaRef, pos: PartOfSpeech) -> Result<Vec<SynsetKey>, Error>;

    /// Every synset of `pos`. Callers needing a stable order sort the result.
    fn all_synsets(&self, pos: PartOfSpeech) -> Result<Vec<SynsetKey>, Error>;

    /// Every lemma of `pos`.
    fn lemmas(&self, pos: PartOfSpeech) -> Result<Vec<Lemma>, Error>;
}
