use crate::models::PartOfSpeech;
use crate::types::SynsetOffset;

/// Offset used for the virtual root that joins every top-level hierarchy of a part of speech.
pub const SYNTHETIC_ROOT_OFFSET: SynsetOffset = 0;

/// First line of an information content file starts with this prefix, followed by the
/// resource version.
pub const IC_HEADER_PREFIX: &str = "wnver::";

/// Third column of an information content record for synsets without hypernyms.
pub const IC_ROOT_MARKER: &str = "ROOT";

/// Longest compound lemma (in words) looked for when augmenting a sentence.
pub const MAX_COMPOUND_WORDS: usize = 3;

/// Jiang-Conrath score returned when the distance between two synsets is exactly zero.
pub const JCN_MAX_SIMILARITY: f64 = f64::MAX;

/// Parts of speech that have a hypernym taxonomy and can therefore be counted.
pub const TAXONOMIC_PARTS_OF_SPEECH: &[PartOfSpeech] = &[PartOfSpeech::Noun, PartOfSpeech::Verb];

/// Column delimiter for multi-valued fields in taxonomy CSV files.
pub const TAXONOMY_CSV_LIST_DELIMITER: char = '|';
