use crate::constants::SYNTHETIC_ROOT_OFFSET;
use crate::models::PartOfSpeech;
use crate::types::SynsetOffset;
use std::fmt;

/// Identifies a synset within a dictionary snapshot.
///
/// Ordering is by part of speech, then ascending offset, which is the order synsets are
/// enumerated in during propagation and export.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynsetKey {
    pub pos: PartOfSpeech,
    pub offset: SynsetOffset,
}

impl SynsetKey {
    pub fn new(pos: PartOfSpeech, offset: SynsetOffset) -> Self {
        Self { pos, offset }
    }

    /// The virtual root joining all top-level hierarchies of `pos`.
    pub fn synthetic_root(pos: PartOfSpeech) -> Self {
        Self::new(pos, SYNTHETIC_ROOT_OFFSET)
    }

    pub fn is_synthetic_root(&self) -> bool {
        self.offset == SYNTHETIC_ROOT_OFFSET
    }
}

/// Formats as `<offset><tag>`, e.g. `2084071n`, the form used in IC data files.
impl fmt::Display for SynsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.offset, self.pos.tag())
    }
}
