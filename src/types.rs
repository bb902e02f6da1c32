// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a dictionary lemma as an owned `String`. Multi-word lemmas ("compounds")
/// use a single space between words, e.g. `"new york"`.
pub type Lemma = String;

/// Represents a borrowed view of a lemma.
pub type LemmaRef = str;

/// Position of a synset within its part-of-speech data file. Offset `0` is reserved for
/// the synthetic root.
pub type SynsetOffset = u64;

/// Accumulated corpus frequency of a synset. Fractional when counting in divided mode.
pub type Frequency = f64;

/// Information content of a synset, `-ln(p(synset))`. Never negative.
pub type InformationContentValue = f64;

/// Score returned by a similarity measure.
pub type SimilarityScore = f64;

/// 1-based dictionary sense number of a synset for a given lemma and part of speech.
pub type SenseNumber = usize;
