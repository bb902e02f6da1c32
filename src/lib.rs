mod config;
pub use config::{DEFAULT_IC_COUNTER_CONFIG, DEFAULT_MEASURE_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    CountingMode, Error, FrequencyEntry, FrequencyTable, IcCounter, IcCounterConfig,
    InformationContent, LcsSearch, LowestCommonSubsumer, MeasureConfig, MeasureType,
    MemoryTaxonomy, PartOfSpeech, SimilarityCache, SimilarityMeasure, SimilarityResult,
    SynsetKey, SynsetMapping, Taxonomy, TextEncoding,
};
pub mod types;
mod utils;
pub use types::{
    Frequency, InformationContentValue, Lemma, LemmaRef, SenseNumber, SimilarityScore,
    SynsetOffset,
};
pub use utils::{
    collect_hypernym_distances, compoundify, normalize_lemma, parse_word_spec,
    tokenize_sentence, WordSpec,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
