pub mod error;
pub use error::Error;

pub mod part_of_speech;
pub use part_of_speech::PartOfSpeech;

pub mod synset_key;
pub use synset_key::SynsetKey;

pub mod taxonomy;
pub use taxonomy::Taxonomy;

pub mod memory_taxonomy;
pub use memory_taxonomy::MemoryTaxonomy;

pub mod text_encoding;
pub use text_encoding::TextEncoding;

pub mod synset_mapping;
pub use synset_mapping::SynsetMapping;

pub mod information_content;
pub use information_content::InformationContent;

pub mod frequency_table;
pub use frequency_table::{FrequencyEntry, FrequencyTable};

pub mod ic_counter;
pub use ic_counter::{CountingMode, IcCounter, IcCounterConfig};

pub mod similarity_cache;
pub use similarity_cache::SimilarityCache;

pub mod lcs_search;
pub use lcs_search::{LcsSearch, LowestCommonSubsumer};

pub mod measure_config;
pub use measure_config::MeasureConfig;

pub mod similarity_result;
pub use similarity_result::SimilarityResult;

pub mod similarity_measure;
pub use similarity_measure::{MeasureType, SimilarityMeasure};
