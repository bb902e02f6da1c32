pub mod constants;

use constants::{
    TEST_INFO_CONTENT_PATH, TEST_MAPPING_PATH, TEST_TAXONOMY_CSV_PATH, TEST_TAXONOMY_VERSION,
};
use std::path::Path;
use wordnet_similarity::{
    InformationContent, MemoryTaxonomy, PartOfSpeech, SynsetKey, SynsetMapping, TextEncoding,
};

// Synset offsets of the fixture taxonomy
pub const ENTITY: u64 = 1740;
pub const ORGANISM: u64 = 4258;
pub const ANIMAL: u64 = 15388;
pub const CARNIVORE: u64 = 2075296;
pub const CANINE: u64 = 2083346;
pub const FELINE: u64 = 2120997;
pub const PET: u64 = 1317541;
pub const DOG: u64 = 2084071;
pub const CAT: u64 = 2121620;
pub const PERSON: u64 = 7646;
pub const FRUMP: u64 = 10114209;
pub const GUY: u64 = 10153414;
pub const ABSTRACTION: u64 = 5621;
pub const ORGANIZATION: u64 = 8008335;
pub const COMPANY: u64 = 8009834;
pub const TIME_NOUN: u64 = 15122;
pub const LOCATION: u64 = 27167;
pub const CITY: u64 = 8524735;
pub const MELBOURNE: u64 = 9287968;
pub const NEW_YORK: u64 = 9119277;

pub const TRAVEL: u64 = 1835496;
pub const RUN: u64 = 2050132;
pub const WALK: u64 = 1904930;
pub const TIME_VERB: u64 = 1158872;

pub fn noun(offset: u64) -> SynsetKey {
    SynsetKey::new(PartOfSpeech::Noun, offset)
}

pub fn verb(offset: u64) -> SynsetKey {
    SynsetKey::new(PartOfSpeech::Verb, offset)
}

/// Enables log output for the running test; repeated calls are harmless.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_test_taxonomy() -> MemoryTaxonomy {
    MemoryTaxonomy::from_csv_path(Path::new(TEST_TAXONOMY_CSV_PATH), TEST_TAXONOMY_VERSION)
        .expect("Failed to load test taxonomy")
}

pub fn load_test_info_content() -> InformationContent {
    InformationContent::from_path(Path::new(TEST_INFO_CONTENT_PATH), TextEncoding::Utf8)
        .expect("Failed to load test information content")
}

pub fn load_test_mapping() -> SynsetMapping {
    SynsetMapping::from_path(Path::new(TEST_MAPPING_PATH), TextEncoding::Utf8)
        .expect("Failed to load test mapping")
}

/// Asserts that two floats are within `tolerance` of each other.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
