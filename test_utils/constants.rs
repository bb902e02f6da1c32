pub const TEST_DATA_FILES_DIRECTORY: &str = "tests/test_data_files";

pub const TEST_TAXONOMY_CSV_PATH: &str = "tests/test_data_files/taxonomy.csv";
pub const TEST_TAXONOMY_VERSION: &str = "fixture-1.0";

pub const TEST_INFO_CONTENT_PATH: &str = "tests/test_data_files/ic-fixture.dat";
pub const TEST_MAPPING_PATH: &str = "tests/test_data_files/mapping.txt";
pub const TEST_CORPUS_PATH: &str = "tests/test_data_files/corpus.txt";

/// Tolerance for comparing computed scores against precomputed values.
pub const SCORE_TOLERANCE: f64 = 1e-9;
