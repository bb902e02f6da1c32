pub mod compoundify;
pub use compoundify::compoundify;

pub mod normalize_lemma;
pub use normalize_lemma::normalize_lemma;

pub mod parse_word_spec;
pub use parse_word_spec::{parse_word_spec, WordSpec};

pub mod read_text_file;
pub use read_text_file::{open_text_reader, read_text_file};

pub mod tokenize_sentence;
pub use tokenize_sentence::tokenize_sentence;

pub mod collect_hypernym_distances;
pub use collect_hypernym_distances::collect_hypernym_distances;
