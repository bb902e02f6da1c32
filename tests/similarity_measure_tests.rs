use std::collections::HashMap;
use test_utils::constants::{SCORE_TOLERANCE, TEST_INFO_CONTENT_PATH, TEST_MAPPING_PATH};
use test_utils::{
    assert_approx_eq, init_logger, load_test_info_content, load_test_mapping,
    load_test_taxonomy, noun, verb, CAT, CITY, COMPANY, DOG, FRUMP, GUY, MELBOURNE,
    ORGANIZATION, PERSON, RUN, TIME_NOUN, TIME_VERB,
};
use wordnet_similarity::constants::JCN_MAX_SIMILARITY;
use wordnet_similarity::{
    Error, MeasureConfig, MeasureType, MemoryTaxonomy, PartOfSpeech, SimilarityMeasure,
    SynsetMapping,
};

const LIN_DOG_CAT: f64 = 0.6823482680230145;
const JCN_DOG_CAT: f64 = 0.5065648201964182;
const RESNIK_DOG_CAT: f64 = 2.120263536200091;
const LIN_FRUMP_GUY: f64 = 0.3831215972801538;
const JCN_PERSON_ORGANIZATION: f64 = 0.21229030513495806;
const LIN_COMPANY_ORGANIZATION: f64 = 0.8366481131107385;

#[cfg(test)]
mod tests {
    use super::*;

    fn build_measure(
        taxonomy: &MemoryTaxonomy,
        measure_type: MeasureType,
        use_synthetic_root: bool,
    ) -> SimilarityMeasure<'_, MemoryTaxonomy> {
        let info_content = if measure_type.requires_information_content() {
            Some(load_test_info_content())
        } else {
            None
        };

        SimilarityMeasure::with_tables(
            taxonomy,
            measure_type,
            info_content,
            SynsetMapping::empty(),
            use_synthetic_root,
        )
        .unwrap()
    }

    fn mapped_measure(
        taxonomy: &MemoryTaxonomy,
        measure_type: MeasureType,
    ) -> SimilarityMeasure<'_, MemoryTaxonomy> {
        SimilarityMeasure::with_tables(
            taxonomy,
            measure_type,
            Some(load_test_info_content()),
            load_test_mapping(),
            true,
        )
        .unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_synset_scores() {
        init_logger();

        let taxonomy = load_test_taxonomy();

        let cases = [
            (MeasureType::Lin, LIN_DOG_CAT),
            (MeasureType::JiangConrath, JCN_DOG_CAT),
            (MeasureType::Resnik, RESNIK_DOG_CAT),
            (MeasureType::Path, 1.0 / 3.0),
        ];

        for (measure_type, expected) in cases {
            let mut measure = build_measure(&taxonomy, measure_type, true);
            let score = measure.similarity(&noun(DOG), &noun(CAT)).unwrap();

            assert_approx_eq(score, expected, SCORE_TOLERANCE);
        }
    }

    #[test]
    fn test_scores_are_symmetric() {
        let taxonomy = load_test_taxonomy();
        let grid = [DOG, CAT, FRUMP, GUY, PERSON, ORGANIZATION, COMPANY, CITY];

        for measure_type in [
            MeasureType::Lin,
            MeasureType::JiangConrath,
            MeasureType::Resnik,
            MeasureType::Path,
        ] {
            // Separate instances so the reversed pair is not served from the cache
            let mut forward = build_measure(&taxonomy, measure_type, true);
            let mut backward = build_measure(&taxonomy, measure_type, true);

            for (i, a) in grid.iter().enumerate() {
                for b in &grid[i..] {
                    let score_ab = forward.similarity(&noun(*a), &noun(*b)).unwrap();
                    let score_ba = backward.similarity(&noun(*b), &noun(*a)).unwrap();

                    assert_eq!(
                        score_ab, score_ba,
                        "{} is not symmetric for {} / {}",
                        measure_type, a, b
                    );
                }
            }

            assert_eq!(forward.lcs_search_count(), backward.lcs_search_count());
        }
    }

    #[test]
    fn test_self_similarity() {
        let taxonomy = load_test_taxonomy();

        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);
        assert_approx_eq(
            lin.similarity(&noun(DOG), &noun(DOG)).unwrap(),
            1.0,
            SCORE_TOLERANCE,
        );

        let mut jcn = build_measure(&taxonomy, MeasureType::JiangConrath, true);
        assert_eq!(
            jcn.similarity(&noun(DOG), &noun(DOG)).unwrap(),
            JCN_MAX_SIMILARITY
        );

        let mut path = build_measure(&taxonomy, MeasureType::Path, false);
        assert_eq!(path.similarity(&noun(DOG), &noun(DOG)).unwrap(), 1.0);
    }

    #[test]
    fn test_lin_range() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);
        let synsets = [DOG, CAT, FRUMP, GUY, PERSON, ORGANIZATION, COMPANY, CITY];

        for a in synsets {
            for b in synsets {
                let score = lin.similarity(&noun(a), &noun(b)).unwrap();
                assert!((0.0..=1.0 + SCORE_TOLERANCE).contains(&score));
            }
        }
    }

    #[test]
    fn test_repeated_pairs_are_served_from_cache() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        let first = lin.similarity(&noun(DOG), &noun(CAT)).unwrap();
        assert_eq!(lin.lcs_search_count(), 1);

        let second = lin.similarity(&noun(DOG), &noun(CAT)).unwrap();
        let reversed = lin.similarity(&noun(CAT), &noun(DOG)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, reversed);
        assert_eq!(lin.lcs_search_count(), 1);
        assert_eq!(lin.cache_len(), 1);
    }

    #[test]
    fn test_cleared_cache_searches_again() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        let first = lin.similarity(&noun(DOG), &noun(CAT)).unwrap();
        lin.similarity(&noun(FRUMP), &noun(GUY)).unwrap();
        assert_eq!(lin.cache_len(), 2);

        lin.clear_cache();
        assert_eq!(lin.cache_len(), 0);
        assert_eq!(lin.lcs_search_count(), 2);

        let again = lin.similarity(&noun(CAT), &noun(DOG)).unwrap();

        assert_eq!(first, again);
        assert_eq!(lin.lcs_search_count(), 3);
        assert_eq!(lin.cache_len(), 1);
    }

    #[test]
    fn test_zero_scores_are_cached() {
        let taxonomy = load_test_taxonomy();
        let mut jcn = build_measure(&taxonomy, MeasureType::JiangConrath, false);

        assert_eq!(
            jcn.similarity(&noun(PERSON), &noun(ORGANIZATION)).unwrap(),
            0.0
        );
        assert_eq!(
            jcn.similarity(&noun(ORGANIZATION), &noun(PERSON)).unwrap(),
            0.0
        );

        assert_eq!(jcn.lcs_search_count(), 1);
        assert_eq!(jcn.cache_len(), 1);
    }

    #[test]
    fn test_synset_without_frequency_scores_zero() {
        let taxonomy = load_test_taxonomy();

        for measure_type in [
            MeasureType::Lin,
            MeasureType::JiangConrath,
            MeasureType::Resnik,
        ] {
            let mut measure = build_measure(&taxonomy, measure_type, true);

            assert_eq!(
                measure.similarity(&noun(MELBOURNE), &noun(CITY)).unwrap(),
                0.0
            );
            assert_eq!(measure.lcs_search_count(), 0);
        }

        // Path scores do not depend on frequencies
        let mut path = build_measure(&taxonomy, MeasureType::Path, true);
        assert_eq!(
            path.similarity(&noun(MELBOURNE), &noun(CITY)).unwrap(),
            0.5
        );
    }

    #[test]
    fn test_parts_of_speech_never_mix() {
        let taxonomy = load_test_taxonomy();
        let mut path = build_measure(&taxonomy, MeasureType::Path, true);

        assert_eq!(path.similarity(&noun(DOG), &verb(RUN)).unwrap(), 0.0);
        assert_eq!(
            path.similarity(&noun(TIME_NOUN), &verb(TIME_VERB)).unwrap(),
            0.0
        );
        assert_eq!(path.lcs_search_count(), 0);
    }

    #[test]
    fn test_synthetic_root_joins_hierarchies() {
        let taxonomy = load_test_taxonomy();

        let mut with_root = build_measure(&taxonomy, MeasureType::JiangConrath, true);
        assert_approx_eq(
            with_root
                .similarity(&noun(PERSON), &noun(ORGANIZATION))
                .unwrap(),
            JCN_PERSON_ORGANIZATION,
            SCORE_TOLERANCE,
        );

        // The synthetic root carries no information
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);
        assert_eq!(
            lin.similarity(&noun(PERSON), &noun(ORGANIZATION)).unwrap(),
            0.0
        );

        let mut path = build_measure(&taxonomy, MeasureType::Path, true);
        assert_approx_eq(
            path.similarity(&noun(PERSON), &noun(ORGANIZATION)).unwrap(),
            1.0 / 6.0,
            SCORE_TOLERANCE,
        );

        let mut path_without_root = build_measure(&taxonomy, MeasureType::Path, false);
        assert_eq!(
            path_without_root
                .similarity(&noun(PERSON), &noun(ORGANIZATION))
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn test_word_similarity_picks_best_sense_pair() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        let result = lin.word_similarity("dog", "cat").unwrap().unwrap();
        assert_approx_eq(result.score(), LIN_DOG_CAT, SCORE_TOLERANCE);
        assert_eq!(result.sense_index_1(), 1);
        assert_eq!(result.sense_index_2(), 1);

        // Only the second sense of dog shares the person hierarchy with guy
        let result = lin.word_similarity("dog", "guy").unwrap().unwrap();
        assert_approx_eq(result.score(), LIN_FRUMP_GUY, SCORE_TOLERANCE);
        assert_eq!(result.sense_index_1(), 2);
        assert_eq!(result.sense_index_2(), 1);
    }

    #[test]
    fn test_word_without_frequency_scores_zero() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        let result = lin
            .word_similarity("melbourne", "organization")
            .unwrap()
            .unwrap();

        assert_eq!(result.score(), 0.0);
        assert_eq!(lin.lcs_search_count(), 0);
    }

    #[test]
    fn test_word_similarity_with_explicit_senses() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        let result = lin.word_similarity("dog#n#2", "cat#n#2").unwrap().unwrap();
        assert_approx_eq(result.score(), LIN_FRUMP_GUY, SCORE_TOLERANCE);
        assert_eq!(result.sense_index_1(), 2);
        assert_eq!(result.sense_index_2(), 2);

        assert_eq!(lin.word_similarity("dog#n#3", "cat").unwrap(), None);
    }

    #[test]
    fn test_word_similarity_unknown_word() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        assert_eq!(lin.word_similarity("gryphon", "dog").unwrap(), None);
        assert_eq!(lin.word_similarity("dog", "dog#v").unwrap(), None);
    }

    #[test]
    fn test_word_similarity_only_compares_shared_parts_of_speech() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        // time is a noun and a verb; walk only a verb
        let result = lin.word_similarity("time", "walk").unwrap().unwrap();
        assert_eq!(result.score(), 0.0);
        assert_eq!(result.sense_index_1(), 1);
        assert_eq!(result.sense_index_2(), 1);
        assert_eq!(lin.cache_len(), 1);

        // No shared part of speech at all
        let result = lin.word_similarity("dog", "walk").unwrap().unwrap();
        assert_eq!(result.score(), 0.0);
        assert_eq!(result.sense_index_1(), 1);
        assert_eq!(result.sense_index_2(), 1);
    }

    #[test]
    fn test_word_similarity_rejects_malformed_words() {
        let taxonomy = load_test_taxonomy();
        let mut lin = build_measure(&taxonomy, MeasureType::Lin, true);

        assert!(matches!(
            lin.word_similarity("dog#q", "cat"),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_mapping_overrides_dictionary_senses() {
        let taxonomy = load_test_taxonomy();
        let mut jcn = mapped_measure(&taxonomy, MeasureType::JiangConrath);

        // namperson is not in the dictionary at all
        let first = jcn
            .word_similarity("namperson", "organization")
            .unwrap()
            .unwrap();
        let second = jcn
            .word_similarity("namperson", "organization")
            .unwrap()
            .unwrap();

        assert_approx_eq(first.score(), JCN_PERSON_ORGANIZATION, SCORE_TOLERANCE);
        assert_eq!(first, second);
        assert_eq!(first.sense_index_1(), 1);
        assert_eq!(jcn.lcs_search_count(), 1);
    }

    #[test]
    fn test_explicit_sense_bypasses_mapping() {
        let taxonomy = load_test_taxonomy();
        let mut lin = mapped_measure(&taxonomy, MeasureType::Lin);

        let mapped = lin
            .word_similarity("company", "organization")
            .unwrap()
            .unwrap();
        assert_approx_eq(mapped.score(), 1.0, SCORE_TOLERANCE);

        let explicit = lin
            .word_similarity("company#n#1", "organization")
            .unwrap()
            .unwrap();
        assert_approx_eq(explicit.score(), LIN_COMPANY_ORGANIZATION, SCORE_TOLERANCE);
    }

    #[test]
    fn test_synsets_lookup() {
        let taxonomy = load_test_taxonomy();
        let lin = mapped_measure(&taxonomy, MeasureType::Lin);

        assert_eq!(
            lin.synsets("dog", None).unwrap(),
            vec![noun(DOG), noun(FRUMP)]
        );
        assert_eq!(
            lin.synsets("time", None).unwrap(),
            vec![noun(TIME_NOUN), verb(TIME_VERB)]
        );
        assert_eq!(
            lin.synsets("time", Some(PartOfSpeech::Verb)).unwrap(),
            vec![verb(TIME_VERB)]
        );
        assert_eq!(
            lin.synsets("company", Some(PartOfSpeech::Noun)).unwrap(),
            vec![noun(ORGANIZATION)]
        );
        assert!(lin
            .synsets("dog#v", Some(PartOfSpeech::Noun))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_information_content_measure_requires_table() {
        let taxonomy = load_test_taxonomy();

        let result = SimilarityMeasure::with_tables(
            &taxonomy,
            MeasureType::Lin,
            None,
            SynsetMapping::empty(),
            true,
        );
        assert!(matches!(result, Err(Error::ConfigError(_))));

        let path = build_measure(&taxonomy, MeasureType::Path, true);
        assert!(path.info_content().is_none());
    }

    #[test]
    fn test_new_loads_files_from_config() {
        let taxonomy = load_test_taxonomy();

        let config = MeasureConfig {
            info_content_path: Some(TEST_INFO_CONTENT_PATH.into()),
            mapping_path: Some(TEST_MAPPING_PATH.into()),
            ..MeasureConfig::default()
        };

        let mut jcn = SimilarityMeasure::new(&taxonomy, MeasureType::JiangConrath, &config).unwrap();

        assert!(jcn.uses_synthetic_root());
        assert_eq!(
            jcn.info_content().and_then(|info_content| info_content.version()),
            Some("fixture-1.0")
        );

        let result = jcn
            .word_similarity("namperson", "organization")
            .unwrap()
            .unwrap();
        assert_approx_eq(result.score(), JCN_PERSON_ORGANIZATION, SCORE_TOLERANCE);
    }

    #[test]
    fn test_from_params() {
        let taxonomy = load_test_taxonomy();

        let ic_location = format!("file:{}", TEST_INFO_CONTENT_PATH);
        let measure = SimilarityMeasure::from_params(
            &taxonomy,
            &params(&[
                ("type", "jcn"),
                ("infocontent", ic_location.as_str()),
                ("mapping", TEST_MAPPING_PATH),
                ("root", "false"),
            ]),
        )
        .unwrap();

        assert_eq!(measure.measure_type(), MeasureType::JiangConrath);
        assert!(!measure.uses_synthetic_root());

        let measure =
            SimilarityMeasure::from_params(&taxonomy, &params(&[("infocontent", ic_location.as_str())]))
                .unwrap();
        assert_eq!(measure.measure_type(), MeasureType::Lin);

        let measure = SimilarityMeasure::from_params(&taxonomy, &params(&[("type", "path")]))
            .unwrap();
        assert_eq!(measure.measure_type(), MeasureType::Path);
    }

    #[test]
    fn test_from_params_errors() {
        let taxonomy = load_test_taxonomy();

        let cases = [
            params(&[("type", "lin")]),
            params(&[("type", "cosine")]),
            params(&[("type", "path"), ("colour", "blue")]),
            params(&[("type", "path"), ("root", "maybe")]),
            params(&[("type", "path"), ("encoding", "ebcdic")]),
        ];

        for case in cases {
            assert!(
                matches!(
                    SimilarityMeasure::from_params(&taxonomy, &case),
                    Err(Error::ConfigError(_))
                ),
                "expected config error for {:?}",
                case
            );
        }

        let missing_file = params(&[("type", "lin"), ("infocontent", "tests/no-such-file.dat")]);
        assert!(matches!(
            SimilarityMeasure::from_params(&taxonomy, &missing_file),
            Err(Error::IoError(_))
        ));
    }
}
