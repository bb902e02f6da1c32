use test_utils::{
    init_logger, load_test_info_content, load_test_taxonomy, noun, verb, CANINE, CARNIVORE, CAT,
    DOG, ENTITY, FELINE, ORGANIZATION, PERSON, PET, RUN, TIME_VERB, TRAVEL, WALK,
};
use wordnet_similarity::{
    collect_hypernym_distances, InformationContent, LcsSearch, LowestCommonSubsumer,
    MemoryTaxonomy, PartOfSpeech, SynsetKey,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Two leaves whose only common ancestors are two equally informative roots, listed
    /// in opposite order.
    fn tied_taxonomy() -> (MemoryTaxonomy, InformationContent) {
        let mut taxonomy = MemoryTaxonomy::new("3.0");
        taxonomy.add_synset(noun(10), &["left root"], &[]);
        taxonomy.add_synset(noun(20), &["right root"], &[]);
        taxonomy.add_synset(noun(30), &["first"], &[noun(10), noun(20)]);
        taxonomy.add_synset(noun(40), &["second"], &[noun(20), noun(10)]);

        let info_content = InformationContent::parse(
            "wnver::3.0\n10n 50.0 ROOT\n20n 50.0 ROOT\n30n 10.0\n40n 10.0\n",
        )
        .unwrap();

        (taxonomy, info_content)
    }

    #[test]
    fn test_hypernym_distances_visit_each_ancestor_once() {
        init_logger();

        let taxonomy = load_test_taxonomy();
        let distances = collect_hypernym_distances(&taxonomy, &noun(DOG), false).unwrap();

        assert_eq!(distances[0], (noun(DOG), 0));
        assert_eq!(distances[1], (noun(CANINE), 1));
        assert_eq!(distances[2], (noun(PET), 1));
        // animal is reachable through pet and carnivore; listed once at its shortest distance
        assert_eq!(
            distances
                .iter()
                .filter(|(synset, _)| *synset == noun(15388))
                .collect::<Vec<_>>(),
            vec![&(noun(15388), 2)]
        );
        assert_eq!(distances.last(), Some(&(noun(ENTITY), 4)));
    }

    #[test]
    fn test_hypernym_distances_append_synthetic_root() {
        let taxonomy = load_test_taxonomy();
        let distances = collect_hypernym_distances(&taxonomy, &noun(DOG), true).unwrap();

        assert_eq!(
            distances.last(),
            Some(&(SynsetKey::synthetic_root(PartOfSpeech::Noun), 5))
        );
    }

    #[test]
    fn test_information_content_lcs() {
        let taxonomy = load_test_taxonomy();
        let info_content = load_test_info_content();

        let lcs = LcsSearch::ByInformationContent
            .find(&taxonomy, Some(&info_content), &noun(DOG), &noun(CAT), true)
            .unwrap();
        assert_eq!(
            lcs,
            Some(LowestCommonSubsumer {
                synset: noun(PET),
                path_length: 2,
            })
        );

        let lcs = LcsSearch::ByInformationContent
            .find(&taxonomy, Some(&info_content), &noun(CANINE), &noun(FELINE), true)
            .unwrap()
            .unwrap();
        assert_eq!(lcs.synset, noun(CARNIVORE));
    }

    #[test]
    fn test_information_content_lcs_of_identical_synsets() {
        let taxonomy = load_test_taxonomy();
        let info_content = load_test_info_content();

        let lcs = LcsSearch::ByInformationContent
            .find(&taxonomy, Some(&info_content), &noun(DOG), &noun(DOG), false)
            .unwrap();

        assert_eq!(
            lcs,
            Some(LowestCommonSubsumer {
                synset: noun(DOG),
                path_length: 0,
            })
        );
    }

    #[test]
    fn test_information_content_lcs_ties_follow_discovery_order() {
        let (taxonomy, info_content) = tied_taxonomy();

        let lcs = LcsSearch::ByInformationContent
            .find(&taxonomy, Some(&info_content), &noun(30), &noun(40), false)
            .unwrap()
            .unwrap();
        assert_eq!(lcs.synset, noun(10));

        let lcs = LcsSearch::ByInformationContent
            .find(&taxonomy, Some(&info_content), &noun(40), &noun(30), false)
            .unwrap()
            .unwrap();
        assert_eq!(lcs.synset, noun(20));
    }

    #[test]
    fn test_path_lcs_ties_follow_discovery_order() {
        let (taxonomy, _) = tied_taxonomy();

        let lcs = LcsSearch::ByPathLength
            .find(&taxonomy, None, &noun(30), &noun(40), false)
            .unwrap()
            .unwrap();

        assert_eq!(lcs.synset, noun(10));
        assert_eq!(lcs.path_length, 2);

        let lcs = LcsSearch::ByPathLength
            .find(&taxonomy, None, &noun(40), &noun(30), false)
            .unwrap()
            .unwrap();

        assert_eq!(lcs.synset, noun(20));
        assert_eq!(lcs.path_length, 2);
    }

    #[test]
    fn test_path_lcs() {
        let taxonomy = load_test_taxonomy();

        let lcs = LcsSearch::ByPathLength
            .find(&taxonomy, None, &noun(DOG), &noun(CAT), true)
            .unwrap()
            .unwrap();
        assert_eq!(lcs.synset, noun(PET));
        assert_eq!(lcs.path_length, 2);

        let lcs = LcsSearch::ByPathLength
            .find(&taxonomy, None, &verb(RUN), &verb(WALK), true)
            .unwrap()
            .unwrap();
        assert_eq!(lcs.synset, verb(TRAVEL));
        assert_eq!(lcs.path_length, 2);

        let lcs = LcsSearch::ByPathLength
            .find(&taxonomy, None, &noun(DOG), &noun(DOG), true)
            .unwrap()
            .unwrap();
        assert_eq!(lcs.synset, noun(DOG));
        assert_eq!(lcs.path_length, 0);
    }

    #[test]
    fn test_disjoint_hierarchies_meet_at_synthetic_root() {
        let taxonomy = load_test_taxonomy();

        let lcs = LcsSearch::ByPathLength
            .find(&taxonomy, None, &noun(PERSON), &noun(ORGANIZATION), true)
            .unwrap()
            .unwrap();

        assert!(lcs.synset.is_synthetic_root());
        assert_eq!(lcs.path_length, 5);
    }

    #[test]
    fn test_disjoint_hierarchies_without_synthetic_root() {
        let taxonomy = load_test_taxonomy();
        let info_content = load_test_info_content();

        for search in [LcsSearch::ByInformationContent, LcsSearch::ByPathLength] {
            assert_eq!(
                search
                    .find(
                        &taxonomy,
                        Some(&info_content),
                        &noun(PERSON),
                        &noun(ORGANIZATION),
                        false
                    )
                    .unwrap(),
                None
            );
            assert_eq!(
                search
                    .find(&taxonomy, Some(&info_content), &verb(TIME_VERB), &verb(RUN), false)
                    .unwrap(),
                None
            );
        }
    }
}
