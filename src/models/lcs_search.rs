use crate::models::{InformationContent, SynsetKey, Taxonomy};
use crate::utils::collect_hypernym_distances;
use crate::Error;
use log::debug;
use std::collections::HashMap;

/// A lowest common subsumer together with the combined number of hypernym edges from the
/// two input synsets up to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LowestCommonSubsumer {
    pub synset: SynsetKey,
    pub path_length: usize,
}

/// How a measure picks the subsumer of two synsets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LcsSearch {
    /// The common ancestor with the highest information content.
    ByInformationContent,
    /// The common ancestor with the shortest combined path.
    ByPathLength,
}

impl LcsSearch {
    /// Finds the subsumer of `a` and `b` (which must share a part of speech).
    ///
    /// Returns `None` when the synsets have no common ancestor, which can only happen when
    /// the synthetic root is disabled and they sit in disjoint hierarchies.
    /// `info_content` is consulted by `ByInformationContent` only; a missing table scores
    /// every ancestor as 0.
    ///
    /// Ties are resolved in `a`'s breadth-first discovery order for both searches: among
    /// equally good common ancestors, the one reached first when walking up from `a` wins.
    /// The subsumer may therefore differ when the arguments are swapped, though the score
    /// derived from it does not.
    pub fn find<T: Taxonomy + ?Sized>(
        self,
        taxonomy: &T,
        info_content: Option<&InformationContent>,
        a: &SynsetKey,
        b: &SynsetKey,
        use_synthetic_root: bool,
    ) -> Result<Option<LowestCommonSubsumer>, Error> {
        if self == LcsSearch::ByInformationContent && a == b {
            // A synset is always its own subsumer, whatever its ancestors' IC
            return Ok(Some(LowestCommonSubsumer {
                synset: *a,
                path_length: 0,
            }));
        }

        // Common ancestors are scanned in a's breadth-first discovery order, so the first
        // candidate wins any tie.
        let ancestors_a = collect_hypernym_distances(taxonomy, a, use_synthetic_root)?;
        let ancestors_b: HashMap<SynsetKey, usize> =
            collect_hypernym_distances(taxonomy, b, use_synthetic_root)?
                .into_iter()
                .collect();

        let common = ancestors_a.iter().filter_map(|(synset, distance_a)| {
            ancestors_b
                .get(synset)
                .map(|distance_b| LowestCommonSubsumer {
                    synset: *synset,
                    path_length: distance_a + distance_b,
                })
        });

        let lcs = match self {
            LcsSearch::ByInformationContent => {
                let ic_of = |synset: &SynsetKey| {
                    info_content.map_or(0.0, |info_content| info_content.ic_of(synset))
                };

                common.fold(None, |best: Option<LowestCommonSubsumer>, candidate| match best {
                    Some(best) if ic_of(&best.synset) >= ic_of(&candidate.synset) => Some(best),
                    _ => Some(candidate),
                })
            }
            LcsSearch::ByPathLength => {
                common.fold(None, |best: Option<LowestCommonSubsumer>, candidate| match best {
                    Some(best) if best.path_length <= candidate.path_length => Some(best),
                    _ => Some(candidate),
                })
            }
        };

        debug!("LCS of {} and {} ({:?}): {:?}", a, b, self, lcs);

        Ok(lcs)
    }
}
