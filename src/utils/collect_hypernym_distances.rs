use crate::models::{SynsetKey, Taxonomy};
use crate::Error;
use std::collections::{HashSet, VecDeque};

/// Breadth-first walk up the hypernym DAG from `start`.
///
/// Returns every ancestor of `start` (including `start` itself at distance 0) exactly
/// once, in discovery order, paired with its shortest edge distance from `start`. When
/// `include_synthetic_root` is set the synthetic root of the part of speech is appended
/// last, one edge above the nearest true root.
pub fn collect_hypernym_distances<T: Taxonomy + ?Sized>(
    taxonomy: &T,
    start: &SynsetKey,
    include_synthetic_root: bool,
) -> Result<Vec<(SynsetKey, usize)>, Error> {
    let mut discovered: Vec<(SynsetKey, usize)> = Vec::new();
    let mut seen: HashSet<SynsetKey> = HashSet::new();
    let mut queue: VecDeque<(SynsetKey, usize)> = VecDeque::new();
    let mut nearest_root_distance: Option<usize> = None;

    seen.insert(*start);
    queue.push_back((*start, 0));

    while let Some((key, distance)) = queue.pop_front() {
        discovered.push((key, distance));

        // The synthetic root is never a dictionary synset
        if key.is_synthetic_root() {
            continue;
        }

        let hypernyms = taxonomy.direct_hypernyms(&key)?;

        if hypernyms.is_empty() && nearest_root_distance.is_none() {
            // Breadth-first order reaches the closest root first
            nearest_root_distance = Some(distance);
        }

        for hypernym in hypernyms {
            if seen.insert(hypernym) {
                queue.push_back((hypernym, distance + 1));
            }
        }
    }

    if include_synthetic_root {
        let root = SynsetKey::synthetic_root(start.pos);

        if !seen.contains(&root) {
            if let Some(distance) = nearest_root_distance {
                discovered.push((root, distance + 1));
            }
        }
    }

    Ok(discovered)
}
