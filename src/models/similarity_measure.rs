use crate::constants::JCN_MAX_SIMILARITY;
use crate::models::{
    InformationContent, LcsSearch, MeasureConfig, PartOfSpeech, SimilarityCache,
    SimilarityResult, SynsetKey, SynsetMapping, Taxonomy,
};
use crate::types::{InformationContentValue, SenseNumber, SimilarityScore};
use crate::utils::{parse_word_spec, WordSpec};
use crate::Error;
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Available similarity measures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MeasureType {
    Lin,
    JiangConrath,
    Resnik,
    Path,
}

impl MeasureType {
    pub fn requires_information_content(self) -> bool {
        !matches!(self, MeasureType::Path)
    }
}

impl fmt::Display for MeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasureType::Lin => "lin",
            MeasureType::JiangConrath => "jcn",
            MeasureType::Resnik => "resnik",
            MeasureType::Path => "path",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MeasureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lin" => Ok(MeasureType::Lin),
            "jcn" | "jiang-conrath" | "jiangconrath" => Ok(MeasureType::JiangConrath),
            "resnik" | "res" => Ok(MeasureType::Resnik),
            "path" => Ok(MeasureType::Path),
            other => Err(Error::ConfigError(format!("Unknown measure type: {}", other))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum IcFormula {
    Lin,
    JiangConrath,
    Resnik,
}

impl IcFormula {
    fn score(
        self,
        ic_1: InformationContentValue,
        ic_2: InformationContentValue,
        ic_lcs: InformationContentValue,
    ) -> SimilarityScore {
        match self {
            IcFormula::Lin => (2.0 * ic_lcs) / (ic_1 + ic_2),
            IcFormula::JiangConrath => {
                let distance = ic_1 + ic_2 - 2.0 * ic_lcs;

                // Identical (or IC-equivalent) synsets
                if distance <= 0.0 {
                    JCN_MAX_SIMILARITY
                } else {
                    1.0 / distance
                }
            }
            IcFormula::Resnik => ic_lcs,
        }
    }
}

/// Scoring strategy of a measure; each variant brings its own LCS search.
#[derive(Debug, Clone)]
enum Scorer {
    InformationContent {
        formula: IcFormula,
        info_content: InformationContent,
    },
    PathLength,
}

impl Scorer {
    fn lcs_search(&self) -> LcsSearch {
        match self {
            Scorer::InformationContent { .. } => LcsSearch::ByInformationContent,
            Scorer::PathLength => LcsSearch::ByPathLength,
        }
    }
}

/// A similarity measure bound to one taxonomy.
///
/// Scores are cached per instance, so a measure is meant to be owned by a single caller;
/// wrap it in a lock to share it.
pub struct SimilarityMeasure<'a, T: Taxonomy> {
    taxonomy: &'a T,
    measure_type: MeasureType,
    scorer: Scorer,
    mapping: SynsetMapping,
    cache: SimilarityCache,
    use_synthetic_root: bool,
    lcs_search_count: usize,
}

impl<'a, T: Taxonomy> SimilarityMeasure<'a, T> {
    /// Creates a measure, loading the IC and mapping files named by `config`.
    pub fn new(
        taxonomy: &'a T,
        measure_type: MeasureType,
        config: &MeasureConfig,
    ) -> Result<Self, Error> {
        let info_content = match &config.info_content_path {
            Some(path) => Some(InformationContent::from_path(path, config.encoding)?),
            None => None,
        };

        let mapping = match &config.mapping_path {
            Some(path) => SynsetMapping::from_path(path, config.encoding)?,
            None => SynsetMapping::empty(),
        };

        Self::with_tables(
            taxonomy,
            measure_type,
            info_content,
            mapping,
            config.use_synthetic_root,
        )
    }

    /// Creates a measure from string options: `type` (default `lin`) plus the options
    /// understood by [`MeasureConfig::from_params`].
    pub fn from_params(taxonomy: &'a T, params: &HashMap<String, String>) -> Result<Self, Error> {
        let mut params = params.clone();

        let measure_type = match params.remove("type") {
            Some(name) => name.parse()?,
            None => MeasureType::Lin,
        };

        let config = MeasureConfig::from_params(&params)?;

        Self::new(taxonomy, measure_type, &config)
    }

    /// Creates a measure from tables that are already in memory, e.g. an IC table built by
    /// the IC counter in-process.
    pub fn with_tables(
        taxonomy: &'a T,
        measure_type: MeasureType,
        info_content: Option<InformationContent>,
        mapping: SynsetMapping,
        use_synthetic_root: bool,
    ) -> Result<Self, Error> {
        let formula = match measure_type {
            MeasureType::Lin => Some(IcFormula::Lin),
            MeasureType::JiangConrath => Some(IcFormula::JiangConrath),
            MeasureType::Resnik => Some(IcFormula::Resnik),
            MeasureType::Path => None,
        };

        let scorer = match (formula, info_content) {
            (Some(formula), Some(info_content)) => Scorer::InformationContent {
                formula,
                info_content,
            },
            (Some(_), None) => {
                return Err(Error::ConfigError(format!(
                    "The {} measure requires an information content file",
                    measure_type
                )))
            }
            (None, _) => Scorer::PathLength,
        };

        info!(
            "Created {} measure (synthetic root: {}, {} mappings)",
            measure_type,
            use_synthetic_root,
            mapping.len()
        );

        Ok(SimilarityMeasure {
            taxonomy,
            measure_type,
            scorer,
            mapping,
            cache: SimilarityCache::new(),
            use_synthetic_root,
            lcs_search_count: 0,
        })
    }

    pub fn measure_type(&self) -> MeasureType {
        self.measure_type
    }

    pub fn uses_synthetic_root(&self) -> bool {
        self.use_synthetic_root
    }

    /// The IC table backing an IC-based measure.
    pub fn info_content(&self) -> Option<&InformationContent> {
        match &self.scorer {
            Scorer::InformationContent { info_content, .. } => Some(info_content),
            Scorer::PathLength => None,
        }
    }

    /// Number of pairs scored so far.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drops every cached score. The LCS search count is left as is.
    pub fn clear_cache(&mut self) {
        debug!("Clearing {} cached scores", self.cache.len());
        self.cache.clear();
    }

    /// Number of LCS searches performed so far; cached pairs never search again.
    pub fn lcs_search_count(&self) -> usize {
        self.lcs_search_count
    }

    /// Similarity between two synsets.
    ///
    /// Synsets of different parts of speech score 0. Synsets without IC evidence score 0
    /// under IC-based measures, as do pairs without a common ancestor.
    pub fn similarity(&mut self, a: &SynsetKey, b: &SynsetKey) -> Result<SimilarityScore, Error> {
        if a.pos != b.pos {
            return Ok(0.0);
        }

        if let Some(cached) = self.cache.get(a, b) {
            debug!("Cache hit for {} / {}: {}", a, b, cached);
            return Ok(cached);
        }

        let lcs_search = self.scorer.lcs_search();

        let score = match &self.scorer {
            Scorer::InformationContent {
                formula,
                info_content,
            } => {
                let ic_1 = info_content.ic_of(a);
                let ic_2 = info_content.ic_of(b);

                if ic_1 == 0.0 || ic_2 == 0.0 {
                    0.0
                } else {
                    self.lcs_search_count += 1;

                    match lcs_search.find(
                        self.taxonomy,
                        Some(info_content),
                        a,
                        b,
                        self.use_synthetic_root,
                    )? {
                        Some(lcs) => formula.score(ic_1, ic_2, info_content.ic_of(&lcs.synset)),
                        None => 0.0,
                    }
                }
            }
            Scorer::PathLength => {
                self.lcs_search_count += 1;

                match lcs_search.find(self.taxonomy, None, a, b, self.use_synthetic_root)? {
                    Some(lcs) => 1.0 / (1.0 + lcs.path_length as SimilarityScore),
                    None => 0.0,
                }
            }
        };

        Ok(self.cache.put(a, b, score))
    }

    /// Best similarity between any senses of two words.
    ///
    /// Words may be given as `lemma`, `lemma#pos` or `lemma#pos#sense`. Every pair of
    /// candidate senses sharing a part of speech is scored; the first pair reaching the
    /// maximum wins. Returns `None` when either word has no candidate senses.
    pub fn word_similarity(
        &mut self,
        word_1: &str,
        word_2: &str,
    ) -> Result<Option<SimilarityResult>, Error> {
        let candidates_1 = self.candidate_senses(&parse_word_spec(word_1)?)?;
        let candidates_2 = self.candidate_senses(&parse_word_spec(word_2)?)?;

        if candidates_1.is_empty() || candidates_2.is_empty() {
            info!("No senses found for {:?} or {:?}", word_1, word_2);
            return Ok(None);
        }

        let mut best: Option<SimilarityResult> = None;

        for (synset_1, sense_1) in &candidates_1 {
            for (synset_2, sense_2) in &candidates_2 {
                if synset_1.pos != synset_2.pos {
                    continue;
                }

                let score = self.similarity(synset_1, synset_2)?;

                if best.map_or(true, |best| score > best.score()) {
                    best = Some(SimilarityResult::new(score, *sense_1, *sense_2));
                }
            }
        }

        // No pair shares a part of speech
        let result = best.unwrap_or_else(|| {
            SimilarityResult::new(0.0, candidates_1[0].1, candidates_2[0].1)
        });

        debug!("{} / {}: {:?}", word_1, word_2, result);

        Ok(Some(result))
    }

    /// Candidate synsets for a word, optionally restricted to one part of speech.
    ///
    /// A part of speech given both in `word` and as `pos` must agree, otherwise nothing
    /// matches.
    pub fn synsets(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<Vec<SynsetKey>, Error> {
        let mut spec = parse_word_spec(word)?;

        match (spec.pos, pos) {
            (Some(spec_pos), Some(pos)) if spec_pos != pos => return Ok(Vec::new()),
            (None, Some(pos)) => spec.pos = Some(pos),
            _ => {}
        }

        let mut synsets: Vec<SynsetKey> = Vec::new();
        for (synset, _) in self.candidate_senses(&spec)? {
            if !synsets.contains(&synset) {
                synsets.push(synset);
            }
        }

        Ok(synsets)
    }

    /// Resolves a word spec to `(synset, sense number)` candidates.
    ///
    /// An explicit sense number selects that dictionary sense. Otherwise a mapping for the
    /// lemma and part of speech replaces the dictionary senses, and without one every
    /// dictionary sense is a candidate, in sense order.
    fn candidate_senses(&self, spec: &WordSpec) -> Result<Vec<(SynsetKey, SenseNumber)>, Error> {
        let parts_of_speech: Vec<PartOfSpeech> = match spec.pos {
            Some(pos) => vec![pos],
            None => PartOfSpeech::ALL.to_vec(),
        };

        let mut candidates = Vec::new();

        for pos in parts_of_speech {
            let senses = self.taxonomy.lookup_lemma(&spec.lemma, pos)?;

            if let Some(sense) = spec.sense {
                if let Some(synset) = senses.get(sense - 1) {
                    candidates.push((*synset, sense));
                }
                continue;
            }

            match self.mapping.resolve(&spec.lemma, pos) {
                Some(mapped) => {
                    let sense = senses
                        .iter()
                        .position(|synset| *synset == mapped)
                        .map_or(1, |idx| idx + 1);

                    debug!("{}#{} mapped to {}", spec.lemma, pos, mapped);
                    candidates.push((mapped, sense));
                }
                None => candidates.extend(
                    senses
                        .into_iter()
                        .enumerate()
                        .map(|(idx, synset)| (synset, idx + 1)),
                ),
            }
        }

        Ok(candidates)
    }
}
