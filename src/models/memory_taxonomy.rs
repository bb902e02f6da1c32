use crate::constants::TAXONOMY_CSV_LIST_DELIMITER;
use crate::models::{PartOfSpeech, SynsetKey, Taxonomy};
use crate::types::{Lemma, LemmaRef, SynsetOffset};
use crate::utils::{normalize_lemma, open_text_reader};
use crate::Error;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Default)]
struct SynsetNode {
    lemmas: Vec<Lemma>,
    hypernyms: Vec<SynsetKey>,
    hyponyms: Vec<SynsetKey>,
}

/// In-memory taxonomy, built programmatically or loaded from CSV.
///
/// CSV rows have the columns `pos,offset,lemmas,hypernyms`, where `lemmas` and
/// `hypernyms` are `|`-separated lists (hypernyms given as offsets of the same part of
/// speech). Senses of a lemma are numbered in the order their synsets were added.
#[derive(Debug, Clone)]
pub struct MemoryTaxonomy {
    version: String,
    synsets: BTreeMap<SynsetKey, SynsetNode>,
    lemma_index: HashMap<(Lemma, PartOfSpeech), Vec<SynsetKey>>,
}

impl MemoryTaxonomy {
    pub fn new(version: &str) -> Self {
        MemoryTaxonomy {
            version: version.to_string(),
            synsets: BTreeMap::new(),
            lemma_index: HashMap::new(),
        }
    }

    /// Adds a synset with its lemmas and direct hypernyms.
    ///
    /// Hypernyms may be added later than their hyponyms; the inverse relation is
    /// maintained either way. Re-adding a key appends lemmas and hypernyms.
    pub fn add_synset(&mut self, key: SynsetKey, lemmas: &[&LemmaRef], hypernyms: &[SynsetKey]) {
        for lemma in lemmas {
            let lemma = normalize_lemma(lemma);
            let senses = self.lemma_index.entry((lemma.clone(), key.pos)).or_default();

            if !senses.contains(&key) {
                senses.push(key);
            }

            let node = self.synsets.entry(key).or_default();
            if !node.lemmas.contains(&lemma) {
                node.lemmas.push(lemma);
            }
        }

        self.synsets.entry(key).or_default();

        for hypernym in hypernyms {
            let node = self.synsets.entry(key).or_default();
            if node.hypernyms.contains(hypernym) {
                continue;
            }
            node.hypernyms.push(*hypernym);

            self.synsets.entry(*hypernym).or_default().hyponyms.push(key);
        }
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn contains(&self, key: &SynsetKey) -> bool {
        self.synsets.contains_key(key)
    }

    /// Lemmas of a synset, in the order they were added.
    pub fn synset_lemmas(&self, key: &SynsetKey) -> Result<&[Lemma], Error> {
        Ok(&self.node(key)?.lemmas)
    }

    /// Loads a taxonomy from a CSV file (gzip-compressed if the name ends in `.gz`).
    pub fn from_csv_path(path: &Path, version: &str) -> Result<Self, Error> {
        let reader = open_text_reader(path)?;
        let taxonomy = Self::from_csv_reader(reader, version)?;

        info!(
            "Loaded taxonomy with {} synsets from {:?}",
            taxonomy.len(),
            path
        );

        Ok(taxonomy)
    }

    /// Loads a taxonomy from CSV data with a `pos,offset,lemmas,hypernyms` header row.
    ///
    /// A row may name a hypernym defined further down, but every hypernym must have a row
    /// of its own by the end of the data.
    pub fn from_csv_reader<R: Read>(reader: R, version: &str) -> Result<Self, Error> {
        let mut taxonomy = MemoryTaxonomy::new(version);
        let mut defined: HashSet<SynsetKey> = HashSet::new();
        // First line naming each hypernym, with the joined row text
        let mut first_references: HashMap<SynsetKey, (usize, String)> = HashMap::new();

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        for (record_idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header occupies the first line
            let line_number = record_idx + 2;

            let (key, lemmas, hypernyms) = Self::parse_csv_record(&record, line_number)?;
            let lemma_refs: Vec<&str> = lemmas.iter().map(|lemma| lemma.as_str()).collect();

            defined.insert(key);
            for hypernym in &hypernyms {
                first_references.entry(*hypernym).or_insert_with(|| {
                    let line = record.iter().collect::<Vec<_>>().join(",");
                    (line_number, line)
                });
            }

            taxonomy.add_synset(key, &lemma_refs, &hypernyms);
        }

        let undefined = first_references
            .iter()
            .filter(|(hypernym, _)| !defined.contains(*hypernym))
            .min_by_key(|(_, (line_number, _))| *line_number);

        if let Some((_, (line_number, line))) = undefined {
            return Err(Error::parse_failure(
                "taxonomy",
                *line_number,
                line,
                "unknown hypernym offset",
            ));
        }

        Ok(taxonomy)
    }

    fn parse_csv_record(
        record: &StringRecord,
        line_number: usize,
    ) -> Result<(SynsetKey, Vec<Lemma>, Vec<SynsetKey>), Error> {
        let line = record.iter().collect::<Vec<_>>().join(",");
        let fail = |reason: &str| Error::parse_failure("taxonomy", line_number, &line, reason);

        if record.len() < 3 {
            return Err(fail("expected pos,offset,lemmas[,hypernyms]"));
        }

        let pos: PartOfSpeech = record[0]
            .parse()
            .map_err(|_| fail("unknown part of speech"))?;

        let offset: SynsetOffset = record[1].parse().map_err(|_| fail("invalid offset"))?;

        if SynsetKey::new(pos, offset).is_synthetic_root() {
            return Err(fail("offset 0 is reserved for the synthetic root"));
        }

        let lemmas: Vec<Lemma> = record[2]
            .split(TAXONOMY_CSV_LIST_DELIMITER)
            .map(str::trim)
            .filter(|lemma| !lemma.is_empty())
            .map(|lemma| lemma.to_string())
            .collect();

        let hypernyms = match record.get(3) {
            Some(field) => field
                .split(TAXONOMY_CSV_LIST_DELIMITER)
                .map(str::trim)
                .filter(|hypernym| !hypernym.is_empty())
                .map(|hypernym| {
                    hypernym
                        .parse::<SynsetOffset>()
                        .map(|offset| SynsetKey::new(pos, offset))
                        .map_err(|_| fail("invalid hypernym offset"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok((SynsetKey::new(pos, offset), lemmas, hypernyms))
    }

    fn node(&self, key: &SynsetKey) -> Result<&SynsetNode, Error> {
        self.synsets
            .get(key)
            .ok_or_else(|| Error::TaxonomyError(format!("Unknown synset: {}", key)))
    }
}

impl Taxonomy for MemoryTaxonomy {
    fn version(&self) -> &str {
        &self.version
    }

    fn direct_hypernyms(&self, key: &SynsetKey) -> Result<Vec<SynsetKey>, Error> {
        Ok(self.node(key)?.hypernyms.clone())
    }

    fn direct_hyponyms(&self, key: &SynsetKey) -> Result<Vec<SynsetKey>, Error> {
        Ok(self.node(key)?.hyponyms.clone())
    }

    fn lookup_lemma(&self, lemma: &LemmaRef, pos: PartOfSpeech) -> Result<Vec<SynsetKey>, Error> {
        Ok(self
            .lemma_index
            .get(&(normalize_lemma(lemma), pos))
            .cloned()
            .unwrap_or_default())
    }

    fn all_synsets(&self, pos: PartOfSpeech) -> Result<Vec<SynsetKey>, Error> {
        Ok(self
            .synsets
            .keys()
            .filter(|key| key.pos == pos)
            .copied()
            .collect())
    }

    fn lemmas(&self, pos: PartOfSpeech) -> Result<Vec<Lemma>, Error> {
        let mut lemmas: Vec<Lemma> = self
            .lemma_index
            .keys()
            .filter(|(_, lemma_pos)| *lemma_pos == pos)
            .map(|(lemma, _)| lemma.clone())
            .collect();
        lemmas.sort();

        Ok(lemmas)
    }
}
