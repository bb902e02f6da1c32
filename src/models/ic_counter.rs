use crate::models::{FrequencyEntry, FrequencyTable, PartOfSpeech, SynsetKey, Taxonomy};
use crate::types::{Frequency, Lemma, LemmaRef, SynsetOffset};
use crate::utils::{collect_hypernym_distances, compoundify, tokenize_sentence};
use crate::Error;
use log::{debug, info};
use std::collections::{BTreeMap, HashMap, HashSet};

/// How one occurrence of a word is credited to its senses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CountingMode {
    /// Every matching sense gains 1.
    Whole,
    /// A word with `k` senses credits each of them `1/k` (Resnik counting).
    Divided,
}

#[derive(Debug, Clone)]
pub struct IcCounterConfig {
    pub counting_mode: CountingMode,
    pub parts_of_speech: &'static [PartOfSpeech],
}

/// Counts lemma occurrences in a corpus and propagates them up the taxonomy, producing the
/// cumulative frequencies that information content is derived from.
///
/// Passes run strictly in order: count with `&mut self`, then either `propagate` or, for
/// add-one smoothed counts, `smooth` followed by `into_raw_table`. Both final passes consume
/// the counter and yield the exportable [`FrequencyTable`]; a smoothed counter cannot be
/// propagated.
pub struct IcCounter<'a, T: Taxonomy> {
    taxonomy: &'a T,
    config: IcCounterConfig,
    compounds: HashSet<Lemma>,
    raw_frequencies: BTreeMap<PartOfSpeech, HashMap<SynsetOffset, Frequency>>,
    smoothed: bool,
}

impl<'a, T: Taxonomy> IcCounter<'a, T> {
    pub fn new(taxonomy: &'a T, config: IcCounterConfig) -> Result<Self, Error> {
        let mut instance = IcCounter {
            taxonomy,
            config,
            compounds: HashSet::new(),
            raw_frequencies: BTreeMap::new(),
            smoothed: false,
        };

        for pos in instance.config.parts_of_speech {
            instance.raw_frequencies.insert(*pos, HashMap::new());
        }

        instance.load_compounds()?;

        Ok(instance)
    }

    /// Collects every multi-word lemma of the counted parts of speech.
    fn load_compounds(&mut self) -> Result<(), Error> {
        self.compounds.clear();

        for pos in self.config.parts_of_speech {
            for lemma in self.taxonomy.lemmas(*pos)? {
                if lemma.contains(' ') {
                    self.compounds.insert(lemma);
                }
            }
        }

        info!("Loaded {} compound lemmas", self.compounds.len());

        Ok(())
    }

    pub fn compounds(&self) -> &HashSet<Lemma> {
        &self.compounds
    }

    /// Splits raw text into sentences on `.` and counts each one.
    pub fn count_text(&mut self, text: &str) -> Result<(), Error> {
        for sentence in text.split('.') {
            let terms: Vec<&str> = sentence.split_whitespace().collect();

            if !terms.is_empty() {
                self.count_sentence(&terms)?;
            }
        }

        Ok(())
    }

    /// Normalizes the terms of one sentence, adds the compounds found in it, and counts
    /// every resulting token.
    pub fn count_sentence<S: AsRef<str>>(&mut self, terms: &[S]) -> Result<(), Error> {
        let tokens = tokenize_sentence(terms);
        let tokens = compoundify(&tokens, &self.compounds);

        for token in &tokens {
            self.count_word(token)?;
        }

        Ok(())
    }

    /// Credits every sense of `word`, in each counted part of speech independently.
    pub fn count_word(&mut self, word: &LemmaRef) -> Result<(), Error> {
        for pos in self.config.parts_of_speech {
            let senses = self.taxonomy.lookup_lemma(word, *pos)?;
            if senses.is_empty() {
                continue;
            }

            let increment = match self.config.counting_mode {
                CountingMode::Whole => 1.0,
                CountingMode::Divided => 1.0 / senses.len() as Frequency,
            };

            let frequencies = self.raw_frequencies.entry(*pos).or_default();
            for sense in senses {
                *frequencies.entry(sense.offset).or_insert(0.0) += increment;
            }
        }

        Ok(())
    }

    /// Raw (unpropagated) count of `key`.
    pub fn raw_frequency(&self, key: &SynsetKey) -> Frequency {
        self.raw_frequencies
            .get(&key.pos)
            .and_then(|frequencies| frequencies.get(&key.offset))
            .copied()
            .unwrap_or(0.0)
    }

    /// Add-one smoothing: every synset of the counted parts of speech gains 1.
    pub fn smooth(&mut self) -> Result<(), Error> {
        for pos in self.config.parts_of_speech {
            let synsets = self.taxonomy.all_synsets(*pos)?;
            let frequencies = self.raw_frequencies.entry(*pos).or_default();

            for synset in &synsets {
                *frequencies.entry(synset.offset).or_insert(0.0) += 1.0;
            }

            info!("Smoothed {} {} synsets", synsets.len(), pos);
        }

        self.smoothed = true;

        Ok(())
    }

    /// Exports the raw counts as they stand, without propagation. This is the export path
    /// for smoothed counts.
    ///
    /// Every synset with a positive count is recorded, as is every true root. The synthetic
    /// root total is the sum of all raw counts of the part of speech.
    pub fn into_raw_table(self) -> Result<FrequencyTable, Error> {
        let mut table = FrequencyTable::new(self.taxonomy.version());

        for pos in self.config.parts_of_speech {
            let mut synsets = self.taxonomy.all_synsets(*pos)?;
            synsets.sort();

            let mut synthetic_root_frequency: Frequency = 0.0;

            for synset in &synsets {
                let frequency = self.raw_frequency(synset);
                let is_root = self.taxonomy.direct_hypernyms(synset)?.is_empty();

                synthetic_root_frequency += frequency;

                if frequency > 0.0 || is_root {
                    table.insert(*synset, FrequencyEntry { frequency, is_root });
                }
            }

            table.set_synthetic_root_frequency(*pos, synthetic_root_frequency);

            info!(
                "Collected raw frequencies for {}; synthetic root total {}",
                pos, synthetic_root_frequency
            );
        }

        Ok(table)
    }

    /// Turns raw counts into cumulative subtree frequencies.
    ///
    /// Each raw count is credited once to its own synset and once to every distinct
    /// ancestor, however many hypernym paths lead there, so a synset reachable through
    /// several parents is never counted twice. The synthetic root total is the sum of all
    /// raw counts of the part of speech. Synsets are visited in ascending offset order.
    ///
    /// Fails with [`Error::ConfigError`] once `smooth` has run; smoothed counts are exported
    /// with [`IcCounter::into_raw_table`].
    pub fn propagate(self) -> Result<FrequencyTable, Error> {
        if self.smoothed {
            return Err(Error::ConfigError(
                "Smoothed counts cannot be propagated; export them with into_raw_table"
                    .to_string(),
            ));
        }

        let mut table = FrequencyTable::new(self.taxonomy.version());

        for pos in self.config.parts_of_speech {
            let mut synsets = self.taxonomy.all_synsets(*pos)?;
            synsets.sort();

            let raw_frequencies = self.raw_frequencies.get(pos);
            let mut cumulative: HashMap<SynsetKey, Frequency> = HashMap::new();
            let mut synthetic_root_frequency: Frequency = 0.0;

            for synset in &synsets {
                let raw_frequency = self.raw_frequency(synset);
                if raw_frequency == 0.0 {
                    continue;
                }

                synthetic_root_frequency += raw_frequency;

                for (ancestor, _) in collect_hypernym_distances(self.taxonomy, synset, false)? {
                    *cumulative.entry(ancestor).or_insert(0.0) += raw_frequency;
                }
            }

            for synset in &synsets {
                let frequency = cumulative.get(synset).copied().unwrap_or(0.0);
                let is_root = self.taxonomy.direct_hypernyms(synset)?.is_empty();

                if frequency > 0.0 || is_root {
                    table.insert(*synset, FrequencyEntry { frequency, is_root });
                }
            }

            table.set_synthetic_root_frequency(*pos, synthetic_root_frequency);

            debug!(
                "{} synsets with raw counts for {}",
                raw_frequencies.map_or(0, |frequencies| frequencies.len()),
                pos
            );
            info!(
                "Propagated frequencies for {}; synthetic root total {}",
                pos, synthetic_root_frequency
            );
        }

        Ok(table)
    }
}
