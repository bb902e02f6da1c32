use crate::constants::{IC_HEADER_PREFIX, IC_ROOT_MARKER};
use crate::models::{InformationContent, PartOfSpeech, SynsetKey};
use crate::types::{Frequency, SynsetOffset};
use crate::Error;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Cumulative frequency of one synset after propagation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub frequency: Frequency,
    /// The synset has no hypernyms.
    pub is_root: bool,
}

/// Output of frequency propagation: cumulative subtree frequencies per part of speech,
/// plus the synthetic root total of each part of speech.
///
/// Entries are kept in ascending offset order so that exports are byte-identical across
/// runs over identical input.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    version: String,
    entries: BTreeMap<PartOfSpeech, BTreeMap<SynsetOffset, FrequencyEntry>>,
    synthetic_root_frequencies: BTreeMap<PartOfSpeech, Frequency>,
}

impl FrequencyTable {
    pub fn new(version: &str) -> Self {
        FrequencyTable {
            version: version.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn insert(&mut self, key: SynsetKey, entry: FrequencyEntry) {
        self.entries.entry(key.pos).or_default().insert(key.offset, entry);
    }

    pub(crate) fn set_synthetic_root_frequency(&mut self, pos: PartOfSpeech, frequency: Frequency) {
        self.synthetic_root_frequencies.insert(pos, frequency);
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn entry(&self, key: &SynsetKey) -> Option<&FrequencyEntry> {
        self.entries.get(&key.pos)?.get(&key.offset)
    }

    /// Cumulative frequency of `key`; the synthetic root total for offset 0.
    pub fn frequency_of(&self, key: &SynsetKey) -> Frequency {
        if key.is_synthetic_root() {
            return self.synthetic_root_frequency(key.pos);
        }

        self.entry(key).map_or(0.0, |entry| entry.frequency)
    }

    pub fn synthetic_root_frequency(&self, pos: PartOfSpeech) -> Frequency {
        self.synthetic_root_frequencies
            .get(&pos)
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterates over all entries, by part of speech and then ascending offset.
    pub fn iter(&self) -> impl Iterator<Item = (SynsetKey, &FrequencyEntry)> + '_ {
        self.entries.iter().flat_map(|(pos, entries)| {
            entries
                .iter()
                .map(move |(offset, entry)| (SynsetKey::new(*pos, *offset), entry))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|entries| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the IC table in-process, normalizing by the synthetic root totals.
    pub fn to_information_content(&self) -> InformationContent {
        let frequencies: HashMap<SynsetKey, Frequency> = self
            .iter()
            .map(|(key, entry)| (key, entry.frequency))
            .collect();

        let root_frequencies: HashMap<PartOfSpeech, Frequency> = self
            .synthetic_root_frequencies
            .iter()
            .map(|(pos, frequency)| (*pos, *frequency))
            .collect();

        InformationContent::from_frequencies(
            Some(self.version.clone()),
            frequencies,
            root_frequencies,
        )
    }

    /// Writes the table in the IC data file format.
    ///
    /// The synthetic root of each part of speech is written first as offset `0`, followed
    /// by one record per synset; synsets without hypernyms carry the `ROOT` marker.
    pub fn export<W: Write>(&self, output: &mut W) -> Result<(), Error> {
        writeln!(output, "{}{}", IC_HEADER_PREFIX, self.version)?;

        for (pos, entries) in &self.entries {
            writeln!(
                output,
                "{} {:.6}",
                SynsetKey::synthetic_root(*pos),
                self.synthetic_root_frequency(*pos)
            )?;

            for (offset, entry) in entries {
                let key = SynsetKey::new(*pos, *offset);

                if entry.is_root {
                    writeln!(output, "{} {:.6} {}", key, entry.frequency, IC_ROOT_MARKER)?;
                } else {
                    writeln!(output, "{} {:.6}", key, entry.frequency)?;
                }
            }
        }

        Ok(())
    }

    /// Exports to a file, gzip-compressed when the name ends in `.gz`.
    pub fn export_to_path(&self, path: &Path) -> Result<(), Error> {
        let file = BufWriter::new(File::create(path)?);

        let is_gzip = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        if is_gzip {
            let mut encoder = GzEncoder::new(file, Compression::default());
            self.export(&mut encoder)?;
            encoder.finish()?.flush()?;
        } else {
            let mut writer = file;
            self.export(&mut writer)?;
            writer.flush()?;
        }

        info!("Exported {} frequency records to {:?}", self.len(), path);

        Ok(())
    }
}
