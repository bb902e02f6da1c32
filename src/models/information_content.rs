use crate::constants::{IC_HEADER_PREFIX, IC_ROOT_MARKER};
use crate::models::{PartOfSpeech, SynsetKey, TextEncoding};
use crate::types::{Frequency, InformationContentValue, SynsetOffset};
use crate::utils::read_text_file;
use crate::Error;
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Per-synset information content, derived from cumulative corpus frequencies.
///
/// `IC(s) = -ln(freq(s) / freq(root of s's part of speech))`. Synsets without a recorded
/// frequency, or with a zero frequency, have an IC of 0, as does the synthetic root.
#[derive(Debug, Clone, Default)]
pub struct InformationContent {
    version: Option<String>,
    frequencies: HashMap<SynsetKey, Frequency>,
    root_frequencies: HashMap<PartOfSpeech, Frequency>,
}

impl InformationContent {
    /// Builds a table from cumulative frequencies and per-POS normalizing totals.
    pub fn from_frequencies(
        version: Option<String>,
        frequencies: HashMap<SynsetKey, Frequency>,
        root_frequencies: HashMap<PartOfSpeech, Frequency>,
    ) -> Self {
        InformationContent {
            version,
            frequencies,
            root_frequencies,
        }
    }

    pub fn from_path(path: &Path, encoding: TextEncoding) -> Result<Self, Error> {
        let text = read_text_file(path, encoding)?;
        let info_content = Self::parse(&text)?;

        info!(
            "Loaded {} information content entries from {:?}",
            info_content.len(),
            path
        );

        Ok(info_content)
    }

    /// Parses an IC data file: a `wnver::<version>` header followed by
    /// `<offset><pos> <frequency> [ROOT]` records.
    ///
    /// The per-POS normalizing frequency is the synthetic-root record (offset 0) when one
    /// is present, otherwise the sum of the ROOT-tagged records. Any malformed line fails
    /// the whole parse.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut lines = text.lines().enumerate();

        let version = match lines.next() {
            Some((_, header)) => header
                .trim()
                .strip_prefix(IC_HEADER_PREFIX)
                .map(|version| version.trim().to_string())
                .ok_or_else(|| {
                    Error::parse_failure(
                        "information content",
                        1,
                        header,
                        "expected wnver:: header",
                    )
                })?,
            None => {
                return Err(Error::ParserError(
                    "information content file is empty".to_string(),
                ))
            }
        };

        let mut frequencies = HashMap::new();
        let mut tagged_root_totals: HashMap<PartOfSpeech, Frequency> = HashMap::new();
        let mut synthetic_root_totals: HashMap<PartOfSpeech, Frequency> = HashMap::new();

        for (line_idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let (key, frequency, is_root) = Self::parse_record(line, line_idx + 1)?;

            if key.is_synthetic_root() {
                synthetic_root_totals.insert(key.pos, frequency);
                continue;
            }

            if is_root {
                *tagged_root_totals.entry(key.pos).or_insert(0.0) += frequency;
            }

            frequencies.insert(key, frequency);
        }

        // A recorded synthetic root takes precedence over the ROOT-tagged sum
        let mut root_frequencies = tagged_root_totals;
        root_frequencies.extend(synthetic_root_totals);

        Ok(InformationContent::from_frequencies(
            Some(version),
            frequencies,
            root_frequencies,
        ))
    }

    fn parse_record(line: &str, line_number: usize) -> Result<(SynsetKey, Frequency, bool), Error> {
        let fail =
            |reason: &str| Error::parse_failure("information content", line_number, line, reason);

        let fields: Vec<&str> = line.split_whitespace().collect();

        let is_root = match fields.as_slice() {
            [_, _] => false,
            [_, _, marker] if *marker == IC_ROOT_MARKER => true,
            [_, _, _] => return Err(fail("third column must be ROOT or empty")),
            _ => return Err(fail("expected <offset><pos> <frequency> [ROOT]")),
        };

        let synset_field = fields[0];
        let pos = synset_field
            .chars()
            .last()
            .and_then(PartOfSpeech::from_tag)
            .ok_or_else(|| fail("missing part-of-speech tag"))?;

        let offset: SynsetOffset = synset_field[..synset_field.len() - 1]
            .parse()
            .map_err(|_| fail("invalid offset"))?;

        let frequency: Frequency = fields[1]
            .parse()
            .map_err(|_| fail("invalid frequency"))?;

        if !frequency.is_finite() || frequency < 0.0 {
            return Err(fail("frequency must be a non-negative number"));
        }

        Ok((SynsetKey::new(pos, offset), frequency, is_root))
    }

    /// Information content of `key`; 0 for unknown synsets and the synthetic root.
    pub fn ic_of(&self, key: &SynsetKey) -> InformationContentValue {
        if key.is_synthetic_root() {
            return 0.0;
        }

        let frequency = self.frequency_of(key);
        let root_frequency = self.root_frequency(key.pos);

        if frequency <= 0.0 || root_frequency <= 0.0 {
            return 0.0;
        }

        // Frequencies above the root total (e.g. hand-edited files) would go negative
        (-(frequency / root_frequency).ln()).max(0.0)
    }

    /// Recorded cumulative frequency of `key`, 0 when absent.
    pub fn frequency_of(&self, key: &SynsetKey) -> Frequency {
        self.frequencies.get(key).copied().unwrap_or(0.0)
    }

    /// Normalizing frequency for a part of speech, 0 when nothing was recorded.
    pub fn root_frequency(&self, pos: PartOfSpeech) -> Frequency {
        self.root_frequencies.get(&pos).copied().unwrap_or(0.0)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
