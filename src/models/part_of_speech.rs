use crate::Error;
use std::fmt;
use std::str::FromStr;

/// WordNet part of speech. Variant order is the order parts of speech are exported in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter tag used by WordNet data files (`n`, `v`, `a`, `r`).
    pub fn tag(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Parses a WordNet tag. Satellite adjectives (`s`) fold into `Adjective`.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_lowercase() {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' | 's' => Some(PartOfSpeech::Adjective),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        let pos = match (chars.next(), chars.next()) {
            (Some(tag), None) => Self::from_tag(tag),
            _ => match s.trim().to_lowercase().as_str() {
                "noun" => Some(PartOfSpeech::Noun),
                "verb" => Some(PartOfSpeech::Verb),
                "adjective" | "adj" => Some(PartOfSpeech::Adjective),
                "adverb" | "adv" => Some(PartOfSpeech::Adverb),
                _ => None,
            },
        };

        pos.ok_or_else(|| Error::ParserError(format!("Unknown part of speech: {}", s)))
    }
}
