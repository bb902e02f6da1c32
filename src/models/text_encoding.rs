use crate::Error;
use std::str::FromStr;

/// Character set used to decode information content and mapping files.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Ascii,
    Latin1,
}

impl TextEncoding {
    /// Decodes raw file bytes. `source` names the input in error messages.
    pub fn decode(self, bytes: Vec<u8>, source: &str) -> Result<String, Error> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|err| {
                Error::EncodingError(format!(
                    "{} is not valid UTF-8 (byte {})",
                    source,
                    err.utf8_error().valid_up_to()
                ))
            }),
            TextEncoding::Ascii => match bytes.iter().position(|byte| !byte.is_ascii()) {
                Some(idx) => Err(Error::EncodingError(format!(
                    "{} is not valid US-ASCII (byte {})",
                    source, idx
                ))),
                // All bytes are ASCII and therefore valid UTF-8
                None => String::from_utf8(bytes)
                    .map_err(|err| Error::EncodingError(err.to_string())),
            },
            // ISO-8859-1 maps each byte to the code point of the same value
            TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "us-ascii" | "ascii" | "ansi-x3.4-1968" => Ok(TextEncoding::Ascii),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(TextEncoding::Latin1),
            other => Err(Error::ConfigError(format!(
                "Unsupported character encoding: {}",
                other
            ))),
        }
    }
}
