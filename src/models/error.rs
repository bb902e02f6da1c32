use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    ConfigError(String),
    TaxonomyError(String),
    EncodingError(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
}

impl Error {
    /// Builds a parser error that names the offending source line.
    pub fn parse_failure(source: &str, line_number: usize, line: &str, reason: &str) -> Self {
        Error::ParserError(format!(
            "{} line {}: {} (\"{}\")",
            source, line_number, reason, line
        ))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::TaxonomyError(msg) => write!(f, "Taxonomy Error: {}", msg),
            Error::EncodingError(msg) => write!(f, "Encoding Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}
