use crate::models::TextEncoding;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a file for reading, gunzipping it on the fly when the name ends in `.gz`.
pub fn open_text_reader(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = BufReader::new(File::open(path)?);

    let is_gzip = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzip {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Reads a whole (optionally gzip-compressed) text file in the given encoding.
pub fn read_text_file(path: &Path, encoding: TextEncoding) -> Result<String, Error> {
    let mut bytes = Vec::new();
    open_text_reader(path)?.read_to_end(&mut bytes)?;

    encoding.decode(bytes, &path.display().to_string())
}
