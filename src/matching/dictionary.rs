//! Loading dictionaries of phrases from disk.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Load a dictionary of phrases.
///
/// A file with a `.json` extension must hold a JSON array of strings. Any
/// other file is read as one phrase per line; lines are trimmed and blank
/// lines skipped.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let phrases: Vec<String> = if is_json {
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader)?
    } else {
        read_phrases(BufReader::new(File::open(path)?))?
    };

    debug!("loaded {} phrases from {}", phrases.len(), path.display());
    Ok(phrases)
}

/// Read one phrase per line from `reader`, skipping blank lines.
pub fn read_phrases<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut phrases = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let phrase = line.trim();
        if !phrase.is_empty() {
            phrases.push(phrase.to_string());
        }
    }
    Ok(phrases)
}
