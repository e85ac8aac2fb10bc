//! Thesaurus mapping a headword to its ordered set of synonyms.
//!
//! The on-disk format is pipe-delimited, one record per line. Field 1 is the
//! headword and every field after it is a synonym:
//!
//! ```text
//! (noun)|chocolate|cocoa|hot chocolate|drinking chocolate
//! ```
//!
//! Lines with two or fewer fields carry no synonyms and are skipped.
//! Records for the same headword accumulate, keeping the first position of
//! each synonym.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::{HaikuError, Result};

const FIELD_SEPARATOR: char = '|';

/// In-memory thesaurus.
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    entries: AHashMap<String, Vec<String>>,
}

impl Thesaurus {
    /// Create an empty thesaurus.
    pub fn new() -> Self {
        Thesaurus::default()
    }

    /// Load a thesaurus file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            HaikuError::resource_load(format!(
                "Failed to open thesaurus '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            HaikuError::Io(io) => HaikuError::resource_load(format!(
                "Failed to read thesaurus '{}': {}",
                path.display(),
                io
            )),
            other => other,
        })
    }

    /// Parse thesaurus records from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut thesaurus = Thesaurus::new();
        let mut seen: AHashMap<String, AHashSet<String>> = AHashMap::new();

        for line in reader.lines() {
            let line = line?;
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() <= 2 {
                continue;
            }

            let headword = fields[1].trim().to_lowercase();
            if headword.is_empty() {
                continue;
            }

            let known = seen.entry(headword.clone()).or_default();
            let synonyms = thesaurus.entries.entry(headword).or_default();
            for field in &fields[2..] {
                let synonym = field.trim().to_lowercase();
                if !synonym.is_empty() && known.insert(synonym.clone()) {
                    synonyms.push(synonym);
                }
            }
        }

        Ok(thesaurus)
    }

    /// Build a thesaurus from `(headword, synonyms)` pairs.
    pub fn from_groups<I, W, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<S>)>,
        W: Into<String>,
        S: Into<String>,
    {
        let mut thesaurus = Thesaurus::new();
        for (headword, synonyms) in groups {
            thesaurus.add_synonyms(headword, synonyms);
        }
        thesaurus
    }

    /// Append synonyms for a headword, skipping ones it already has.
    pub fn add_synonyms<W, I, S>(&mut self, headword: W, synonyms: I)
    where
        W: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .entries
            .entry(headword.into().to_lowercase())
            .or_default();
        for synonym in synonyms {
            let synonym = synonym.into().to_lowercase();
            if !entry.contains(&synonym) {
                entry.push(synonym);
            }
        }
    }

    /// Synonyms of `word` in thesaurus order; empty if the word is unknown.
    pub fn synonyms(&self, word: &str) -> &[String] {
        self.entries
            .get(word)
            .map(|synonyms| synonyms.as_slice())
            .unwrap_or(&[])
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the thesaurus has no headwords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
