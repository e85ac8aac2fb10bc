//! Syllable dictionary built from a CMU-style pronunciation file.
//!
//! Each line holds a word and its phonemes. Vowel phonemes carry a stress
//! digit, so the syllable count is the number of digits on the line:
//!
//! ```text
//! ;;; comments start with semicolons
//! CHOCOLATE  CH AO1 K L AH0 T
//! CHOCOLATE(1)  CH AO1 K AH0 L AH0 T
//! ```
//!
//! Variant markers such as `(1)` are stripped, so one word can collect several
//! distinct counts. How such a word resolves is decided by the
//! [`AmbiguityPolicy`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{HaikuError, Result};

/// Prefixes tried, with their own syllable counts, when a word is missing.
const PREFIXES: &[(&str, usize)] = &[
    ("anti", 2),
    ("de", 1),
    ("dis", 1),
    ("ex", 1),
    ("mega", 2),
    ("mini", 2),
    ("mis", 1),
    ("multi", 2),
    ("non", 1),
    ("post", 1),
    ("pre", 1),
    ("pro", 1),
    ("proto", 2),
    ("quasi", 2),
    ("re", 1),
    ("semi", 2),
    ("un", 1),
    ("vice", 1),
];

/// How to resolve a word with more than one recorded syllable count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Use the first count recorded in the file.
    #[default]
    FirstWins,
    /// Treat the word as unusable for exact matching.
    Reject,
}

/// Word to syllable-count lookup.
#[derive(Debug, Clone, Default)]
pub struct SyllableDictionary {
    counts: AHashMap<String, Vec<usize>>,
    policy: AmbiguityPolicy,
    prefix_fallback: bool,
}

impl SyllableDictionary {
    /// Create an empty dictionary with the default policy.
    pub fn new() -> Self {
        SyllableDictionary::default()
    }

    /// Set the ambiguity policy.
    pub fn with_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable the prefix fallback for unknown words.
    pub fn with_prefix_fallback(mut self, enabled: bool) -> Self {
        self.prefix_fallback = enabled;
        self
    }

    /// The active ambiguity policy.
    pub fn policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    /// Load a pronunciation file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            HaikuError::resource_load(format!(
                "Failed to open pronunciation dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            HaikuError::Io(io) => HaikuError::resource_load(format!(
                "Failed to read pronunciation dictionary '{}': {}",
                path.display(),
                io
            )),
            other => other,
        })
    }

    /// Parse pronunciation lines from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = SyllableDictionary::new();

        for line in reader.lines() {
            let line = line?.to_lowercase();
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let (word, pronunciation) = match line.split_once(char::is_whitespace) {
                Some(parts) => parts,
                None => continue,
            };
            let count = pronunciation.chars().filter(|c| c.is_ascii_digit()).count();
            dictionary.add_count(strip_variant(word), count);
        }

        Ok(dictionary)
    }

    /// Record a syllable count for a word, ignoring repeats.
    pub fn add_count(&mut self, word: &str, count: usize) {
        let counts = self.counts.entry(word.to_lowercase()).or_default();
        if !counts.contains(&count) {
            counts.push(count);
        }
    }

    /// All distinct counts recorded for a word, in file order.
    pub fn counts(&self, word: &str) -> Option<&[usize]> {
        self.counts.get(word).map(|counts| counts.as_slice())
    }

    /// Resolve a word's syllable count under the active policy.
    pub fn lookup(&self, word: &str) -> Result<usize> {
        match self.counts(word) {
            Some([count]) => Ok(*count),
            Some(counts @ [first, ..]) => match self.policy {
                AmbiguityPolicy::FirstWins => Ok(*first),
                AmbiguityPolicy::Reject => Err(HaikuError::ambiguous(format!(
                    "'{word}' has counts {counts:?}"
                ))),
            },
            _ => self
                .prefixed(word)
                .ok_or_else(|| HaikuError::unknown_word(word)),
        }
    }

    /// Syllable count of a word, or 0 when it cannot be resolved.
    pub fn syllables(&self, word: &str) -> usize {
        self.lookup(word).unwrap_or_else(|e| {
            trace!("counting '{word}' as 0 syllables: {e}");
            0
        })
    }

    fn prefixed(&self, word: &str) -> Option<usize> {
        if !self.prefix_fallback {
            return None;
        }

        PREFIXES.iter().find_map(|(prefix, prefix_count)| {
            let rest = word.strip_prefix(prefix)?;
            match self.counts.get(rest)?.as_slice() {
                [count] => Some(count + prefix_count),
                [first, ..] if self.policy == AmbiguityPolicy::FirstWins => {
                    Some(first + prefix_count)
                }
                _ => None,
            }
        })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Drop a trailing `(n)` variant marker from a dictionary word.
fn strip_variant(word: &str) -> &str {
    if word.ends_with(')')
        && let Some(open) = word.rfind('(')
    {
        return &word[..open];
    }
    word
}
