//! Configuration for lexical resources and the haiku search.
//!
//! Configuration is plain serde data and can be read from a JSON file.
//! Every field has a default, so a file only needs the values it changes.
//!
//! # Examples
//!
//! ```
//! use haikuify::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.search.targets, vec![5, 7, 5]);
//! assert_eq!(config.search.max_span_length, 7);
//! assert!(config.validate().is_ok());
//!
//! let mut custom = Config::default();
//! custom.search.targets = vec![3, 5, 3];
//! custom.search.parallel = true;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HaikuError, Result};
use crate::lexicon::syllables::AmbiguityPolicy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the lexical resources live and how they are interpreted.
    pub lexicon: LexiconConfig,
    /// Search parameters.
    pub search: SearchConfig,
}

impl Config {
    /// Read a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HaikuError::invalid_config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a search.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()
    }
}

/// Lexical resource configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Pipe-delimited thesaurus file.
    pub thesaurus_path: PathBuf,
    /// CMU-style pronunciation dictionary.
    pub pronunciation_path: PathBuf,
    /// Optional stop word list; the built-in English list is used when unset.
    pub stop_words_path: Option<PathBuf>,
    /// Resolution of words with several recorded syllable counts.
    pub ambiguity: AmbiguityPolicy,
    /// Guess counts of unknown words by stripping a known prefix.
    pub prefix_fallback: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            thesaurus_path: PathBuf::from("resources/th_en_US_new.dat"),
            pronunciation_path: PathBuf::from("resources/cmudict.0.7a"),
            stop_words_path: None,
            ambiguity: AmbiguityPolicy::FirstWins,
            prefix_fallback: false,
        }
    }
}

/// Search parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Syllable target of each line, in order.
    pub targets: Vec<usize>,
    /// Longest word span tried for a single line. Bounds the search.
    pub max_span_length: usize,
    /// Segments whose combination count exceeds this are skipped.
    pub max_segment_combinations: Option<u64>,
    /// Wall-clock budget for one assembly, in milliseconds.
    pub time_budget_ms: Option<u64>,
    /// Search independent segments on the rayon thread pool.
    pub parallel: bool,
    /// Keep only haikus whose last line ends at the last token.
    pub require_full_sentence: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            targets: vec![5, 7, 5],
            max_span_length: 7,
            max_segment_combinations: Some(1_000_000),
            time_budget_ms: None,
            parallel: false,
            require_full_sentence: false,
        }
    }
}

impl SearchConfig {
    /// Check the search parameters.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(HaikuError::invalid_config("targets must not be empty"));
        }
        if let Some(position) = self.targets.iter().position(|&target| target == 0) {
            return Err(HaikuError::invalid_config(format!(
                "target for line {} is zero",
                position + 1
            )));
        }
        if self.max_span_length == 0 {
            return Err(HaikuError::invalid_config(
                "max_span_length must be at least 1",
            ));
        }
        if self.max_segment_combinations == Some(0) {
            return Err(HaikuError::invalid_config(
                "max_segment_combinations must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.targets, vec![5, 7, 5]);
        assert_eq!(config.search.max_span_length, 7);
        assert_eq!(config.search.max_segment_combinations, Some(1_000_000));
        assert!(!config.search.parallel);
        assert_eq!(config.lexicon.ambiguity, AmbiguityPolicy::FirstWins);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_search_config() {
        let mut search = SearchConfig::default();
        search.targets.clear();
        assert!(matches!(search.validate(), Err(HaikuError::InvalidConfig(_))));

        let mut search = SearchConfig::default();
        search.targets = vec![5, 0, 5];
        assert!(matches!(search.validate(), Err(HaikuError::InvalidConfig(_))));

        let mut search = SearchConfig::default();
        search.max_span_length = 0;
        assert!(matches!(search.validate(), Err(HaikuError::InvalidConfig(_))));

        let mut search = SearchConfig::default();
        search.max_segment_combinations = Some(0);
        assert!(matches!(search.validate(), Err(HaikuError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "lexicon": {{ "thesaurus_path": "th.dat", "ambiguity": "reject" }},
                "search": {{ "targets": [3, 5, 3], "parallel": true }}
            }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.lexicon.thesaurus_path, PathBuf::from("th.dat"));
        assert_eq!(config.lexicon.ambiguity, AmbiguityPolicy::Reject);
        assert_eq!(
            config.lexicon.pronunciation_path,
            PathBuf::from("resources/cmudict.0.7a")
        );
        assert_eq!(config.search.targets, vec![3, 5, 3]);
        assert!(config.search.parallel);
        assert_eq!(config.search.max_span_length, 7);
    }

    #[test]
    fn test_invalid_json_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "search": {{ "targets": [] }} }}"#).unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(HaikuError::InvalidConfig(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(HaikuError::Json(_))
        ));
    }
}
