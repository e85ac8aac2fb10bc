//! Read-only lexical resources shared by every search.
//!
//! A [`Lexicon`] bundles the thesaurus, the syllable dictionary and the stop
//! word set. It is built once, up front, and then only read; cloning it is
//! cheap because each resource sits behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use haikuify::lexicon::Lexicon;
//! use haikuify::lexicon::stop_words::StopWords;
//! use haikuify::lexicon::syllables::SyllableDictionary;
//! use haikuify::lexicon::thesaurus::Thesaurus;
//!
//! let mut syllables = SyllableDictionary::new();
//! syllables.add_count("big", 1);
//! syllables.add_count("enormous", 3);
//!
//! let lexicon = Lexicon::new(
//!     Thesaurus::from_groups(vec![("big", vec!["enormous"])]),
//!     syllables,
//!     StopWords::new(),
//! );
//! assert_eq!(lexicon.thesaurus().synonyms("big"), &["enormous"]);
//! assert_eq!(lexicon.syllables().syllables("enormous"), 3);
//! ```

pub mod stop_words;
pub mod syllables;
pub mod thesaurus;

use std::sync::Arc;

use log::info;

use crate::config::LexiconConfig;
use crate::error::Result;
use crate::lexicon::stop_words::StopWords;
use crate::lexicon::syllables::SyllableDictionary;
use crate::lexicon::thesaurus::Thesaurus;

/// Shared handle to the lexical resources.
#[derive(Debug, Clone)]
pub struct Lexicon {
    thesaurus: Arc<Thesaurus>,
    syllables: Arc<SyllableDictionary>,
    stop_words: Arc<StopWords>,
}

impl Lexicon {
    /// Bundle resources that are already in memory.
    pub fn new(thesaurus: Thesaurus, syllables: SyllableDictionary, stop_words: StopWords) -> Self {
        Lexicon {
            thesaurus: Arc::new(thesaurus),
            syllables: Arc::new(syllables),
            stop_words: Arc::new(stop_words),
        }
    }

    /// Load every resource named by the configuration.
    ///
    /// Fails with [`HaikuError::ResourceLoad`](crate::error::HaikuError::ResourceLoad)
    /// on the first file that cannot be read.
    pub fn load(config: &LexiconConfig) -> Result<Self> {
        let thesaurus = Thesaurus::load_from_file(&config.thesaurus_path)?;
        info!(
            "Loaded {} thesaurus headwords from {}",
            thesaurus.len(),
            config.thesaurus_path.display()
        );

        let syllables = SyllableDictionary::load_from_file(&config.pronunciation_path)?
            .with_policy(config.ambiguity)
            .with_prefix_fallback(config.prefix_fallback);
        info!(
            "Loaded {} pronunciations from {}",
            syllables.len(),
            config.pronunciation_path.display()
        );

        let stop_words = match &config.stop_words_path {
            Some(path) => {
                let stop_words = StopWords::load_from_file(path)?;
                info!("Loaded {} stop words from {}", stop_words.len(), path.display());
                stop_words
            }
            None => StopWords::new(),
        };

        Ok(Self::new(thesaurus, syllables, stop_words))
    }

    /// The thesaurus.
    pub fn thesaurus(&self) -> &Thesaurus {
        &self.thesaurus
    }

    /// The syllable dictionary.
    pub fn syllables(&self) -> &SyllableDictionary {
        &self.syllables
    }

    /// The stop word set.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}
