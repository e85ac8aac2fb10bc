//! # Haikuify
//!
//! Turns ordinary sentences into haiku by swapping words for thesaurus
//! synonyms with different syllable counts.
//!
//! ## Features
//!
//! - Complete enumeration of synonym choices over every word span
//! - Exact syllable matching line by line (5-7-5 by default, any targets)
//! - CMU-style pronunciation dictionaries and pipe-delimited thesauri
//! - Contraction-aware text analysis
//! - Optional parallel search with combination and time budgets
//!
//! ## Example
//!
//! ```
//! use haikuify::prelude::*;
//!
//! let mut syllables = SyllableDictionary::new();
//! for (word, count) in [("cat", 1), ("feline", 2), ("is", 1), ("nice", 1), ("pleasant", 2)] {
//!     syllables.add_count(word, count);
//! }
//! let thesaurus = Thesaurus::from_groups(vec![
//!     ("cat", vec!["feline"]),
//!     ("nice", vec!["pleasant"]),
//! ]);
//! let lexicon = Lexicon::new(thesaurus, syllables, StopWords::from_words(vec!["is"]));
//!
//! let config = SearchConfig {
//!     targets: vec![4],
//!     ..SearchConfig::default()
//! };
//! let assembler = HaikuAssembler::new(lexicon, config).unwrap();
//! let report = assembler.compose("Cat is nice.").unwrap();
//!
//! let lines: Vec<String> = report.haikus.iter().map(|h| h.to_string()).collect();
//! assert_eq!(lines, vec!["cat is pleasant", "feline is nice"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod search;

pub mod prelude {
    pub use crate::config::{Config, LexiconConfig, SearchConfig};
    pub use crate::error::{HaikuError, Result};
    pub use crate::lexicon::Lexicon;
    pub use crate::lexicon::stop_words::StopWords;
    pub use crate::lexicon::syllables::{AmbiguityPolicy, SyllableDictionary};
    pub use crate::lexicon::thesaurus::Thesaurus;
    pub use crate::search::assembler::{AssemblyReport, Haiku, HaikuAssembler};
    pub use crate::search::counter::CombinationCounter;
    pub use crate::search::resolver::{Candidate, CandidateList, SynonymResolver};
    pub use crate::search::segment::{GoodNode, SegmentSearch};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
