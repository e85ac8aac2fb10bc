//! Synonym resolution with syllable-count deduplication.
//!
//! For each word the resolver offers the word itself plus at most one
//! thesaurus synonym per distinct syllable count. Two synonyms with the same
//! count are interchangeable for syllable matching, so keeping both would only
//! multiply the combinations the segment search has to visit.
//!
//! A word whose own syllable count cannot be resolved is never substituted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// A substitutable word with its resolved syllable count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub syllables: usize,
}

/// Substitution candidates for one token position.
///
/// The original word is always at index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
}

impl CandidateList {
    /// The unsubstituted word.
    pub fn original(&self) -> &Candidate {
        &self.candidates[0]
    }

    /// Synonyms offered in place of the original word.
    pub fn alternatives(&self) -> &[Candidate] {
        &self.candidates[1..]
    }

    /// Candidate at `index`; 0 is the original word.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// All candidates, original first.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Number of candidates, including the original word. Never zero.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false`: the original word is always present.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl std::ops::Index<usize> for CandidateList {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.candidates[index]
    }
}

/// Builds [`CandidateList`]s from a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct SynonymResolver {
    lexicon: Lexicon,
}

impl SynonymResolver {
    pub fn new(lexicon: Lexicon) -> Self {
        SynonymResolver { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Candidates for a normalized word.
    ///
    /// Stop words and words with no resolvable syllable count resolve to just
    /// themselves. Other words get the first thesaurus synonym seen for each
    /// positive syllable count, ordered by ascending count.
    pub fn candidates(&self, word: &str) -> CandidateList {
        let syllables = self.lexicon.syllables();
        let original = Candidate {
            text: word.to_string(),
            syllables: syllables.syllables(word),
        };

        if original.syllables == 0 || self.lexicon.stop_words().is_stop_word(word) {
            return CandidateList {
                candidates: vec![original],
            };
        }

        let mut by_count: BTreeMap<usize, &str> = BTreeMap::new();
        for synonym in self.lexicon.thesaurus().synonyms(word) {
            if synonym == word {
                continue;
            }
            let count = syllables.syllables(synonym);
            if count > 0 {
                by_count.entry(count).or_insert(synonym);
            }
        }

        let mut candidates = Vec::with_capacity(by_count.len() + 1);
        candidates.push(original);
        candidates.extend(by_count.into_iter().map(|(count, text)| Candidate {
            text: text.to_string(),
            syllables: count,
        }));

        CandidateList { candidates }
    }
}
