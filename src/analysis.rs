//! Text analysis for haiku search.
//!
//! Splits running text into sentences and each sentence into normalized
//! words: contractions expanded, punctuation stripped, lowercased.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
