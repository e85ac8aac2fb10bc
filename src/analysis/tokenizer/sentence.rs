//! Sentence tokenizer.
//!
//! Splits running text at words ending in `.`, `?` or `!`. Common honorifics
//! such as `Mr.` and `Dr.` do not end a sentence. Text after the last
//! terminator forms a final sentence of its own.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{HaikuError, Result};

const TERMINATORS: &[char] = &['.', '?', '!'];

const HONORIFICS: &[&str] = &["mr.", "dr.", "ms.", "mrs.", "sr."];

/// Emits one token per sentence, with byte offsets into the input.
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    words: Arc<Regex>,
}

impl SentenceTokenizer {
    pub fn new() -> Result<Self> {
        let words = Regex::new(r"\S+")
            .map_err(|e| HaikuError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(SentenceTokenizer {
            words: Arc::new(words),
        })
    }

    fn ends_sentence(word: &str) -> bool {
        word.ends_with(TERMINATORS) && !HONORIFICS.contains(&word.to_lowercase().as_str())
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;
        let mut end = 0;

        for word in self.words.find_iter(text) {
            start.get_or_insert(word.start());
            end = word.end();

            if Self::ends_sentence(word.as_str())
                && let Some(begin) = start.take()
            {
                sentences.push(Token::with_offsets(
                    &text[begin..end],
                    sentences.len(),
                    begin,
                    end,
                ));
            }
        }

        if let Some(begin) = start {
            sentences.push(Token::with_offsets(
                &text[begin..end],
                sentences.len(),
                begin,
                end,
            ));
        }

        Ok(Box::new(sentences.into_iter()))
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}
