//! Analyzers turn raw text into a token stream.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! - [`pipeline::PipelineAnalyzer`] - Any tokenizer plus char and token filters
//! - [`sentence::SentenceAnalyzer`] - The word pipeline used for haiku search

pub mod pipeline;
pub mod sentence;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
