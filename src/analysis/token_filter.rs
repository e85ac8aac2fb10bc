//! Token filter implementations for token transformation.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Lowercases token text

pub mod lowercase;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
