//! Char filters that rewrite raw text before tokenization.
//!
//! # Available Filters
//!
//! - [`contraction::ContractionCharFilter`] - Expands English contractions

pub mod contraction;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}
