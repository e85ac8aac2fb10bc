//! Error types for the haikuify library.
//!
//! All fallible operations return [`HaikuError`] through the [`Result`] alias.
//! Resource loading failures are fatal and surface before any search starts;
//! per-word lookup failures ([`HaikuError::UnknownWord`],
//! [`HaikuError::AmbiguousSyllableCount`]) are normally absorbed by the search
//! as a zero syllable count.
//!
//! # Examples
//!
//! ```
//! use haikuify::error::{HaikuError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HaikuError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for haikuify operations.
#[derive(Error, Debug)]
pub enum HaikuError {
    /// I/O errors outside of resource loading
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A lexical resource (thesaurus, pronunciations, stop words) could not be read
    #[error("Resource load error: {0}")]
    ResourceLoad(String),

    /// A word has no entry in the syllable dictionary
    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// A word has several recorded syllable counts and the policy rejects it
    #[error("Ambiguous syllable count: {0}")]
    AmbiguousSyllableCount(String),

    /// A combination counter was given a zero limit
    #[error("Invalid counter limits: {0}")]
    InvalidCounterLimits(String),

    /// Configuration values that cannot drive a search
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument passed to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A search exceeded its combination budget
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HaikuError.
pub type Result<T> = std::result::Result<T, HaikuError>;

impl HaikuError {
    /// Create a new resource load error.
    pub fn resource_load<S: Into<String>>(msg: S) -> Self {
        HaikuError::ResourceLoad(msg.into())
    }

    /// Create a new unknown word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        HaikuError::UnknownWord(word.into())
    }

    /// Create a new ambiguous syllable count error.
    pub fn ambiguous<S: Into<String>>(msg: S) -> Self {
        HaikuError::AmbiguousSyllableCount(msg.into())
    }

    /// Create a new invalid counter limits error.
    pub fn invalid_limits<S: Into<String>>(msg: S) -> Self {
        HaikuError::InvalidCounterLimits(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        HaikuError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HaikuError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HaikuError::Analysis(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn exhausted<S: Into<String>>(msg: S) -> Self {
        HaikuError::ResourceExhausted(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HaikuError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = HaikuError::resource_load("missing thesaurus");
        assert_eq!(error.to_string(), "Resource load error: missing thesaurus");

        let error = HaikuError::unknown_word("zzyzx");
        assert_eq!(error.to_string(), "Unknown word: zzyzx");

        let error = HaikuError::invalid_limits("limit 0 at position 2");
        assert_eq!(
            error.to_string(),
            "Invalid counter limits: limit 0 at position 2"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let haiku_error = HaikuError::from(io_error);

        match haiku_error {
            HaikuError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
