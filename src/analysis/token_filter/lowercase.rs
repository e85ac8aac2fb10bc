//! Case folding for dictionary lookup.
//!
//! Thesaurus headwords and pronunciation entries are stored lowercased, so
//! every word leaving the analyzer is folded the same way.
//!
//! ```
//! use haikuify::analysis::token::Token;
//! use haikuify::analysis::token_filter::Filter;
//! use haikuify::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let words = vec![Token::new("Basho", 0), Token::new("FROG", 1)];
//! let folded: Vec<String> = LowercaseFilter::new()
//!     .filter(Box::new(words.into_iter()))
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(folded, vec!["basho", "frog"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let folded = token.text.to_lowercase();
            token.with_text(folded)
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
