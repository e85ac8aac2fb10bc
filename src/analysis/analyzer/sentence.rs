//! The analyzer that prepares a sentence for haiku search.
//!
//! Contractions are expanded, punctuation and digits are dropped and every
//! word is lowercased, leaving tokens that can be looked up directly in the
//! thesaurus and the syllable dictionary.
//!
//! # Examples
//!
//! ```
//! use haikuify::analysis::analyzer::sentence::SentenceAnalyzer;
//!
//! let analyzer = SentenceAnalyzer::new().unwrap();
//! assert_eq!(analyzer.words("Don't listen!").unwrap(), vec!["do", "not", "listen"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::contraction::ContractionCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct SentenceAnalyzer {
    inner: PipelineAnalyzer,
}

impl SentenceAnalyzer {
    pub fn new() -> Result<Self> {
        let inner = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
            .add_char_filter(Arc::new(ContractionCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("sentence");

        Ok(SentenceAnalyzer { inner })
    }

    /// Normalized words of `text`, in order.
    pub fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Analyzer for SentenceAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
