//! An analyzer assembled from parts.
//!
//! Char filters rewrite the raw text first, in the order they were added.
//! The tokenizer then splits the rewritten text, and token filters run over
//! the resulting stream, again in insertion order.
//!
//! ```
//! use std::sync::Arc;
//!
//! use haikuify::analysis::analyzer::Analyzer;
//! use haikuify::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use haikuify::analysis::char_filter::contraction::ContractionCharFilter;
//! use haikuify::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new().unwrap()))
//!     .add_char_filter(Arc::new(ContractionCharFilter::new().unwrap()))
//!     .with_name("expand_only");
//!
//! let words: Vec<String> = analyzer.analyze("We'll See").unwrap().map(|t| t.text).collect();
//! assert_eq!(words, vec!["We", "will", "See"]);
//! assert_eq!(analyzer.name(), "expand_only");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let filtered_text = self
            .char_filters
            .iter()
            .fold(text.to_string(), |text, char_filter| char_filter.filter(&text));

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<&str> = self.char_filters.iter().map(|c| c.name()).collect();
        let filters: Vec<&str> = self.filters.iter().map(|t| t.name()).collect();

        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("char_filters", &char_filters)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}
