//! Contraction expansion.
//!
//! Rewrites English contractions into their full words so that each word can
//! be syllable-counted on its own: `don't` becomes `do not`, `let's` becomes
//! `let us`. Rules are case-insensitive, accept straight and curly
//! apostrophes, and run in a fixed order so that whole-word irregular forms
//! win over the generic suffix rules.

use regex::Regex;

use super::CharFilter;
use crate::error::{HaikuError, Result};

/// `(pattern, replacement)` pairs, applied top to bottom.
const CONTRACTIONS: &[(&str, &str)] = &[
    (r"\blet['’]s\b", "let us"),
    (r"\bwon['’]t\b", "will not"),
    (r"\bcan['’]t\b", "can not"),
    (r"\bshan['’]t\b", "shall not"),
    (r"n['’]t\b", " not"),
    (r"['’]m\b", " am"),
    (r"['’]re\b", " are"),
    (r"['’]ve\b", " have"),
    (r"['’]s\b", " is"),
    (r"['’]d\b", " would"),
    (r"['’]ll\b", " will"),
];

pub struct ContractionCharFilter {
    rules: Vec<(Regex, &'static str)>,
}

impl ContractionCharFilter {
    pub fn new() -> Result<Self> {
        let rules = CONTRACTIONS
            .iter()
            .map(|(pattern, replacement)| compile_rule(pattern, *replacement))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }
}

fn compile_rule(pattern: &str, replacement: &'static str) -> Result<(Regex, &'static str)> {
    Regex::new(&format!("(?i){pattern}"))
        .map(|regex| (regex, replacement))
        .map_err(|e| HaikuError::analysis(format!("Invalid regex pattern: {e}")))
}

impl CharFilter for ContractionCharFilter {
    fn filter(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, (regex, replacement)| {
                regex.replace_all(&text, *replacement).into_owned()
            })
    }

    fn name(&self) -> &'static str {
        "contraction"
    }
}
