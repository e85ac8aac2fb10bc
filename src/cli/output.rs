//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HaikuifyArgs, OutputFormat};
use crate::error::Result;
use crate::search::assembler::AssemblyReport;
use crate::search::resolver::Candidate;

/// Haikus found for one sentence of the input.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceReport {
    pub sentence: String,
    pub words: Vec<String>,
    #[serde(flatten)]
    pub report: AssemblyReport,
}

/// Result structure for the compose command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompositionResults {
    pub sentences: Vec<SentenceReport>,
    pub total_haikus: usize,
    pub duration_ms: u64,
}

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizationResult {
    pub sentences: Vec<Vec<String>>,
}

/// Result structure for the synonyms command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymResult {
    pub word: String,
    pub stop_word: bool,
    pub candidates: Vec<Candidate>,
}

/// Result structure for the syllables command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SyllableResult {
    pub word: String,
    pub recorded: Vec<usize>,
    pub resolved: Option<usize>,
    pub error: Option<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &HaikuifyArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self, args: &HaikuifyArgs);
}

impl HumanOutput for CompositionResults {
    fn print_human(&self, args: &HaikuifyArgs) {
        let mut first = true;
        for sentence in &self.sentences {
            if args.verbosity() > 1 {
                println!("Sentence: {}", sentence.sentence);
                println!("─────────");
            }

            for haiku in &sentence.report.haikus {
                if !first {
                    println!();
                }
                first = false;
                println!("{haiku}");
            }

            if sentence.report.truncated && args.verbosity() > 0 {
                eprintln!("(search for \"{}\" stopped early)", sentence.sentence);
            }

            if args.verbosity() > 1 {
                println!();
                println!(
                    "Segments searched: {}, combinations visited: {}, spans skipped: {}",
                    sentence.report.segments_searched,
                    sentence.report.combinations_visited,
                    sentence.report.spans_skipped
                );
                println!();
            }
        }

        if args.verbosity() > 0 && self.total_haikus == 0 {
            println!("No haiku found.");
        }
        if args.verbosity() > 1 {
            println!("Total haikus: {}", self.total_haikus);
            println!("Search time: {}ms", self.duration_ms);
        }
    }
}

impl HumanOutput for TokenizationResult {
    fn print_human(&self, _args: &HaikuifyArgs) {
        for words in &self.sentences {
            println!("{}", words.join(" "));
        }
    }
}

impl HumanOutput for SynonymResult {
    fn print_human(&self, args: &HaikuifyArgs) {
        if self.stop_word && args.verbosity() > 0 {
            println!("{} is a stop word", self.word);
        }
        for (i, candidate) in self.candidates.iter().enumerate() {
            let marker = if i == 0 { "*" } else { " " };
            println!("{marker} {} ({})", candidate.text, candidate.syllables);
        }
    }
}

impl HumanOutput for SyllableResult {
    fn print_human(&self, _args: &HaikuifyArgs) {
        let recorded: Vec<String> = self.recorded.iter().map(|c| c.to_string()).collect();
        println!("Word: {}", self.word);
        println!(
            "Recorded: {}",
            if recorded.is_empty() {
                "none".to_string()
            } else {
                recorded.join(", ")
            }
        );
        match (&self.resolved, &self.error) {
            (Some(count), _) => println!("Syllables: {count}"),
            (None, Some(error)) => println!("Syllables: unresolved ({error})"),
            (None, None) => println!("Syllables: unresolved"),
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HaikuifyArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::assembler::Haiku;

    #[test]
    fn test_sentence_report_json_is_flat() {
        let report = SentenceReport {
            sentence: "Old pond.".to_string(),
            words: vec!["old".to_string(), "pond".to_string()],
            report: AssemblyReport {
                haikus: vec![Haiku {
                    lines: vec!["ancient pond".to_string()],
                    end: 2,
                }],
                segments_searched: 2,
                combinations_visited: 4,
                spans_skipped: 0,
                truncated: false,
            },
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["sentence"], "Old pond.");
        assert_eq!(value["segments_searched"], 2);
        assert_eq!(value["haikus"][0]["lines"][0], "ancient pond");
        assert_eq!(value["truncated"], false);
    }

    #[test]
    fn test_syllable_result_json() {
        let result = SyllableResult {
            word: "colossal".to_string(),
            recorded: vec![3, 4],
            resolved: None,
            error: Some("ambiguous".to_string()),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""recorded":[3,4]"#));
        assert!(json.contains(r#""resolved":null"#));
    }
}
