//! Command line argument parsing for the haikuify CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// Haikuify - find the haiku hiding in a sentence
#[derive(Parser, Debug, Clone)]
#[command(name = "haikuify")]
#[command(about = "Turn sentences into haiku by swapping in synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HaikuifyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "HAIKUIFY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Pipe-delimited thesaurus (overrides the configuration)
    #[arg(long, value_name = "FILE", env = "HAIKUIFY_THESAURUS", global = true)]
    pub thesaurus: Option<PathBuf>,

    /// CMU-style pronunciation dictionary (overrides the configuration)
    #[arg(long, value_name = "FILE", env = "HAIKUIFY_PRONUNCIATIONS", global = true)]
    pub pronunciations: Option<PathBuf>,

    /// Stop word list, one word per line (overrides the configuration)
    #[arg(long, value_name = "FILE", global = true)]
    pub stop_words: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HaikuifyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The configuration file, if any, with resource overrides applied.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(path) = &self.thesaurus {
            config.lexicon.thesaurus_path = path.clone();
        }
        if let Some(path) = &self.pronunciations {
            config.lexicon.pronunciation_path = path.clone();
        }
        if let Some(path) = &self.stop_words {
            config.lexicon.stop_words_path = Some(path.clone());
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find haikus in each sentence of a text
    Compose(ComposeArgs),

    /// Show the normalized words of a text
    Tokenize(TokenizeArgs),

    /// Show the substitution candidates for a word
    Synonyms(WordArgs),

    /// Show the syllable counts recorded for a word
    Syllables(WordArgs),
}

/// Arguments for composing haikus
#[derive(Parser, Debug, Clone)]
pub struct ComposeArgs {
    /// Text to turn into haiku
    #[arg(value_name = "TEXT", required_unless_present = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Syllable targets, one per line (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub targets: Option<Vec<usize>>,

    /// Longest word span tried for one line
    #[arg(long)]
    pub max_span: Option<usize>,

    /// Wall-clock budget per sentence, in milliseconds
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// Search segments in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Only keep haikus that use the whole sentence
    #[arg(long)]
    pub full_sentence: bool,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments naming one word
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// The word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
