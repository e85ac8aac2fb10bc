//! Command implementations for the haikuify CLI.

use std::fs;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::analysis::analyzer::sentence::SentenceAnalyzer;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{Config, SearchConfig};
use crate::error::{HaikuError, Result};
use crate::lexicon::Lexicon;
use crate::search::assembler::HaikuAssembler;
use crate::search::resolver::SynonymResolver;

/// Execute a CLI command.
pub fn execute_command(args: HaikuifyArgs) -> Result<()> {
    let config = args.load_config()?;

    match &args.command {
        Command::Compose(compose_args) => compose(compose_args, config, &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &args),
        Command::Synonyms(word_args) => synonyms(word_args, &config, &args),
        Command::Syllables(word_args) => syllables(word_args, &config, &args),
    }
}

/// Apply compose flags on top of the configured search parameters.
fn search_config(args: &ComposeArgs, mut search: SearchConfig) -> SearchConfig {
    if let Some(targets) = &args.targets {
        search.targets = targets.clone();
    }
    if let Some(max_span) = args.max_span {
        search.max_span_length = max_span;
    }
    if let Some(budget) = args.time_budget_ms {
        search.time_budget_ms = Some(budget);
    }
    search.parallel |= args.parallel;
    search.require_full_sentence |= args.full_sentence;
    search
}

/// Split text into sentences.
fn split_sentences(text: &str) -> Result<Vec<String>> {
    let splitter = SentenceTokenizer::new()?;
    Ok(splitter.tokenize(text)?.map(|token| token.text).collect())
}

/// Milliseconds in a duration, saturating at `u64::MAX`.
fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Find haikus in every sentence of the input.
fn compose(args: &ComposeArgs, config: Config, cli_args: &HaikuifyArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            HaikuError::invalid_argument(format!(
                "Failed to read input file '{}': {}",
                path.display(),
                e
            ))
        })?,
        (None, None) => {
            return Err(HaikuError::invalid_argument(
                "either TEXT or --file is required",
            ));
        }
    };

    let search = search_config(args, config.search);
    let lexicon = Lexicon::load(&config.lexicon)?;
    let assembler = HaikuAssembler::new(lexicon, search)?;
    let analyzer = SentenceAnalyzer::new()?;

    let start_time = Instant::now();
    let mut sentences = Vec::new();

    for sentence in split_sentences(&text)? {
        let words = analyzer.words(&sentence)?;
        debug!("sentence {:?}: {} words", sentence, words.len());

        let report = assembler.assemble(&words)?;
        info!(
            "{} haikus from {:?} ({} segments searched)",
            report.haikus.len(),
            sentence,
            report.segments_searched
        );

        sentences.push(SentenceReport {
            sentence,
            words,
            report,
        });
    }

    let total_haikus = sentences.iter().map(|s| s.report.haikus.len()).sum();

    output_result(
        "Composition finished",
        &CompositionResults {
            sentences,
            total_haikus,
            duration_ms: duration_ms(start_time.elapsed()),
        },
        cli_args,
    )
}

/// Print the normalized words of each sentence.
fn tokenize(args: &TokenizeArgs, cli_args: &HaikuifyArgs) -> Result<()> {
    let analyzer = SentenceAnalyzer::new()?;
    let sentences = split_sentences(&args.text)?
        .iter()
        .map(|sentence| analyzer.words(sentence))
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Normalized words",
        &TokenizationResult { sentences },
        cli_args,
    )
}

/// Print the candidate list of a word.
fn synonyms(args: &WordArgs, config: &Config, cli_args: &HaikuifyArgs) -> Result<()> {
    let lexicon = Lexicon::load(&config.lexicon)?;
    let word = args.word.to_lowercase();
    let stop_word = lexicon.stop_words().is_stop_word(&word);
    let candidates = SynonymResolver::new(lexicon)
        .candidates(&word)
        .iter()
        .cloned()
        .collect();

    output_result(
        "Substitution candidates",
        &SynonymResult {
            word,
            stop_word,
            candidates,
        },
        cli_args,
    )
}

/// Print the recorded and resolved syllable counts of a word.
fn syllables(args: &WordArgs, config: &Config, cli_args: &HaikuifyArgs) -> Result<()> {
    let lexicon = Lexicon::load(&config.lexicon)?;
    let dictionary = lexicon.syllables();
    let word = args.word.to_lowercase();

    let recorded = dictionary
        .counts(&word)
        .map(<[usize]>::to_vec)
        .unwrap_or_default();
    let (resolved, error) = match dictionary.lookup(&word) {
        Ok(count) => (Some(count), None),
        Err(e) => (None, Some(e.to_string())),
    };

    output_result(
        "Syllable counts",
        &SyllableResult {
            word,
            recorded,
            resolved,
            error,
        },
        cli_args,
    )
}
