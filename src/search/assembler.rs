//! Haiku assembly: chaining segment searches line by line.
//!
//! The assembler walks the line targets in order (5, 7, 5 by default). The
//! first line is seeded with the empty poem at token 0. For every seed and
//! every span length up to `max_span_length`, a segment search runs from the
//! seed's end offset; each exact match becomes a new [`GoodNode`]. The good
//! nodes of one line are the seeds of the next, and those surviving the last
//! line are complete haikus.
//!
//! ```text
//! LINE1 (5) ──good nodes──▶ LINE2 (7) ──good nodes──▶ LINE3 (5) ──▶ ASSEMBLED
//! ```
//!
//! Results come back in seed, span and counter order whether or not the
//! search runs in parallel.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::sentence::SentenceAnalyzer;
use crate::config::SearchConfig;
use crate::error::{HaikuError, Result};
use crate::lexicon::Lexicon;
use crate::search::resolver::SynonymResolver;
use crate::search::segment::{GoodNode, SegmentSearch};

/// A complete poem: one rendered line per target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haiku {
    pub lines: Vec<String>,
    /// Token offset just past the last word used.
    pub end: usize,
}

impl From<GoodNode> for Haiku {
    fn from(node: GoodNode) -> Self {
        Haiku {
            lines: node.lines,
            end: node.end,
        }
    }
}

impl fmt::Display for Haiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Haikus found for one token sequence, with search statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub haikus: Vec<Haiku>,
    pub segments_searched: usize,
    pub combinations_visited: u64,
    pub spans_skipped: usize,
    /// The time budget ran out before the search finished.
    pub truncated: bool,
}

/// Outcome of one `(seed, span end)` work item.
enum Step {
    Found(Vec<GoodNode>, u64),
    Skipped,
    OutOfTime,
}

/// Drives the line-by-line search.
#[derive(Debug, Clone)]
pub struct HaikuAssembler {
    search: SegmentSearch,
    analyzer: SentenceAnalyzer,
    config: SearchConfig,
}

impl HaikuAssembler {
    /// Create an assembler over a loaded lexicon.
    pub fn new(lexicon: Lexicon, config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let search = SegmentSearch::new(SynonymResolver::new(lexicon))
            .with_max_combinations(config.max_segment_combinations);

        Ok(HaikuAssembler {
            search,
            analyzer: SentenceAnalyzer::new()?,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn segment_search(&self) -> &SegmentSearch {
        &self.search
    }

    /// Analyze one sentence and assemble haikus from its words.
    pub fn compose(&self, text: &str) -> Result<AssemblyReport> {
        let tokens = self.analyzer.words(text)?;
        self.assemble(&tokens)
    }

    /// Assemble haikus from normalized tokens.
    pub fn assemble(&self, tokens: &[String]) -> Result<AssemblyReport> {
        let deadline = self
            .config
            .time_budget_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut report = AssemblyReport::default();
        let mut seeds = vec![GoodNode::root()];

        for (line, &target) in self.config.targets.iter().enumerate() {
            if seeds.is_empty() || report.truncated {
                break;
            }

            let seed_count = seeds.len();
            seeds = self.advance(tokens, &seeds, target, deadline, &mut report)?;
            debug!(
                "line {} (target {}): {} seeds -> {} good nodes",
                line + 1,
                target,
                seed_count,
                seeds.len()
            );
        }

        if report.truncated {
            warn!(
                "time budget of {:?} ms exhausted; results are incomplete",
                self.config.time_budget_ms
            );
            // Only nodes that made it through every line are poems.
            let lines = self.config.targets.len();
            seeds.retain(|node| node.lines.len() == lines);
        }

        if self.config.require_full_sentence {
            seeds.retain(|node| node.end == tokens.len());
        }

        report.haikus = seeds.into_iter().map(Haiku::from).collect();
        Ok(report)
    }

    /// Run one line: every seed against every span length.
    fn advance(
        &self,
        tokens: &[String],
        seeds: &[GoodNode],
        target: usize,
        deadline: Option<Instant>,
        report: &mut AssemblyReport,
    ) -> Result<Vec<GoodNode>> {
        let max_span_length = self.config.max_span_length;
        let work: Vec<(&GoodNode, usize)> = seeds
            .iter()
            .flat_map(|seed| {
                let last = tokens.len().min(seed.end.saturating_add(max_span_length));
                ((seed.end + 1)..=last).map(move |end| (seed, end))
            })
            .collect();

        let run = |&(seed, end): &(&GoodNode, usize)| -> Result<Step> {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Ok(Step::OutOfTime);
            }
            match self.search.extend_to(tokens, seed, end, target) {
                Ok((nodes, combinations)) => Ok(Step::Found(nodes, combinations)),
                Err(HaikuError::ResourceExhausted(msg)) => {
                    warn!("skipping segment: {msg}");
                    Ok(Step::Skipped)
                }
                Err(e) => Err(e),
            }
        };

        let steps: Vec<Result<Step>> = if self.config.parallel {
            work.par_iter().map(run).collect()
        } else {
            work.iter().map(run).collect()
        };

        let mut good_nodes = Vec::new();
        for step in steps {
            match step? {
                Step::Found(nodes, combinations) => {
                    report.segments_searched += 1;
                    report.combinations_visited =
                        report.combinations_visited.saturating_add(combinations);
                    good_nodes.extend(nodes);
                }
                Step::Skipped => report.spans_skipped += 1,
                Step::OutOfTime => report.truncated = true,
            }
        }

        Ok(good_nodes)
    }
}
