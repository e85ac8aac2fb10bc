//! Segment search: exact syllable matching over one word span.
//!
//! A [`Segment`] is a span `[start, end)` of the token sequence together with
//! one [`CandidateList`] per position. Every combination of candidates is
//! enumerated with a [`CombinationCounter`]; combinations whose syllables sum
//! to the line target are rendered as space-joined text.
//!
//! [`SegmentSearch::extend`] grows spans from a [`GoodNode`] seed, which is how
//! the assembler moves from one line to the next.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{HaikuError, Result};
use crate::search::counter::CombinationCounter;
use crate::search::resolver::{CandidateList, SynonymResolver};

/// A partial poem: the lines accepted so far and where the next line starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodNode {
    pub lines: Vec<String>,
    pub end: usize,
}

impl GoodNode {
    /// The empty poem anchored at token 0.
    pub fn root() -> Self {
        GoodNode::default()
    }

    fn with_line(&self, line: String, end: usize) -> Self {
        let mut lines = Vec::with_capacity(self.lines.len() + 1);
        lines.extend(self.lines.iter().cloned());
        lines.push(line);
        GoodNode { lines, end }
    }
}

/// A candidate span with its per-position candidate lists.
#[derive(Debug, Clone)]
pub struct Segment {
    start: usize,
    end: usize,
    candidates: Vec<CandidateList>,
}

impl Segment {
    /// Resolve candidates for `tokens[start..end]`.
    pub fn new(
        resolver: &SynonymResolver,
        tokens: &[String],
        start: usize,
        end: usize,
    ) -> Result<Self> {
        if start >= end || end > tokens.len() {
            return Err(HaikuError::invalid_argument(format!(
                "span [{start}, {end}) is empty or outside {} tokens",
                tokens.len()
            )));
        }

        let candidates = tokens[start..end]
            .iter()
            .map(|word| resolver.candidates(word))
            .collect();

        Ok(Segment {
            start,
            end,
            candidates,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn candidates(&self) -> &[CandidateList] {
        &self.candidates
    }

    /// Size of each candidate list; the counter's limit vector.
    pub fn limits(&self) -> Vec<usize> {
        self.candidates.iter().map(CandidateList::len).collect()
    }

    /// Number of combinations this segment spans, if it fits in a `u128`.
    pub fn combinations(&self) -> Option<u128> {
        self.candidates
            .iter()
            .try_fold(1u128, |acc, list| acc.checked_mul(list.len() as u128))
    }

    /// Every rendering whose syllables sum exactly to `target`, in counter order.
    pub fn renderings(&self, target: usize) -> Result<Vec<String>> {
        let mut counter = CombinationCounter::new(self.limits())?;
        let mut renderings = Vec::new();

        while let Some(choice) = counter.advance() {
            let total: usize = choice
                .iter()
                .zip(&self.candidates)
                .map(|(&index, list)| list[index].syllables)
                .sum();

            if total == target {
                let words: Vec<&str> = choice
                    .iter()
                    .zip(&self.candidates)
                    .map(|(&index, list)| list[index].text.as_str())
                    .collect();
                renderings.push(words.join(" "));
            }
        }

        Ok(renderings)
    }
}

/// Outcome of growing spans from one seed.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    /// New partial poems, one per successful rendering.
    pub nodes: Vec<GoodNode>,
    /// Segments enumerated.
    pub segments_searched: usize,
    /// Combinations visited across those segments.
    pub combinations_visited: u64,
    /// Spans not enumerated because they exceeded the combination budget.
    pub spans_skipped: usize,
}

/// Runs segment searches against a shared resolver.
#[derive(Debug, Clone)]
pub struct SegmentSearch {
    resolver: SynonymResolver,
    max_combinations: Option<u64>,
}

impl SegmentSearch {
    pub fn new(resolver: SynonymResolver) -> Self {
        SegmentSearch {
            resolver,
            max_combinations: None,
        }
    }

    /// Skip segments with more than `max` combinations.
    pub fn with_max_combinations(mut self, max: Option<u64>) -> Self {
        self.max_combinations = max;
        self
    }

    pub fn resolver(&self) -> &SynonymResolver {
        &self.resolver
    }

    /// Build the segment for a span, enforcing the combination budget.
    pub fn segment(&self, tokens: &[String], start: usize, end: usize) -> Result<Segment> {
        let segment = Segment::new(&self.resolver, tokens, start, end)?;

        if let Some(max) = self.max_combinations {
            let within_budget = segment
                .combinations()
                .is_some_and(|combinations| combinations <= max as u128);
            if !within_budget {
                return Err(HaikuError::exhausted(format!(
                    "span [{start}, {end}) has {:?} combinations, budget is {max}",
                    segment.combinations()
                )));
            }
        }

        Ok(segment)
    }

    /// All renderings of `tokens[start..end]` that sum to `target` syllables.
    pub fn search(
        &self,
        tokens: &[String],
        start: usize,
        end: usize,
        target: usize,
    ) -> Result<Vec<String>> {
        self.segment(tokens, start, end)?.renderings(target)
    }

    /// Try every span of length `1..=max_span_length` anchored at `seed.end`.
    ///
    /// Spans over budget are counted and skipped; any other error aborts.
    pub fn extend(
        &self,
        tokens: &[String],
        seed: &GoodNode,
        target: usize,
        max_span_length: usize,
    ) -> Result<Extension> {
        let mut extension = Extension::default();
        let last = tokens.len().min(seed.end.saturating_add(max_span_length));

        for end in (seed.end + 1)..=last {
            match self.extend_to(tokens, seed, end, target) {
                Ok((nodes, combinations)) => {
                    extension.segments_searched += 1;
                    extension.combinations_visited =
                        extension.combinations_visited.saturating_add(combinations);
                    extension.nodes.extend(nodes);
                }
                Err(HaikuError::ResourceExhausted(msg)) => {
                    warn!("skipping segment: {msg}");
                    extension.spans_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(extension)
    }

    /// Search the single span `[seed.end, end)` and wrap each rendering as a
    /// new good node. Also returns the number of combinations visited.
    pub fn extend_to(
        &self,
        tokens: &[String],
        seed: &GoodNode,
        end: usize,
        target: usize,
    ) -> Result<(Vec<GoodNode>, u64)> {
        let segment = self.segment(tokens, seed.end, end)?;
        let combinations = segment
            .combinations()
            .and_then(|combinations| u64::try_from(combinations).ok())
            .unwrap_or(u64::MAX);
        let renderings = segment.renderings(target)?;

        debug!(
            "span [{}, {}) target {}: {} of {} combinations match",
            segment.start(),
            segment.end(),
            target,
            renderings.len(),
            combinations
        );

        let nodes = renderings
            .into_iter()
            .map(|line| seed.with_line(line, end))
            .collect();
        Ok((nodes, combinations))
    }
}
