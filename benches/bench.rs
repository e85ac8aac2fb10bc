//! Criterion benchmarks for haikuify.
//!
//! Covers the pieces whose cost grows combinatorially:
//! - Counter enumeration
//! - Segment search over synonym-rich spans
//! - Full assembly, sequential and parallel
//! - Text analysis

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use haikuify::analysis::analyzer::sentence::SentenceAnalyzer;
use haikuify::prelude::*;

/// Words of the benchmark sentence, each with a syllable count.
const WORDS: &[(&str, usize)] = &[
    ("the", 1),
    ("old", 1),
    ("quiet", 2),
    ("pond", 1),
    ("waits", 1),
    ("while", 1),
    ("a", 1),
    ("small", 1),
    ("green", 1),
    ("frog", 1),
    ("jumps", 1),
    ("into", 2),
    ("cold", 1),
    ("water", 2),
    ("and", 1),
    ("silence", 2),
    ("returns", 2),
    ("again", 2),
];

/// Build a lexicon where every word has four synonyms of 1 to 4 syllables.
fn generate_lexicon() -> Lexicon {
    let mut syllables = SyllableDictionary::new();
    let mut groups = Vec::new();

    for &(word, count) in WORDS {
        syllables.add_count(word, count);
        let synonyms: Vec<String> = (1..=4).map(|n| format!("{word}{n}")).collect();
        for (n, synonym) in synonyms.iter().enumerate() {
            syllables.add_count(synonym, n + 1);
        }
        groups.push((word.to_string(), synonyms));
    }

    Lexicon::new(
        Thesaurus::from_groups(groups),
        syllables,
        StopWords::from_words(vec!["the", "a", "and", "into"]),
    )
}

fn sentence() -> Vec<String> {
    WORDS.iter().map(|(word, _)| word.to_string()).collect()
}

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    let limits = vec![5, 5, 5, 5, 5, 5];
    group.throughput(Throughput::Elements(15_625));
    group.bench_function("advance_5x6", |b| {
        b.iter(|| {
            let mut counter = CombinationCounter::new(black_box(limits.clone())).unwrap();
            let mut visited = 0usize;
            while let Some(digits) = counter.advance() {
                visited += digits[0];
            }
            black_box(visited)
        })
    });

    group.bench_function("iterator_5x6", |b| {
        b.iter(|| {
            let counter = CombinationCounter::new(black_box(limits.clone())).unwrap();
            black_box(counter.count())
        })
    });

    group.finish();
}

fn bench_segment_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_search");
    let search = SegmentSearch::new(SynonymResolver::new(generate_lexicon()));
    let tokens = sentence();

    for span in [3, 5, 7] {
        group.bench_function(format!("span_{span}_target_7"), |b| {
            b.iter(|| black_box(search.search(&tokens, 1, 1 + span, black_box(7)).unwrap()))
        });
    }

    group.finish();
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");
    group.sample_size(10);
    let lexicon = generate_lexicon();
    let tokens = sentence();

    for parallel in [false, true] {
        let config = SearchConfig {
            parallel,
            max_span_length: 6,
            ..SearchConfig::default()
        };
        let assembler = HaikuAssembler::new(lexicon.clone(), config).unwrap();
        let name = if parallel { "parallel" } else { "sequential" };

        group.bench_function(name, |b| {
            b.iter(|| black_box(assembler.assemble(&tokens).unwrap()))
        });
    }

    group.finish();
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let analyzer = SentenceAnalyzer::new().unwrap();
    let text = "Don't you think the old pond's quiet? Let's wait; the frog can't stay still.";

    group.bench_function("sentence_words", |b| {
        b.iter(|| black_box(analyzer.words(black_box(text)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_counter,
    bench_segment_search,
    bench_assembly,
    bench_text_analysis
);
criterion_main!(benches);
