//! Integration tests: resources loaded from disk through to assembled haikus.

use std::fs;
use std::path::PathBuf;

use haikuify::prelude::*;
use haikuify::search::segment::SegmentSearch;
use tempfile::TempDir;

const PRONUNCIATIONS: &str = "\
;;; A small CMU-style dictionary
AN  AE1 N
OLD  OW1 L D
SILENT  S AY1 L AH0 N T
QUIET  K W AY1 AH0 T
STILL  S T IH1 L
POND  P AA1 N D
POOL  P UW1 L
LAKE  L EY1 K
A  AH0
A(1)  EY1
FROG  F R AA1 G
JUMPS  JH AH1 M P S
LEAPS  L IY1 P S
SPRINGS  S P R IH1 NG Z
INTO  IH0 N T UW1
THE  DH AH0
THE(1)  DH IY0
SPLASH  S P L AE1 SH
SILENCE  S AY1 L AH0 N S
STILLNESS  S T IH1 L N AH0 S
AGAIN  AH0 G EH1 N
AGAIN(1)  AH0 G EY1 N
CAT  K AE1 T
FELINE  F IY1 L AY2 N
IS  IH1 Z
NICE  N AY1 S
PLEASANT  P L EH1 Z AH0 N T
DELIGHTFUL  D IH0 L AY1 T F AH0 L
EVERY  EH1 V ER0 IY0
EVERY(1)  EH1 V R IY0
";

const THESAURUS: &str = "\
ISO8859-1
(adj)|silent|quiet|still|mum
(noun)|silence|stillness|quiet
(verb)|jumps|leaps|springs
(noun)|pond|pool|lake
(noun)|cat|feline|true cat
(adj)|nice|pleasant|delightful
(adj)|nice|pleasant|Nice
";

struct Resources {
    dir: TempDir,
    config: LexiconConfig,
}

fn resources() -> Resources {
    let dir = TempDir::new().unwrap();
    let thesaurus_path = dir.path().join("th_en_US.dat");
    let pronunciation_path = dir.path().join("cmudict");
    fs::write(&thesaurus_path, THESAURUS).unwrap();
    fs::write(&pronunciation_path, PRONUNCIATIONS).unwrap();

    Resources {
        dir,
        config: LexiconConfig {
            thesaurus_path,
            pronunciation_path,
            ..LexiconConfig::default()
        },
    }
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[test]
fn test_cat_is_nice() -> Result<()> {
    let resources = resources();
    let lexicon = Lexicon::load(&resources.config)?;
    let search = SegmentSearch::new(SynonymResolver::new(lexicon));
    let tokens = words("cat is nice");

    assert_eq!(search.search(&tokens, 0, 3, 3)?, vec!["cat is nice"]);
    assert_eq!(
        search.search(&tokens, 0, 3, 4)?,
        vec!["cat is pleasant", "feline is nice"]
    );
    assert!(search.search(&tokens, 0, 3, 7)?.is_empty());

    Ok(())
}

#[test]
fn test_loaded_lexicon() -> Result<()> {
    let resources = resources();
    let lexicon = Lexicon::load(&resources.config)?;

    // "true cat" has no pronunciation and is dropped; "nice" is not its own synonym.
    let resolver = SynonymResolver::new(lexicon.clone());
    let cat: Vec<String> = resolver.candidates("cat").iter().map(|c| c.text.clone()).collect();
    assert_eq!(cat, vec!["cat", "feline"]);
    let nice: Vec<String> = resolver.candidates("nice").iter().map(|c| c.text.clone()).collect();
    assert_eq!(nice, vec!["nice", "pleasant", "delightful"]);

    // The default English stop list applies when no list is configured.
    assert!(lexicon.stop_words().is_stop_word("the"));
    assert_eq!(resolver.candidates("is").len(), 1);

    assert_eq!(lexicon.syllables().counts("every"), Some(&[3, 2][..]));
    assert_eq!(lexicon.syllables().lookup("every")?, 3);
    assert_eq!(lexicon.syllables().syllables("a"), 1);

    Ok(())
}

#[test]
fn test_full_haiku() -> Result<()> {
    let resources = resources();
    let lexicon = Lexicon::load(&resources.config)?;
    let config = SearchConfig {
        require_full_sentence: true,
        ..SearchConfig::default()
    };
    let assembler = HaikuAssembler::new(lexicon.clone(), config)?;

    let sentence = "An old silent pond... A frog jumps into the pond, splash! Silence again.";
    let report = assembler.compose(sentence)?;
    let haikus: Vec<Vec<&str>> = report
        .haikus
        .iter()
        .map(|h| h.lines.iter().map(String::as_str).collect())
        .collect();

    assert!(haikus.contains(&vec![
        "an old silent pond",
        "a frog jumps into the pond",
        "splash silence again"
    ]));
    assert!(haikus.contains(&vec![
        "an old quiet pond",
        "a frog leaps into the pool",
        "splash stillness again"
    ]));
    assert!(!report.truncated);

    for haiku in &report.haikus {
        assert_eq!(haiku.end, 13);
        for (line, target) in haiku.lines.iter().zip([5, 7, 5]) {
            let total: usize = line
                .split(' ')
                .map(|w| lexicon.syllables().syllables(w))
                .sum();
            assert_eq!(total, target, "{haiku}");
        }
    }

    Ok(())
}

#[test]
fn test_parallel_assembly_matches() -> Result<()> {
    let resources = resources();
    let lexicon = Lexicon::load(&resources.config)?;
    let tokens = words("an old silent pond a frog jumps into the pond splash silence again");

    let sequential = HaikuAssembler::new(lexicon.clone(), SearchConfig::default())?
        .assemble(&tokens)?;
    let parallel = HaikuAssembler::new(
        lexicon,
        SearchConfig {
            parallel: true,
            ..SearchConfig::default()
        },
    )?
    .assemble(&tokens)?;

    assert!(!sequential.haikus.is_empty());
    assert_eq!(sequential.haikus, parallel.haikus);
    assert_eq!(
        sequential.combinations_visited,
        parallel.combinations_visited
    );

    Ok(())
}

#[test]
fn test_custom_stop_words() -> Result<()> {
    let resources = resources();
    let stop_words_path = resources.dir.path().join("stop.txt");
    fs::write(&stop_words_path, "# nothing but cats\ncat\n").unwrap();

    let config = LexiconConfig {
        stop_words_path: Some(stop_words_path),
        ..resources.config.clone()
    };
    let lexicon = Lexicon::load(&config)?;
    let resolver = SynonymResolver::new(lexicon);

    assert_eq!(resolver.candidates("cat").len(), 1);
    assert_eq!(resolver.candidates("nice").len(), 3);

    Ok(())
}

#[test]
fn test_missing_resource_is_fatal() {
    let resources = resources();

    let config = LexiconConfig {
        pronunciation_path: PathBuf::from("/nonexistent/cmudict"),
        ..resources.config.clone()
    };
    match Lexicon::load(&config) {
        Err(HaikuError::ResourceLoad(msg)) => assert!(msg.contains("/nonexistent/cmudict")),
        other => panic!("expected a resource load error, got {other:?}"),
    }

    let config = LexiconConfig {
        stop_words_path: Some(PathBuf::from("/nonexistent/stop.txt")),
        ..resources.config.clone()
    };
    assert!(matches!(
        Lexicon::load(&config),
        Err(HaikuError::ResourceLoad(_))
    ));
}

#[test]
fn test_config_file_drives_assembly() -> Result<()> {
    let resources = resources();
    let config_path = resources.dir.path().join("haikuify.json");
    let config = Config {
        lexicon: resources.config.clone(),
        search: SearchConfig {
            targets: vec![4],
            require_full_sentence: true,
            ..SearchConfig::default()
        },
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?).unwrap();

    let loaded = Config::from_file(&config_path)?;
    assert_eq!(loaded.search.targets, vec![4]);

    let lexicon = Lexicon::load(&loaded.lexicon)?;
    let report = HaikuAssembler::new(lexicon, loaded.search)?.compose("Cat is nice.")?;
    let haikus: Vec<String> = report.haikus.iter().map(|h| h.to_string()).collect();
    assert_eq!(haikus, vec!["cat is pleasant", "feline is nice"]);

    Ok(())
}
