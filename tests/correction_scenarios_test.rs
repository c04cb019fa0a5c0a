//! Integration tests for the word-level correction pipeline.

use std::sync::Arc;

use jiucuo::prelude::*;
use jiucuo::spelling::distance::damerau_levenshtein_distance;
use jiucuo::spelling::generate::generate;

fn corrector(entries: &[(&str, u64)], alphabet: &str) -> Corrector {
    Corrector::new(
        Arc::new(FrequencyDictionary::from_entries(entries)),
        Alphabet::from_text(alphabet),
        Box::new(PinyinTable::builtin()),
    )
}

#[test]
fn test_phonetic_twin_beats_weaker_tiers() {
    // 机七 sounds like 机器 once tones are stripped; 几乎 only shares the
    // leading syllable and 学习 shares nothing.
    let corrector = corrector(&[("机器", 100), ("学习", 200), ("几乎", 50)], "器习");
    let correction = corrector.correct_word(&Word::new("机七")).unwrap();

    assert_eq!(correction.corrected, Word::new("机器"));
    assert_eq!(correction.tier, Tier::Exact);
}

#[test]
fn test_single_substitution_recovers_known_word() {
    let corrector = corrector(&[("分支", 80)], "器习支");
    let correction = corrector.correct_word(&Word::new("分知")).unwrap();

    assert_eq!(correction.corrected, Word::new("分支"));
    assert_eq!(correction.frequency, 80);
}

#[test]
fn test_empty_dictionary_yields_no_candidate() {
    let corrector = corrector(&[], "器习支");
    for input in ["机七", "分知", "一"] {
        let result = corrector.correct_word(&Word::new(input));
        assert!(matches!(result, Err(JiucuoError::NoCandidate(_))));
    }
}

#[test]
fn test_frequency_decides_within_a_tier() {
    // 学习 and 学系 are both phonetic twins of 学息 (xue'xi); the more
    // frequent one must win.
    let corrector = corrector(&[("学习", 200), ("学系", 100)], "习系");
    let correction = corrector.correct_word(&Word::new("学息")).unwrap();
    assert_eq!(correction.corrected, Word::new("学习"));

    let corrector_flipped = self::corrector(&[("学习", 100), ("学系", 200)], "习系");
    let correction = corrector_flipped.correct_word(&Word::new("学息")).unwrap();
    assert_eq!(correction.corrected, Word::new("学系"));
}

#[test]
fn test_exact_twin_appears_in_exact_tier() {
    // Every known word one edit away that is a full phonetic twin must rank
    // ahead of non-twins in the suggestions.
    let corrector = corrector(&[("机器", 10), ("机", 1000)], "器");
    let suggestions = corrector.suggestions(&Word::new("机七"), 5).unwrap();

    let twin = suggestions
        .iter()
        .find(|s| s.word == Word::new("机器"))
        .expect("twin must be suggested");
    assert_eq!(twin.tier, Tier::Exact);
    assert_eq!(suggestions[0].word, Word::new("机器"));
}

#[test]
fn test_correction_is_always_a_known_word() {
    let entries = [("机器", 100), ("学习", 200), ("几乎", 50), ("分支", 80)];
    let corrector = corrector(&entries, "器习支乎七");

    for input in ["机七", "分知", "学七"] {
        if let Ok(correction) = corrector.correct_word(&Word::new(input)) {
            assert!(
                corrector.is_known(correction.corrected.as_str()),
                "correction {} for {} is not in the dictionary",
                correction.corrected,
                input
            );
        }
    }
}

#[test]
fn test_correction_is_deterministic() {
    let entries = [("机器", 100), ("学习", 200), ("几乎", 50)];
    let first = corrector(&entries, "器习乎")
        .correct_word(&Word::new("机七"))
        .unwrap();
    let second = corrector(&entries, "器习乎")
        .correct_word(&Word::new("机七"))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_known_word_corrects_to_itself() {
    let corrector = corrector(&[("机器", 100), ("学习", 200)], "器习");
    let correction = corrector.correct_word(&Word::new("学习")).unwrap();

    assert_eq!(correction.original, correction.corrected);
    assert_eq!(correction.tier, Tier::Exact);
}

#[test]
fn test_generated_candidates_are_one_edit_away() {
    let alphabet = Alphabet::from_text("器习支乎七");
    for input in ["机", "机七", "机七学", "人工智能"] {
        let word = Word::new(input);
        for candidate in generate(&word, &alphabet) {
            assert_eq!(
                damerau_levenshtein_distance(word.as_str(), candidate.as_str()),
                1,
                "{candidate} is not exactly one edit from {input}"
            );
        }
    }
}

#[test]
fn test_strategies_agree_on_unambiguous_input() {
    let dictionary = Arc::new(FrequencyDictionary::from_entries(&[("分支", 80)]));
    let alphabet = Alphabet::from_text("支");

    for strategy in [RankingStrategy::TierFrequency, RankingStrategy::WeightedScore] {
        let corrector = Corrector::with_config(
            Arc::clone(&dictionary),
            alphabet.clone(),
            Box::new(PinyinTable::builtin()),
            CorrectorConfig {
                strategy,
                ..Default::default()
            },
        );
        let correction = corrector.correct_word(&Word::new("分知")).unwrap();
        assert_eq!(correction.corrected, Word::new("分支"));
    }
}

#[test]
fn test_tone_sensitive_transliteration_demotes_tier() {
    // With tones kept, 机七 (ji1 qi1) no longer matches 机器 (ji1 qi4)
    // exactly, but the leading syllable still does.
    let dictionary = Arc::new(FrequencyDictionary::from_entries(&[("机器", 100)]));
    let corrector = Corrector::new(
        dictionary,
        Alphabet::from_text("器"),
        Box::new(PinyinTable::builtin().with_tone_style(ToneStyle::Marked)),
    );

    let correction = corrector.correct_word(&Word::new("机七")).unwrap();
    assert_eq!(correction.corrected, Word::new("机器"));
    assert_eq!(correction.tier, Tier::Initial);
}
