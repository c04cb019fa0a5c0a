//! End-to-end tests for sentence segmentation and correction.

use std::sync::Arc;

use jiucuo::prelude::*;

fn sentence_corrector(entries: &[(&str, u64)], alphabet: &str) -> SentenceCorrector {
    let dictionary = Arc::new(FrequencyDictionary::from_entries(entries));
    let corrector = Corrector::new(
        Arc::clone(&dictionary),
        Alphabet::from_text(alphabet),
        Box::new(PinyinTable::builtin()),
    );
    SentenceCorrector::new(corrector, Box::new(MaxMatchSegmenter::new(dictionary)))
}

fn demo_corrector() -> SentenceCorrector {
    sentence_corrector(
        &[
            ("人工智能", 1000),
            ("领域", 300),
            ("最", 500),
            ("能", 400),
            ("体现", 200),
            ("智能", 800),
            ("的", 2000),
            ("一个", 900),
            ("分支", 80),
            ("是", 1500),
            ("机器", 100),
            ("学习", 200),
        ],
        "域支器七知遇习乎",
    )
}

#[test]
fn test_corrects_full_demo_sentence() {
    let corrector = demo_corrector();
    let result = corrector
        .correct("人工智能领遇最能体现智能的一个分知是机七学习！")
        .unwrap();

    assert_eq!(
        result.corrected,
        "人工智能领域最能体现智能的一个分支是机器学习！"
    );

    let pairs: Vec<(String, String)> = result
        .corrections
        .iter()
        .map(|c| (c.original.to_string(), c.corrected.to_string()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("领遇".to_string(), "领域".to_string()),
            ("分知".to_string(), "分支".to_string()),
            ("机七".to_string(), "机器".to_string()),
        ]
    );

    // All three errors are phonetic twins of their corrections.
    for correction in &result.corrections {
        assert_eq!(correction.tier, Tier::Exact);
    }
}

#[test]
fn test_correct_sentence_is_idempotent() {
    let corrector = demo_corrector();
    let once = corrector
        .correct("人工智能领遇最能体现智能的一个分知是机七学习！")
        .unwrap();
    let twice = corrector.correct(&once.corrected).unwrap();

    assert_eq!(twice.corrected, once.corrected);
    assert!(!twice.was_corrected());
}

#[test]
fn test_known_words_never_enter_the_pipeline() {
    // A sentence made entirely of dictionary words and punctuation comes
    // back untouched, with no corrections recorded.
    let corrector = demo_corrector();
    let result = corrector.correct("机器学习是人工智能的一个分支。").unwrap();

    assert_eq!(result.corrected, result.original);
    assert!(result.corrections.is_empty());
}

#[test]
fn test_mixed_script_and_punctuation_survive() {
    let corrector = demo_corrector();
    let result = corrector.correct("机器学习 (machine learning) 是一个领域！").unwrap();

    assert_eq!(result.corrected, "机器学习 (machine learning) 是一个领域！");
}

#[test]
fn test_unknown_word_without_candidates_is_kept() {
    let corrector = sentence_corrector(&[("学习", 200)], "习");
    let result = corrector.correct("魔法学习").unwrap();

    assert_eq!(result.corrected, "魔法学习");
    assert!(!result.was_corrected());
}

#[test]
fn test_batch_correction_matches_sequential() {
    let corrector = demo_corrector();
    let sentences: Vec<String> = vec![
        "人工智能领遇最能体现智能的一个分知是机七学习！".to_string(),
        "机器学习是人工智能的一个分支。".to_string(),
        "机七学习".to_string(),
        String::new(),
    ];

    let batch = corrector.correct_batch(&sentences).unwrap();
    assert_eq!(batch.len(), sentences.len());
    for (sentence, result) in sentences.iter().zip(&batch) {
        assert_eq!(result, &corrector.correct(sentence).unwrap());
    }
}

#[test]
fn test_corrections_report_frequencies() {
    let corrector = demo_corrector();
    let result = corrector.correct("机七学习").unwrap();

    assert_eq!(result.corrections.len(), 1);
    let correction = &result.corrections[0];
    assert_eq!(correction.corrected, Word::new("机器"));
    assert_eq!(correction.frequency, 100);
}
