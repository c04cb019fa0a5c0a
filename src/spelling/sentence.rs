//! Sentence-level correction that integrates segmentation with the
//! single-word corrector.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{JiucuoError, Result};
use crate::lexicon::Word;
use crate::segment::{Segmenter, TokenKind};
use crate::spelling::corrector::{Corrector, WordCorrection};

/// Result of correcting a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceCorrection {
    /// The sentence as given.
    pub original: String,
    /// The reassembled sentence with corrections applied.
    pub corrected: String,
    /// The individual word corrections that were applied.
    pub corrections: Vec<WordCorrection>,
}

impl SentenceCorrection {
    /// Check whether any correction was applied.
    pub fn was_corrected(&self) -> bool {
        !self.corrections.is_empty()
    }
}

/// Corrects whole sentences by segmenting, correcting unknown words, and
/// reassembling.
///
/// Punctuation and known words pass through unchanged. An unknown word with
/// no candidate correction is kept as-is: inventing nothing is this layer's
/// policy, while the word-level pipeline surfaces `NoCandidate` to callers
/// that want to react differently.
pub struct SentenceCorrector {
    corrector: Corrector,
    segmenter: Box<dyn Segmenter>,
}

impl SentenceCorrector {
    /// Create a sentence corrector from a word corrector and a segmenter.
    pub fn new(corrector: Corrector, segmenter: Box<dyn Segmenter>) -> Self {
        SentenceCorrector {
            corrector,
            segmenter,
        }
    }

    /// The underlying word corrector.
    pub fn corrector(&self) -> &Corrector {
        &self.corrector
    }

    /// Correct one sentence.
    pub fn correct(&self, text: &str) -> Result<SentenceCorrection> {
        let tokens = self.segmenter.segment(text)?;
        let mut corrected = String::with_capacity(text.len());
        let mut corrections = Vec::new();

        for token in tokens {
            if token.kind != TokenKind::Word || self.corrector.is_known(&token.text) {
                corrected.push_str(&token.text);
                continue;
            }

            match self.corrector.correct_word(&Word::new(&token.text)) {
                Ok(correction) => {
                    corrected.push_str(correction.corrected.as_str());
                    corrections.push(correction);
                }
                // Keep the unknown word when nothing one edit away is known.
                Err(JiucuoError::NoCandidate(_)) => corrected.push_str(&token.text),
                Err(e) => return Err(e),
            }
        }

        Ok(SentenceCorrection {
            original: text.to_string(),
            corrected,
            corrections,
        })
    }

    /// Correct a batch of sentences in parallel.
    ///
    /// Sentences are independent pipeline invocations over shared read-only
    /// state, so the batch fans out without coordination.
    pub fn correct_batch(&self, texts: &[String]) -> Result<Vec<SentenceCorrection>> {
        texts.par_iter().map(|text| self.correct(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Alphabet, FrequencyDictionary};
    use crate::pinyin::PinyinTable;
    use crate::segment::MaxMatchSegmenter;
    use crate::spelling::classify::Tier;
    use std::sync::Arc;

    fn sentence_corrector(entries: &[(&str, u64)], alphabet: &str) -> SentenceCorrector {
        let dictionary = Arc::new(FrequencyDictionary::from_entries(entries));
        let corrector = Corrector::new(
            Arc::clone(&dictionary),
            Alphabet::from_text(alphabet),
            Box::new(PinyinTable::builtin()),
        );
        SentenceCorrector::new(corrector, Box::new(MaxMatchSegmenter::new(dictionary)))
    }

    #[test]
    fn test_corrects_unknown_word_in_sentence() {
        let corrector = sentence_corrector(
            &[("机器", 100), ("学习", 200), ("是", 50)],
            "器习支",
        );
        let result = corrector.correct("是机七学习。").unwrap();

        assert_eq!(result.corrected, "是机器学习。");
        assert_eq!(result.corrections.len(), 1);
        assert_eq!(result.corrections[0].original, Word::new("机七"));
        assert_eq!(result.corrections[0].corrected, Word::new("机器"));
        assert_eq!(result.corrections[0].tier, Tier::Exact);
        assert!(result.was_corrected());
    }

    #[test]
    fn test_known_sentence_is_untouched() {
        let corrector = sentence_corrector(&[("机器", 100), ("学习", 200)], "器习");
        let result = corrector.correct("机器学习，机器学习。").unwrap();

        assert_eq!(result.corrected, result.original);
        assert!(!result.was_corrected());
    }

    #[test]
    fn test_unknown_without_candidates_kept() {
        let corrector = sentence_corrector(&[("学习", 200)], "习");
        let result = corrector.correct("魔法学习").unwrap();

        // 魔法 has no single-edit neighbor in this dictionary.
        assert_eq!(result.corrected, "魔法学习");
        assert!(!result.was_corrected());
    }

    #[test]
    fn test_punctuation_and_latin_pass_through() {
        let corrector = sentence_corrector(&[("机器", 100)], "器");
        let result = corrector.correct("机器, rust! 机器").unwrap();
        assert_eq!(result.corrected, "机器, rust! 机器");
    }

    #[test]
    fn test_batch_matches_sequential() {
        let corrector = sentence_corrector(
            &[("机器", 100), ("学习", 200), ("是", 50)],
            "器习支",
        );
        let sentences = vec![
            "是机七学习。".to_string(),
            "机器学习。".to_string(),
            "".to_string(),
        ];

        let batch = corrector.correct_batch(&sentences).unwrap();
        assert_eq!(batch.len(), 3);
        for (text, result) in sentences.iter().zip(&batch) {
            assert_eq!(result, &corrector.correct(text).unwrap());
        }
        assert_eq!(batch[0].corrected, "是机器学习。");
    }
}
