//! Forward-maximum-matching segmenter.
//!
//! Scans left to right, at each position taking the longest dictionary word
//! that starts there. Consecutive positions where no dictionary word starts
//! merge into a single out-of-vocabulary token, so a misspelled word comes
//! out as one unit for the corrector instead of a scatter of single
//! characters. Non-CJK stretches split on Unicode word boundaries and pass
//! through.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::lexicon::FrequencyDictionary;
use crate::segment::{is_cjk, is_punctuation, Segmenter, Token, TokenKind};

/// A segmenter driven by the known-word dictionary.
pub struct MaxMatchSegmenter {
    dictionary: Arc<FrequencyDictionary>,
}

impl MaxMatchSegmenter {
    /// Create a segmenter over the given dictionary.
    pub fn new(dictionary: Arc<FrequencyDictionary>) -> Self {
        MaxMatchSegmenter { dictionary }
    }

    /// Length in characters of the longest dictionary word starting at
    /// `start`, if any.
    fn match_at(&self, chars: &[char], start: usize) -> Option<usize> {
        let longest = self.dictionary.max_word_chars().min(chars.len() - start);
        for len in (1..=longest).rev() {
            let word: String = chars[start..start + len].iter().collect();
            if self.dictionary.contains(&word) {
                return Some(len);
            }
        }
        None
    }
}

impl Segmenter for MaxMatchSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if is_punctuation(ch) {
                let position = tokens.len();
                tokens.push(Token::new(ch.to_string(), position, TokenKind::Punctuation));
                i += 1;
            } else if is_cjk(ch) {
                let end = match self.match_at(&chars, i) {
                    Some(len) => i + len,
                    None => {
                        // Out-of-vocabulary run: absorb characters until a
                        // dictionary word starts, bounded by the longest
                        // known word length.
                        let cap = self.dictionary.max_word_chars().max(1);
                        let mut j = i + 1;
                        while j < chars.len()
                            && j - i < cap
                            && is_cjk(chars[j])
                            && self.match_at(&chars, j).is_none()
                        {
                            j += 1;
                        }
                        j
                    }
                };
                let word: String = chars[i..end].iter().collect();
                let position = tokens.len();
                tokens.push(Token::new(word, position, TokenKind::Word));
                i = end;
            } else {
                // Non-CJK run: pass through, split on word boundaries.
                let mut j = i;
                while j < chars.len() && !is_cjk(chars[j]) && !is_punctuation(chars[j]) {
                    j += 1;
                }
                let run: String = chars[i..j].iter().collect();
                for segment in run.split_word_bounds() {
                    let kind = if segment.chars().any(|c| c.is_alphanumeric()) {
                        TokenKind::Word
                    } else {
                        TokenKind::Other
                    };
                    let position = tokens.len();
                    tokens.push(Token::new(segment, position, kind));
                }
                i = j;
            }
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "max_match"
    }
}
