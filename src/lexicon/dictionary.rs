//! The known-word frequency dictionary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{JiucuoError, Result};
use crate::lexicon::word::Word;

/// A mapping from known word to observed corpus frequency.
///
/// The key set is the authority on "is this word known": a word is part of
/// the vocabulary iff it is a key. The dictionary is built once (from a file
/// or from entries) and never mutated afterwards, so it can be shared freely
/// across concurrent correction pipelines.
#[derive(Debug, Clone, Default)]
pub struct FrequencyDictionary {
    /// Words and their frequencies.
    words: AHashMap<Word, u64>,
    /// Total frequency count across all words.
    total_count: u64,
    /// Length in characters of the longest word, used by the segmenter.
    max_word_chars: usize,
}

impl FrequencyDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        FrequencyDictionary::default()
    }

    /// Build a dictionary from `(word, frequency)` entries.
    pub fn from_entries<S: AsRef<str>>(entries: &[(S, u64)]) -> Self {
        let mut dictionary = FrequencyDictionary::new();
        for (word, frequency) in entries {
            dictionary.add(Word::new(word.as_ref()), *frequency);
        }
        dictionary
    }

    /// Load a dictionary from a frequency file.
    ///
    /// Each line holds whitespace-delimited `word frequency` columns; a third
    /// part-of-speech column is tolerated and ignored. Lines that do not
    /// parse are skipped. An entirely empty result is a load error rather
    /// than a silently useless dictionary.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = FrequencyDictionary::new();
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();

            let (Some(word), Some(frequency)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Ok(frequency) = frequency.parse::<u64>() else {
                continue;
            };
            dictionary.add(Word::new(word), frequency);
        }

        if dictionary.is_empty() {
            return Err(JiucuoError::lexicon(format!(
                "no usable entries in dictionary file {}",
                path.as_ref().display()
            )));
        }

        Ok(dictionary)
    }

    fn add(&mut self, word: Word, frequency: u64) {
        let chars = word.char_count();
        let old = self.words.insert(word, frequency).unwrap_or(0);
        self.total_count = self.total_count - old + frequency;
        self.max_word_chars = self.max_word_chars.max(chars);
    }

    /// Check whether a word is part of the known vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the frequency of a word, zero if unknown.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total frequency count across all words.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Length in characters of the longest known word.
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// Iterate over `(word, frequency)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> {
        self.words.iter().map(|(word, freq)| (word, *freq))
    }

    /// The most frequent words, highest first; ties in lexicographic order.
    pub fn most_frequent(&self, limit: usize) -> Vec<(Word, u64)> {
        let mut entries: Vec<(Word, u64)> = self
            .words
            .iter()
            .map(|(word, freq)| (word.clone(), *freq))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }
}
