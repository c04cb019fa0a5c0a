//! Main corrector that runs the generate → filter → classify → select
//! pipeline for a single word.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{JiucuoError, Result};
use crate::lexicon::{Alphabet, FrequencyDictionary, Word};
use crate::pinyin::Transliterator;
use crate::spelling::classify::{classify, Tier};
use crate::spelling::generate::{filter_known, generate};
use crate::spelling::rank::{rank, select, ScoredCandidate};

/// Which strategy resolves the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingStrategy {
    /// Tier priority, then raw dictionary frequency within the tier.
    #[default]
    TierFrequency,
    /// Tier priority, then the weighted similarity score within the tier.
    WeightedScore,
}

/// Configuration for the corrector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Strategy that resolves the final ranking.
    pub strategy: RankingStrategy,
    /// Whether leading-syllable comparison tolerates fuzzy initial pairs.
    pub fuzzy_initials: bool,
}

/// Result of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCorrection {
    /// The unknown word as given.
    pub original: Word,
    /// The chosen correction.
    pub corrected: Word,
    /// The phonetic tier the correction came from.
    pub tier: Tier,
    /// Dictionary frequency of the correction.
    pub frequency: u64,
}

/// Single-word spelling corrector.
///
/// Holds the immutable dictionary, alphabet, and transliterator for a
/// correction session; every correction is a pure, synchronous pipeline
/// invocation over them, so one corrector can serve any number of words
/// concurrently without coordination.
pub struct Corrector {
    dictionary: Arc<FrequencyDictionary>,
    alphabet: Alphabet,
    transliterator: Box<dyn Transliterator>,
    config: CorrectorConfig,
}

impl Corrector {
    /// Create a corrector with the default configuration.
    pub fn new(
        dictionary: Arc<FrequencyDictionary>,
        alphabet: Alphabet,
        transliterator: Box<dyn Transliterator>,
    ) -> Self {
        Corrector::with_config(
            dictionary,
            alphabet,
            transliterator,
            CorrectorConfig::default(),
        )
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(
        dictionary: Arc<FrequencyDictionary>,
        alphabet: Alphabet,
        transliterator: Box<dyn Transliterator>,
        config: CorrectorConfig,
    ) -> Self {
        Corrector {
            dictionary,
            alphabet,
            transliterator,
            config,
        }
    }

    /// The corrector's configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// The dictionary this corrector consults.
    pub fn dictionary(&self) -> &FrequencyDictionary {
        &self.dictionary
    }

    /// Check whether a word is part of the known vocabulary.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Correct a single unknown word.
    ///
    /// A word that is already known corrects to itself (Exact tier), so
    /// correction is a no-op for vocabulary the caller failed to pre-filter.
    /// Fails with `NoCandidate` when no single-edit neighbor of the word is
    /// in the dictionary.
    pub fn correct_word(&self, word: &Word) -> Result<WordCorrection> {
        if self.is_known(word.as_str()) {
            return Ok(WordCorrection {
                original: word.clone(),
                corrected: word.clone(),
                tier: Tier::Exact,
                frequency: self.dictionary.frequency(word.as_str()),
            });
        }

        let candidates = filter_known(generate(word, &self.alphabet), &self.dictionary);
        let buckets = classify(
            word,
            candidates,
            self.transliterator.as_ref(),
            self.config.fuzzy_initials,
        )?;

        let corrected = match self.config.strategy {
            RankingStrategy::TierFrequency => select(word, &buckets, &self.dictionary)?,
            RankingStrategy::WeightedScore => rank(
                word,
                &buckets,
                self.transliterator.as_ref(),
                &self.dictionary,
            )?
            .into_iter()
            .next()
            .map(|candidate| candidate.word)
            .ok_or_else(|| JiucuoError::no_candidate(word.as_str()))?,
        };

        let tier = buckets
            .tier_of(&corrected)
            .expect("selected candidate came from a bucket");

        Ok(WordCorrection {
            original: word.clone(),
            frequency: self.dictionary.frequency(corrected.as_str()),
            corrected,
            tier,
        })
    }

    /// Ranked correction suggestions for a word, at most `k` of them.
    ///
    /// A known word yields itself as the single suggestion.
    pub fn suggestions(&self, word: &Word, k: usize) -> Result<Vec<ScoredCandidate>> {
        if self.is_known(word.as_str()) {
            return Ok(vec![ScoredCandidate {
                word: word.clone(),
                score: 0.0,
                frequency: self.dictionary.frequency(word.as_str()),
                tier: Tier::Exact,
            }]);
        }

        let candidates = filter_known(generate(word, &self.alphabet), &self.dictionary);
        let buckets = classify(
            word,
            candidates,
            self.transliterator.as_ref(),
            self.config.fuzzy_initials,
        )?;
        let mut ranked = rank(
            word,
            &buckets,
            self.transliterator.as_ref(),
            &self.dictionary,
        )?;
        ranked.truncate(k);
        Ok(ranked)
    }
}
