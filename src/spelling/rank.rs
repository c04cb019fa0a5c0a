//! Candidate selection and ranking.
//!
//! Two strategies resolve the final ranking. The exercised path walks the
//! tiers in priority order and picks by dictionary frequency; the weighted
//! similarity score is the documented alternative that discriminates within
//! a tier, kept independently testable behind
//! [`RankingStrategy`](crate::spelling::corrector::RankingStrategy).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{JiucuoError, Result};
use crate::lexicon::{FrequencyDictionary, Word};
use crate::pinyin::{PhoneticKey, Transliterator};
use crate::spelling::classify::{checked_key, Tier, TierBuckets};
use crate::spelling::distance::{levenshtein_distance, longest_common_substring};

/// A candidate with its similarity score, dictionary frequency, and tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The candidate word.
    pub word: Word,
    /// Weighted similarity score (higher is better).
    pub score: f64,
    /// Frequency of the candidate in the dictionary.
    pub frequency: u64,
    /// The phonetic tier the candidate landed in.
    pub tier: Tier,
}

impl Eq for ScoredCandidate {}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher scores come first; frequency then lexicographic order keep
        // the ranking deterministic.
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weighted similarity between the erroneous word's phonetic key and a
/// candidate's: `0.5 × edit_distance + 0.8 × normalized_lcs`, where the
/// longest-common-substring length is normalized by the erroneous key's
/// length so short words are not penalized for being unable to produce long
/// common substrings against longer candidates. Higher combined score means
/// preferred candidate.
pub fn similarity_score(erroneous: &PhoneticKey, candidate: &PhoneticKey) -> f64 {
    let a = erroneous.to_string();
    let b = candidate.to_string();

    let distance = levenshtein_distance(&a, &b) as f64;
    let a_len = a.chars().count();
    let normalized_lcs = if a_len == 0 {
        0.0
    } else {
        longest_common_substring(&a, &b) as f64 / a_len as f64
    };

    0.5 * distance + 0.8 * normalized_lcs
}

/// Pick the single best candidate: first non-empty tier in priority order
/// Exact, Initial, Other; within it the maximum dictionary frequency, ties
/// broken by lexicographic order so output is reproducible.
///
/// Fails with `NoCandidate` when all three tiers are empty.
pub fn select(
    original: &Word,
    buckets: &TierBuckets,
    dictionary: &FrequencyDictionary,
) -> Result<Word> {
    for tier in [Tier::Exact, Tier::Initial, Tier::Other] {
        let bucket = buckets.tier(tier);
        if bucket.is_empty() {
            continue;
        }
        let best = bucket
            .iter()
            .max_by(|a, b| {
                dictionary
                    .frequency(a.as_str())
                    .cmp(&dictionary.frequency(b.as_str()))
                    .then_with(|| b.cmp(a))
            })
            .expect("bucket is non-empty");
        return Ok(best.clone());
    }

    Err(JiucuoError::no_candidate(original.as_str()))
}

/// Rank all candidates, best first: tiers in priority order, and within each
/// tier by descending similarity score (frequency, then lexicographic order,
/// break ties).
pub fn rank(
    original: &Word,
    buckets: &TierBuckets,
    transliterator: &dyn Transliterator,
    dictionary: &FrequencyDictionary,
) -> Result<Vec<ScoredCandidate>> {
    let original_key = checked_key(original, transliterator)?;
    let mut ranked = Vec::with_capacity(buckets.len());

    for tier in [Tier::Exact, Tier::Initial, Tier::Other] {
        let mut scored = Vec::with_capacity(buckets.tier(tier).len());
        for word in buckets.tier(tier) {
            let key = checked_key(word, transliterator)?;
            scored.push(ScoredCandidate {
                score: similarity_score(&original_key, &key),
                frequency: dictionary.frequency(word.as_str()),
                tier,
                word: word.clone(),
            });
        }
        scored.sort();
        ranked.extend(scored);
    }

    Ok(ranked)
}
