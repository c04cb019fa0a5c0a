//! Phonetic tier classification of filtered candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{JiucuoError, Result};
use crate::lexicon::Word;
use crate::pinyin::fuzzy::fuzzy_syllable_eq;
use crate::pinyin::{PhoneticKey, Transliterator};
use crate::spelling::generate::CandidateSet;

/// Priority bucket expressing confidence that a candidate is the intended
/// correction, based on phonetic similarity. Ordered `Exact > Initial >
/// Other`; never persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Neither the full key nor the leading syllable matches.
    Other,
    /// The leading syllable matches; the rest of the key differs.
    Initial,
    /// The full phonetic key matches, every syllable.
    Exact,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Exact => "exact",
            Tier::Initial => "initial",
            Tier::Other => "other",
        })
    }
}

/// Candidates partitioned by tier. Each bucket is sorted lexicographically
/// so the partition is reproducible regardless of candidate-set iteration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierBuckets {
    pub exact: Vec<Word>,
    pub initial: Vec<Word>,
    pub other: Vec<Word>,
}

impl TierBuckets {
    /// The bucket for a tier.
    pub fn tier(&self, tier: Tier) -> &[Word] {
        match tier {
            Tier::Exact => &self.exact,
            Tier::Initial => &self.initial,
            Tier::Other => &self.other,
        }
    }

    /// Total number of candidates across all tiers.
    pub fn len(&self) -> usize {
        self.exact.len() + self.initial.len() + self.other.len()
    }

    /// Check whether all three tiers are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tier a candidate landed in, if any.
    pub fn tier_of(&self, word: &Word) -> Option<Tier> {
        [Tier::Exact, Tier::Initial, Tier::Other]
            .into_iter()
            .find(|&tier| self.tier(tier).contains(word))
    }
}

/// Transliterate a word, enforcing the one-syllable-per-character contract.
///
/// An empty or wrong-length key for a non-empty word is a collaborator
/// contract violation and is surfaced immediately rather than silently
/// miscompared.
pub fn checked_key(word: &Word, transliterator: &dyn Transliterator) -> Result<PhoneticKey> {
    let key = transliterator.transliterate(word)?;
    let chars = word.char_count();
    if key.len() != chars {
        return Err(JiucuoError::malformed_key(
            word.as_str(),
            format!("{} characters, {} syllables", chars, key.len()),
        ));
    }
    Ok(key)
}

/// Bucket each candidate by comparing its phonetic key against the original
/// unknown word's key.
///
/// The partition is exhaustive and mutually exclusive: every candidate lands
/// in exactly one tier. With `fuzzy_initials` set, the leading-syllable
/// comparison tolerates the fuzzy initial pairs (z/zh, n/l, ...).
pub fn classify(
    original: &Word,
    candidates: CandidateSet,
    transliterator: &dyn Transliterator,
    fuzzy_initials: bool,
) -> Result<TierBuckets> {
    let original_key = checked_key(original, transliterator)?;
    let mut buckets = TierBuckets::default();

    for candidate in candidates {
        let candidate_key = checked_key(&candidate, transliterator)?;

        if candidate_key == original_key {
            buckets.exact.push(candidate);
        } else if leading_syllables_match(&original_key, &candidate_key, fuzzy_initials) {
            buckets.initial.push(candidate);
        } else {
            buckets.other.push(candidate);
        }
    }

    buckets.exact.sort();
    buckets.initial.sort();
    buckets.other.sort();
    Ok(buckets)
}

fn leading_syllables_match(a: &PhoneticKey, b: &PhoneticKey, fuzzy: bool) -> bool {
    match (a.first(), b.first()) {
        (Some(a), Some(b)) => {
            if fuzzy {
                fuzzy_syllable_eq(a, b)
            } else {
                a == b
            }
        }
        _ => false,
    }
}
