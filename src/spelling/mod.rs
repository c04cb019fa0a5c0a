//! Spelling correction for unknown words.
//!
//! This module is the core of the crate: given a word the vocabulary lookup
//! rejected, it synthesizes every string one edit away, keeps the ones that
//! are real words, buckets them by phonetic similarity to the original, and
//! picks the best. Sentence-level orchestration wraps the same pipeline
//! behind a segmenter.

pub mod classify;
pub mod corrector;
pub mod distance;
pub mod generate;
pub mod rank;
pub mod sentence;

pub use classify::{Tier, TierBuckets};
pub use corrector::{Corrector, CorrectorConfig, RankingStrategy, WordCorrection};
pub use generate::CandidateSet;
pub use rank::ScoredCandidate;
pub use sentence::{SentenceCorrection, SentenceCorrector};
