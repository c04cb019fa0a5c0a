//! # jiucuo
//!
//! A pinyin-aware spelling correction library for Chinese text.
//!
//! ## Features
//!
//! - Single-edit candidate generation over a configurable character alphabet
//! - Vocabulary filtering against a word-frequency dictionary
//! - Phonetic tiering of candidates by pinyin similarity
//! - Tier+frequency and weighted-score ranking strategies
//! - Dictionary-driven sentence segmentation and batch correction

pub mod cli;
pub mod error;
pub mod lexicon;
pub mod pinyin;
pub mod segment;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{JiucuoError, Result};
    pub use crate::lexicon::{Alphabet, FrequencyDictionary, Word};
    pub use crate::pinyin::{PhoneticKey, PinyinTable, Syllable, ToneStyle, Transliterator};
    pub use crate::segment::{MaxMatchSegmenter, Segmenter};
    pub use crate::spelling::{
        Corrector, CorrectorConfig, RankingStrategy, ScoredCandidate, SentenceCorrection,
        SentenceCorrector, Tier, WordCorrection,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
