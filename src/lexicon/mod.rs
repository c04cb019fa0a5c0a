//! Lexicon types: the word unit, the frequency dictionary, and the
//! substitution alphabet.
//!
//! The dictionary and alphabet are constructed once at startup (blocking file
//! I/O lives here, outside the correction hot path) and are read-only for the
//! lifetime of a correction session. They are passed by reference into every
//! pipeline invocation rather than held as process-wide globals.

pub mod alphabet;
pub mod dictionary;
pub mod word;

pub use alphabet::Alphabet;
pub use dictionary::FrequencyDictionary;
pub use word::Word;
