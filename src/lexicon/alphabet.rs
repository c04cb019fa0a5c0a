//! The substitution alphabet: the working character set used to synthesize
//! substitution and insertion candidates.

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::error::{JiucuoError, Result};

/// A read-only set of single characters with deterministic iteration order.
///
/// Iteration follows first-occurrence order of the source text, so identical
/// inputs always parameterize candidate synthesis identically. The alphabet
/// carries no ordering semantics beyond that reproducibility guarantee.
#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    chars: Vec<char>,
    index: AHashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from characters, keeping first occurrences only.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut alphabet = Alphabet::default();
        for ch in chars {
            if alphabet.index.insert(ch) {
                alphabet.chars.push(ch);
            }
        }
        alphabet
    }

    /// Build an alphabet from a flat concatenation of characters.
    ///
    /// Whitespace (including newlines between file chunks) is ignored.
    pub fn from_text(text: &str) -> Self {
        Alphabet::from_chars(text.chars().filter(|ch| !ch.is_whitespace()))
    }

    /// Load an alphabet file: a flat, UTF-8 concatenation of characters.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let alphabet = Alphabet::from_text(&text);
        if alphabet.is_empty() {
            return Err(JiucuoError::lexicon(format!(
                "no characters in alphabet file {}",
                path.as_ref().display()
            )));
        }
        Ok(alphabet)
    }

    /// Check whether the alphabet contains a character.
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains(&ch)
    }

    /// Iterate over the characters in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
