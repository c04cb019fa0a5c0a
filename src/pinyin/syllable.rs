//! Syllable and phonetic key types.
//!
//! A syllable is the pronunciation of a single character: a base sound plus
//! an optional tone (1-4). Tone-marked pinyin such as `xué` parses into base
//! `xue` with tone 2; neutral-tone readings carry no tone. A phonetic key is
//! the ordered sequence of syllables for a whole word.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Map a tone-marked vowel to its plain form and tone number.
fn tone_mark(ch: char) -> Option<(char, u8)> {
    match ch {
        'ā' => Some(('a', 1)),
        'á' => Some(('a', 2)),
        'ǎ' => Some(('a', 3)),
        'à' => Some(('a', 4)),
        'ē' => Some(('e', 1)),
        'é' => Some(('e', 2)),
        'ě' => Some(('e', 3)),
        'è' => Some(('e', 4)),
        'ī' => Some(('i', 1)),
        'í' => Some(('i', 2)),
        'ǐ' => Some(('i', 3)),
        'ì' => Some(('i', 4)),
        'ō' => Some(('o', 1)),
        'ó' => Some(('o', 2)),
        'ǒ' => Some(('o', 3)),
        'ò' => Some(('o', 4)),
        'ū' => Some(('u', 1)),
        'ú' => Some(('u', 2)),
        'ǔ' => Some(('u', 3)),
        'ù' => Some(('u', 4)),
        'ǖ' => Some(('ü', 1)),
        'ǘ' => Some(('ü', 2)),
        'ǚ' => Some(('ü', 3)),
        'ǜ' => Some(('ü', 4)),
        'ḿ' => Some(('m', 2)),
        'ń' => Some(('n', 2)),
        'ň' => Some(('n', 3)),
        'ǹ' => Some(('n', 4)),
        _ => None,
    }
}

/// The pronunciation of a single character: base sound plus optional tone.
///
/// Equality covers both fields, so two syllables are phonetically identical
/// iff they share base sound and tone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    base: String,
    tone: Option<u8>,
}

impl Syllable {
    /// Create a syllable from a base sound and an optional tone.
    pub fn new<S: Into<String>>(base: S, tone: Option<u8>) -> Self {
        Syllable {
            base: base.into(),
            tone,
        }
    }

    /// Parse a tone-marked pinyin rendering such as `qì` or `xué`.
    ///
    /// The tone mark is lifted off its vowel into the tone number; renderings
    /// without a mark (neutral tone, or pass-through text) parse with no
    /// tone. Only the first mark counts; well-formed pinyin never has two.
    pub fn parse(marked: &str) -> Self {
        let mut base = String::with_capacity(marked.len());
        let mut tone = None;

        for ch in marked.chars() {
            match tone_mark(ch) {
                Some((plain, number)) => {
                    base.push(plain);
                    tone.get_or_insert(number);
                }
                None => base.push(ch),
            }
        }

        Syllable { base, tone }
    }

    /// The base sound without tone information.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The tone number (1-4), if any.
    pub fn tone(&self) -> Option<u8> {
        self.tone
    }

    /// A copy of this syllable with the tone removed.
    pub fn stripped(&self) -> Syllable {
        Syllable {
            base: self.base.clone(),
            tone: None,
        }
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Some(tone) => write!(f, "{}{}", self.base, tone),
            None => f.write_str(&self.base),
        }
    }
}

/// The phonetic key of a word: one syllable per character, in order.
///
/// Two words are phonetically identical iff their keys are equal
/// sequence-wise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticKey(Vec<Syllable>);

impl PhoneticKey {
    /// Create a phonetic key from syllables.
    pub fn new(syllables: Vec<Syllable>) -> Self {
        PhoneticKey(syllables)
    }

    /// The syllables of this key.
    pub fn syllables(&self) -> &[Syllable] {
        &self.0
    }

    /// The first syllable, if the key is non-empty.
    pub fn first(&self) -> Option<&Syllable> {
        self.0.first()
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the key holds no syllables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PhoneticKey {
    /// Renders syllables separated by `'`, e.g. `ji'qi`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("'")?;
            }
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tone_marked() {
        let syllable = Syllable::parse("qì");
        assert_eq!(syllable.base(), "qi");
        assert_eq!(syllable.tone(), Some(4));

        let syllable = Syllable::parse("xué");
        assert_eq!(syllable.base(), "xue");
        assert_eq!(syllable.tone(), Some(2));

        let syllable = Syllable::parse("lǜ");
        assert_eq!(syllable.base(), "lü");
        assert_eq!(syllable.tone(), Some(4));
    }

    #[test]
    fn test_parse_neutral_tone() {
        let syllable = Syllable::parse("de");
        assert_eq!(syllable.base(), "de");
        assert_eq!(syllable.tone(), None);
    }

    #[test]
    fn test_stripped_equality() {
        let qi1 = Syllable::parse("qī");
        let qi4 = Syllable::parse("qì");
        assert_ne!(qi1, qi4);
        assert_eq!(qi1.stripped(), qi4.stripped());
    }

    #[test]
    fn test_display() {
        assert_eq!(Syllable::parse("qì").to_string(), "qi4");
        assert_eq!(Syllable::parse("de").to_string(), "de");

        let key = PhoneticKey::new(vec![Syllable::parse("jī"), Syllable::parse("qì")]);
        assert_eq!(key.to_string(), "ji1'qi4");
    }

    #[test]
    fn test_key_equality_is_sequence_wise() {
        let a = PhoneticKey::new(vec![Syllable::new("ji", None), Syllable::new("qi", None)]);
        let b = PhoneticKey::new(vec![Syllable::new("ji", None), Syllable::new("qi", None)]);
        let c = PhoneticKey::new(vec![Syllable::new("qi", None), Syllable::new("ji", None)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.first(), Some(&Syllable::new("ji", None)));
    }
}
