//! Fuzzy pinyin matching for commonly confused initials.
//!
//! Speakers of many Mandarin dialects merge retroflex/dental initials and a
//! handful of other pairs, so `zi` typed for `zhi` is a pronunciation error
//! rather than a typing one. The classifier can optionally treat such pairs
//! as matching when it compares leading syllables.

use crate::pinyin::syllable::Syllable;

/// Initial pairs treated as interchangeable under fuzzy matching:
/// z/zh, c/ch, s/sh, n/l, f/h, l/r, g/k.
const FUZZY_INITIAL_PAIRS: &[(&str, &str)] = &[
    ("z", "zh"),
    ("c", "ch"),
    ("s", "sh"),
    ("n", "l"),
    ("f", "h"),
    ("l", "r"),
    ("g", "k"),
];

/// Split a syllable base into its initial consonant and final.
///
/// The two-letter retroflex initials zh/ch/sh take precedence over their
/// single-letter prefixes; syllables starting with a vowel have a zero
/// initial.
pub fn split_initial(base: &str) -> (&str, &str) {
    for prefix in ["zh", "ch", "sh"] {
        if let Some(rest) = base.strip_prefix(prefix) {
            return (prefix, rest);
        }
    }
    match base.chars().next() {
        Some(first) if !"aeiouü".contains(first) => base.split_at(first.len_utf8()),
        _ => ("", base),
    }
}

/// Check whether two initials match exactly or as a fuzzy pair.
pub fn initials_match(a: &str, b: &str) -> bool {
    a == b
        || FUZZY_INITIAL_PAIRS
            .iter()
            .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// Compare two syllables, tolerating fuzzy-initial confusion.
///
/// Finals and tones must still match exactly.
pub fn fuzzy_syllable_eq(a: &Syllable, b: &Syllable) -> bool {
    if a == b {
        return true;
    }
    if a.tone() != b.tone() {
        return false;
    }
    let (initial_a, final_a) = split_initial(a.base());
    let (initial_b, final_b) = split_initial(b.base());
    final_a == final_b && initials_match(initial_a, initial_b)
}
