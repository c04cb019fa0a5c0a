//! Candidate generation: every string reachable by exactly one edit.

use ahash::AHashSet;

use crate::lexicon::{Alphabet, FrequencyDictionary, Word};

/// A set of candidate words. Duplicates across edit families collapse;
/// candidates carry no identity beyond their string value.
pub type CandidateSet = AHashSet<Word>;

/// Generate all words reachable from `word` by exactly one primitive edit:
/// a character deletion, an adjacent-pair transposition, a single-character
/// substitution, or a single-character insertion, the latter two drawing
/// replacement characters from `alphabet`.
///
/// The input word itself is never produced: identity substitutions and
/// equal-pair transpositions are skipped. An empty word yields an empty set,
/// and an empty alphabet degenerates to deletions and transpositions only.
///
/// Pure function of its inputs; identical `(word, alphabet)` always yields
/// the same set. Candidate volume is bounded by O(n × |alphabet|), a
/// deliberate scope limit that keeps the fan-out linear in word length
/// rather than exponential in edit distance.
pub fn generate(word: &Word, alphabet: &Alphabet) -> CandidateSet {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n == 0 {
        return CandidateSet::new();
    }

    let mut candidates =
        CandidateSet::with_capacity(n + n.saturating_sub(1) + (2 * n + 1) * alphabet.len());

    // Deletions: n results.
    for i in 0..n {
        let mut edited = chars.clone();
        edited.remove(i);
        candidates.insert(Word::new(edited.into_iter().collect::<String>()));
    }

    // Transpositions (swapping adjacent characters): n-1 results.
    for i in 0..n.saturating_sub(1) {
        if chars[i] != chars[i + 1] {
            let mut edited = chars.clone();
            edited.swap(i, i + 1);
            candidates.insert(Word::new(edited.into_iter().collect::<String>()));
        }
    }

    // Substitutions: n × |alphabet| results.
    for i in 0..n {
        for ch in alphabet.iter() {
            if ch != chars[i] {
                let mut edited = chars.clone();
                edited[i] = ch;
                candidates.insert(Word::new(edited.into_iter().collect::<String>()));
            }
        }
    }

    // Insertions: (n+1) × |alphabet| results.
    for i in 0..=n {
        for ch in alphabet.iter() {
            let mut edited = chars.clone();
            edited.insert(i, ch);
            candidates.insert(Word::new(edited.into_iter().collect::<String>()));
        }
    }

    candidates
}

/// Keep only candidates that are keys of the dictionary.
///
/// This prunes the "one edit away but not a real word" majority before any
/// phonetic comparison happens. Returns the empty set when nothing matches.
pub fn filter_known(mut candidates: CandidateSet, dictionary: &FrequencyDictionary) -> CandidateSet {
    candidates.retain(|candidate| dictionary.contains(candidate.as_str()));
    candidates
}
