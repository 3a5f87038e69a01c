use core::hash::BuildHasher;

use crate::{
    alloc::{string::String, vec::Vec},
    ProbingSet,
};

/// Letters tried by the substitution and replacement edits.
const ALPHABET: core::ops::RangeInclusive<char> = 'a'..='z';

/// Answers whether a word is in the dictionary.
pub trait Membership {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Membership for ProbingSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        ProbingSet::contains(self, word)
    }
}

impl<M: Membership + ?Sized> Membership for &M {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Enumerates single-edit corrections for a word which is not in the dictionary.
///
/// Every edit is applied at every character position of the word, in order, and each edited
/// string whose lowercase form is in the dictionary is suggested as-is. Suggestions are neither
/// ranked nor deduplicated: the same word may be suggested by several edits.
pub struct Suggester<M> {
    words: M,
}

impl<M: Membership> Suggester<M> {
    pub fn new(words: M) -> Self {
        Self { words }
    }

    /// Fills `out` with suggestions for `word`. Existing contents of `out` are cleared.
    pub fn suggest(&self, word: &str, out: &mut Vec<String>) {
        out.clear();
        if word.is_empty() {
            return;
        }

        let chars: Vec<char> = word.chars().collect();
        // Reused by every edit to avoid allocating a buffer per probe.
        let mut buffer = Vec::with_capacity(chars.len());

        for idx in 0..chars.len() {
            self.extra_char_suggest(&chars, idx, &mut buffer, out);
            self.swap_with_last_suggest(&chars, idx, &mut buffer, out);
            for letter in ALPHABET {
                self.bad_char_suggest(&chars, idx, letter, &mut buffer, out);
                self.replace_all_suggest(&chars, idx, letter, out);
            }
        }
    }

    /// Suggests the word with the character at `idx` dropped.
    ///
    /// Intuitively you might double-tap a character key on your keyboard.
    fn extra_char_suggest(
        &self,
        chars: &[char],
        idx: usize,
        buffer: &mut Vec<char>,
        out: &mut Vec<String>,
    ) {
        buffer.clear();
        buffer.extend_from_slice(&chars[..idx]);
        buffer.extend_from_slice(&chars[idx + 1..]);
        self.add_suggestion_if_correct(buffer, out);
    }

    /// Suggests the word with the character at `idx` swapped with the last character.
    ///
    /// Note that this is not an adjacent swap: "cta" suggests "cat" by swapping the middle and
    /// last characters, but "tehre" can't suggest "there".
    fn swap_with_last_suggest(
        &self,
        chars: &[char],
        idx: usize,
        buffer: &mut Vec<char>,
        out: &mut Vec<String>,
    ) {
        buffer.clear();
        buffer.extend_from_slice(chars);
        let last = buffer.len() - 1;
        buffer.swap(idx, last);
        self.add_suggestion_if_correct(buffer, out);
    }

    /// Suggests the word with the character at `idx` replaced by `letter`.
    fn bad_char_suggest(
        &self,
        chars: &[char],
        idx: usize,
        letter: char,
        buffer: &mut Vec<char>,
        out: &mut Vec<String>,
    ) {
        buffer.clear();
        buffer.extend_from_slice(chars);
        buffer[idx] = letter;
        self.add_suggestion_if_correct(buffer, out);
    }

    /// Replaces every occurrence of the character at `idx` with `letter`.
    ///
    /// The acceptance test compares two lookups of the same string with each other. They always
    /// agree, so this edit costs two lookups and never suggests anything.
    fn replace_all_suggest(&self, chars: &[char], idx: usize, letter: char, out: &mut Vec<String>) {
        let from = chars[idx];
        let replaced: String = chars
            .iter()
            .map(|&ch| if ch == from { letter } else { ch })
            .collect();

        let first = self.words.contains(&replaced);
        let second = self.words.contains(&replaced);
        if first != second {
            out.push(replaced);
        }
    }

    /// Pushes the edited word if its lowercase form is in the dictionary.
    fn add_suggestion_if_correct(&self, buffer: &[char], out: &mut Vec<String>) -> bool {
        let word: String = buffer.iter().collect();
        if !self.words.contains(&word.to_ascii_lowercase()) {
            return false;
        }

        out.push(word);
        true
    }
}
