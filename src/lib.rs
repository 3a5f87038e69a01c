//! A small dictionary spellchecker built on a quadratic-probing hash set.
//!
//! Words are stored in a [ProbingSet]: an open-addressing table with a prime capacity which keeps
//! itself at most half full and counts the collisions and probe chain lengths of every lookup.
//! [Dictionary] checks words against the set and suggests corrections for unknown words by trying
//! single-character edits.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod io;
mod probing_set;
#[cfg(feature = "std")]
pub mod report;
mod stats;
mod suggester;

use core::hash::BuildHasher;

use alloc::{string::String, vec::Vec};

pub use probing_set::{is_prime, next_prime, ProbeStats, ProbingSet, DEFAULT_CAPACITY};
pub use stats::{EmptySetError, StatsReport};
pub use suggester::{Membership, Suggester};

/// Default hasher for hash tables.
///
/// This type is only available if the `default-hasher` feature is enabled. The `S` type parameter
/// of the [Dictionary] and [ProbingSet] can be supplied instead to use another hasher.
#[cfg(feature = "default-hasher")]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher behind [Dictionary::new] and [ProbingSet::new].
///
/// The seeds are fixed, so loading the same words gives the same table layout and the same probe
/// counters on every run of the same build.
#[cfg(feature = "default-hasher")]
pub const fn default_hash_builder() -> DefaultHashBuilder {
    ahash::RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}

/// Dummy default hasher for the [Dictionary] and [ProbingSet] when `default-hasher` is disabled.
#[cfg(not(feature = "default-hasher"))]
pub enum DefaultHashBuilder {}

/// A set of correctly spelled words.
///
/// Words are stored exactly as inserted. [Dictionary::check] falls back to the ASCII-lowercase
/// form of a word, so a dictionary listing "apple" accepts "Apple" and "APPLE" while a dictionary
/// listing "Paris" rejects "paris".
#[derive(Debug)]
pub struct Dictionary<S = DefaultHashBuilder> {
    words: ProbingSet<String, S>,
}

#[cfg(feature = "default-hasher")]
impl Dictionary<DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_hasher(default_hash_builder())
    }
}

#[cfg(feature = "default-hasher")]
impl Default for Dictionary<DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher> Dictionary<S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        Self {
            words: ProbingSet::with_hasher(build_hasher),
        }
    }

    /// Creates a dictionary whose table starts with roughly `capacity` slots.
    ///
    /// The table grows as needed. A good starting size is about twice the number of words.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        Self {
            words: ProbingSet::with_capacity_and_hasher(capacity, build_hasher),
        }
    }

    /// Adds a word to the dictionary, returning `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(String::from(word))
    }

    /// Removes a word, returning whether it was present. Only the exact spelling is removed.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Checks whether the word is in the dictionary as written or in ASCII-lowercase.
    pub fn check(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(word.to_ascii_lowercase().as_str())
    }

    /// Fills `out` with correction candidates for `word`.
    ///
    /// Existing contents of `out` are cleared. The word is not checked first: callers should
    /// only ask for suggestions when [Dictionary::check] fails.
    pub fn suggest(&self, word: &str, out: &mut Vec<String>) {
        Suggester::new(&self.words).suggest(word, out)
    }

    /// Summarizes the table's size and the probe counters since the table last grew.
    pub fn stats(&self) -> StatsReport {
        self.words.stats()
    }

    pub fn words(&self) -> &ProbingSet<String, S> {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut ProbingSet<String, S> {
        &mut self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: BuildHasher> Extend<String> for Dictionary<S> {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter)
    }
}

impl<'a, S: BuildHasher> Extend<&'a str> for Dictionary<S> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(String::from))
    }
}
