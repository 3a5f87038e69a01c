//! Spellchecking whole texts and formatting the results.
//!
//! A text is split into lines and whitespace-separated tokens. Every character of a token which
//! isn't an ASCII letter is dropped, so "don't," is checked as "dont" and "42" is skipped
//! entirely. Tokens the dictionary rejects are reported with their 1-based line number and the
//! suggested corrections:
//!
//! ```text
//! teh(3): eh th the
//! ```

use core::{fmt, hash::BuildHasher};
use std::{
    io::{self, Write},
    path::PathBuf,
    string::String,
    vec::Vec,
};

use crate::{self_test::SelfTestFailure, Dictionary, StatsReport};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("self-test failed: {0}")]
    SelfTest(#[from] SelfTestFailure),
}

/// A word of the text together with the line it appeared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub line: usize,
}

/// A word which isn't in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: String,
    pub line: usize,
    pub candidates: Vec<String>,
}

impl fmt::Display for Misspelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}):", self.word, self.line)?;
        for candidate in &self.candidates {
            write!(f, " {candidate}")?;
        }
        Ok(())
    }
}

/// Formats a [StatsReport] as a single line.
///
/// Ratios always carry a decimal point ("0.0", "1.5"). The average probe chain of an empty table
/// is undefined and shown as "n/a".
pub struct StatsLine<'a>(pub &'a StatsReport);

impl fmt::Display for StatsLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        write!(
            f,
            "Number of words {}, Table size {}, Load Factor {:?}, Collisions {}, ",
            stats.len,
            stats.capacity,
            stats.load_factor(),
            stats.collisions
        )?;
        match stats.average_probe_chain() {
            Ok(average) => write!(f, "Average chain length {average:?}, ")?,
            Err(_) => f.write_str("Average chain length n/a, ")?,
        }
        write!(f, "Longest chain length {}", stats.longest_probe_chain)
    }
}

/// Inserts every non-empty line of `text` as a word. Returns the number of new words.
pub fn load_dictionary<S: BuildHasher>(dict: &mut Dictionary<S>, text: &str) -> usize {
    let mut added = 0;
    for line in text.lines() {
        let word = line.trim_end_matches('\r');
        if word.is_empty() {
            continue;
        }
        if dict.insert(word) {
            added += 1;
        }
    }
    log::debug!(
        "loaded {added} words into a table of {} slots",
        dict.words().capacity()
    );
    added
}

/// Keeps only the ASCII letters of a token.
pub fn normalize(token: &str) -> String {
    token.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Splits `text` into normalized words, skipping tokens with no letters.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.lines().enumerate().flat_map(|(idx, line)| {
        line.split_whitespace().filter_map(move |token| {
            let word = normalize(token);
            if word.is_empty() {
                return None;
            }
            Some(Token {
                word,
                line: idx + 1,
            })
        })
    })
}

/// Checks every word of `text` and collects suggestions for the unknown ones, in text order.
pub fn find_misspellings<S: BuildHasher>(dict: &Dictionary<S>, text: &str) -> Vec<Misspelling> {
    let mut misspellings = Vec::new();
    for Token { word, line } in tokenize(text) {
        if dict.check(&word) {
            continue;
        }
        let mut candidates = Vec::new();
        dict.suggest(&word, &mut candidates);
        misspellings.push(Misspelling {
            word,
            line,
            candidates,
        });
    }
    log::debug!("found {} unknown words", misspellings.len());
    misspellings
}

/// Writes one misspelling per line.
pub fn write_misspellings<W: Write>(mut out: W, misspellings: &[Misspelling]) -> io::Result<()> {
    for misspelling in misspellings {
        writeln!(out, "{misspelling}")?;
    }
    out.flush()
}
