/*
End-to-end checks of the file based flow: a word list and a text are written to a temporary
directory, read back through the encoding-detecting reader and checked.
*/

use std::fs;

use ahash::RandomState;
use quadspell::{
    io::read_to_string,
    report::{self, StatsLine},
    Dictionary,
};

const WORDS: &str = "\
the
quick
brown
fox
jumps
over
lazy
dog
cat
and
Paris
";

const TEXT: &str = "\
The quikc brown fox
jumps ovre the lazy dgo.

Paris, paris and PARIS!
";

fn dictionary(words: &str) -> Dictionary<RandomState> {
    let mut dict = Dictionary::with_hasher(RandomState::with_seeds(3, 1, 4, 1));
    report::load_dictionary(&mut dict, words);
    dict
}

#[test]
fn check_files() {
    let dir = tempfile::tempdir().unwrap();
    let words_path = dir.path().join("words.txt");
    let text_path = dir.path().join("text.txt");
    let out_path = dir.path().join("out.txt");
    fs::write(&words_path, WORDS).unwrap();
    fs::write(&text_path, TEXT).unwrap();

    let dict = dictionary(&read_to_string(&words_path).unwrap());
    assert_eq!(dict.len(), 11);
    let stats = dict.stats();

    let misspellings = report::find_misspellings(&dict, &read_to_string(&text_path).unwrap());
    let file = fs::File::create(&out_path).unwrap();
    report::write_misspellings(file, &misspellings).unwrap();

    // Each correction swaps the second to last character with the last one.
    // "paris" is only accepted with the dictionary's capitalization.
    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "quikc(1): quick\novre(2): over\ndgo(2): dog\nparis(4):\nPARIS(4):\n"
    );

    let line = StatsLine(&stats).to_string();
    assert!(line.starts_with("Number of words 11, Table size 23, Load Factor "));
}

#[test]
fn stats_are_taken_after_loading() {
    let dict = dictionary(WORDS);
    let before = dict.stats();
    report::find_misspellings(&dict, TEXT);
    let after = dict.stats();

    // Checking only reads the table, but every lookup still counts.
    assert_eq!(before.len, after.len);
    assert_eq!(before.capacity, after.capacity);
    assert!(after.total_probe_length > before.total_probe_length);
}

#[test]
fn empty_dictionary() {
    let dict = dictionary("");
    assert!(dict.is_empty());
    let misspellings = report::find_misspellings(&dict, "hello world");
    assert_eq!(misspellings.len(), 2);
    assert!(misspellings.iter().all(|m| m.candidates.is_empty()));
    assert!(StatsLine(&dict.stats())
        .to_string()
        .contains("Average chain length n/a"));
}
