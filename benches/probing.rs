use std::hint::black_box;

use ahash::RandomState;
use brunch::Bench;
use quadspell::{Dictionary, ProbingSet};

const SAMPLES: u32 = 500_000;
const WORDS: usize = 50_000;

/// A random seed from a sample run. The values aren't important here: just that they're constant.
/// We don't want the benchmark outputs to reflect random changes to the seed.
const HASHER: RandomState = RandomState::with_seeds(
    16553733157538299820,
    16824988918979132550,
    1196480943954226392,
    17486544621636611338,
);

/// Pronounceable-ish words built from the index so the set has realistic string keys.
fn word(mut n: usize) -> String {
    const SYLLABLES: [&str; 16] = [
        "ka", "to", "ri", "ne", "su", "mo", "la", "pe", "di", "gu", "fa", "ho", "zi", "be", "wu",
        "ce",
    ];
    let mut word = String::new();
    loop {
        word.push_str(SYLLABLES[n % SYLLABLES.len()]);
        n /= SYLLABLES.len();
        if n == 0 {
            break word;
        }
    }
}

fn main() {
    let words: Vec<String> = (0..WORDS).map(word).collect();
    let mut dict = Dictionary::with_hasher(HASHER);
    dict.extend(words.iter().map(String::as_str));
    eprintln!("{:?}", dict.stats());

    eprintln!("Starting benchmarks...");
    eprintln!();
    let now = std::time::Instant::now();
    brunch::benches!(
        inline:

        // Building
        Bench::new("Insert 50k words").run(|| {
            let mut set = ProbingSet::with_hasher(HASHER);
            set.extend(black_box(&words).iter().cloned());
            set
        }),
        Bench::new("Insert 50k words (presized)").run(|| {
            let mut set = ProbingSet::with_capacity_and_hasher(WORDS * 2, HASHER);
            set.extend(black_box(&words).iter().cloned());
            set
        }),
        Bench::spacer(),

        // Checking
        Bench::new("In-dictionary word (\"katori\")")
            .with_samples(SAMPLES)
            .run(|| dict.check(black_box("katori"))),
        Bench::new("Lowercase fallback (\"KATORI\")")
            .with_samples(SAMPLES)
            .run(|| dict.check(black_box("KATORI"))),
        Bench::new("Unknown word (\"katorix\")")
            .with_samples(SAMPLES)
            .run(|| dict.check(black_box("katorix"))),
        Bench::spacer(),

        // Suggesting
        Bench::new("Suggest (\"kaotri\")")
            .run(|| {
                let mut out = Vec::new();
                dict.suggest(black_box("kaotri"), &mut out);
                out
            }),
    );
    eprintln!("Finished in {:.1}s", now.elapsed().as_secs_f64());
}
