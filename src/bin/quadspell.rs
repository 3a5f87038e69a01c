//! Checks a text against a word list and reports unknown words with suggested corrections.
//!
//! ```text
//! $ quadspell words.txt essay.txt
//! teh(3): the
//! wrdo(5): word
//! Number of words 4, Table size 11, Load Factor 0.36363636363636365, Collisions 0, Average chain length 1.0, Longest chain length 1
//! ```

use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use quadspell::{
    io::read_to_string,
    report::{self, ReportError, StatsLine},
    default_hash_builder, self_test, Dictionary, DEFAULT_CAPACITY,
};

/// Spellcheck a text against a dictionary of one word per line
#[derive(Parser, Debug)]
#[command(name = "quadspell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list with one word per line
    dictionary: PathBuf,

    /// Text to check
    text: PathBuf,

    /// Write the unknown words here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the table statistics here instead of stdout
    #[arg(short, long)]
    stats: Option<PathBuf>,

    /// Initial number of table slots, rounded up to a prime
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    table_size: usize,

    /// Run the insert/remove self-test on the table after checking
    #[arg(long)]
    self_test: bool,

    /// Verbosity level (repeat for more output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ReportError> {
    let mut dict = Dictionary::with_capacity_and_hasher(args.table_size, default_hash_builder());
    let words = read(&args.dictionary)?;
    let added = report::load_dictionary(&mut dict, &words);
    log::info!("loaded {added} words from {}", args.dictionary.display());

    // Taken before checking: lookups made while checking would otherwise count towards it.
    let stats = dict.stats();

    let text = read(&args.text)?;
    let misspellings = report::find_misspellings(&dict, &text);

    match &args.output {
        Some(path) => {
            let file = create(path)?;
            report::write_misspellings(BufWriter::new(file), &misspellings)
                .map_err(|source| write_error(path, source))?;
        }
        None => report::write_misspellings(io::stdout().lock(), &misspellings)
            .map_err(|source| write_error(Path::new("<stdout>"), source))?,
    }

    match &args.stats {
        Some(path) => {
            let mut file = create(path)?;
            writeln!(file, "{}", StatsLine(&stats)).map_err(|source| write_error(path, source))?;
        }
        None => println!("{}", StatsLine(&stats)),
    }

    if args.self_test {
        log::info!("running the self-test with {} words in the table", dict.len());
        self_test::run(dict.words_mut())?;
        log::info!("self-test passed");
    }

    Ok(())
}

fn read(path: &Path) -> Result<String, ReportError> {
    read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File, ReportError> {
    File::create(path).map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: io::Error) -> ReportError {
    ReportError::Write {
        path: path.to_path_buf(),
        source,
    }
}
