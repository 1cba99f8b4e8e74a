use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use structopt::StructOpt;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use typed_arena::Arena;

use find_words::letterbag::{BagLimits, LetterBag};
use find_words::search::{search_with_stats, SearchConfig, SearchMode};
use find_words::wordlist::index::WordLookup;
use find_words::wordlist::wordlist::{FileFormat, Wordlist};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum LookupKind {
    Tree,
    Sorted,
}

impl FromStr for LookupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" | "bst" => Ok(LookupKind::Tree),
            "sorted" | "array" => Ok(LookupKind::Sorted),
            other => Err(format!("unknown lookup {:?}, expected tree or sorted", other)),
        }
    }
}

/// Find every word in a dictionary that can be spelled from a bag of letters.
#[derive(StructOpt)]
#[structopt(name = "find-words")]
struct Cli {
    /// The word list to search
    #[structopt(parse(from_os_str))]
    dictionary: PathBuf,
    /// Letters to build words from; asked for on stdin when missing
    #[structopt(short, long)]
    letters: Option<String>,
    /// How the dictionary is searched: tree or sorted
    #[structopt(long, default_value = "tree")]
    lookup: LookupKind,
    /// Only report words that use every letter
    #[structopt(long)]
    anagrams: bool,
    /// Accept at most 10 letters, like the first version of the game
    #[structopt(long)]
    legacy: bool,
    /// Search each first letter on its own thread
    #[structopt(long)]
    parallel: bool,
    #[structopt(long)]
    min_len: Option<usize>,
    #[structopt(long)]
    max_len: Option<usize>,
    #[structopt(long)]
    max_results: Option<usize>,
    /// Column delimiter of the word list; whitespace-separated words when missing
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word, with --delimiter
    #[structopt(long)]
    word_column: Option<usize>,
    /// JSON file with search settings; flags override it
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Print the results as JSON
    #[structopt(long)]
    json: bool,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)
                .with_context(|| format!("cannot load search settings from {}", path.display()))?,
            None => SearchConfig::new(),
        };
        if self.anagrams {
            config.mode = SearchMode::Anagrams;
        }
        if self.legacy {
            config.bag_limits = BagLimits::LEGACY;
        }
        config.parallel |= self.parallel;
        config.min_word_len = self.min_len.unwrap_or(config.min_word_len);
        config.max_word_len = self.max_len.or(config.max_word_len);
        config.max_results = self.max_results.or(config.max_results);
        Ok(config)
    }

    fn file_format(&self) -> FileFormat {
        match (self.delimiter, self.word_column) {
            (Some(delimiter), Some(column)) => FileFormat::builder().delimiter(delimiter).word_column(column).build(),
            (Some(delimiter), None) => FileFormat::builder().delimiter(delimiter).build(),
            (None, column) => {
                if column.is_some() {
                    warn!("--word-column has no effect without --delimiter");
                }
                FileFormat::builder().build()
            }
        }
    }
}

#[derive(Serialize)]
struct SearchReport<'r> {
    letters: String,
    lookup: LookupKind,
    mode: SearchMode,
    count: usize,
    words: &'r [String],
}

fn read_letters(limits: BagLimits, quiet: bool) -> Result<String> {
    if !quiet {
        println!("Enter letters ({}-{}) to be used. Do not use spaces or any other non-letters.\n\
                  Hit enter to finish.\n", limits.min, limits.max);
        io::stdout().flush()?;
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("cannot read letters")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn print_words(words: &[String]) {
    println!("There are {} words containing your letters:", words.len());
    words.iter().for_each(|w| println!("\t{}", w));
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.search_config()?;
    let wordlist = Wordlist::from_file(&cli.dictionary, &cli.file_format())?;

    let letters = match &cli.letters {
        Some(letters) => letters.clone(),
        None => read_letters(config.bag_limits, cli.json)?,
    };
    let bag = LetterBag::with_limits(&letters, config.bag_limits)
        .context("cannot create letter bag")?;

    let arena = Arena::new();
    let tree;
    let sorted;
    let view;
    let lookup: &(dyn WordLookup + Sync) = match cli.lookup {
        LookupKind::Tree => {
            tree = wordlist.tree_lookup(&arena);
            &tree
        }
        LookupKind::Sorted => {
            sorted = wordlist.sorted_lookup();
            if config.mode == SearchMode::Anagrams {
                view = sorted.restrict_to_length(bag.len());
                &view
            } else {
                &sorted
            }
        }
    };

    let (words, stats) = search_with_stats(&bag, lookup, &config);
    debug!(?stats, "Search finished");

    if cli.json {
        let report = SearchReport {
            letters: bag.to_string(),
            lookup: cli.lookup,
            mode: config.mode,
            count: words.len(),
            words: &words,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_words(&words);
    }
    Ok(())
}

fn main() {
    let cli = Cli::from_args();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
