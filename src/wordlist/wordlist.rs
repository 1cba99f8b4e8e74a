use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use nom::bytes::complete::{is_not, take_till};
use nom::character::complete::{char, multispace0, multispace1};
use nom::multi::{separated_list0, separated_list1};
use nom::sequence::delimited;
use nom::IResult;
use tracing::info;
use typed_arena::Arena;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::WordlistError;
use crate::wordlist::sorted::SortedArrayLookup;
use crate::wordlist::tree::{OrderedTreeLookup, TreeNode};

/// The vocabulary: lower-cased, sorted, distinct words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

/// How words are laid out in a word-list file.
///
/// Without a delimiter every whitespace-separated token is a word, so both
/// one-word-per-line lists and free text work. With a delimiter each line
/// is a record and the word is taken from `word_column` (default 0).
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

fn tokens(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(multispace0, separated_list0(multispace1, is_not(" \t\r\n")), multispace0)(input)
}

fn columns(input: &str, delimiter: char) -> IResult<&str, Vec<&str>> {
    separated_list1(char(delimiter), take_till(|c: char| c == delimiter))(input)
}

impl FileFormat {
    /// Both grammars accept any line, so a line nom cannot split simply has
    /// no words, or no cell in the word column.
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<Vec<&'a str>, WordlistError> {
        match self.delimiter {
            None => Ok(tokens(line).map(|(_, words)| words).unwrap_or_default()),
            Some(delimiter) => {
                if line.trim().is_empty() {
                    return Ok(vec![]);
                }
                let cells = columns(line, delimiter).map(|(_, cells)| cells).unwrap_or_default();
                let column = self.word_column.unwrap_or(0);
                cells.get(column)
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| vec![cell])
                    .ok_or(WordlistError::MissingColumn { line: line_no, column })
            }
        }
    }
}

impl Wordlist {
    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, String>;
        }
    }

    pub fn from_words<I, S>(words: I) -> Wordlist
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut words: Vec<String> = words.into_iter()
            .map(|w| normalize(w.as_ref()).into_owned())
            .collect();
        words.sort_unstable();
        words.dedup();
        Wordlist { words }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let path = path.as_ref();
        info!("Reading words from {}", path.display());
        let file = File::open(path)
            .map_err(|source| WordlistError::Open { path: path.to_path_buf(), source })?;
        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let start = Instant::now();
        let mut raw: Vec<String> = vec![];
        let mut count: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            raw.extend(format.parse_line(&line, idx + 1)?.into_iter().map(str::to_string));
            count += 1;
        }

        let read = raw.len();
        let wordlist = Self::from_words(raw);
        info!(lines = count, read, distinct = wordlist.len(),
              "Read word list in {:.3}s", start.elapsed().as_secs_f64());
        Ok(wordlist)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.words.binary_search_by(|w| w.as_str().cmp(word.as_ref())).is_ok()
    }

    pub fn tree_lookup<'a>(&self, arena: &'a Arena<TreeNode<'a>>) -> OrderedTreeLookup<'a> {
        OrderedTreeLookup::build(arena, &self.words)
    }

    pub fn sorted_lookup(&self) -> SortedArrayLookup {
        SortedArrayLookup::build(&self.words)
    }
}

impl<'w> IntoIterator for &'w Wordlist {
    type Item = &'w String;
    type IntoIter = std::slice::Iter<'w, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
