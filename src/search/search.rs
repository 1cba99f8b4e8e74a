use std::collections::BTreeSet;
use std::time::Instant;

use metrics::{counter, increment_counter};
use tracing::debug;

use crate::letterbag::LetterBag;
use crate::search::multithreaded_search::find_words_parallel;
use crate::search::searchconfig::SearchConfig;
use crate::wordlist::index::WordLookup;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Prefixes the lookup accepted and the search expanded.
    pub visited: usize,
    /// Prefixes the lookup rejected.
    pub pruned: usize,
    /// Letters skipped because the same letter was already tried at that depth.
    pub repeated: usize,
}

impl SearchStats {
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.visited += other.visited;
        self.pruned += other.pruned;
        self.repeated += other.repeated;
    }

    fn record(&self, found: usize) {
        increment_counter!("find_words.searches");
        counter!("find_words.prefixes_visited", self.visited as u64);
        counter!("find_words.prefixes_pruned", self.pruned as u64);
        counter!("find_words.words_found", found as u64);
    }
}

/// Backtracking word builder.
///
/// Grows one prefix buffer a letter at a time, asking the lookup whether
/// any word still starts with it, and records every prefix that is itself
/// a word. Each branch gets its own copy of the unused letters.
pub struct AnagramSearch<'l, L: ?Sized> {
    lookup: &'l L,
    config: &'l SearchConfig,
    prefix: String,
    /// Letters in `prefix`; `prefix.len()` counts bytes.
    depth: usize,
    found: BTreeSet<String>,
    stats: SearchStats,
}

impl<'l, L: WordLookup + ?Sized> AnagramSearch<'l, L> {
    pub fn new(lookup: &'l L, config: &'l SearchConfig) -> Self {
        AnagramSearch {
            lookup,
            config,
            prefix: String::new(),
            depth: 0,
            found: BTreeSet::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn run(mut self, letters: &[char]) -> (BTreeSet<String>, SearchStats) {
        self.descend(letters);
        self.finish()
    }

    pub(crate) fn finish(self) -> (BTreeSet<String>, SearchStats) {
        (self.found, self.stats)
    }

    fn descend(&mut self, remaining: &[char]) {
        self.stats.visited += 1;
        if self.depth > 0
            && self.config.accepts(self.depth, remaining.len())
            && self.lookup.is_word(&self.prefix) {
            self.found.insert(self.prefix.clone());
        }
        if !self.config.can_extend(self.depth) {
            return;
        }
        let choices = distinct_letters(remaining);
        self.stats.repeated += remaining.len() - choices.len();
        for (i, letter) in choices {
            self.branch(remaining, i, letter);
        }
    }

    /// Try `letter`, taken from position `i` of `remaining`. The prefix is
    /// restored before returning whether or not the branch was pruned.
    pub(crate) fn branch(&mut self, remaining: &[char], i: usize, letter: char) {
        self.prefix.push(letter);
        self.depth += 1;
        if self.lookup.has_prefix(&self.prefix) {
            let mut rest = remaining.to_vec();
            rest.remove(i);
            self.descend(&rest);
        } else {
            self.stats.pruned += 1;
        }
        self.prefix.pop();
        self.depth -= 1;
    }
}

/// First position of each distinct letter. Picking the second 'a' of "aab"
/// explores exactly the same subtree as picking the first.
pub(crate) fn distinct_letters(letters: &[char]) -> Vec<(usize, char)> {
    let mut seen: Vec<char> = Vec::with_capacity(letters.len());
    letters.iter().copied().enumerate()
        .filter(|(_, c)| {
            if seen.contains(c) {
                false
            } else {
                seen.push(*c);
                true
            }
        })
        .collect()
}

fn into_results(found: BTreeSet<String>, config: &SearchConfig) -> Vec<String> {
    found.into_iter().take(config.max_results.unwrap_or(usize::MAX)).collect()
}

/// Every word in `lookup` that can be built from some of the letters,
/// sorted and without duplicates.
pub fn find_all_words<L: WordLookup + ?Sized>(letters: &LetterBag, lookup: &L) -> Vec<String> {
    let config = SearchConfig::default();
    let (found, stats) = AnagramSearch::new(lookup, &config).run(letters.letters());
    stats.record(found.len());
    into_results(found, &config)
}

pub fn find_words_with<L: WordLookup + Sync + ?Sized>(letters: &LetterBag, lookup: &L, config: &SearchConfig) -> Vec<String> {
    search_with_stats(letters, lookup, config).0
}

pub fn search_with_stats<L: WordLookup + Sync + ?Sized>(letters: &LetterBag, lookup: &L, config: &SearchConfig)
                                                         -> (Vec<String>, SearchStats) {
    let start = Instant::now();
    let (found, stats) = if config.parallel {
        find_words_parallel(letters.letters(), lookup, config)
    } else {
        AnagramSearch::new(lookup, config).run(letters.letters())
    };
    stats.record(found.len());
    debug!(letters = letters.len(), found = found.len(), visited = stats.visited,
           pruned = stats.pruned, repeated = stats.repeated,
           "Searched in {:.3}s", start.elapsed().as_secs_f64());
    (into_results(found, config), stats)
}
