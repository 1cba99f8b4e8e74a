use std::cell::RefCell;
use std::collections::BTreeSet;

use rayon::prelude::*;
use thread_local::ThreadLocal;
use tracing::trace;

use crate::search::search::{AnagramSearch, distinct_letters, SearchStats};
use crate::search::searchconfig::SearchConfig;
use crate::wordlist::index::WordLookup;

type Found = (BTreeSet<String>, SearchStats);

/// Runs each distinct first letter as its own rayon task. Tasks share the
/// lookup read-only and collect into per-thread sets, merged at the end,
/// so the result is the same as the sequential search.
pub(crate) fn find_words_parallel<L>(letters: &[char], lookup: &L, config: &SearchConfig) -> Found
    where L: WordLookup + Sync + ?Sized {
    if !config.can_extend(0) {
        return Default::default();
    }

    let per_thread: ThreadLocal<RefCell<Found>> = ThreadLocal::new();
    distinct_letters(letters).into_par_iter().for_each(|(i, letter)| {
        let mut search = AnagramSearch::new(lookup, config);
        search.branch(letters, i, letter);
        let (words, stats) = search.finish();
        trace!(%letter, found = words.len(), visited = stats.visited, "Finished branch");

        let mut local = per_thread.get_or(Default::default).borrow_mut();
        local.0.extend(words);
        local.1.merge(&stats);
    });

    per_thread.into_iter()
        .map(RefCell::into_inner)
        .fold(Default::default(), |(mut words, mut stats): Found, (more, more_stats)| {
            words.extend(more);
            stats.merge(&more_stats);
            (words, stats)
        })
}


#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use crate::letterbag::LetterBag;
    use crate::search::{find_words_with, search_with_stats, SearchConfig};
    use crate::search::multithreaded_search::find_words_parallel;
    use crate::wordlist::sorted::SortedArrayLookup;
    use crate::wordlist::tree::OrderedTreeLookup;

    fn parallel() -> SearchConfig {
        let mut config = SearchConfig::new();
        config.parallel = true;
        config
    }

    #[test]
    fn matches_sequential_search() {
        let vocab = ["cat", "car", "art", "rat", "tar", "cart", "a", "act", "arc", "tact", "scat"];
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, vocab);
        let sorted = SortedArrayLookup::build(vocab);

        for letters in ["cart", "tactic", "aaaa", "xyz"] {
            let bag = LetterBag::new(letters).unwrap();
            let expected = find_words_with(&bag, &sorted, &SearchConfig::new());
            assert_eq!(find_words_with(&bag, &sorted, &parallel()), expected);
            assert_eq!(find_words_with(&bag, &tree, &parallel()), expected);
        }
    }

    #[test]
    fn stats_add_up_without_the_root() {
        let sorted = SortedArrayLookup::build(["dog"]);
        let bag = LetterBag::new("dogx").unwrap();
        let (sequential_words, sequential) = search_with_stats(&bag, &sorted, &SearchConfig::new());
        let (parallel_words, merged) = search_with_stats(&bag, &sorted, &parallel());
        assert_eq!(sequential_words, parallel_words);
        assert_eq!(merged.visited, sequential.visited - 1);
        assert_eq!(merged.pruned, sequential.pruned);
    }

    #[test]
    fn zero_length_budget_finds_nothing() {
        let sorted = SortedArrayLookup::build(["dog"]);
        let mut config = parallel();
        config.max_word_len = Some(0);
        let (words, _) = find_words_parallel(&['d', 'o', 'g'], &sorted, &config);
        assert!(words.is_empty());
    }
}
