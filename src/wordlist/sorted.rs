use std::cmp::Ordering;

use tracing::debug;

use crate::alphabet::normalize;
use crate::wordlist::index::WordLookup;

/// Vocabulary stored as a sorted vector and queried by binary search.
///
/// Used directly, it searches the full vocabulary. For anagram searches,
/// where only words as long as the letter bag can match,
/// [`SortedArrayLookup::restrict_to_length`] hands out a [`LengthView`]
/// over just those words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedArrayLookup {
    words: Vec<String>,
}

/// Words of exactly one length, borrowed from a [`SortedArrayLookup`].
/// Still sorted, since filtering keeps the relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthView<'w> {
    length: usize,
    words: Vec<&'w str>,
}

impl SortedArrayLookup {
    pub fn build<I, S>(words: I) -> Self
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut words: Vec<String> = words.into_iter()
            .map(|w| normalize(w.as_ref()).into_owned())
            .collect();
        words.sort_unstable();
        words.dedup();
        SortedArrayLookup { words }
    }

    /// Lengths are counted in characters, the same way letter bags are.
    pub fn restrict_to_length(&self, length: usize) -> LengthView<'_> {
        let words: Vec<&str> = self.words.iter()
            .map(String::as_str)
            .filter(|w| w.chars().count() == length)
            .collect();
        debug!(length, words = words.len(), "Restricted word list");
        LengthView { length, words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl<'w> LengthView<'w> {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[&'w str] {
        &self.words
    }
}

/// Where `word` sits relative to the block of words starting with `prefix`.
///
/// Words starting with `prefix` are contiguous in sorted order, so this is
/// a valid comparator for a binary search. A word shorter than `prefix`
/// cannot start with it: when it is a proper prefix of `prefix` ("ca" for
/// "cat") it compares Less, otherwise it compares like any other word
/// ("d" is Greater than "cat").
pub(crate) fn prefix_order(word: &str, prefix: &str) -> Ordering {
    if word.starts_with(prefix) {
        Ordering::Equal
    } else {
        word.cmp(prefix)
    }
}

fn contains_word<S: AsRef<str>>(words: &[S], word: &str) -> bool {
    let word = normalize(word);
    words.binary_search_by(|probe| probe.as_ref().cmp(word.as_ref())).is_ok()
}

fn contains_prefix<S: AsRef<str>>(words: &[S], prefix: &str) -> bool {
    let prefix = normalize(prefix);
    words.binary_search_by(|probe| prefix_order(probe.as_ref(), prefix.as_ref())).is_ok()
}

impl WordLookup for SortedArrayLookup {
    fn is_word(&self, word: &str) -> bool {
        contains_word(&self.words, word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        contains_prefix(&self.words, prefix)
    }
}

impl WordLookup for LengthView<'_> {
    fn is_word(&self, word: &str) -> bool {
        contains_word(&self.words, word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        contains_prefix(&self.words, prefix)
    }
}
