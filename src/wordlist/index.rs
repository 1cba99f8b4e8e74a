/// Membership and prefix queries over a fixed vocabulary.
///
/// Implementations must keep `is_word(w) => has_prefix(w)`: the search
/// engine only descends into prefixes that `has_prefix` accepts, so a word
/// that is not its own prefix would never be reached.
pub trait WordLookup {
    fn is_word(&self, word: &str) -> bool;
    fn has_prefix(&self, prefix: &str) -> bool;
}

impl<L: WordLookup + ?Sized> WordLookup for &L {
    fn is_word(&self, word: &str) -> bool {
        (**self).is_word(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
}

impl<L: WordLookup + ?Sized> WordLookup for Box<L> {
    fn is_word(&self, word: &str) -> bool {
        (**self).is_word(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
}
