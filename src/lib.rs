//! Find every dictionary word that can be spelled from a bag of letters.
//!
//! The search ([`search::find_all_words`]) is a backtracking walk over
//! letter choices, cut short whenever the dictionary reports that no word
//! starts with the letters chosen so far. The dictionary is anything
//! implementing [`wordlist::index::WordLookup`]: a binary search tree
//! ([`wordlist::tree::OrderedTreeLookup`]) or a sorted array
//! ([`wordlist::sorted::SortedArrayLookup`]).

pub mod alphabet;
pub mod error;
pub mod letterbag;
pub mod search;
pub mod wordlist;

pub use crate::letterbag::{BagLimits, LetterBag};
pub use crate::search::{find_all_words, find_words_with, SearchConfig, SearchMode};
pub use crate::wordlist::index::WordLookup;
