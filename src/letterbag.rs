use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::alphabet::is_letter;
use crate::error::InvalidInput;
use crate::search::{find_all_words, find_words_with, SearchConfig};
use crate::wordlist::index::WordLookup;

/// Inclusive bounds on the number of letters in a bag.
#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagLimits {
    pub min: usize,
    pub max: usize,
}

impl BagLimits {
    pub const STANDARD: BagLimits = BagLimits { min: 3, max: 1000 };
    /// The first version of the game only took up to ten letters.
    pub const LEGACY: BagLimits = BagLimits { min: 3, max: 10 };

    pub fn allows(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl Default for BagLimits {
    fn default() -> Self {
        BagLimits::STANDARD
    }
}

/// The letters a player may build words from. Duplicates count: "aab"
/// can spell "aa" but not "aaa".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterBag {
    letters: Vec<char>,
}

impl LetterBag {
    pub fn new(letters: &str) -> Result<LetterBag, InvalidInput> {
        Self::with_limits(letters, BagLimits::default())
    }

    /// Letters are lower-cased first and then validated, so a capital that
    /// lowers into several chars is counted and checked as those chars.
    /// Length is checked before content.
    pub fn with_limits(letters: &str, limits: BagLimits) -> Result<LetterBag, InvalidInput> {
        let letters: Vec<char> = letters.chars().flat_map(char::to_lowercase).collect();
        let len = letters.len();
        if !limits.allows(len) {
            return Err(InvalidInput::Length { len, min: limits.min, max: limits.max });
        }
        if let Some(&c) = letters.iter().find(|&&c| !is_letter(c)) {
            return Err(InvalidInput::Character(c));
        }
        Ok(LetterBag { letters })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        self.letters.iter().for_each(|&c| *counts.entry(c).or_insert(0) += 1);
        counts
    }

    /// Whether `word` uses no letter more often than the bag holds it.
    pub fn can_spell(&self, word: &str) -> bool {
        let mut counts = self.counts();
        word.chars().flat_map(char::to_lowercase).all(|c| match counts.get_mut(&c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
    }

    pub fn find_all_words<L: WordLookup + ?Sized>(&self, lookup: &L) -> Vec<String> {
        find_all_words(self, lookup)
    }

    pub fn find_words_with<L: WordLookup + Sync + ?Sized>(&self, lookup: &L, config: &SearchConfig) -> Vec<String> {
        find_words_with(self, lookup, config)
    }
}

impl FromStr for LetterBag {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterBag::new(s)
    }
}

impl Display for LetterBag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
