use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::letterbag::BagLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Any word spelled by some of the letters.
    AllWords,
    /// Only words that use every letter in the bag.
    Anagrams,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::AllWords
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub max_results: Option<usize>,
    /// Never extend a prefix past this many letters.
    pub max_word_len: Option<usize>,
    pub min_word_len: usize,
    pub parallel: bool,
    pub bag_limits: BagLimits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            mode: SearchMode::default(),
            max_results: None,
            max_word_len: None,
            min_word_len: 1,
            parallel: false,
            bag_limits: BagLimits::default(),
        }
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub fn anagrams() -> SearchConfig {
        let mut s = SearchConfig::new();
        s.mode = SearchMode::Anagrams;
        s
    }

    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<SearchConfig, ConfigError> {
        serde_json::from_str::<SearchConfig>(json)?.validated()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SearchConfig, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| ConfigError::Open { path: path.to_path_buf(), source })?;
        serde_json::from_reader::<_, SearchConfig>(BufReader::new(file))?.validated()
    }

    fn validated(self) -> Result<SearchConfig, ConfigError> {
        let BagLimits { min, max } = self.bag_limits;
        if min > max {
            return Err(ConfigError::EmptyLimits { min, max });
        }
        Ok(self)
    }

    /// `len` letters in the prefix, `remaining` still unused in the bag.
    pub(crate) fn accepts(&self, len: usize, remaining: usize) -> bool {
        len >= self.min_word_len && match self.mode {
            SearchMode::AllWords => true,
            SearchMode::Anagrams => remaining == 0,
        }
    }

    pub(crate) fn can_extend(&self, len: usize) -> bool {
        self.max_word_len.map_or(true, |max| len < max)
    }
}


#[cfg(test)]
mod tests {
    use crate::error::ConfigError;
    use crate::letterbag::BagLimits;
    use crate::search::searchconfig::{SearchConfig, SearchMode};

    #[test]
    fn defaults_report_everything() {
        let config = SearchConfig::new();
        assert_eq!(config.mode, SearchMode::AllWords);
        assert_eq!(config.min_word_len, 1);
        assert!(config.accepts(1, 5));
        assert!(config.can_extend(1000));
        assert_eq!(config.bag_limits, BagLimits::new(3, 1000));
    }

    #[test]
    fn anagram_mode_needs_an_empty_bag() {
        let config = SearchConfig::anagrams();
        assert!(!config.accepts(3, 1));
        assert!(config.accepts(4, 0));
    }

    #[test]
    fn word_length_bounds() {
        let mut config = SearchConfig::new();
        config.min_word_len = 3;
        config.max_word_len = Some(4);
        assert!(!config.accepts(2, 0));
        assert!(config.accepts(3, 0));
        assert!(config.can_extend(3));
        assert!(!config.can_extend(4));
    }

    #[test]
    fn parses_partial_json() {
        let config = SearchConfig::from_json(r#"{"mode": "anagrams", "max_results": 5,
                                                 "bag_limits": {"min": 3, "max": 10}}"#).unwrap();
        assert_eq!(config.mode, SearchMode::Anagrams);
        assert_eq!(config.max_results, Some(5));
        assert_eq!(config.bag_limits, BagLimits::LEGACY);
        assert_eq!(config.min_word_len, 1);
        assert!(!config.parallel);
    }

    #[test]
    fn rejects_inverted_bag_limits() {
        let err = SearchConfig::from_json(r#"{"bag_limits": {"min": 10, "max": 3}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLimits { min: 10, max: 3 }));
        assert!(SearchConfig::from_json(r#"{"bag_limits": {"min": 5, "max": 5}}"#).is_ok());
    }

    #[test]
    fn rejects_bad_json() {
        assert!(SearchConfig::from_json(r#"{"mode": "sideways"}"#).is_err());
        assert!(SearchConfig::from_file("/definitely/not/here.json").is_err());
    }
}
