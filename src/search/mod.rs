pub mod search;
pub mod multithreaded_search;
pub mod searchconfig;

pub use self::search::{AnagramSearch, find_all_words, find_words_with, search_with_stats, SearchStats};
pub use self::searchconfig::{SearchConfig, SearchMode};
