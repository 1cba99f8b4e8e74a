pub mod index;
pub mod sorted;
pub mod tree;
pub mod wordlist;
