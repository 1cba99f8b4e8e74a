use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use tracing::info;
use typed_arena::Arena;

use crate::alphabet::normalize;
use crate::wordlist::index::WordLookup;
use crate::wordlist::tree::iterators::TreeCursor;
use crate::wordlist::tree::node::TreeNode;

/// Vocabulary stored in a binary search tree ordered by plain string
/// comparison.
///
/// The tree never rebalances. [`OrderedTreeLookup::build`] sorts the words
/// and inserts them midpoint first, which keeps the height logarithmic;
/// [`OrderedTreeLookup::build_in_order`] trusts the caller's order and will
/// happily turn sorted input into a linked list.
pub struct OrderedTreeLookup<'a> {
    root: Option<&'a mut TreeNode<'a>>,
    len: usize,
}

impl<'a> OrderedTreeLookup<'a> {
    pub fn new() -> Self {
        OrderedTreeLookup { root: None, len: 0 }
    }

    pub fn build<I, S>(arena: &'a Arena<TreeNode<'a>>, words: I) -> Self
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let start = Instant::now();
        let mut sorted: Vec<String> = words.into_iter()
            .map(|w| normalize(w.as_ref()).into_owned())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut tree = Self::new();
        tree.insert_midpoints(arena, &mut sorted);
        info!(words = tree.len, height = tree.height(),
              "Built word tree in {:.3}s", start.elapsed().as_secs_f64());
        tree
    }

    pub fn build_in_order<I, S>(arena: &'a Arena<TreeNode<'a>>, words: I) -> Self
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut tree = Self::new();
        words.into_iter().for_each(|w| { tree.insert(arena, w.as_ref()); });
        tree
    }

    /// Insert the middle of the range, then the upper half, then the lower
    /// half. Each subtree is built from a contiguous range, so the height
    /// is `ceil(log2(n + 1))`.
    fn insert_midpoints(&mut self, arena: &'a Arena<TreeNode<'a>>, words: &mut [String]) {
        if words.is_empty() {
            return;
        }
        let mid = (words.len() - 1) / 2;
        let (lower, rest) = words.split_at_mut(mid);
        if let Some((middle, upper)) = rest.split_first_mut() {
            self.insert_normalized(arena, std::mem::take(middle));
            self.insert_midpoints(arena, upper);
            self.insert_midpoints(arena, lower);
        }
    }

    /// Returns false if the word was already present.
    pub fn insert(&mut self, arena: &'a Arena<TreeNode<'a>>, word: &str) -> bool {
        self.insert_normalized(arena, normalize(word).into_owned())
    }

    fn insert_normalized(&mut self, arena: &'a Arena<TreeNode<'a>>, word: String) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match word.as_str().cmp(node.word.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(arena.alloc(TreeNode::new(word)));
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode<'a>, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            node.left().into_iter()
                .chain(node.right())
                .for_each(|child| stack.push((child, depth + 1)));
        }
        height
    }

    pub fn iter(&self) -> TreeCursor<'_, 'a> {
        TreeCursor::new(self.root())
    }

    fn root(&self) -> Option<&TreeNode<'a>> {
        self.root.as_deref()
    }
}

impl Default for OrderedTreeLookup<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl WordLookup for OrderedTreeLookup<'_> {
    fn is_word(&self, word: &str) -> bool {
        let word = normalize(word);
        let mut current = self.root();
        while let Some(node) = current {
            current = match word.as_ref().cmp(node.word()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Every word starting with `prefix` sorts at or after `prefix` and
    /// before any word that sorts after `prefix` without starting with it,
    /// so a plain comparison against each node picks the right subtree.
    fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = normalize(prefix);
        let mut current = self.root();
        while let Some(node) = current {
            if node.word().starts_with(prefix.as_ref()) {
                return true;
            }
            current = if prefix.as_ref() < node.word() {
                node.left()
            } else {
                node.right()
            };
        }
        false
    }
}

impl Debug for OrderedTreeLookup<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod tests {
    use typed_arena::Arena;
    use crate::wordlist::index::WordLookup;
    use crate::wordlist::tree::OrderedTreeLookup;

    #[test]
    fn finds_words_in_tree() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, &words);
        (&words).iter().for_each(|word| {
            assert!(tree.is_word(word));
            assert!(tree.has_prefix(word));
        });
    }

    #[test]
    fn doesnt_find_words_not_in_tree() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let bad_words = vec!["he", "h", "lol", "banana", "helpful"];
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, &words);
        (&bad_words).iter().for_each(|word| assert!(!tree.is_word(word)));
    }

    #[test]
    fn finds_prefixes() {
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, vec!["cart", "cat", "dog", "art"]);
        for prefix in ["c", "ca", "car", "cart", "d", "do", "a", "ar", ""] {
            assert!(tree.has_prefix(prefix), "{} should be a prefix", prefix);
        }
        for prefix in ["b", "cb", "carts", "cau", "e", "z", "dogs"] {
            assert!(!tree.has_prefix(prefix), "{} should not be a prefix", prefix);
        }
    }

    #[test]
    fn queries_ignore_case() {
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, vec!["Hello", "WORLD"]);
        assert!(tree.is_word("hello"));
        assert!(tree.is_word("World"));
        assert!(tree.has_prefix("WOR"));
    }

    #[test]
    fn empty_tree_answers_false() {
        let tree = OrderedTreeLookup::new();
        assert!(tree.is_empty());
        assert!(!tree.is_word("a"));
        assert!(!tree.has_prefix(""));
        assert!(!tree.has_prefix("a"));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn build_removes_duplicates() {
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, vec!["b", "a", "B", "c", "a"]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_reports_duplicates() {
        let arena = Arena::new();
        let mut tree = OrderedTreeLookup::new();
        assert!(tree.insert(&arena, "m"));
        assert!(tree.insert(&arena, "c"));
        assert!(!tree.insert(&arena, "M"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn midpoint_build_is_balanced() {
        let words: Vec<String> = (0..1000).map(|i| format!("w{:04}", i)).collect();
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build(&arena, &words);
        assert_eq!(tree.len(), 1000);
        assert_eq!(tree.height(), 10);

        let seven = Arena::new();
        let small = OrderedTreeLookup::build(&seven, vec!["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(small.height(), 3);
    }

    #[test]
    fn in_order_build_of_sorted_words_degenerates() {
        let words: Vec<String> = (0..500).map(|i| format!("w{:04}", i)).collect();
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build_in_order(&arena, &words);
        assert_eq!(tree.height(), 500);
        // still correct, only slow
        assert!(tree.is_word("w0499"));
        assert!(tree.has_prefix("w04"));
        assert!(!tree.has_prefix("w05"));
    }

    #[test]
    fn iterates_in_sorted_order() {
        let arena = Arena::new();
        let tree = OrderedTreeLookup::build_in_order(&arena, vec!["m", "c", "x", "a", "e", "z"]);
        let walked: Vec<&str> = tree.iter().collect();
        assert_eq!(walked, vec!["a", "c", "e", "m", "x", "z"]);
        assert_eq!(format!("{:?}", tree), r#"["a", "c", "e", "m", "x", "z"]"#);
    }
}
