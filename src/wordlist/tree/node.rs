use std::fmt::{Debug, Formatter};
use derive_new::new;

/// A node of the word tree. Nodes live in a `typed_arena::Arena` owned by
/// whoever builds the tree; children are exclusive references into it.
#[derive(new)]
pub struct TreeNode<'a> {
    pub(crate) word: String,
    #[new(default)]
    pub(crate) left: Option<&'a mut TreeNode<'a>>,
    #[new(default)]
    pub(crate) right: Option<&'a mut TreeNode<'a>>,
}

impl<'a> TreeNode<'a> {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub(crate) fn left(&self) -> Option<&TreeNode<'a>> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&TreeNode<'a>> {
        self.right.as_deref()
    }
}

impl Debug for TreeNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeNode")
            .field("word", &self.word)
            .field("left", &self.left().map(TreeNode::word))
            .field("right", &self.right().map(TreeNode::word))
            .finish()
    }
}
