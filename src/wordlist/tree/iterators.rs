use crate::wordlist::tree::node::TreeNode;
use crate::wordlist::tree::tree::OrderedTreeLookup;

/// In-order walk over the tree, so words come out ascending.
#[derive(Debug)]
pub struct TreeCursor<'t, 'a> {
    stack: Vec<&'t TreeNode<'a>>,
}

impl<'t, 'a> TreeCursor<'t, 'a> {
    pub(crate) fn new(root: Option<&'t TreeNode<'a>>) -> Self {
        let mut cursor = TreeCursor { stack: vec![] };
        cursor.push_left_spine(root);
        cursor
    }

    fn push_left_spine(&mut self, mut node: Option<&'t TreeNode<'a>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'t, 'a> Iterator for TreeCursor<'t, 'a> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.word())
    }
}

impl<'t, 'a> IntoIterator for &'t OrderedTreeLookup<'a> {
    type Item = &'t str;
    type IntoIter = TreeCursor<'t, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
