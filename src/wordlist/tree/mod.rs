pub mod tree;
pub mod node;
pub mod iterators;

pub use self::node::TreeNode;
pub use self::tree::OrderedTreeLookup;
