//! Binary tree collection types. Currently just [`BinarySearchTree`], an unbalanced tree of owned
//! nodes ordered by [`Ord`].

pub mod search_tree;

#[doc(inline)]
pub use search_tree::BinarySearchTree;
