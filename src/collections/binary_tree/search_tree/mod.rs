//! A module containing [`BinarySearchTree`] and its iterators.
//!
//! Both iterators visit values in order, smallest first.

mod iter;
mod node;
mod search_tree;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use search_tree::*;
