//! A module containing [`LinkedList`] and its iterators.

mod iter;
mod linked_list;

pub use iter::*;
pub use linked_list::*;
