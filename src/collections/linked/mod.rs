//! Linked collection types. Currently just [`LinkedList`], a singly linked list whose nodes live in
//! an arena rather than in individual allocations.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
