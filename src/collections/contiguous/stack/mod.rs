//! A module containing [`Stack`], a last-in-first-out collection built on [`Vector`](super::Vector).

mod stack;

pub use stack::*;
