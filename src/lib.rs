//! A small library of hand-written generic collections: a growable Vector, a singly linked list,
//! a stack, a queue, a binary search tree, a binary heap, a bucket-chained hash map and a bit
//! vector.
//!
//! # Purpose
//! These types exist to be read and learned from. None of them try to beat [`std`], but all of
//! them try to be correct, documented and tested to a level where they could be used.
//!
//! # Growth
//! Every array-backed container shares one resizing discipline. A container created without an
//! explicit capacity starts with room for [`DEFAULT_CAP`](collections::DEFAULT_CAP) elements and,
//! when full, grows to `max(DEFAULT_CAP, ceil(cap * 1.5))`. Growth stops at the largest allocation
//! the platform allows, at which point the container reports a
//! [`CapacityOverflow`](collections::CapacityOverflow) instead of silently wrapping.
//!
//! The [`HashMap`](collections::hash::HashMap) grows its bucket array by the same rule once it is
//! more than three quarters full, re-inserting every entry into the new buckets.
//!
//! # Error Handling
//! Errors are strongly typed: small structs (often ZSTs) that implement
//! [`Error`](std::error::Error), gathered into [`CollectionError`](collections::CollectionError)
//! for callers that want a single type to propagate with `?`.
//!
//! Methods come in pairs. `try_*` methods return a [`Result`] and never panic. Their plain
//! counterparts either return an [`Option`] when "nothing there" is an ordinary answer (`get`,
//! `pop`, `peek`, `remove`), or panic with the error's message when the call is a usage error
//! (indexing out of bounds, growing past the maximum capacity).
//!
//! # Concurrency
//! There is no internal synchronization. All containers are [`Send`] and [`Sync`] when their
//! elements are, so they can be shared behind an external lock if needed.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
