use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index didn't fall within `0..len` (or `0..=len` for insertions) of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A collection was asked to grow past the largest capacity the platform can allocate for it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A map was asked for a key that it doesn't contain.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("There is no value associated with the provided key!")]
pub struct KeyNotFound;

/// An element was requested from an empty stack, queue, heap or tree.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to access an element of an empty collection!")]
pub struct EmptyCollection;

/// A parameter was outside of the domain accepted by the method.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid argument: {reason}")]
pub struct InvalidArgument {
    pub reason: &'static str,
}

/// Inserting at an index can fail because of the index or because the collection can't grow.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}

/// Every error produced by this crate, for callers that want to propagate them with `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    KeyNotFound(KeyNotFound),
    EmptyCollection(EmptyCollection),
    InvalidArgument(InvalidArgument),
}

impl From<IndexOrCapOverflow> for CollectionError {
    fn from(value: IndexOrCapOverflow) -> Self {
        match value {
            IndexOrCapOverflow::IndexOutOfBounds(err) => err.into(),
            IndexOrCapOverflow::CapacityOverflow(err) => err.into(),
        }
    }
}
