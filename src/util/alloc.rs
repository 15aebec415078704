use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped, for checking that collections drop each
/// of their elements exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;
