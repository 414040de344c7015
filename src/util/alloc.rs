use std::cell::Cell;
use std::rc::Rc;

/// A unit type for checking that zero-sized alternatives behave.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// A handle that increments a shared counter every time one of its clones is dropped.
///
/// Tests hold onto one clone and hand others to the type under test, then read the counter back to
/// confirm exactly the expected number of destructors ran.
#[derive(Debug)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }

    /// Returns the current drop count and resets it to 0.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Clone for CountedDrop {
    fn clone(&self) -> Self {
        CountedDrop(Rc::clone(&self.0))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
