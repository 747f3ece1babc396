//! Binary heap implementation
//!
//! The heap stores its elements in a `Vec<T>` interpreted as a complete
//! binary tree: for a zero-based index `n`, the parent lives at `(n - 1) / 2`
//! and the children at `2n + 1` and `2n + 2`. The heap invariant is that no
//! child ever outranks its parent under the configured [`Comparator`]; it is
//! restored after every mutation by one of the two percolation passes below.
//!
//! # Example
//!
//! ```rust
//! use pqueue::{BinaryHeap, MaxFirst};
//!
//! let mut heap = BinaryHeap::with_comparator(MaxFirst);
//! heap.push(3);
//! heap.push(7);
//! heap.push(5);
//!
//! assert_eq!(heap.top(), Ok(&7));
//! assert_eq!(heap.pop(), Ok(7));
//! assert_eq!(heap.pop(), Ok(5));
//! ```

use crate::compare::{Comparator, MinFirst};
use crate::error::HeapError;

const ROOT: usize = 0;

fn parent(n: usize) -> usize {
    (n - 1) / 2
}

fn left_child(n: usize) -> usize {
    2 * n + 1
}

fn right_child(n: usize) -> usize {
    2 * n + 2
}

/// A binary heap ordered by a comparator fixed at construction
///
/// With the default [`MinFirst`] policy this is a min-heap over `Ord`
/// elements; supply [`MaxFirst`](crate::compare::MaxFirst) or a closure via
/// [`with_comparator`](BinaryHeap::with_comparator) for other orderings.
///
/// Elements move into the heap on [`push`](BinaryHeap::push) and out on
/// [`pop`](BinaryHeap::pop); [`top`](BinaryHeap::top) borrows the root, and
/// the borrow is valid only until the next mutating call. The container is
/// not safe for unsynchronized concurrent mutation.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = MinFirst> {
    items: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty min-heap using the element type's natural order
    pub fn new() -> Self {
        Self::with_comparator(MinFirst)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// The comparator is bound for the heap's whole lifetime.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] when the heap is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the highest-priority element
    ///
    /// The root slot is refilled from the last element of the backing
    /// sequence, which is then percolated downward. A heap holding a single
    /// element simply becomes empty.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] when the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Underflow);
        }

        let last = self.items.len() - 1;
        self.items.swap(ROOT, last);
        let item = self.items.pop().ok_or(HeapError::Underflow)?;

        if !self.items.is_empty() {
            self.percolate_down(ROOT);
        }

        Ok(item)
    }

    /// Inserts an element, taking ownership of it
    ///
    /// The element is appended at the end of the backing sequence and
    /// percolated upward. Growth is unbounded; only allocation failure can
    /// stop a push, and that aborts per the global allocator convention.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.percolate_up(self.items.len() - 1);
    }

    /// True when the element at `i` has strictly higher priority than the
    /// element at `j`
    fn outranks(&self, i: usize, j: usize) -> bool {
        self.cmp.outranks(&self.items[i], &self.items[j])
    }

    /// Move the element at `n` toward the root until its parent no longer
    /// ranks below it
    fn percolate_up(&mut self, mut n: usize) {
        while n != ROOT && self.outranks(n, parent(n)) {
            self.items.swap(n, parent(n));
            n = parent(n);
        }
    }

    /// Move the element at `n` away from the root until neither child
    /// outranks it
    fn percolate_down(&mut self, mut n: usize) {
        // A node with a right child always also has a left child
        while left_child(n) < self.items.len() {
            let mut child = left_child(n);
            let right = right_child(n);
            if right < self.items.len() && self.outranks(right, child) {
                child = right;
            }

            if self.outranks(child, n) {
                self.items.swap(child, n);
                n = child;
            } else {
                break;
            }
        }
    }
}
