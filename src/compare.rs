//! Comparator policies
//!
//! The heap's ordering rule is a value bound at construction, not a trait
//! bound on the element type. [`Comparator::outranks`] must be a strict weak
//! ordering: irreflexive, asymmetric, transitive. Returning `true` means the
//! first argument belongs closer to the root.
//!
//! Two zero-sized policies are provided for `Ord` elements, [`MinFirst`] and
//! [`MaxFirst`], and any `Fn(&T, &T) -> bool` closure works as a comparator:
//!
//! ```rust
//! use pqueue::BinaryHeap;
//!
//! // Order boxed integers by pointee value, not by handle
//! let mut heap = BinaryHeap::with_comparator(|a: &Box<i32>, b: &Box<i32>| **a < **b);
//! heap.push(Box::new(7));
//! heap.push(Box::new(3));
//! assert_eq!(heap.top().map(|b| **b), Ok(3));
//! ```

/// Ordering policy for heap elements
///
/// `outranks(a, b)` returns `true` when `a` has strictly higher priority
/// than `b`, i.e. `a` should sit closer to the root.
pub trait Comparator<T> {
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Natural ascending order: the smallest element has the highest priority
///
/// This is the default policy, giving a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MinFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reversed order: the largest element has the highest priority (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
