//! Comparator-parameterized binary heap priority queue
//!
//! This crate provides a single container, [`BinaryHeap`], backed by a flat
//! `Vec` interpreted as a complete binary tree. The ordering rule is a policy
//! injected at construction: by default the heap is a min-heap over `Ord`
//! elements, but any [`Comparator`] (including a plain closure) can be
//! supplied to change what "highest priority" means.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `top`     | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use pqueue::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(42);
//! heap.push(23);
//! heap.push(2);
//!
//! assert_eq!(heap.top(), Ok(&2));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(23));
//! assert_eq!(heap.pop(), Ok(42));
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//! ```
//!
//! Querying or removing from an empty heap reports [`HeapError::Underflow`]
//! rather than panicking, so callers can branch on emptiness without checking
//! `len()` first.

pub mod binary;
pub mod compare;
pub mod error;

// Re-export the public surface for convenience
pub use binary::BinaryHeap;
pub use compare::{Comparator, MaxFirst, MinFirst};
pub use error::HeapError;
