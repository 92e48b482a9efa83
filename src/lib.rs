//! A pure-Rust library providing dense multi-dimensional arrays whose rank is
//! fixed at compile time and whose extents are fixed at construction.
//!
//! [`DynArray<T, RANK>`] represents an array of `T` with `RANK` dimensions.
//! The `T` values are stored in a single [`Box<[T]>`], in row-major order.
//! Alongside the buffer, the array keeps the extent of each dimension and a
//! precomputed table of strides (see [`stride`]), so that locating an element
//! costs one multiply-add per dimension.
//!
//! Indexing an array along its first dimension yields a [`View`] of the
//! selected sub-array, with rank one less. Views can be indexed in turn,
//! giving the feel of nested arrays, but only one allocation ever exists:
//!
//! ```
//! use dynarray::DynArray;
//! let mut a: DynArray<u32, 3> = DynArray::new([4, 5, 6]);
//! for i in 0..4 {
//!     for j in 0..5 {
//!         for k in 0..6 {
//!             a[[i, j, k]] = (i * 30 + j * 6 + k + 1) as u32;
//!         }
//!     }
//! }
//! assert_eq!(a.at(0).at(1)[2], 9);
//! assert_eq!(a.at(1).at(3)[5], 54);
//! ```
//!
//! Views and iterators borrow the array, so the borrow checker guarantees
//! that none of them outlives it, or observes it while it is being mutated.
//! Mutable access goes through [`ViewMut`] and [`IterMut`].
//!
//! Iterating over an array (or a view) walks its first dimension, yielding
//! sub-views; nested `for` loops therefore visit every element. For scans
//! that don't care about the dimensions, [`DynArray::flat()`] iterates over
//! the buffer directly.
//!
//! Construction errors (a zero extent, an overflowing size, a failed
//! allocation) are reported as [`DynArrayError`] by the `try_*`
//! constructors, and cause a panic in the others. Out-of-bounds indices
//! always panic, except through the `unsafe` `*_unchecked` methods.

mod error;
pub use error::{DynArrayError, Result};

pub mod stride;

mod array;
pub use array::{DynArray};

mod view;
pub use view::{View, ViewMut};

mod iter;
pub use iter::{Iter, IterMut, Indexed};

mod rank;
