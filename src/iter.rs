//! Iterators over one dimension of a [`DynArray`] or view.
//!
//! An [`Iter`] over a rank-`R` sub-array yields rank-`R - 1` [`View`]s, or
//! elements if `R` is `1`. Each step advances by `remain[0]` elements. Since
//! the yielded views are themselves iterable, nested `for` loops walk the
//! whole array:
//!
//! ```
//! use dynarray::DynArray;
//! let a = DynArray::from_fn([2, 3, 4], |[i, j, k]| i * 12 + j * 4 + k);
//! let mut expected = 0;
//! for plane in &a {
//!     for row in plane {
//!         for &item in row {
//!             assert_eq!(item, expected);
//!             expected += 1;
//!         }
//!     }
//! }
//! assert_eq!(expected, 24);
//! ```
//!
//! The [`Iterator`] implementations are defined separately for each rank.
//!
//! [`DynArray`]: super::DynArray
//! [`View`]: super::View

use std::cmp::{Ordering};

use super::{stride, View, ViewMut};

/// Iterates over dimension 0 of a rank-`R` sub-array.
///
/// The iterator remembers the whole dimension, and the window
/// `front..back` of steps not yet yielded. The front can be moved back
/// with [`retreat()`], and iterators over the same dimension can be
/// compared and subtracted.
///
/// [`retreat()`]: Self::retreat()
#[derive(Debug)]
pub struct Iter<'a, T, const R: usize> {
    /// Every element of the dimension, yielded or not.
    items: &'a [T],
    extents: &'a [usize],
    remain: &'a [usize],
    /// The number of steps taken from the front.
    front: usize,
    /// The index of the step after the last one not yet yielded.
    back: usize,
}

impl<'a, T, const R: usize> Clone for Iter<'a, T, R> {
    fn clone(&self) -> Self { Self {..*self} }
}

impl<'a, T, const R: usize> Iter<'a, T, R> {
    pub(crate) fn new(items: &'a [T], extents: &'a [usize], remain: &'a [usize]) -> Self {
        Self {items, extents, remain, front: 0, back: extents[0]}
    }

    /// The number of elements per step.
    fn step(&self) -> usize { self.remain[0] }

    pub(crate) fn steps_left(&self) -> usize { self.back - self.front }

    fn chunk(&self, index: usize) -> &'a [T] {
        let items = self.items;
        let start = index * self.step();
        &items[start..start + self.step()]
    }

    /// Returns the address of the next item, or one past the end.
    fn position(&self) -> *const T {
        let items = self.items;
        items[self.front * self.step()..].as_ptr()
    }

    pub(crate) fn nth_chunk(&mut self, n: usize) -> Option<&'a [T]> {
        if n >= self.steps_left() {
            self.front = self.back;
            return None;
        }
        self.front += n + 1;
        Some(self.chunk(self.front - 1))
    }

    pub(crate) fn nth_back_chunk(&mut self, n: usize) -> Option<&'a [T]> {
        if n >= self.steps_left() {
            self.back = self.front;
            return None;
        }
        self.back -= n + 1;
        Some(self.chunk(self.back))
    }

    /// Wraps one step's worth of elements in a view of rank `S`.
    /// `S` must be `R - 1`.
    pub(crate) fn sub<const S: usize>(&self, chunk: &'a [T]) -> View<'a, T, S> {
        debug_assert_eq!(S + 1, R);
        View::new(chunk, &self.extents[1..], &self.remain[1..])
    }

    /// Moves the front back by `n` steps, so that the next `n` items are
    /// ones already yielded.
    ///
    /// # Panics
    ///
    /// Panics if that would move the front before the start of the dimension.
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a = DynArray::from_fn([4, 2], |[i, j]| 10 * i + j);
    /// let mut it = a.iter();
    /// it.nth(2);
    /// it.retreat(2);
    /// assert_eq!(it.next().map(|row| row[0]), Some(10));
    /// assert_eq!(it.len(), 2);
    /// ```
    #[track_caller]
    pub fn retreat(&mut self, n: usize) {
        assert!(n <= self.front, "cannot retreat {} steps from step {}", n, self.front);
        self.front -= n;
    }

    /// Returns the number of steps from `origin` to `self`.
    ///
    /// Both iterators must walk the same dimension of the same sub-array.
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a: DynArray<u8, 2> = DynArray::new([5, 3]);
    /// let origin = a.iter();
    /// let mut it = origin.clone();
    /// it.nth(2);
    /// assert_eq!(it.offset_from(&origin), 3);
    /// assert_eq!(origin.offset_from(&it), -3);
    /// assert!(origin < it);
    /// ```
    pub fn offset_from(&self, origin: &Self) -> isize {
        assert_eq!(self.step(), origin.step(), "iterators walk different dimensions");
        self.front as isize - origin.front as isize
    }
}

impl<'a, T> Iter<'a, T, 1> {
    /// Returns the elements not yet yielded.
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a = DynArray::from_vec([4], vec![1, 2, 3, 4]);
    /// let mut it = a.iter();
    /// it.next();
    /// assert_eq!(it.as_slice()[1], 3);
    /// ```
    pub fn as_slice(&self) -> &'a [T] {
        let items = self.items;
        &items[self.front..self.back]
    }
}

impl<'a, T, const R: usize> PartialEq for Iter<'a, T, R> {
    /// Two iterators are equal if their next items start at the same place.
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position() && self.front == other.front
    }
}

impl<'a, T, const R: usize> PartialOrd for Iter<'a, T, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Zero-sized items all share one address, so fall back on the step count.
        Some(self.position().cmp(&other.position()).then(self.front.cmp(&other.front)))
    }
}

// ----------------------------------------------------------------------------

/// Iterates over dimension 0 of a mutable rank-`R` sub-array.
#[derive(Debug)]
pub struct IterMut<'a, T, const R: usize> {
    items: &'a mut [T],
    extents: &'a [usize],
    remain: &'a [usize],
}

impl<'a, T, const R: usize> IterMut<'a, T, R> {
    pub(crate) fn new(items: &'a mut [T], extents: &'a [usize], remain: &'a [usize]) -> Self {
        Self {items, extents, remain}
    }

    fn step(&self) -> usize { self.remain[0] }

    pub(crate) fn steps_left(&self) -> usize {
        if self.items.is_empty() { 0 } else { self.items.len() / self.step() }
    }

    pub(crate) fn nth_chunk(&mut self, n: usize) -> Option<&'a mut [T]> {
        let step = self.step();
        let left = self.steps_left();
        let items = std::mem::take(&mut self.items);
        if n >= left { return None; }
        let (head, tail) = items[n * step..].split_at_mut(step);
        self.items = tail;
        Some(head)
    }

    pub(crate) fn nth_back_chunk(&mut self, n: usize) -> Option<&'a mut [T]> {
        let step = self.step();
        let left = self.steps_left();
        let items = std::mem::take(&mut self.items);
        if n >= left { return None; }
        let end = items.len() - n * step;
        let (rest, tail) = items[..end].split_at_mut(end - step);
        self.items = rest;
        Some(tail)
    }

    /// See [`Iter::sub()`].
    pub(crate) fn sub<const S: usize>(&self, chunk: &'a mut [T]) -> ViewMut<'a, T, S> {
        debug_assert_eq!(S + 1, R);
        ViewMut::new(chunk, &self.extents[1..], &self.remain[1..])
    }
}

impl<'a, T> IterMut<'a, T, 1> {
    /// Returns the elements not yet yielded.
    pub fn into_slice(self) -> &'a mut [T] { self.items }
}

// ----------------------------------------------------------------------------

/// Iterates over every element of a [`DynArray`] together with its index.
/// The return type of [`DynArray::indexed()`].
///
/// [`DynArray`]: super::DynArray
/// [`DynArray::indexed()`]: super::DynArray::indexed()
#[derive(Debug)]
pub struct Indexed<'a, T, const RANK: usize> {
    index: [usize; RANK],
    extents: &'a [usize; RANK],
    items: std::slice::Iter<'a, T>,
}

impl<'a, T, const RANK: usize> Clone for Indexed<'a, T, RANK> {
    fn clone(&self) -> Self {
        Self {index: self.index, extents: self.extents, items: self.items.clone()}
    }
}

impl<'a, T, const RANK: usize> Indexed<'a, T, RANK> {
    pub(crate) fn new(extents: &'a [usize; RANK], items: &'a [T]) -> Self {
        Self {index: [0; RANK], extents, items: items.iter()}
    }
}

impl<'a, T, const RANK: usize> Iterator for Indexed<'a, T, RANK> {
    type Item = ([usize; RANK], &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        let index = self.index;
        stride::increment(&mut self.index, self.extents);
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.items.size_hint() }
}

impl<'a, T, const RANK: usize> ExactSizeIterator for Indexed<'a, T, RANK> {}

impl<'a, T, const RANK: usize> std::iter::FusedIterator for Indexed<'a, T, RANK> {}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DynArray};

    #[test]
    fn rows() {
        let a = DynArray::from_fn([3, 2], |[i, j]| 10 * i + j);
        let rows: Vec<Vec<usize>> = a.iter().map(|row| row.iter().copied().collect()).collect();
        assert_eq!(rows, [[0, 1], [10, 11], [20, 21]]);
        assert_eq!(a.iter().len(), 3);
        assert_eq!(a.at(1).iter().len(), 2);
    }

    #[test]
    fn backwards() {
        let a = DynArray::from_fn([4, 2], |[i, j]| 10 * i + j);
        let firsts: Vec<usize> = a.iter().rev().map(|row| *row.front()).collect();
        assert_eq!(firsts, [30, 20, 10, 0]);
        let mut it = a.iter();
        assert_eq!(it.next_back().map(|row| row[1]), Some(31));
        assert_eq!(it.next().map(|row| row[1]), Some(1));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back().map(|row| row[1]), Some(21));
        assert_eq!(it.next_back().map(|row| row[1]), Some(11));
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
    }

    #[test]
    fn random_access() {
        let a = DynArray::from_fn([6, 2], |[i, j]| 10 * i + j);
        let mut it = a.iter();
        assert_eq!(it.nth(2).map(|row| row[0]), Some(20));
        assert_eq!(it.nth_back(1).map(|row| row[0]), Some(40));
        assert_eq!(it.len(), 1);
        assert_eq!(it.nth(5).map(|row| row[0]), None);
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn ordering() {
        let a: DynArray<u8, 3> = DynArray::new([4, 2, 2]);
        let begin = a.iter();
        let mut it = begin.clone();
        assert!(it == begin);
        it.next();
        assert!(it > begin);
        assert!(begin <= it);
        assert_eq!(it.offset_from(&begin), 1);
        let mut end = begin.clone();
        end.nth(10);
        assert_eq!(end.offset_from(&begin), 4);
        assert!(begin < end);
        assert!(end > it);
    }

    #[test]
    fn exhausted_is_past_the_rest() {
        let a: DynArray<u8, 2> = DynArray::new([4, 3]);
        let begin = a.iter();
        let mut end = begin.clone();
        for _ in end.by_ref() {}
        assert_eq!(end.offset_from(&begin), 4);
        assert!(begin < end);
        assert!(end > begin);

        let mut it = begin.clone();
        it.nth(1);
        let mid = it.clone();
        it.nth(10);
        assert!(mid < it);
        assert!(it == end);
        assert_eq!(it.offset_from(&mid), 2);
    }

    #[test]
    fn back_end_does_not_move_front() {
        let a: DynArray<u8, 2> = DynArray::new([4, 3]);
        let begin = a.iter();
        let mut it = begin.clone();
        it.nth_back(1);
        assert!(it == begin);
        assert_eq!(it.offset_from(&begin), 0);
        assert_eq!(it.len(), 2);
        it.next();
        it.next_back();
        assert!(it.next().is_none());
        assert!(it > begin);
        assert_eq!(it.offset_from(&begin), 1);
    }

    #[test]
    fn zero_sized_items() {
        let a: DynArray<(), 2> = DynArray::new([3, 2]);
        let begin = a.iter();
        let mut it = begin.clone();
        it.next();
        assert!(begin < it);
        assert!(begin != it);
    }

    #[test]
    fn retreat_revisits() {
        let a = DynArray::from_fn([5, 2], |[i, j]| 10 * i + j);
        let begin = a.iter();
        let mut it = begin.clone();
        assert_eq!(it.nth(3).map(|row| row[1]), Some(31));
        it.retreat(1);
        assert_eq!(it.next().map(|row| row[1]), Some(31));
        it.retreat(4);
        assert!(it == begin);
        assert_eq!(it.len(), 5);
        assert_eq!(it.next().map(|row| row[0]), Some(0));

        let mut end = begin.clone();
        for _ in end.by_ref() {}
        end.retreat(2);
        let tail: Vec<usize> = end.map(|row| row[0]).collect();
        assert_eq!(tail, [30, 40]);
    }

    #[test]
    fn retreat_rank_one() {
        let a = DynArray::from_vec([4], vec![1, 2, 3, 4]);
        let mut it = a.iter();
        it.nth(2);
        assert_eq!(it.as_slice(), [4]);
        it.retreat(2);
        assert_eq!(it.as_slice(), [2, 3, 4]);
        assert_eq!(it.next(), Some(&2));
    }

    #[test]
    #[should_panic(expected = "cannot retreat")]
    fn retreat_before_start() {
        let a: DynArray<u8, 2> = DynArray::new([4, 3]);
        let mut it = a.iter();
        it.next();
        it.retreat(2);
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn offset_between_dimensions() {
        let a: DynArray<u8, 2> = DynArray::new([4, 2]);
        let columns = a.at(0).iter();
        let strided: Iter<'_, u8, 1> = Iter::new(a.as_slice(), &a.extents()[..1], &a.remain()[..1]);
        let _ = columns.offset_from(&strided);
    }

    #[test]
    fn rank_one_elements() {
        let mut a = DynArray::from_vec([4], vec![1, 2, 3, 4]);
        assert_eq!(a.iter().copied().sum::<i32>(), 10);
        for x in &mut a { *x *= 2; }
        assert_eq!(a.as_slice(), [2, 4, 6, 8]);
        let mut it = a.iter();
        it.next_back();
        assert_eq!(it.as_slice(), [2, 4, 6]);
    }

    #[test]
    fn nested_mut() {
        let mut a: DynArray<usize, 3> = DynArray::new([2, 3, 4]);
        for (i, plane) in a.iter_mut().enumerate() {
            for (j, row) in plane.into_iter().enumerate() {
                for (k, x) in row.into_iter().enumerate() {
                    *x = i * 100 + j * 10 + k;
                }
            }
        }
        assert_eq!(a[[1, 2, 3]], 123);
        let expected: Vec<usize> = a.indexed().map(|([i, j, k], _)| i * 100 + j * 10 + k).collect();
        assert_eq!(a.as_slice(), expected.as_slice());
    }

    #[test]
    fn mut_backwards() {
        let mut a = DynArray::from_fn([3, 2], |[i, j]| 10 * i + j);
        let mut it = a.iter_mut();
        let mut last = it.next_back().unwrap();
        last[0] = 99;
        let mut first = it.nth(0).unwrap();
        first[1] = 77;
        assert_eq!(it.len(), 1);
        assert_eq!(a.as_slice(), [0, 77, 10, 11, 99, 21]);
    }

    #[test]
    fn indexed_is_row_major() {
        let a = DynArray::from_fn([2, 3], |[i, j]| (i, j));
        for (index, &(i, j)) in a.indexed() {
            assert_eq!(index, [i, j]);
        }
        assert_eq!(a.indexed().len(), 6);
    }
}
