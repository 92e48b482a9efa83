//! Borrowed sub-arrays of a [`DynArray`].
//!
//! Indexing a rank-`R` view along its first dimension yields a rank-`R - 1`
//! view of the selected sub-array, and so on down to rank `1`, where
//! indexing yields an element. Because the storage is row-major, every view
//! covers a contiguous run of the parent's buffer, so a view is just a
//! sub-slice of the buffer together with the tails of the parent's `extents`
//! and `remain` tables. Nothing is copied.
//!
//! ```
//! use dynarray::DynArray;
//! let a: DynArray<u8, 3> = DynArray::new([2, 4, 6]);
//! assert_eq!(a.at(1).total_size(), 24);
//! assert_eq!(a.at(1).at(2).total_size(), 6);
//! ```
//!
//! The methods that change the rank are defined separately for each rank.
//!
//! [`DynArray`]: super::DynArray

use super::{stride, DynArray, Iter, IterMut};

/// A shared view of a rank-`R` sub-array.
///
/// `View` is `Copy`; copying it does not copy any elements.
#[derive(Debug)]
pub struct View<'a, T, const R: usize> {
    items: &'a [T],
    extents: &'a [usize],
    remain: &'a [usize],
}

impl<'a, T, const R: usize> Clone for View<'a, T, R> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T, const R: usize> Copy for View<'a, T, R> {}

impl<'a, T, const R: usize> View<'a, T, R> {
    pub(crate) fn new(items: &'a [T], extents: &'a [usize], remain: &'a [usize]) -> Self {
        debug_assert_eq!(extents.len(), R);
        debug_assert_eq!(remain.len(), R);
        Self {items, extents, remain}
    }

    /// Returns the rank-`S` view at position `index` of dimension 0.
    /// `S` must be `R - 1`.
    #[inline(always)]
    #[track_caller]
    pub(crate) fn descend<const S: usize>(self, index: usize) -> View<'a, T, S> {
        debug_assert_eq!(S + 1, R);
        let step = self.remain[0];
        let start = stride::check(index, self.extents) * step;
        View::new(&self.items[start..start + step], &self.extents[1..], &self.remain[1..])
    }

    /// Returns the number of dimensions.
    pub const fn rank(&self) -> usize { R }

    /// Returns the extent of dimension `dim` of this view, where `0` is the
    /// first dimension of the view, not of the array.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= R`.
    #[track_caller]
    pub fn size(&self, dim: usize) -> usize { self.extents[dim] }

    /// Returns the extents of this view.
    pub fn extents(&self) -> &'a [usize] { self.extents }

    /// Returns the `remain` table of this view.
    pub fn remain(&self) -> &'a [usize] { self.remain }

    /// Returns the number of elements in this view.
    pub fn total_size(&self) -> usize { self.items.len() }

    /// Returns the elements of this view in row-major order.
    pub fn as_slice(&self) -> &'a [T] { self.items }

    /// Iterates over every element of this view in row-major order.
    pub fn flat(&self) -> std::slice::Iter<'a, T> { self.items.iter() }

    /// Iterates over dimension 0 of this view.
    pub fn iter(self) -> Iter<'a, T, R> { Iter::new(self.items, self.extents, self.remain) }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: [usize; R]) -> Option<&'a T> {
        stride::ravel(&index, self.extents, self.remain).map(|offset| &self.items[offset])
    }

    /// Copies this view into a new [`DynArray`].
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a = DynArray::from_fn([3, 2], |[i, j]| 2 * i + j);
    /// let row = a.at(2).to_array();
    /// assert_eq!(row.as_slice(), [4, 5]);
    /// ```
    pub fn to_array(&self) -> DynArray<T, R> where T: Clone {
        let mut extents = [0; R];
        extents.copy_from_slice(self.extents);
        let mut remain = [0; R];
        remain.copy_from_slice(self.remain);
        DynArray::from_raw_parts(extents, remain, self.items.to_vec())
    }
}

impl<'a, T, const R: usize> std::ops::Index<[usize; R]> for View<'a, T, R> {
    type Output = T;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: [usize; R]) -> &T {
        self.get(index).unwrap_or_else(|| stride::out_of_bounds(&index, self.extents))
    }
}

impl<'a, T, const R: usize> IntoIterator for View<'a, T, R> where
    Iter<'a, T, R>: Iterator,
{
    type Item = <Iter<'a, T, R> as Iterator>::Item;
    type IntoIter = Iter<'a, T, R>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// ----------------------------------------------------------------------------

/// An exclusive view of a rank-`R` sub-array.
///
/// Methods that take `&mut self` re-borrow the view, so that it can be used
/// again afterwards. Methods named `into_*` consume it, and return borrows
/// that last as long as the original array borrow.
#[derive(Debug)]
pub struct ViewMut<'a, T, const R: usize> {
    items: &'a mut [T],
    extents: &'a [usize],
    remain: &'a [usize],
}

impl<'a, T, const R: usize> ViewMut<'a, T, R> {
    pub(crate) fn new(items: &'a mut [T], extents: &'a [usize], remain: &'a [usize]) -> Self {
        debug_assert_eq!(extents.len(), R);
        debug_assert_eq!(remain.len(), R);
        Self {items, extents, remain}
    }

    /// Returns the rank-`S` view at position `index` of dimension 0.
    /// `S` must be `R - 1`.
    #[inline(always)]
    #[track_caller]
    pub(crate) fn descend_mut<const S: usize>(self, index: usize) -> ViewMut<'a, T, S> {
        debug_assert_eq!(S + 1, R);
        let Self {items, extents, remain} = self;
        let step = remain[0];
        let start = stride::check(index, extents) * step;
        ViewMut::new(&mut items[start..start + step], &extents[1..], &remain[1..])
    }

    /// Returns a shared view of the same sub-array.
    pub fn view(&self) -> View<'_, T, R> { View::new(&*self.items, self.extents, self.remain) }

    /// Re-borrows this view.
    pub fn view_mut(&mut self) -> ViewMut<'_, T, R> {
        ViewMut::new(&mut *self.items, self.extents, self.remain)
    }

    /// Converts this view into a shared view with the same lifetime.
    pub fn into_view(self) -> View<'a, T, R> { View::new(self.items, self.extents, self.remain) }

    /// Returns the number of dimensions.
    pub const fn rank(&self) -> usize { R }

    /// See [`View::size()`].
    #[track_caller]
    pub fn size(&self, dim: usize) -> usize { self.extents[dim] }

    /// Returns the extents of this view.
    pub fn extents(&self) -> &'a [usize] { self.extents }

    /// Returns the `remain` table of this view.
    pub fn remain(&self) -> &'a [usize] { self.remain }

    /// Returns the number of elements in this view.
    pub fn total_size(&self) -> usize { self.items.len() }

    /// See [`View::as_slice()`].
    pub fn as_slice(&self) -> &[T] { &*self.items }

    /// Returns the elements of this view in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut *self.items }

    /// Like [`Self::as_mut_slice()`], but consumes `self`.
    pub fn into_slice(self) -> &'a mut [T] { self.items }

    /// See [`View::flat()`].
    pub fn flat(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// Iterates mutably over every element of this view in row-major order.
    pub fn flat_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    /// Overwrites every element of this view with a clone of `value`.
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let mut a: DynArray<u8, 2> = DynArray::new([3, 2]);
    /// a.at_mut(1).fill(9);
    /// assert_eq!(a.as_slice(), [0, 0, 9, 9, 0, 0]);
    /// ```
    pub fn fill(&mut self, value: T) where T: Clone { self.items.fill(value); }

    /// See [`View::iter()`].
    pub fn iter(&self) -> Iter<'_, T, R> { self.view().iter() }

    /// Iterates mutably over dimension 0 of this view, re-borrowing `self`.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, R> { self.view_mut().into_iter_mut() }

    /// Iterates over dimension 0 of this view.
    pub fn into_iter_mut(self) -> IterMut<'a, T, R> {
        IterMut::new(self.items, self.extents, self.remain)
    }

    /// See [`View::get()`].
    pub fn get(&self, index: [usize; R]) -> Option<&T> { self.view().get(index) }

    /// Returns the element at `index` mutably, or `None` if it is out of bounds.
    pub fn get_mut(&mut self, index: [usize; R]) -> Option<&mut T> {
        stride::ravel(&index, self.extents, self.remain).map(|offset| &mut self.items[offset])
    }

    /// Copies this view into a new [`DynArray`].
    pub fn to_array(&self) -> DynArray<T, R> where T: Clone { self.view().to_array() }
}

impl<'a, T, const R: usize> std::ops::Index<[usize; R]> for ViewMut<'a, T, R> {
    type Output = T;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: [usize; R]) -> &T {
        self.get(index).unwrap_or_else(|| stride::out_of_bounds(&index, self.extents))
    }
}

impl<'a, T, const R: usize> std::ops::IndexMut<[usize; R]> for ViewMut<'a, T, R> {
    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: [usize; R]) -> &mut T {
        let extents = self.extents;
        self.get_mut(index).unwrap_or_else(|| stride::out_of_bounds(&index, extents))
    }
}

impl<'a, T, const R: usize> IntoIterator for ViewMut<'a, T, R> where
    IterMut<'a, T, R>: Iterator,
{
    type Item = <IterMut<'a, T, R> as Iterator>::Item;
    type IntoIter = IterMut<'a, T, R>;
    fn into_iter(self) -> Self::IntoIter { self.into_iter_mut() }
}

// ----------------------------------------------------------------------------
