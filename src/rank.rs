//! Methods whose return type depends on the rank.
//!
//! Descending from rank `R` to rank `R - 1` can't be written generically over
//! `const R: usize` in stable Rust, so these methods are implemented for each
//! rank separately. Rank `1` is the base case, where descending yields an
//! element. Ranks `2` to `8` are generated by [`impl_rank`].

use std::iter::{FusedIterator};

use super::{stride, DynArray, View, ViewMut, Iter, IterMut};

impl<'a, T> View<'a, T, 1> {
    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline(always)]
    #[track_caller]
    pub fn at(self, index: usize) -> &'a T {
        &self.as_slice()[stride::check(index, self.extents())]
    }

    /// Returns the first element.
    #[track_caller]
    pub fn front(self) -> &'a T { self.at(0) }

    /// Returns the last element.
    #[track_caller]
    pub fn back(self) -> &'a T { self.at(self.size(0).wrapping_sub(1)) }
}

impl<'a, T> std::ops::Index<usize> for View<'a, T, 1> {
    type Output = T;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: usize) -> &T { self.at(index) }
}

impl<'a, T> ViewMut<'a, T, 1> {
    #[track_caller]
    pub fn at(&self, index: usize) -> &T { self.view().at(index) }

    #[inline(always)]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let index = stride::check(index, self.extents());
        &mut self.as_mut_slice()[index]
    }

    #[track_caller]
    pub fn into_at(self, index: usize) -> &'a mut T {
        let index = stride::check(index, self.extents());
        &mut self.into_slice()[index]
    }

    #[track_caller]
    pub fn front(&self) -> &T { self.at(0) }

    #[track_caller]
    pub fn back(&self) -> &T { self.view().back() }

    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T { self.at_mut(0) }

    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.size(0).wrapping_sub(1);
        self.at_mut(last)
    }
}

impl<'a, T> std::ops::Index<usize> for ViewMut<'a, T, 1> {
    type Output = T;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: usize) -> &T { self.at(index) }
}

impl<'a, T> std::ops::IndexMut<usize> for ViewMut<'a, T, 1> {
    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T { self.at_mut(index) }
}

impl<T> DynArray<T, 1> {
    /// Returns the element at `index`.
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let mut a: DynArray<i32, 1> = DynArray::new([5]);
    /// *a.at_mut(0) = 42;
    /// a[4] = 24;
    /// assert_eq!(*a.at(0), 42);
    /// assert_eq!(*a.front(), 42);
    /// assert_eq!(*a.back(), 24);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T { self.view().at(index) }

    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T { self.view_mut().into_at(index) }

    #[track_caller]
    pub fn front(&self) -> &T { self.view().front() }

    #[track_caller]
    pub fn back(&self) -> &T { self.view().back() }

    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T { self.at_mut(0) }

    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.size(0).wrapping_sub(1);
        self.at_mut(last)
    }
}

impl<'a, T> Iterator for Iter<'a, T, 1> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.nth(0) }
    fn nth(&mut self, n: usize) -> Option<Self::Item> { self.nth_chunk(n).and_then(|c| c.first()) }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.steps_left(), Some(self.steps_left())) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T, 1> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.nth_back(0) }
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> { self.nth_back_chunk(n).and_then(|c| c.first()) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T, 1> {}
impl<'a, T> FusedIterator for Iter<'a, T, 1> {}

impl<'a, T> Iterator for IterMut<'a, T, 1> {
    type Item = &'a mut T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.nth(0) }
    fn nth(&mut self, n: usize) -> Option<Self::Item> { self.nth_chunk(n).and_then(|c| c.first_mut()) }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.steps_left(), Some(self.steps_left())) }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T, 1> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.nth_back(0) }
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> { self.nth_back_chunk(n).and_then(|c| c.first_mut()) }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T, 1> {}
impl<'a, T> FusedIterator for IterMut<'a, T, 1> {}

// ----------------------------------------------------------------------------

/// Implements the rank-dependent methods for each `$r => $s` where `$s` is
/// `$r - 1`.
macro_rules! impl_rank {
    ($($r:literal => $s:literal),*) => {$(
        impl<'a, T> View<'a, T, $r> {
            /// Returns the sub-array at position `index` of dimension 0.
            ///
            /// # Panics
            ///
            /// Panics if `index` is out of bounds.
            #[inline(always)]
            #[track_caller]
            pub fn at(self, index: usize) -> View<'a, T, $s> { self.descend(index) }

            /// Returns the first sub-array along dimension 0.
            #[track_caller]
            pub fn front(self) -> View<'a, T, $s> { self.at(0) }

            /// Returns the last sub-array along dimension 0.
            #[track_caller]
            pub fn back(self) -> View<'a, T, $s> { self.at(self.size(0).wrapping_sub(1)) }
        }

        impl<'a, T> ViewMut<'a, T, $r> {
            /// Returns a shared view of the sub-array at position `index` of
            /// dimension 0.
            #[track_caller]
            pub fn at(&self, index: usize) -> View<'_, T, $s> { self.view().descend(index) }

            /// Returns a mutable view of the sub-array at position `index` of
            /// dimension 0, re-borrowing `self`.
            #[inline(always)]
            #[track_caller]
            pub fn at_mut(&mut self, index: usize) -> ViewMut<'_, T, $s> {
                self.view_mut().descend_mut(index)
            }

            /// Like [`Self::at_mut()`], but consumes `self`.
            #[track_caller]
            pub fn into_at(self, index: usize) -> ViewMut<'a, T, $s> { self.descend_mut(index) }

            #[track_caller]
            pub fn front(&self) -> View<'_, T, $s> { self.at(0) }

            #[track_caller]
            pub fn back(&self) -> View<'_, T, $s> { self.view().back() }

            #[track_caller]
            pub fn front_mut(&mut self) -> ViewMut<'_, T, $s> { self.at_mut(0) }

            #[track_caller]
            pub fn back_mut(&mut self) -> ViewMut<'_, T, $s> {
                let last = self.size(0).wrapping_sub(1);
                self.at_mut(last)
            }
        }

        impl<T> DynArray<T, $r> {
            /// Returns a view of the sub-array at position `index` of
            /// dimension 0. Equivalent to `self.view().at(index)`.
            #[track_caller]
            pub fn at(&self, index: usize) -> View<'_, T, $s> { self.view().at(index) }

            /// Returns a mutable view of the sub-array at position `index` of
            /// dimension 0.
            #[track_caller]
            pub fn at_mut(&mut self, index: usize) -> ViewMut<'_, T, $s> { self.view_mut().into_at(index) }

            #[track_caller]
            pub fn front(&self) -> View<'_, T, $s> { self.view().front() }

            #[track_caller]
            pub fn back(&self) -> View<'_, T, $s> { self.view().back() }

            #[track_caller]
            pub fn front_mut(&mut self) -> ViewMut<'_, T, $s> { self.at_mut(0) }

            #[track_caller]
            pub fn back_mut(&mut self) -> ViewMut<'_, T, $s> {
                let last = self.size(0).wrapping_sub(1);
                self.at_mut(last)
            }
        }

        impl<'a, T> Iterator for Iter<'a, T, $r> {
            type Item = View<'a, T, $s>;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> { self.nth(0) }
            fn nth(&mut self, n: usize) -> Option<Self::Item> { self.nth_chunk(n).map(|c| self.sub(c)) }
            fn size_hint(&self) -> (usize, Option<usize>) { (self.steps_left(), Some(self.steps_left())) }
        }

        impl<'a, T> DoubleEndedIterator for Iter<'a, T, $r> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> { self.nth_back(0) }
            fn nth_back(&mut self, n: usize) -> Option<Self::Item> { self.nth_back_chunk(n).map(|c| self.sub(c)) }
        }

        impl<'a, T> ExactSizeIterator for Iter<'a, T, $r> {}
        impl<'a, T> FusedIterator for Iter<'a, T, $r> {}

        impl<'a, T> Iterator for IterMut<'a, T, $r> {
            type Item = ViewMut<'a, T, $s>;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> { self.nth(0) }
            fn nth(&mut self, n: usize) -> Option<Self::Item> { self.nth_chunk(n).map(|c| self.sub(c)) }
            fn size_hint(&self) -> (usize, Option<usize>) { (self.steps_left(), Some(self.steps_left())) }
        }

        impl<'a, T> DoubleEndedIterator for IterMut<'a, T, $r> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> { self.nth_back(0) }
            fn nth_back(&mut self, n: usize) -> Option<Self::Item> { self.nth_back_chunk(n).map(|c| self.sub(c)) }
        }

        impl<'a, T> ExactSizeIterator for IterMut<'a, T, $r> {}
        impl<'a, T> FusedIterator for IterMut<'a, T, $r> {}
    )*}
}

impl_rank!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);
