use std::mem::{MaybeUninit};

use super::{stride, DynArrayError, Result, View, ViewMut, Iter, IterMut, Indexed};

/// Rejects `RANK == 0` at compile time.
struct NonZeroRank<const RANK: usize>;

impl<const RANK: usize> NonZeroRank<RANK> {
    const OK: () = assert!(RANK > 0, "a DynArray must have at least one dimension");
}

// ----------------------------------------------------------------------------

/// A dense, row-major array of `T`s with `RANK` dimensions.
///
/// The rank is part of the type. The extent of each dimension is chosen at
/// construction and never changes. The elements are stored in a single
/// [`Box<[T]>`], with the last dimension varying fastest.
///
/// Sub-arrays are reached through [`View`]s and [`ViewMut`]s, which borrow
/// the array and so cannot outlive it:
///
/// ```
/// use dynarray::DynArray;
/// let mut a: DynArray<u32, 3> = DynArray::new([4, 5, 6]);
/// a.at_mut(1).at_mut(3)[5] = 54;
/// assert_eq!(a.at(1).at(3)[5], 54);
/// assert_eq!(a[[1, 3, 5]], 54);
/// assert_eq!(a.total_size(), 120);
/// ```
///
/// Moving a `DynArray` transfers the buffer without copying it.
/// [`std::mem::take()`] moves the buffer out of a place and leaves an empty
/// array behind:
///
/// ```
/// use dynarray::DynArray;
/// let mut a: DynArray<u32, 2> = DynArray::from_elem([2, 3], 7);
/// let b = std::mem::take(&mut a);
/// assert!(a.is_empty());
/// assert_eq!(b.as_slice(), [7; 6]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DynArray<T, const RANK: usize> {
    extents: [usize; RANK],
    remain: [usize; RANK],
    items: Box<[T]>,
}

impl<T, const RANK: usize> DynArray<T, RANK> {
    /// Validates `extents` and computes the `remain` table and total size.
    fn layout<E: TryInto<usize>>(extents: [E; RANK]) -> Result<([usize; RANK], [usize; RANK], usize)> {
        let () = NonZeroRank::<RANK>::OK;
        let extents = stride::extents(extents)?;
        let (total, remain) = stride::remain(&extents)?;
        Ok((extents, remain, total))
    }

    /// Returns an empty `Vec` with room for exactly `total` items.
    fn allocate(total: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        items.try_reserve_exact(total)?;
        Ok(items)
    }

    pub(crate) fn from_raw_parts(extents: [usize; RANK], remain: [usize; RANK], items: Vec<T>) -> Self {
        debug_assert_eq!(remain[0] * extents[0], items.len());
        Self {extents, remain, items: items.into_boxed_slice()}
    }

    /// Constructs a `DynArray` with the given extents, filled with
    /// `T::default()`.
    pub fn try_new<E: TryInto<usize>>(extents: [E; RANK]) -> Result<Self> where T: Default {
        let (extents, remain, total) = Self::layout(extents)?;
        let mut items = Self::allocate(total)?;
        items.resize_with(total, T::default);
        Ok(Self::from_raw_parts(extents, remain, items))
    }

    /// Constructs a `DynArray` with the given extents, filled with
    /// `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if an extent is zero or negative, if the total size overflows,
    /// or if the allocation fails. See [`Self::try_new()`].
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a: DynArray<f32, 2> = DynArray::new([2, 3]);
    /// assert_eq!(a.as_slice(), [0.0; 6]);
    /// ```
    #[track_caller]
    pub fn new<E: TryInto<usize>>(extents: [E; RANK]) -> Self where T: Default {
        expect(Self::try_new(extents))
    }

    /// Constructs a `DynArray` with the given extents, filled with clones of
    /// `value`.
    pub fn try_from_elem<E: TryInto<usize>>(extents: [E; RANK], value: T) -> Result<Self> where T: Clone {
        let (extents, remain, total) = Self::layout(extents)?;
        let mut items = Self::allocate(total)?;
        items.resize(total, value);
        Ok(Self::from_raw_parts(extents, remain, items))
    }

    /// Panicking version of [`Self::try_from_elem()`].
    #[track_caller]
    pub fn from_elem<E: TryInto<usize>>(extents: [E; RANK], value: T) -> Self where T: Clone {
        expect(Self::try_from_elem(extents, value))
    }

    /// Constructs a `DynArray` with the given extents by calling `f` for
    /// each index, in row-major order.
    pub fn try_from_fn<E: TryInto<usize>>(
        extents: [E; RANK],
        mut f: impl FnMut([usize; RANK]) -> T,
    ) -> Result<Self> {
        let (extents, remain, total) = Self::layout(extents)?;
        let mut items = Self::allocate(total)?;
        let mut index = [0; RANK];
        for _ in 0..total {
            items.push(f(index));
            stride::increment(&mut index, &extents);
        }
        Ok(Self::from_raw_parts(extents, remain, items))
    }

    /// Panicking version of [`Self::try_from_fn()`].
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a = DynArray::from_fn([2, 3], |[i, j]| 10 * i + j);
    /// assert_eq!(a.as_slice(), [0, 1, 2, 10, 11, 12]);
    /// ```
    #[track_caller]
    pub fn from_fn<E: TryInto<usize>>(extents: [E; RANK], f: impl FnMut([usize; RANK]) -> T) -> Self {
        expect(Self::try_from_fn(extents, f))
    }

    /// Constructs a `DynArray` with the given extents that adopts `items` as
    /// its buffer.
    ///
    /// Fails with [`DynArrayError::LengthMismatch`] if `items` does not have
    /// exactly one element per index.
    pub fn try_from_vec<E: TryInto<usize>>(extents: [E; RANK], items: impl Into<Vec<T>>) -> Result<Self> {
        let (extents, remain, total) = Self::layout(extents)?;
        let items = items.into();
        if items.len() != total {
            return Err(DynArrayError::LengthMismatch {expected: total, found: items.len()});
        }
        Ok(Self::from_raw_parts(extents, remain, items))
    }

    /// Panicking version of [`Self::try_from_vec()`].
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a = DynArray::from_vec([2, 2], vec!["a", "b", "c", "d"]);
    /// assert_eq!(a[[1, 0]], "c");
    /// ```
    #[track_caller]
    pub fn from_vec<E: TryInto<usize>>(extents: [E; RANK], items: impl Into<Vec<T>>) -> Self {
        expect(Self::try_from_vec(extents, items))
    }

    /// Like [`Self::try_new()`], but the number of extents is only known at
    /// run time.
    ///
    /// ```
    /// use dynarray::{DynArray, DynArrayError};
    /// let a = DynArray::<i8, 2>::try_from_shape(&[3, 4]).unwrap();
    /// assert_eq!(a.extents(), &[3, 4]);
    /// assert_eq!(
    ///     DynArray::<i8, 2>::try_from_shape(&[3, 4, 5]),
    ///     Err(DynArrayError::RankMismatch {expected: 2, found: 3}),
    /// );
    /// ```
    pub fn try_from_shape(shape: &[usize]) -> Result<Self> where T: Default {
        let extents = <[usize; RANK]>::try_from(shape)
            .map_err(|_| DynArrayError::RankMismatch {expected: RANK, found: shape.len()})?;
        Self::try_new(extents)
    }

    /// Constructs a `DynArray` with the given extents whose elements are not
    /// initialized.
    ///
    /// Nothing is written to the buffer. Initialize every element, e.g.
    /// through [`Self::flat_mut()`], then call
    /// [`DynArray::assume_init()`].
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let mut a = DynArray::<u64, 2>::uninit([3, 3]).unwrap();
    /// for (i, x) in a.flat_mut().enumerate() { x.write(i as u64); }
    /// let a = unsafe { a.assume_init() };
    /// assert_eq!(a[[2, 1]], 7);
    /// ```
    pub fn uninit<E: TryInto<usize>>(extents: [E; RANK]) -> Result<DynArray<MaybeUninit<T>, RANK>> {
        let (extents, remain, total) = Self::layout(extents)?;
        let mut items = DynArray::<MaybeUninit<T>, RANK>::allocate(total)?;
        items.resize_with(total, MaybeUninit::uninit);
        Ok(DynArray::from_raw_parts(extents, remain, items))
    }

    /// Deep-copies `self`, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> where T: Clone {
        let mut items = Self::allocate(self.items.len())?;
        items.extend_from_slice(&self.items);
        Ok(Self::from_raw_parts(self.extents, self.remain, items))
    }

    /// Exchanges the contents of `self` and `other` without copying any
    /// elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns the raw array elements, in row-major order.
    pub fn into_raw(self) -> Box<[T]> { self.items }

    // ------------------------------------------------------------------------

    /// Returns the number of dimensions.
    pub const fn rank(&self) -> usize { RANK }

    /// Returns the extent of dimension `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= RANK`.
    #[track_caller]
    pub fn size(&self, dim: usize) -> usize { self.extents[dim] }

    /// Returns the extents of all dimensions.
    pub fn extents(&self) -> &[usize; RANK] { &self.extents }

    /// Returns the `remain` table. See [`stride`].
    pub fn remain(&self) -> &[usize; RANK] { &self.remain }

    /// Returns the total number of elements.
    pub fn total_size(&self) -> usize { self.items.len() }

    /// Returns `true` if this array has no buffer, i.e. it was made by
    /// [`Default::default()`] or has been [taken] from.
    ///
    /// [taken]: std::mem::take
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Returns the elements in row-major order.
    pub fn as_slice(&self) -> &[T] { &self.items }

    /// Returns the elements in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    /// Returns a view of the whole array.
    pub fn view(&self) -> View<'_, T, RANK> {
        View::new(&self.items, &self.extents, &self.remain)
    }

    /// Returns a mutable view of the whole array.
    pub fn view_mut(&mut self) -> ViewMut<'_, T, RANK> {
        ViewMut::new(&mut self.items, &self.extents, &self.remain)
    }

    /// Iterates over dimension 0, yielding the sub-arrays (or, if `RANK` is
    /// `1`, the elements).
    pub fn iter(&self) -> Iter<'_, T, RANK> { self.view().iter() }

    /// Mutable version of [`Self::iter()`].
    pub fn iter_mut(&mut self) -> IterMut<'_, T, RANK> { self.view_mut().into_iter_mut() }

    /// Iterates over every element in row-major order, ignoring the
    /// dimensions.
    pub fn flat(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// Mutable version of [`Self::flat()`].
    pub fn flat_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    /// Iterates over every element in row-major order, together with its
    /// index.
    ///
    /// ```
    /// use dynarray::DynArray;
    /// let a = DynArray::from_vec([2, 2], vec!['a', 'b', 'c', 'd']);
    /// let v: Vec<_> = a.indexed().collect();
    /// assert_eq!(v, [([0, 0], &'a'), ([0, 1], &'b'), ([1, 0], &'c'), ([1, 1], &'d')]);
    /// ```
    pub fn indexed(&self) -> Indexed<'_, T, RANK> { Indexed::new(&self.extents, &self.items) }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) where T: Clone { self.items.fill(value); }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: [usize; RANK]) -> Option<&T> {
        stride::ravel(&index, &self.extents, &self.remain).map(|offset| &self.items[offset])
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get_mut(&mut self, index: [usize; RANK]) -> Option<&mut T> {
        stride::ravel(&index, &self.extents, &self.remain).map(|offset| &mut self.items[offset])
    }

    /// Returns the element at `index` without checking the bounds, except in
    /// debug builds.
    ///
    /// # Safety
    ///
    /// Every component of `index` must be less than the corresponding extent.
    pub unsafe fn get_unchecked(&self, index: [usize; RANK]) -> &T {
        let offset = self.offset_unchecked(index);
        self.items.get_unchecked(offset)
    }

    /// Mutable version of [`Self::get_unchecked()`].
    ///
    /// # Safety
    ///
    /// Every component of `index` must be less than the corresponding extent.
    pub unsafe fn get_unchecked_mut(&mut self, index: [usize; RANK]) -> &mut T {
        let offset = self.offset_unchecked(index);
        self.items.get_unchecked_mut(offset)
    }

    #[inline(always)]
    fn offset_unchecked(&self, index: [usize; RANK]) -> usize {
        debug_assert!(
            stride::ravel(&index, &self.extents, &self.remain).is_some(),
            "Index {:?} is out of bounds for size {:?}", index, self.extents,
        );
        index.iter().zip(&self.remain).map(|(&i, &r)| i * r).sum()
    }

    #[inline(always)]
    #[track_caller]
    fn offset(&self, index: [usize; RANK]) -> usize {
        stride::ravel(&index, &self.extents, &self.remain)
            .unwrap_or_else(|| stride::out_of_bounds(&index, &self.extents))
    }
}

impl<T, const RANK: usize> DynArray<MaybeUninit<T>, RANK> {
    /// Converts an array made by [`DynArray::uninit()`] into an array of
    /// `T`.
    ///
    /// # Safety
    ///
    /// Every element must have been initialized.
    pub unsafe fn assume_init(self) -> DynArray<T, RANK> {
        let Self {extents, remain, items} = self;
        let items = Box::from_raw(Box::into_raw(items) as *mut [T]);
        DynArray {extents, remain, items}
    }
}

#[track_caller]
fn expect<A>(result: Result<A>) -> A {
    match result {
        Ok(a) => a,
        Err(e) => panic!("cannot construct DynArray: {}", e),
    }
}

// ----------------------------------------------------------------------------

impl<T, const RANK: usize> Default for DynArray<T, RANK> {
    /// An empty array, with no buffer and all-zero extents.
    fn default() -> Self {
        Self {extents: [0; RANK], remain: [0; RANK], items: Box::default()}
    }
}

impl<T: Clone, const RANK: usize> Clone for DynArray<T, RANK> {
    fn clone(&self) -> Self {
        Self {extents: self.extents, remain: self.remain, items: self.items.clone()}
    }

    fn clone_from(&mut self, source: &Self) {
        // A panic in `T::clone()` must leave `self` untouched.
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, const RANK: usize> std::convert::AsRef<[T]> for DynArray<T, RANK> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T, const RANK: usize> std::convert::AsMut<[T]> for DynArray<T, RANK> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T, const RANK: usize> std::ops::Index<[usize; RANK]> for DynArray<T, RANK> {
    type Output = T;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: [usize; RANK]) -> &T { &self.items[self.offset(index)] }
}

impl<T, const RANK: usize> std::ops::IndexMut<[usize; RANK]> for DynArray<T, RANK> {
    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: [usize; RANK]) -> &mut T {
        let offset = self.offset(index);
        &mut self.items[offset]
    }
}

impl<T> std::ops::Index<usize> for DynArray<T, 1> {
    type Output = T;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: usize) -> &T { &self[[index]] }
}

impl<T> std::ops::IndexMut<usize> for DynArray<T, 1> {
    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self[[index]] }
}

impl<'a, T, const RANK: usize> IntoIterator for &'a DynArray<T, RANK> where
    Iter<'a, T, RANK>: Iterator,
{
    type Item = <Iter<'a, T, RANK> as Iterator>::Item;
    type IntoIter = Iter<'a, T, RANK>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const RANK: usize> IntoIterator for &'a mut DynArray<T, RANK> where
    IterMut<'a, T, RANK>: Iterator,
{
    type Item = <IterMut<'a, T, RANK> as Iterator>::Item;
    type IntoIter = IterMut<'a, T, RANK>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

// ----------------------------------------------------------------------------
