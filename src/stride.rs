//! Row-major stride tables.
//!
//! A [`DynArray`] stores its elements in one contiguous buffer, with the last
//! dimension varying fastest. For each dimension `d`, `remain[d]` is the
//! number of elements spanned by one step along `d`:
//!
//! ```text
//! remain[RANK - 1] = 1
//! remain[d]        = extents[d + 1] * remain[d + 1]
//! ```
//!
//! so that `remain[0] * extents[0]` is the total number of elements.
//!
//! ```
//! use dynarray::stride;
//! let (total, remain) = stride::remain(&[4, 5, 6]).unwrap();
//! assert_eq!(total, 120);
//! assert_eq!(remain, [30, 6, 1]);
//! ```
//!
//! [`DynArray`]: super::DynArray

use super::{DynArrayError, Result};

/// Converts each extent to a `usize`.
///
/// Fails if an extent is negative or does not fit. Does not check for zero;
/// that is the job of [`remain()`].
pub fn extents<E: TryInto<usize>, const RANK: usize>(extents: [E; RANK]) -> Result<[usize; RANK]> {
    let mut ret = [0; RANK];
    for (dim, (e, r)) in extents.into_iter().zip(&mut ret).enumerate() {
        *r = e.try_into().map_err(|_| DynArrayError::ExtentOutOfRange { dim })?;
    }
    Ok(ret)
}

/// Returns the total element count and the `remain` table for `extents`.
///
/// Fails if any extent is zero, or if the product of the extents overflows.
pub fn remain<const RANK: usize>(extents: &[usize; RANK]) -> Result<(usize, [usize; RANK])> {
    if let Some(dim) = extents.iter().position(|&e| e == 0) {
        return Err(DynArrayError::ZeroExtent { dim });
    }
    let mut remain = [0; RANK];
    let mut total: usize = 1;
    for dim in (0..RANK).rev() {
        remain[dim] = total;
        total = total.checked_mul(extents[dim]).ok_or(DynArrayError::SizeOverflow)?;
    }
    Ok((total, remain))
}

/// Returns the buffer offset of `index`, or `None` if any component of
/// `index` is out of bounds.
///
/// The three slices must have the same length.
///
/// ```
/// use dynarray::stride;
/// assert_eq!(stride::ravel(&[1, 3, 5], &[4, 5, 6], &[30, 6, 1]), Some(53));
/// assert_eq!(stride::ravel(&[1, 5, 0], &[4, 5, 6], &[30, 6, 1]), None);
/// ```
#[inline]
pub fn ravel(index: &[usize], extents: &[usize], remain: &[usize]) -> Option<usize> {
    debug_assert_eq!(index.len(), extents.len());
    debug_assert_eq!(index.len(), remain.len());
    let mut offset = 0;
    for ((&i, &e), &r) in index.iter().zip(extents).zip(remain) {
        if i >= e { return None; }
        offset += i * r;
    }
    Some(offset)
}

/// The inverse of [`ravel()`].
///
/// `offset` must be less than `remain[0] * extents[0]`.
pub fn unravel<const RANK: usize>(mut offset: usize, remain: &[usize]) -> [usize; RANK] {
    debug_assert_eq!(remain.len(), RANK);
    let mut index = [0; RANK];
    for (i, &r) in index.iter_mut().zip(remain) {
        *i = offset / r;
        offset %= r;
    }
    index
}

/// Advances `index` to the next position in row-major order.
///
/// Returns `false` if `index` was the last position, in which case it wraps
/// around to all zeros.
///
/// ```
/// use dynarray::stride;
/// let mut index = [0, 1, 2];
/// assert!(stride::increment(&mut index, &[2, 2, 3]));
/// assert_eq!(index, [1, 0, 0]);
/// ```
pub fn increment(index: &mut [usize], extents: &[usize]) -> bool {
    for (i, &e) in index.iter_mut().zip(extents).rev() {
        *i += 1;
        if *i < e { return true; }
        *i = 0;
    }
    false
}

/// Returns `index` if it is a valid position along the first of `extents`.
#[inline(always)]
#[track_caller]
pub(crate) fn check(index: usize, extents: &[usize]) -> usize {
    if index >= extents[0] { out_of_bounds(&[index], &extents[..1]); }
    index
}

#[cold]
#[track_caller]
pub(crate) fn out_of_bounds(index: &[usize], extents: &[usize]) -> ! {
    panic!("Index {:?} is out of bounds for size {:?}", index, extents)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remain_is_row_major() {
        assert_eq!(remain(&[7]), Ok((7, [1])));
        assert_eq!(remain(&[2, 4, 6]), Ok((48, [24, 6, 1])));
        assert_eq!(remain(&[3, 1, 1, 2]), Ok((6, [2, 2, 2, 1])));
    }

    #[test]
    fn zero_extent() {
        assert_eq!(remain(&[3, 0, 2]), Err(DynArrayError::ZeroExtent { dim: 1 }));
        assert_eq!(remain(&[0, 0]), Err(DynArrayError::ZeroExtent { dim: 0 }));
    }

    #[test]
    fn overflow() {
        assert_eq!(remain(&[usize::MAX, 2]), Err(DynArrayError::SizeOverflow));
    }

    #[test]
    fn extents_out_of_range() {
        assert_eq!(extents([3i32, -1, 2]), Err(DynArrayError::ExtentOutOfRange { dim: 1 }));
        assert_eq!(extents([3u8, 4]), Ok([3usize, 4]));
    }

    #[test]
    fn ravel_unravel() {
        let e = [4, 5, 6];
        let (total, r) = remain(&e).unwrap();
        let mut index = [0; 3];
        for offset in 0..total {
            assert_eq!(ravel(&index, &e, &r), Some(offset));
            assert_eq!(unravel::<3>(offset, &r), index);
            assert_eq!(increment(&mut index, &e), offset + 1 < total);
        }
        assert_eq!(index, [0, 0, 0]);
    }
}
