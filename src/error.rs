use std::collections::{TryReserveError};

/// Reasons why a [`DynArray`] could not be constructed.
///
/// Out-of-bounds indexing is not represented here. It is a programming
/// error, and panics.
///
/// [`DynArray`]: super::DynArray
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DynArrayError {
    /// An extent was zero.
    #[error("extent of dimension {dim} is zero")]
    ZeroExtent { dim: usize },

    /// An extent was negative or too large to be a `usize`.
    #[error("extent of dimension {dim} is not representable as usize")]
    ExtentOutOfRange { dim: usize },

    /// The product of the extents does not fit in a `usize`.
    #[error("total element count overflows usize")]
    SizeOverflow,

    /// A run-time list of extents had the wrong number of entries.
    #[error("rank mismatch: expected {expected} extents, found {found}")]
    RankMismatch { expected: usize, found: usize },

    /// A buffer had the wrong number of elements for the extents.
    #[error("length mismatch: expected {expected} items, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The buffer could not be allocated.
    #[error(transparent)]
    Alloc(#[from] TryReserveError),
}

/// Convenience alias for `Result<T, DynArrayError>`.
pub type Result<T> = std::result::Result<T, DynArrayError>;
