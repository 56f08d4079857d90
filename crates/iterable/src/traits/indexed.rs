use std::ops::{Index, IndexMut};

/// Host shape with indexed element access and a length.
///
/// `self[i]` must be valid for every `i < self.len()`.
pub trait Indexed: Index<usize> {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Indexed host that also hands out mutable elements.
pub trait IndexedMut: Indexed + IndexMut<usize> {}

impl<H> IndexedMut for H where H: Indexed + IndexMut<usize> + ?Sized {}

/// Indexed host whose elements live in one adjacent block.
///
/// # Safety
///
/// `as_ptr` must return a pointer valid for reads of `self.len()` consecutive
/// elements for as long as `self` is borrowed, and for every `i < self.len()`
/// `&self[i]` must be `as_ptr().add(i)`. Contiguous cursors and
/// [`Range::as_slice`](crate::Range::as_slice) build pointers and slices from
/// that base pointer.
pub unsafe trait ContiguousIndexed: Indexed {
    /// Address of the first element of the block.
    fn as_ptr(&self) -> *const Self::Output
    where
        Self::Output: Sized;
}
