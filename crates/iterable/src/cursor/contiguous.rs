use std::{ptr, slice};

use log::debug;

use crate::{
    Contiguous, ContiguousIndexed, Cursor, CursorMut, Error, IndexedMut, Range, cursor::host_len,
};

impl<H> Cursor<'_, H, Contiguous>
where
    H: ContiguousIndexed + ?Sized,
    H::Output: Sized,
{
    /// Raw address of the current element, derived from the host's base
    /// pointer so it may be offset anywhere inside the block.
    ///
    /// Panics when the position is outside `[0, len)`.
    #[inline]
    pub fn as_ptr(&self) -> *const H::Output {
        match self.index() {
            // SAFETY: `index < len`, inside the block `as_ptr` covers.
            Some(index) => unsafe { self.host().as_ptr().add(index) },
            None => panic!("{}", self.out_of_range()),
        }
    }

    #[inline]
    pub fn into_ptr(self) -> *const H::Output {
        self.as_ptr()
    }
}

/// Raw address of the element a contiguous cursor points at.
#[inline]
pub fn to_address<H>(cursor: &Cursor<'_, H, Contiguous>) -> *const H::Output
where
    H: ContiguousIndexed + ?Sized,
    H::Output: Sized,
{
    cursor.as_ptr()
}

impl<H> CursorMut<'_, H, Contiguous>
where
    H: IndexedMut + ?Sized,
{
    /// Raw mutable address of the current element, valid for that element
    /// only.
    ///
    /// Panics when the position is outside `[0, len)`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut H::Output {
        ptr::from_mut(self.current_mut())
    }
}

impl<'a, H> Range<Cursor<'a, H, Contiguous>>
where
    H: ContiguousIndexed + ?Sized,
    H::Output: Sized,
{
    /// Remaining elements as one slice.
    ///
    /// Panics when the range reaches outside `[0, len]` of its host.
    pub fn as_slice(&self) -> &'a [H::Output] {
        let (begin, end) = (self.begin(), self.end());
        let len = self.len();

        if len == 0 {
            return &[];
        }

        let host = begin.host();
        if begin.position() < 0 || end.position() > host_len(host) {
            debug!(
                "contiguous range [{}, {}) exceeds its host of length {}",
                begin.position(),
                end.position(),
                host.len()
            );
            let position = if begin.position() < 0 {
                begin.position()
            } else {
                end.position()
            };
            panic!(
                "{}",
                Error::OutOfRange {
                    position,
                    len: host.len()
                }
            );
        }

        // SAFETY: `[begin, end)` lies within `[0, len)` and `ContiguousIndexed`
        // guarantees `host.as_ptr()` is readable for all `len` elements.
        unsafe { slice::from_raw_parts(host.as_ptr().add(begin.position() as usize), len) }
    }
}
