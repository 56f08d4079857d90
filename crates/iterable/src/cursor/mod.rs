use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ptr,
};

use crate::{Category, Difference, Error, Indexed, Ordinary, RandomAccess, Result, Tag};

#[cfg(contiguous_cursors)]
mod contiguous;
mod cursor_mut;
mod ops;

#[cfg(contiguous_cursors)]
pub use contiguous::*;
pub use cursor_mut::*;

/// Random-access cursor over a borrowed host.
///
/// Holds a shared borrow of the host and a signed position. The cursor never
/// owns the host: `'a` keeps the host alive and unmodified for as long as any
/// cursor derived from it exists.
///
/// Positions are unbounded, arithmetic may leave `[0, len)` freely. Only
/// dereferencing requires an in-range position.
///
/// Equality and ordering compare positions only, cursors over two different
/// hosts at the same position are equal. Use [`Cursor::same_host`] to tell
/// them apart.
pub struct Cursor<'a, H: ?Sized, C = Ordinary> {
    host: &'a H,
    position: Difference,
    _category: PhantomData<C>,
}

impl<'a, H, C> Cursor<'a, H, C>
where
    H: ?Sized,
    C: Category,
{
    #[inline]
    pub const fn new(host: &'a H, position: Difference) -> Self {
        Self {
            host,
            position,
            _category: PhantomData,
        }
    }

    #[inline]
    pub fn host(&self) -> &'a H {
        self.host
    }

    #[inline]
    pub fn position(&self) -> Difference {
        self.position
    }

    #[inline]
    pub fn category(&self) -> Tag {
        C::TAG
    }

    /// Whether both cursors borrow the very same host.
    #[inline]
    pub fn same_host(&self, other: &Self) -> bool {
        ptr::eq(self.host, other.host)
    }

    #[inline]
    pub(crate) fn moved_to(self, position: Difference) -> Self {
        Self::new(self.host, position)
    }
}

impl<'a, H, C> Cursor<'a, H, C>
where
    H: Indexed + ?Sized,
    C: Category,
{
    #[inline]
    pub fn begin(host: &'a H) -> Self {
        Self::new(host, 0)
    }

    #[inline]
    pub fn end(host: &'a H) -> Self {
        Self::new(host, host_len(host))
    }

    /// Host index of the current position, `None` outside `[0, len)`.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        checked_index(self.position, self.host.len())
    }

    #[inline]
    pub fn is_dereferenceable(&self) -> bool {
        self.index().is_some()
    }

    #[inline]
    pub fn get(&self) -> Option<&'a H::Output> {
        let host = self.host;
        self.index().map(|index| &host[index])
    }

    #[inline]
    pub fn try_current(&self) -> Result<&'a H::Output> {
        self.get().ok_or_else(|| self.out_of_range())
    }

    /// Element at the current position.
    ///
    /// Panics when the position is outside `[0, len)`.
    #[inline]
    pub fn current(&self) -> &'a H::Output {
        match self.get() {
            Some(value) => value,
            None => panic!("{}", self.out_of_range()),
        }
    }

    fn out_of_range(&self) -> Error {
        Error::OutOfRange {
            position: self.position,
            len: self.host.len(),
        }
    }
}

impl<'a, H, C> RandomAccess for Cursor<'a, H, C>
where
    H: Indexed + ?Sized,
    C: Category,
{
    type Category = C;
    type Value = H::Output;
    type Pointer = *const H::Output;
    type Reference = &'a H::Output;

    #[inline]
    fn position(&self) -> Difference {
        self.position
    }

    #[inline]
    fn current(&self) -> Self::Reference {
        Cursor::current(self)
    }

    #[inline]
    fn get(&self) -> Option<Self::Reference> {
        Cursor::get(self)
    }
}

#[inline]
pub(crate) fn host_len<H>(host: &H) -> Difference
where
    H: Indexed + ?Sized,
{
    Difference::try_from(host.len()).unwrap_or(Difference::MAX)
}

#[inline]
pub(crate) fn checked_index(position: Difference, len: usize) -> Option<usize> {
    usize::try_from(position).ok().filter(|index| *index < len)
}

impl<H, C> Clone for Cursor<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, C> Copy for Cursor<'_, H, C> where H: ?Sized {}

impl<H, C> fmt::Debug for Cursor<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("category", &C::TAG)
            .finish()
    }
}

impl<H, C> PartialEq for Cursor<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<H, C> Eq for Cursor<'_, H, C> where H: ?Sized {}

impl<H, C> PartialOrd for Cursor<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H, C> Ord for Cursor<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl<H, C> Hash for Cursor<'_, H, C>
where
    H: ?Sized,
{
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.position.hash(state);
    }
}
