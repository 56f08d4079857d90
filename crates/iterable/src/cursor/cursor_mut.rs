use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign},
};

use crate::{
    Category, Cursor, Difference, Error, Indexed, IndexedMut, Ordinary, Result, Tag,
    cursor::{checked_index, host_len},
};

/// Cursor over a mutably borrowed host.
///
/// The mutable counterpart of [`Cursor`]: same position rules, but it holds the
/// only borrow of the host, so it moves in place instead of being copied.
pub struct CursorMut<'a, H: ?Sized, C = Ordinary> {
    host: &'a mut H,
    position: Difference,
    _category: PhantomData<C>,
}

impl<'a, H, C> CursorMut<'a, H, C>
where
    H: ?Sized,
    C: Category,
{
    #[inline]
    pub fn new(host: &'a mut H, position: Difference) -> Self {
        Self {
            host,
            position,
            _category: PhantomData,
        }
    }

    #[inline]
    pub fn position(&self) -> Difference {
        self.position
    }

    #[inline]
    pub fn category(&self) -> Tag {
        C::TAG
    }

    #[inline]
    pub fn host(&self) -> &H {
        &*self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }

    /// Shared cursor at the same position, borrowing from this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, H, C> {
        Cursor::new(&*self.host, self.position)
    }

    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Signed distance from this cursor to `other`, `other - self`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> Difference {
        other.position.wrapping_sub(self.position)
    }
}

impl<'a, H, C> CursorMut<'a, H, C>
where
    H: Indexed + ?Sized,
    C: Category,
{
    #[inline]
    pub fn begin(host: &'a mut H) -> Self {
        Self::new(host, 0)
    }

    #[inline]
    pub fn end(host: &'a mut H) -> Self {
        let position = host_len(host);
        Self::new(host, position)
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        checked_index(self.position, self.host.len())
    }

    #[inline]
    pub fn get(&self) -> Option<&H::Output> {
        self.index().map(|index| &self.host[index])
    }

    /// Element at the current position.
    ///
    /// Panics when the position is outside `[0, len)`.
    #[inline]
    pub fn current(&self) -> &H::Output {
        match self.index() {
            Some(index) => &self.host[index],
            None => panic!("{}", self.out_of_range(self.position)),
        }
    }

    fn out_of_range(&self, position: Difference) -> Error {
        Error::OutOfRange {
            position,
            len: self.host.len(),
        }
    }

    fn offset_index(&self, n: Difference) -> usize {
        let position = self.position.wrapping_add(n);
        match checked_index(position, self.host.len()) {
            Some(index) => index,
            None => panic!("{}", self.out_of_range(position)),
        }
    }
}

impl<'a, H, C> CursorMut<'a, H, C>
where
    H: IndexedMut + ?Sized,
    C: Category,
{
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut H::Output> {
        match self.index() {
            Some(index) => Some(&mut self.host[index]),
            None => None,
        }
    }

    #[inline]
    pub fn try_current_mut(&mut self) -> Result<&mut H::Output> {
        match self.index() {
            Some(index) => Ok(&mut self.host[index]),
            None => Err(self.out_of_range(self.position)),
        }
    }

    /// Mutable element at the current position.
    ///
    /// Panics when the position is outside `[0, len)`.
    #[inline]
    pub fn current_mut(&mut self) -> &mut H::Output {
        let index = self.offset_index(0);
        &mut self.host[index]
    }

    /// Gives up the cursor for the current element, keeping the full borrow.
    #[inline]
    pub fn into_current_mut(self) -> &'a mut H::Output {
        let index = self.offset_index(0);
        let host = self.host;
        &mut host[index]
    }
}

impl<H, C> fmt::Debug for CursorMut<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("category", &C::TAG)
            .finish()
    }
}

impl<H, C> PartialEq for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<H, C> Eq for CursorMut<'_, H, C> where H: ?Sized {}

impl<H, C> PartialOrd for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H, C> Ord for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl<H, C> Add<Difference> for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: Difference) -> Self {
        self += n;
        self
    }
}

impl<'a, H, C> Add<CursorMut<'a, H, C>> for Difference
where
    H: ?Sized,
{
    type Output = CursorMut<'a, H, C>;

    #[inline]
    fn add(self, cursor: CursorMut<'a, H, C>) -> CursorMut<'a, H, C> {
        cursor + self
    }
}

impl<H, C> Sub<Difference> for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: Difference) -> Self {
        self -= n;
        self
    }
}

impl<H, C> Sub for &CursorMut<'_, H, C>
where
    H: ?Sized,
{
    type Output = Difference;

    #[inline]
    fn sub(self, other: Self) -> Difference {
        self.position.wrapping_sub(other.position)
    }
}

impl<H, C> AddAssign<Difference> for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn add_assign(&mut self, n: Difference) {
        self.position = self.position.wrapping_add(n);
    }
}

impl<H, C> SubAssign<Difference> for CursorMut<'_, H, C>
where
    H: ?Sized,
{
    #[inline]
    fn sub_assign(&mut self, n: Difference) {
        self.position = self.position.wrapping_sub(n);
    }
}

impl<H, C> Index<Difference> for CursorMut<'_, H, C>
where
    H: Indexed + ?Sized,
    C: Category,
{
    type Output = H::Output;

    #[inline]
    fn index(&self, n: Difference) -> &H::Output {
        &self.host[self.offset_index(n)]
    }
}

impl<H, C> IndexMut<Difference> for CursorMut<'_, H, C>
where
    H: IndexedMut + ?Sized,
    C: Category,
{
    #[inline]
    fn index_mut(&mut self, n: Difference) -> &mut H::Output {
        let index = self.offset_index(n);
        &mut self.host[index]
    }
}
