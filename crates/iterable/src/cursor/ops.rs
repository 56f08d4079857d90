use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use crate::{Category, Cursor, Difference, Indexed};

impl<H, C> Add<Difference> for Cursor<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    type Output = Self;

    #[inline]
    fn add(self, n: Difference) -> Self {
        let position = self.position().wrapping_add(n);
        self.moved_to(position)
    }
}

impl<'a, H, C> Add<Cursor<'a, H, C>> for Difference
where
    H: ?Sized,
    C: Category,
{
    type Output = Cursor<'a, H, C>;

    #[inline]
    fn add(self, cursor: Cursor<'a, H, C>) -> Cursor<'a, H, C> {
        cursor + self
    }
}

impl<H, C> Sub<Difference> for Cursor<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    type Output = Self;

    #[inline]
    fn sub(self, n: Difference) -> Self {
        let position = self.position().wrapping_sub(n);
        self.moved_to(position)
    }
}

impl<H, C> Sub for Cursor<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    type Output = Difference;

    #[inline]
    fn sub(self, other: Self) -> Difference {
        self.position().wrapping_sub(other.position())
    }
}

impl<H, C> AddAssign<Difference> for Cursor<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    #[inline]
    fn add_assign(&mut self, n: Difference) {
        *self = *self + n;
    }
}

impl<H, C> SubAssign<Difference> for Cursor<'_, H, C>
where
    H: ?Sized,
    C: Category,
{
    #[inline]
    fn sub_assign(&mut self, n: Difference) {
        *self = *self - n;
    }
}

impl<H, C> Index<Difference> for Cursor<'_, H, C>
where
    H: Indexed + ?Sized,
    C: Category,
{
    type Output = H::Output;

    /// `cursor[n]` reads the element at `cursor + n`.
    #[inline]
    fn index(&self, n: Difference) -> &H::Output {
        (*self + n).current()
    }
}
