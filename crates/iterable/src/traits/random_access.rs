use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{Category, Tag};

/// Signed distance between two cursor positions.
pub type Difference = isize;

/// Random-access cursor protocol, with the metadata generic consumers need to
/// recognize a cursor: category, difference, value, pointer and reference types.
///
/// Positions form a total order; `a - b` is the signed distance between them.
/// Position arithmetic wraps on `isize` overflow instead of panicking, a
/// wrapped position is only a problem once it is dereferenced.
pub trait RandomAccess:
    Copy
    + Ord
    + Add<Difference, Output = Self>
    + Sub<Difference, Output = Self>
    + Sub<Output = Difference>
    + AddAssign<Difference>
    + SubAssign<Difference>
{
    type Category: Category;
    type Value: ?Sized;
    type Pointer: Copy;
    type Reference: Copy;

    const TAG: Tag = <Self::Category as Category>::TAG;

    fn position(&self) -> Difference;

    /// Element at the current position, panics when out of range.
    fn current(&self) -> Self::Reference;

    /// Element at the current position, `None` when out of range.
    fn get(&self) -> Option<Self::Reference>;

    /// Element `n` positions away, same as `(*self + n).current()`.
    #[inline]
    fn at(&self, n: Difference) -> Self::Reference {
        (*self + n).current()
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    #[inline]
    fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Moves forward, returns a copy holding the previous position.
    #[inline]
    fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += 1;
        previous
    }

    /// Moves backward, returns a copy holding the previous position.
    #[inline]
    fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= 1;
        previous
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> Difference {
        *other - *self
    }
}
