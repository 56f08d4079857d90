use crate::{For, RandomAccess, Range, Strategy, StrategyMut};

/// Cursor type produced by `D`'s strategy.
pub type CursorOf<'a, D> = <<D as Iterable>::Strategy as Strategy<D>>::Cursor<'a>;
/// Mutable cursor type produced by `D`'s strategy.
pub type CursorMutOf<'a, D> = <<D as Iterable>::Strategy as StrategyMut<D>>::CursorMut<'a>;
/// Iterator over `[begin, end)` of `D`.
pub type IterOf<'a, D> = Range<CursorOf<'a, D>>;
/// Item yielded when iterating `D`.
pub type ItemOf<'a, D> = <CursorOf<'a, D> as RandomAccess>::Reference;

/// Grants a host the `begin`/`end` entry points of iteration consumers.
///
/// The strategy decides how: [`Delegate`](crate::Delegate) forwards to the
/// host's storage member, [`Synthesize`](crate::Synthesize) builds cursors at
/// `0` and at the host's length. Implement it with a single line or through
/// `#[derive(Iterable)]`:
///
/// ```rust
/// use std::ops::Index;
///
/// use iterable::{Indexed, Iterable, Synthesize};
///
/// struct Squares(usize, Vec<u64>);
///
/// impl Index<usize> for Squares {
///     type Output = u64;
///
///     fn index(&self, index: usize) -> &u64 {
///         &self.1[index]
///     }
/// }
///
/// impl Indexed for Squares {
///     fn len(&self) -> usize {
///         self.0
///     }
/// }
///
/// impl Iterable for Squares {
///     type Strategy = Synthesize;
/// }
///
/// let squares = Squares(3, vec![0, 1, 4, 9]);
/// assert_eq!(squares.elements().copied().collect::<Vec<_>>(), [0, 1, 4]);
/// assert_eq!(squares.end() - squares.begin(), 3);
/// ```
pub trait Iterable {
    type Strategy: Strategy<Self>;

    /// Wraps a shared borrow of the host.
    #[inline]
    fn iterable(&self) -> For<'_, Self, Self::Strategy> {
        For::new(self)
    }

    #[inline]
    fn begin(&self) -> CursorOf<'_, Self> {
        <Self::Strategy as Strategy<Self>>::begin(self)
    }

    #[inline]
    fn end(&self) -> CursorOf<'_, Self> {
        <Self::Strategy as Strategy<Self>>::end(self)
    }

    #[inline]
    fn cbegin(&self) -> CursorOf<'_, Self> {
        self.begin()
    }

    #[inline]
    fn cend(&self) -> CursorOf<'_, Self> {
        self.end()
    }

    /// Elements of `[begin, end)`.
    #[inline]
    fn elements(&self) -> IterOf<'_, Self> {
        Range::new(self.begin(), self.end())
    }

    #[inline]
    fn begin_mut(&mut self) -> CursorMutOf<'_, Self>
    where
        Self::Strategy: StrategyMut<Self>,
    {
        <Self::Strategy as StrategyMut<Self>>::begin_mut(self)
    }

    #[inline]
    fn end_mut(&mut self) -> CursorMutOf<'_, Self>
    where
        Self::Strategy: StrategyMut<Self>,
    {
        <Self::Strategy as StrategyMut<Self>>::end_mut(self)
    }
}
