use std::{any::type_name, fmt, marker::PhantomData};

use log::trace;

use crate::{RandomAccess, Range, Strategy};

/// Iteration entry points over a borrowed host.
///
/// `S` decides how the cursors are produced, see [`Strategy`]. Any host can be
/// wrapped, whether or not it implements [`Iterable`](crate::Iterable):
///
/// ```rust
/// use iterable::{For, Synthesize};
///
/// let values = [3, 1, 4];
/// let wrapped = For::<_, Synthesize>::new(&values);
///
/// assert_eq!(wrapped.end() - wrapped.begin(), 3);
/// assert_eq!(wrapped.into_iter().copied().sum::<i32>(), 8);
/// ```
pub struct For<'a, D: ?Sized, S> {
    host: &'a D,
    _strategy: PhantomData<S>,
}

impl<'a, D, S> For<'a, D, S>
where
    D: ?Sized,
    S: Strategy<D>,
{
    pub fn new(host: &'a D) -> Self {
        trace!(
            "iterating {} through {}",
            type_name::<D>(),
            type_name::<S>()
        );
        Self {
            host,
            _strategy: PhantomData,
        }
    }

    #[inline]
    pub fn host(&self) -> &'a D {
        self.host
    }

    #[inline]
    pub fn begin(&self) -> S::Cursor<'a> {
        S::begin(self.host)
    }

    #[inline]
    pub fn end(&self) -> S::Cursor<'a> {
        S::end(self.host)
    }

    #[inline]
    pub fn cbegin(&self) -> S::Cursor<'a> {
        self.begin()
    }

    #[inline]
    pub fn cend(&self) -> S::Cursor<'a> {
        self.end()
    }

    #[inline]
    pub fn iter(&self) -> Range<S::Cursor<'a>> {
        Range::new(self.begin(), self.end())
    }
}

impl<'a, D, S> IntoIterator for For<'a, D, S>
where
    D: ?Sized,
    S: Strategy<D>,
{
    type Item = <S::Cursor<'a> as RandomAccess>::Reference;
    type IntoIter = Range<S::Cursor<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, D, S> IntoIterator for &For<'a, D, S>
where
    D: ?Sized,
    S: Strategy<D>,
{
    type Item = <S::Cursor<'a> as RandomAccess>::Reference;
    type IntoIter = Range<S::Cursor<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<D, S> Clone for For<'_, D, S>
where
    D: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, S> Copy for For<'_, D, S> where D: ?Sized {}

impl<D, S> fmt::Debug for For<'_, D, S>
where
    D: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("For")
            .field("host", &type_name::<D>())
            .field("strategy", &type_name::<S>())
            .finish()
    }
}
