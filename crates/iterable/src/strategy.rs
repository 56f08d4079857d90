use std::marker::PhantomData;

#[cfg(contiguous_cursors)]
use crate::{Contiguous, ContiguousIndexed};
use crate::{
    Cursor, CursorMut, CursorMutOf, CursorOf, Indexed, IndexedMut, Iterable, Ordinary,
    RandomAccess, Storage, StorageMut,
};

/// How a host produces its `begin`/`end` cursors.
pub trait Strategy<D: ?Sized> {
    type Cursor<'a>: RandomAccess
    where
        D: 'a;

    fn begin(host: &D) -> Self::Cursor<'_>;

    fn end(host: &D) -> Self::Cursor<'_>;
}

/// Strategy that can also hand out cursors over a mutable host view.
pub trait StrategyMut<D: ?Sized>: Strategy<D> {
    type CursorMut<'a>
    where
        D: 'a;

    fn begin_mut(host: &mut D) -> Self::CursorMut<'_>;

    fn end_mut(host: &mut D) -> Self::CursorMut<'_>;
}

/// Synthesis path: cursors at `0` and at the host's length, reading elements
/// through the host's indexing operation.
///
/// `C` picks the category. `Synthesize<Contiguous>` needs a
/// [`ContiguousIndexed`] host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Synthesize<C = Ordinary>(PhantomData<C>);

/// Delegation path: `begin`/`end` are the host's storage member's own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Delegate;

impl<D> Strategy<D> for Synthesize<Ordinary>
where
    D: Indexed + ?Sized,
{
    type Cursor<'a>
        = Cursor<'a, D, Ordinary>
    where
        D: 'a;

    #[inline]
    fn begin(host: &D) -> Self::Cursor<'_> {
        Cursor::begin(host)
    }

    #[inline]
    fn end(host: &D) -> Self::Cursor<'_> {
        Cursor::end(host)
    }
}

impl<D> StrategyMut<D> for Synthesize<Ordinary>
where
    D: IndexedMut + ?Sized,
{
    type CursorMut<'a>
        = CursorMut<'a, D, Ordinary>
    where
        D: 'a;

    #[inline]
    fn begin_mut(host: &mut D) -> Self::CursorMut<'_> {
        CursorMut::begin(host)
    }

    #[inline]
    fn end_mut(host: &mut D) -> Self::CursorMut<'_> {
        CursorMut::end(host)
    }
}

#[cfg(contiguous_cursors)]
impl<D> Strategy<D> for Synthesize<Contiguous>
where
    D: ContiguousIndexed + ?Sized,
{
    type Cursor<'a>
        = Cursor<'a, D, Contiguous>
    where
        D: 'a;

    #[inline]
    fn begin(host: &D) -> Self::Cursor<'_> {
        Cursor::begin(host)
    }

    #[inline]
    fn end(host: &D) -> Self::Cursor<'_> {
        Cursor::end(host)
    }
}

#[cfg(contiguous_cursors)]
impl<D> StrategyMut<D> for Synthesize<Contiguous>
where
    D: ContiguousIndexed + IndexedMut + ?Sized,
{
    type CursorMut<'a>
        = CursorMut<'a, D, Contiguous>
    where
        D: 'a;

    #[inline]
    fn begin_mut(host: &mut D) -> Self::CursorMut<'_> {
        CursorMut::begin(host)
    }

    #[inline]
    fn end_mut(host: &mut D) -> Self::CursorMut<'_> {
        CursorMut::end(host)
    }
}

impl<D> Strategy<D> for Delegate
where
    D: Storage + ?Sized,
    D::Target: Iterable,
{
    type Cursor<'a>
        = CursorOf<'a, D::Target>
    where
        D: 'a;

    #[inline]
    fn begin(host: &D) -> Self::Cursor<'_> {
        host.storage().begin()
    }

    #[inline]
    fn end(host: &D) -> Self::Cursor<'_> {
        host.storage().end()
    }
}

impl<D> StrategyMut<D> for Delegate
where
    D: StorageMut + ?Sized,
    D::Target: Iterable,
    <D::Target as Iterable>::Strategy: StrategyMut<D::Target>,
{
    type CursorMut<'a>
        = CursorMutOf<'a, D::Target>
    where
        D: 'a;

    #[inline]
    fn begin_mut(host: &mut D) -> Self::CursorMut<'_> {
        host.storage_mut().begin_mut()
    }

    #[inline]
    fn end_mut(host: &mut D) -> Self::CursorMut<'_> {
        host.storage_mut().end_mut()
    }
}
