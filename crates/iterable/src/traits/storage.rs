/// Host shape exposing an inner storage member.
///
/// Hosts using the [`Delegate`](crate::Delegate) strategy forward `begin`/`end`
/// to the target verbatim, which needs an [`Iterable`](crate::Iterable)
/// target. Any other target still forwards its own iterator through
/// [`storage_iter`](Storage::storage_iter), random access or not.
pub trait Storage {
    type Target: ?Sized;

    fn storage(&self) -> &Self::Target;

    /// The storage member's own iterator.
    #[inline]
    fn storage_iter<'a>(&'a self) -> <&'a Self::Target as IntoIterator>::IntoIter
    where
        &'a Self::Target: IntoIterator,
    {
        self.storage().into_iter()
    }
}

pub trait StorageMut: Storage {
    fn storage_mut(&mut self) -> &mut Self::Target;

    /// The storage member's own mutable iterator.
    #[inline]
    fn storage_iter_mut<'a>(&'a mut self) -> <&'a mut Self::Target as IntoIterator>::IntoIter
    where
        &'a mut Self::Target: IntoIterator,
    {
        self.storage_mut().into_iter()
    }
}
