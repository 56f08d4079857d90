use std::collections::VecDeque;

use crate::{ContiguousIndexed, Indexed, Iterable, Ordinary, Synthesize, category::Native};

impl<T> Indexed for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }
}

impl<T> Indexed for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Indexed for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

// SAFETY: slices, arrays and vecs index one adjacent block of `T`, and their
// own `as_ptr` covers the whole block.
unsafe impl<T> ContiguousIndexed for [T] {
    #[inline]
    fn as_ptr(&self) -> *const T {
        <[T]>::as_ptr(self)
    }
}

unsafe impl<T, const N: usize> ContiguousIndexed for [T; N] {
    #[inline]
    fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }
}

unsafe impl<T> ContiguousIndexed for Vec<T> {
    #[inline]
    fn as_ptr(&self) -> *const T {
        Vec::as_ptr(self)
    }
}

impl<T> Iterable for [T] {
    type Strategy = Synthesize<Native>;
}

impl<T, const N: usize> Iterable for [T; N] {
    type Strategy = Synthesize<Native>;
}

impl<T> Iterable for Vec<T> {
    type Strategy = Synthesize<Native>;
}

// Ring buffer, its elements may wrap around.
impl<T> Iterable for VecDeque<T> {
    type Strategy = Synthesize<Ordinary>;
}
