use std::iter::FusedIterator;

use log::debug;

use crate::{Difference, RandomAccess};

/// Iterator over the half-open cursor range `[begin, end)`.
///
/// Yields `current()` at every position, front to back or back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<I> {
    front: I,
    back: I,
}

impl<I> Range<I>
where
    I: RandomAccess,
{
    /// A `begin` past `end` makes an empty range.
    pub fn new(begin: I, end: I) -> Self {
        if begin > end {
            debug!(
                "range begins at {} past its end at {}, treating it as empty",
                begin.position(),
                end.position()
            );
            return Self {
                front: begin,
                back: begin,
            };
        }

        Self {
            front: begin,
            back: end,
        }
    }

    /// Cursor at the next element from the front.
    #[inline]
    pub fn begin(&self) -> I {
        self.front
    }

    /// Cursor one past the next element from the back.
    #[inline]
    pub fn end(&self) -> I {
        self.back
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.back.position().abs_diff(self.front.position())
    }
}

impl<I> Iterator for Range<I>
where
    I: RandomAccess,
{
    type Item = I::Reference;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            Some(self.front.post_increment().current())
        } else {
            None
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.front = self.back;
            return None;
        }

        self.front += n as Difference;
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<I> DoubleEndedIterator for Range<I>
where
    I: RandomAccess,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            Some(self.back.decrement().current())
        } else {
            None
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.back = self.front;
            return None;
        }

        self.back -= n as Difference;
        self.next_back()
    }
}

impl<I> ExactSizeIterator for Range<I>
where
    I: RandomAccess,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<I> FusedIterator for Range<I> where I: RandomAccess {}
