use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Sequence combinator that yields at most the first `count` elements of another sequence
///
/// If the inner sequence runs out early its exhaustion is passed through.
/// Once `count` elements have been handed out the cursor keeps signalling
/// exhaustion without pulling from the inner cursor.
#[derive(Debug, Clone)]
pub struct Take<S> {
    count: usize,
    sequence: S,
}

impl<S> Take<S> {
    pub fn new(count: usize, sequence: S) -> Self {
        Take { count, sequence }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'s>
        = TakeCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        TakeCursor {
            inner: self.sequence.iter(),
            taken: 0,
            limit: self.count,
        }
    }
}

/// Cursor for [`Take`]
pub struct TakeCursor<C> {
    inner: C,
    taken: usize,
    limit: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken >= self.limit {
            return None;
        }
        self.taken += 1;
        self.inner.next()
    }
}

/// Convenience function to create a Take sequence
pub fn take<S: Sequence>(count: usize, sequence: S) -> Take<S> {
    Take::new(count, sequence)
}

/// Extension trait to add .take() method support for sequences
pub trait TakeExt: Sequence + Sized {
    fn take(self, count: usize) -> Take<Self> {
        Take::new(count, self)
    }
}

/// Implement TakeExt for all sequences
impl<S> TakeExt for S where S: Sequence {}
