use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Sequence combinator that drops the first `count` elements of another sequence
///
/// The skipping happens eagerly, when the cursor is created. A sequence with
/// fewer than `count` elements yields a cursor that is exhausted from the
/// start.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    count: usize,
    sequence: S,
}

impl<S> Skip<S> {
    pub fn new(count: usize, sequence: S) -> Self {
        Skip { count, sequence }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'s>
        = SkipCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        let mut inner = self.sequence.iter();
        // Running short while skipping is not an error, only an empty result
        let exhausted = inner.advance_by(self.count).is_err();
        SkipCursor { inner, exhausted }
    }
}

/// Cursor for [`Skip`]
pub struct SkipCursor<C> {
    inner: C,
    /// Set when the inner cursor already ran out during skipping; it is not
    /// driven again after that
    exhausted: bool,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        self.inner.next()
    }
}

/// Convenience function to create a Skip sequence
pub fn skip<S: Sequence>(count: usize, sequence: S) -> Skip<S> {
    Skip::new(count, sequence)
}

/// Extension trait to add .skip() method support for sequences
pub trait SkipExt: Sequence + Sized {
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(count, self)
    }
}

/// Implement SkipExt for all sequences
impl<S> SkipExt for S where S: Sequence {}
