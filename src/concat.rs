use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Sequence combinator that yields all of one sequence followed by all of another
///
/// Both inner cursors are created up front. The first is dropped as soon as
/// it signals exhaustion; the second's exhaustion ends the concatenation.
#[derive(Debug, Clone)]
pub struct Concat<S1, S2> {
    first: S1,
    second: S2,
}

impl<S1, S2> Concat<S1, S2> {
    pub fn new(first: S1, second: S2) -> Self {
        Concat { first, second }
    }
}

impl<S1, S2> Sequence for Concat<S1, S2>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
{
    type Item = S1::Item;
    type Cursor<'s>
        = ConcatCursor<S1::Cursor<'s>, S2::Cursor<'s>>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: Some(self.first.iter()),
            second: self.second.iter(),
        }
    }
}

/// Cursor for [`Concat`]
pub struct ConcatCursor<C1, C2> {
    /// `None` once the first cursor has been drained
    first: Option<C1>,
    second: C2,
}

impl<C1, C2> Cursor for ConcatCursor<C1, C2>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
{
    type Item = C1::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                Some(value) => return Some(value),
                None => self.first = None,
            }
        }
        self.second.next()
    }
}

/// Convenience function to create a Concat sequence
pub fn concat<S1, S2>(first: S1, second: S2) -> Concat<S1, S2>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
{
    Concat::new(first, second)
}

/// Extension trait to add .concat() method support for sequences
pub trait ConcatExt: Sequence + Sized {
    fn concat<S>(self, second: S) -> Concat<Self, S>
    where
        S: Sequence<Item = Self::Item>,
    {
        Concat::new(self, second)
    }
}

/// Implement ConcatExt for all sequences
impl<S> ConcatExt for S where S: Sequence {}
