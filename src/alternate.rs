use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Sequence combinator that interleaves two sequences, starting with the first
///
/// Each call flips the turn before pulling, so the next call always starts
/// from the other side. If the side whose turn it is has run out, the other
/// side answers for this call instead. Once one side is drained the survivor
/// is simply forwarded until it runs out too.
#[derive(Debug, Clone)]
pub struct Alternate<S1, S2> {
    first: S1,
    second: S2,
}

impl<S1, S2> Alternate<S1, S2> {
    pub fn new(first: S1, second: S2) -> Self {
        Alternate { first, second }
    }
}

impl<S1, S2> Sequence for Alternate<S1, S2>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
{
    type Item = S1::Item;
    type Cursor<'s>
        = AlternateCursor<S1::Cursor<'s>, S2::Cursor<'s>>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        AlternateCursor {
            first: Some(self.first.iter()),
            second: Some(self.second.iter()),
            first_turn: true,
        }
    }
}

/// Cursor for [`Alternate`]
///
/// A side is dropped the moment it signals exhaustion and is never pulled
/// again.
pub struct AlternateCursor<C1, C2> {
    first: Option<C1>,
    second: Option<C2>,
    first_turn: bool,
}

/// Pull from one side, releasing it on exhaustion
fn pull<C: Cursor>(side: &mut Option<C>) -> Option<C::Item> {
    let value = side.as_mut()?.next();
    if value.is_none() {
        *side = None;
    }
    value
}

impl<C1, C2> Cursor for AlternateCursor<C1, C2>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
{
    type Item = C1::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let first_turn = self.first_turn;
        self.first_turn = !first_turn;

        if first_turn {
            pull(&mut self.first).or_else(|| pull(&mut self.second))
        } else {
            pull(&mut self.second).or_else(|| pull(&mut self.first))
        }
    }
}

/// Convenience function to create an Alternate sequence
pub fn alternate<S1, S2>(first: S1, second: S2) -> Alternate<S1, S2>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
{
    Alternate::new(first, second)
}

/// Extension trait to add .alternate() method support for sequences
pub trait AlternateExt: Sequence + Sized {
    fn alternate<S>(self, other: S) -> Alternate<Self, S>
    where
        S: Sequence<Item = Self::Item>,
    {
        Alternate::new(self, other)
    }
}

/// Implement AlternateExt for all sequences
impl<S> AlternateExt for S where S: Sequence {}
