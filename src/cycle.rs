use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Sequence combinator that restarts another sequence each time it runs out
///
/// When the active inner cursor signals exhaustion it is dropped and a fresh
/// one is requested from the inner sequence. Only one restart is attempted
/// per call: cycling an empty sequence therefore signals exhaustion instead
/// of looping forever.
#[derive(Debug, Clone)]
pub struct Cycle<S> {
    sequence: S,
}

impl<S> Cycle<S> {
    pub fn new(sequence: S) -> Self {
        Cycle { sequence }
    }
}

impl<S: Sequence> Sequence for Cycle<S> {
    type Item = S::Item;
    type Cursor<'s>
        = CycleCursor<'s, S>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        CycleCursor {
            sequence: &self.sequence,
            active: self.sequence.iter(),
        }
    }
}

/// Cursor for [`Cycle`]
pub struct CycleCursor<'s, S>
where
    S: Sequence + 's,
{
    sequence: &'s S,
    active: S::Cursor<'s>,
}

impl<'s, S> Cursor for CycleCursor<'s, S>
where
    S: Sequence + 's,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.active.next() {
            Some(value) => Some(value),
            None => {
                // Assigning drops the exhausted cursor before the new one is used
                self.active = self.sequence.iter();
                self.active.next()
            }
        }
    }
}

/// Convenience function to create a Cycle sequence
pub fn cycle<S: Sequence>(sequence: S) -> Cycle<S> {
    Cycle::new(sequence)
}

/// Extension trait to add .cycle() method support for sequences
pub trait CycleExt: Sequence + Sized {
    fn cycle(self) -> Cycle<Self> {
        Cycle::new(self)
    }
}

/// Implement CycleExt for all sequences
impl<S> CycleExt for S where S: Sequence {}
