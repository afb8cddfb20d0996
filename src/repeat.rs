use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Infinite sequence yielding the same value on every step
///
/// The cursor hands out clones of the stored value and never signals
/// exhaustion.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T> Repeat<T> {
    pub fn new(value: T) -> Self {
        Repeat { value }
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor<'s>
        = RepeatCursor<'s, T>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        RepeatCursor { value: &self.value }
    }
}

/// Cursor for [`Repeat`]
#[derive(Debug)]
pub struct RepeatCursor<'s, T> {
    value: &'s T,
}

impl<'s, T: Clone> Cursor for RepeatCursor<'s, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.value.clone())
    }
}

/// Convenience function to create a Repeat sequence
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat::new(value)
}
