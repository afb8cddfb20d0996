use crate::cursor::Cursor;
use crate::sequence::Sequence;
use std::slice;

/// Finite sequence over an owned list of values
///
/// Cursors yield clones of the items in order and then signal exhaustion.
/// An empty list gives a sequence that is exhausted from the first call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values<T> {
    items: Vec<T>,
}

impl<T> Values<T> {
    pub fn new(items: Vec<T>) -> Self {
        Values { items }
    }
}

impl<T> FromIterator<T> for Values<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Values::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Sequence for Values<T> {
    type Item = T;
    type Cursor<'s>
        = ValuesCursor<'s, T>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        ValuesCursor {
            items: self.items.iter(),
        }
    }
}

/// Cursor for [`Values`]
#[derive(Debug)]
pub struct ValuesCursor<'s, T> {
    items: slice::Iter<'s, T>,
}

impl<'s, T: Clone> Cursor for ValuesCursor<'s, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().cloned()
    }
}

/// Convenience function to create a Values sequence
pub fn values<T: Clone>(items: Vec<T>) -> Values<T> {
    Values::new(items)
}
