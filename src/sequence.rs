use crate::cursor::Cursor;

/// Restartable factory of cursors
///
/// A sequence is an immutable description of a stream of elements. Calling
/// [`iter`](Sequence::iter) never changes the sequence; every call hands out
/// an independent cursor positioned at the same logical beginning.
///
/// Cursors borrow the sequence that produced them. A combinator takes its
/// child sequences by value and owns them, while its cursor owns the child
/// cursors it creates. Dropping either tears down the whole subtree once.
///
/// ```
/// use seqcomb::{Cursor, Sequence, count};
///
/// let evens = count(0, 2);
/// let mut a = evens.iter();
/// let mut b = evens.iter();
/// assert_eq!(a.next(), Some(0));
/// assert_eq!(a.next(), Some(2));
/// assert_eq!(b.next(), Some(0));
/// ```
pub trait Sequence {
    /// The type of elements produced by this sequence's cursors
    type Item;

    /// The cursor type, borrowing the sequence for `'s`
    type Cursor<'s>: Cursor<Item = Self::Item> + 's
    where
        Self: 's;

    /// Produce a fresh cursor starting from the beginning of the sequence
    fn iter(&self) -> Self::Cursor<'_>;
}
