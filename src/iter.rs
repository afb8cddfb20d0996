use crate::cursor::Cursor;

/// Standard library [`Iterator`] over a cursor
///
/// Obtained through [`Cursor::into_std_iter`]. Each `Iterator::next` call is
/// exactly one `Cursor::next` call, so the usual iterator adapters apply
/// without any buffering in between.
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        CursorIter { cursor }
    }

    /// Give back the wrapped cursor
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }
}
