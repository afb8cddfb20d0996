use crate::error::SequenceError;
use crate::iter::CursorIter;

/// Stateful, single-pass traversal over a sequence
///
/// A cursor only moves forward. Each call to `next` advances exactly one
/// logical step and yields the element found there, or `None` once the
/// sequence has nothing more to give. `None` is the only exhaustion signal,
/// so element types such as `bool` or `Option<_>` stay unambiguous.
///
/// After `next` has returned `None` a well-behaved caller stops driving the
/// cursor. What a cursor does when called again is unspecified unless its
/// combinator documents otherwise (`take` and `skip` both keep returning
/// `None`). To start over, ask the owning sequence for a fresh cursor.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Item;

    /// Advance one step and yield the element, or `None` when exhausted
    fn next(&mut self) -> Option<Self::Item>;

    /// Advance one step, treating exhaustion as an error
    fn try_next(&mut self) -> Result<Self::Item, SequenceError> {
        self.next().ok_or(SequenceError::Exhausted {
            advanced: 0,
            requested: 1,
        })
    }

    /// Advance `n` steps, discarding the elements
    ///
    /// Stops at the first exhaustion and reports how many steps were taken.
    /// The cursor must then be treated as exhausted.
    fn advance_by(&mut self, n: usize) -> Result<(), SequenceError> {
        for advanced in 0..n {
            if self.next().is_none() {
                return Err(SequenceError::Exhausted {
                    advanced,
                    requested: n,
                });
            }
        }
        Ok(())
    }

    /// Collect exactly `n` elements
    ///
    /// Elements consumed before an early exhaustion are dropped along with
    /// the error. Capacity grows with what the cursor actually yields, so an
    /// oversized `n` on a short sequence only reports exhaustion.
    fn next_chunk(&mut self, n: usize) -> Result<Vec<Self::Item>, SequenceError> {
        let mut chunk = Vec::with_capacity(n.min(16));
        while chunk.len() < n {
            match self.next() {
                Some(value) => chunk.push(value),
                None => {
                    return Err(SequenceError::Exhausted {
                        advanced: chunk.len(),
                        requested: n,
                    });
                }
            }
        }
        Ok(chunk)
    }

    /// Adapt this cursor into a standard library iterator
    fn into_std_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}
