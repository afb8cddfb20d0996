//! Drop-tracking sequence wrapper used by the unit tests

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use std::cell::Cell;

/// Counters shared by every [`Tracked`] sequence and cursor built against it
#[derive(Debug, Default)]
pub struct Tally {
    live_sequences: Cell<usize>,
    live_cursors: Cell<usize>,
    cursors_created: Cell<usize>,
    pulled: Cell<usize>,
}

impl Tally {
    pub fn live_sequences(&self) -> usize {
        self.live_sequences.get()
    }

    pub fn live_cursors(&self) -> usize {
        self.live_cursors.get()
    }

    pub fn cursors_created(&self) -> usize {
        self.cursors_created.get()
    }

    /// Total `next` calls made on tracked cursors, exhausted ones included
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    fn acquire(counter: &Cell<usize>) {
        counter.set(counter.get() + 1);
    }

    fn release(counter: &Cell<usize>, what: &str) {
        let current = counter.get();
        assert!(current > 0, "{what} released more often than created");
        counter.set(current - 1);
    }
}

/// Wraps a sequence and records its lifetime and every cursor it hands out
pub struct Tracked<'t, S> {
    sequence: S,
    tally: &'t Tally,
}

pub fn tracked<S: Sequence>(sequence: S, tally: &Tally) -> Tracked<'_, S> {
    Tally::acquire(&tally.live_sequences);
    Tracked { sequence, tally }
}

impl<'t, S: Clone> Clone for Tracked<'t, S> {
    fn clone(&self) -> Self {
        Tally::acquire(&self.tally.live_sequences);
        Tracked {
            sequence: self.sequence.clone(),
            tally: self.tally,
        }
    }
}

impl<'t, S> Drop for Tracked<'t, S> {
    fn drop(&mut self) {
        Tally::release(&self.tally.live_sequences, "sequence");
    }
}

impl<'t, S: Sequence> Sequence for Tracked<'t, S> {
    type Item = S::Item;
    type Cursor<'s>
        = TrackedCursor<'s, S::Cursor<'s>>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        Tally::acquire(&self.tally.live_cursors);
        Tally::acquire(&self.tally.cursors_created);
        TrackedCursor {
            inner: self.sequence.iter(),
            tally: self.tally,
        }
    }
}

pub struct TrackedCursor<'s, C> {
    inner: C,
    tally: &'s Tally,
}

impl<'s, C: Cursor> Cursor for TrackedCursor<'s, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        Tally::acquire(&self.tally.pulled);
        self.inner.next()
    }
}

impl<'s, C> Drop for TrackedCursor<'s, C> {
    fn drop(&mut self) {
        Tally::release(&self.tally.live_cursors, "cursor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alternate::alternate;
    use crate::concat::concat;
    use crate::count::count;
    use crate::cycle::cycle;
    use crate::filter::filter;
    use crate::repeat::repeat;
    use crate::skip::skip;
    use crate::take::take;
    use crate::values::values;

    #[test]
    fn test_deep_tree_discarded_unused() {
        let tally = Tally::default();
        {
            let _seq = filter(
                cycle(concat(
                    tracked(take(3, count(0, 1)), &tally),
                    tracked(skip(2, count(100, 1)), &tally),
                )),
                alternate(
                    tracked(repeat(true), &tally),
                    tracked(repeat(false), &tally),
                ),
            );
            assert_eq!(tally.live_sequences(), 4);
        }
        assert_eq!(tally.live_sequences(), 0);
        assert_eq!(tally.cursors_created(), 0);
    }

    #[test]
    fn test_deep_tree_driven_then_discarded() {
        let tally = Tally::default();
        {
            let seq = filter(
                cycle(concat(
                    tracked(values(vec![1, 2]), &tally),
                    tracked(values(vec![3]), &tally),
                )),
                alternate(
                    tracked(repeat(true), &tally),
                    tracked(repeat(false), &tally),
                ),
            );

            {
                let mut cursor = seq.iter();
                // 1 2 3 1 2 3 ... with every other element kept
                assert_eq!(cursor.next_chunk(4), Ok(vec![1, 3, 2, 1]));
                assert_eq!(tally.live_cursors(), 4);
            }
            assert_eq!(tally.live_cursors(), 0);

            // The sequence is still usable after its cursor is gone
            let mut again = seq.iter();
            assert_eq!(again.next(), Some(1));
        }
        assert_eq!(tally.live_cursors(), 0);
        assert_eq!(tally.live_sequences(), 0);
    }

    #[test]
    fn test_clone_is_counted() {
        let tally = Tally::default();
        let seq = tracked(values(vec![1]), &tally);
        let copy = seq.clone();
        assert_eq!(tally.live_sequences(), 2);

        drop(seq);
        drop(copy);
        assert_eq!(tally.live_sequences(), 0);
    }
}
