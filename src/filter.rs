use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Sequence combinator that keeps the elements whose paired predicate is `true`
///
/// The element sequence and the predicate sequence are driven in lockstep:
/// every element considered consumes exactly one boolean. An element paired
/// with `false` is pulled and dropped; the first element paired with `true`
/// is returned.
///
/// If either side runs out before a `true`/element pair completes, that
/// exhaustion is passed through. Pairing sequences of different lengths is
/// the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    sequence: S,
    predicates: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(sequence: S, predicates: P) -> Self {
        Filter {
            sequence,
            predicates,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Sequence<Item = bool>,
{
    type Item = S::Item;
    type Cursor<'s>
        = FilterCursor<S::Cursor<'s>, P::Cursor<'s>>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        FilterCursor {
            inner: self.sequence.iter(),
            predicates: self.predicates.iter(),
        }
    }
}

/// Cursor for [`Filter`]
pub struct FilterCursor<C, P> {
    inner: C,
    predicates: P,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Cursor<Item = bool>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.predicates.next()? {
                return self.inner.next();
            }
            self.inner.next()?;
        }
    }
}

/// Convenience function to create a Filter sequence
pub fn filter<S, P>(sequence: S, predicates: P) -> Filter<S, P>
where
    S: Sequence,
    P: Sequence<Item = bool>,
{
    Filter::new(sequence, predicates)
}

/// Extension trait to add .filter() method support for sequences
pub trait FilterExt: Sequence + Sized {
    fn filter<P>(self, predicates: P) -> Filter<Self, P>
    where
        P: Sequence<Item = bool>,
    {
        Filter::new(self, predicates)
    }
}

/// Implement FilterExt for all sequences
impl<S> FilterExt for S where S: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count;
    use crate::cycle::CycleExt;
    use crate::repeat::repeat;
    use crate::take::take;
    use crate::testing::{Tally, tracked};
    use crate::values::values;
    use itertools::assert_equal;

    #[test]
    fn test_filter_lockstep() {
        let predicates = values(vec![true, false, true, false, true]);
        let seq = filter(take(5, count(0, 1)), take(5, predicates));
        let mut cursor = seq.iter();

        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(4));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_filter_all_true() {
        let seq = values(vec!['a', 'b']).filter(repeat(true));
        assert_equal(seq.iter().into_std_iter(), ['a', 'b']);
    }

    #[test]
    fn test_filter_boolean_elements() {
        // Element values of `false` are real values, not exhaustion
        let seq = filter(values(vec![false, true, false]), repeat(true));
        assert_equal(seq.iter().into_std_iter(), [false, true, false]);
    }

    #[test]
    fn test_filter_with_cycled_mask() {
        // Every third number
        let seq = count(0, 1).filter(values(vec![false, false, true]).cycle());
        let mut cursor = seq.iter();

        assert_eq!(cursor.next_chunk(4), Ok(vec![2, 5, 8, 11]));
    }

    #[test]
    fn test_filter_predicates_run_out() {
        let seq = filter(count(0, 1), values(vec![false, true]));
        let mut cursor = seq.iter();

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_filter_elements_run_out_while_discarding() {
        let seq = filter(values(vec![1, 2]), repeat(false));
        let mut cursor = seq.iter();
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_filter_consumes_one_element_per_predicate() {
        let tally = Tally::default();
        let seq = filter(
            tracked(count(0, 1), &tally),
            values(vec![false, false, false, true]),
        );
        let mut cursor = seq.iter();

        assert_eq!(cursor.next(), Some(3));
        assert_eq!(tally.pulled(), 4);
    }
}
