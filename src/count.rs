use crate::cursor::Cursor;
use crate::sequence::Sequence;
use std::ops::Add;

/// Infinite arithmetic progression `start, start + delta, start + 2 * delta, ...`
///
/// A zero `delta` is allowed and behaves like [`repeat`](crate::repeat::repeat).
#[derive(Debug, Clone)]
pub struct Count<T> {
    start: T,
    delta: T,
}

impl<T> Count<T> {
    pub fn new(start: T, delta: T) -> Self {
        Count { start, delta }
    }
}

impl<T> Sequence for Count<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;
    type Cursor<'s>
        = CountCursor<'s, T>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        CountCursor {
            start: &self.start,
            delta: &self.delta,
            current: None,
        }
    }
}

/// Cursor for [`Count`]
///
/// Holds the last value handed out. The next one is only computed when it is
/// asked for, so no value before `start` or past the last requested one is
/// ever evaluated.
#[derive(Debug)]
pub struct CountCursor<'s, T> {
    start: &'s T,
    delta: &'s T,
    current: Option<T>,
}

impl<'s, T> Cursor for CountCursor<'s, T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.current.take() {
            None => self.start.clone(),
            Some(previous) => previous + self.delta.clone(),
        };
        self.current = Some(value.clone());
        Some(value)
    }
}

/// Convenience function to create a Count sequence
pub fn count<T>(start: T, delta: T) -> Count<T>
where
    T: Clone + Add<Output = T>,
{
    Count::new(start, delta)
}
