use crate::cursor::Cursor;
use crate::sequence::Sequence;
use dyn_clone::DynClone;

/// Cursor type handed out by [`BoxSequence`]
pub type BoxCursor<'s, T> = Box<dyn Cursor<Item = T> + 's>;

/// Object-safe counterpart of [`Sequence`]
///
/// Implemented for every cloneable sequence. Only needed directly when
/// storing sequences behind your own pointer type; [`BoxSequence`] covers the
/// common case.
pub trait DynSequence<T>: DynClone {
    fn dyn_iter(&self) -> BoxCursor<'_, T>;
}

dyn_clone::clone_trait_object!(<T> DynSequence<T>);

impl<S> DynSequence<S::Item> for S
where
    S: Sequence + Clone,
{
    fn dyn_iter(&self) -> BoxCursor<'_, S::Item> {
        Box::new(self.iter())
    }
}

/// Type-erased sequence
///
/// Every combinator layer changes the static type of a pipeline. Boxing
/// gives pipelines chosen at runtime a single nameable type, at the cost of
/// one allocation per cursor and dynamic dispatch on `next`.
///
/// The erased sequence carries no `Send` or `Sync` bound, so a
/// `BoxSequence` stays on the thread that built it. Share the concrete
/// pipeline type when several threads need cursors from it.
///
/// ```compile_fail
/// use seqcomb::{BoxedExt, values};
///
/// fn share<S: Sync>(_: &S) {}
/// share(&values(vec![1]).boxed());
/// ```
pub struct BoxSequence<'a, T> {
    inner: Box<dyn DynSequence<T> + 'a>,
}

impl<'a, T> BoxSequence<'a, T> {
    pub fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + Clone + 'a,
    {
        BoxSequence {
            inner: Box::new(sequence),
        }
    }
}

impl<'a, T> Clone for BoxSequence<'a, T> {
    fn clone(&self) -> Self {
        BoxSequence {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Sequence for BoxSequence<'a, T> {
    type Item = T;
    type Cursor<'s>
        = BoxCursor<'s, T>
    where
        Self: 's;

    fn iter(&self) -> Self::Cursor<'_> {
        self.inner.dyn_iter()
    }
}

/// Extension trait to add .boxed() method support for cloneable sequences
pub trait BoxedExt: Sequence + Clone + Sized {
    fn boxed<'a>(self) -> BoxSequence<'a, Self::Item>
    where
        Self: 'a,
    {
        BoxSequence::new(self)
    }
}

/// Implement BoxedExt for all cloneable sequences
impl<S> BoxedExt for S where S: Sequence + Clone {}
