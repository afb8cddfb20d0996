//! # SeqComb - Lazy Sequence Combinator Library
//!
//! Composable, lazily evaluated sequences built from a two-role protocol:
//!
//! - A [`Sequence`] is an immutable, restartable factory. Its only job is to
//!   hand out fresh cursors.
//! - A [`Cursor`] is a stateful, single-pass traversal that yields the next
//!   element or `None` once exhausted.
//!
//! Small generators ([`repeat`], [`count`], [`values`]) are wrapped by
//! combinators ([`skip`], [`take`], [`cycle`], [`concat`], [`alternate`],
//! [`filter`]) into arbitrarily deep trees. Nothing is materialised: every
//! element is computed inside the caller's `next` call.
//!
//! The library emphasizes:
//!
//! - **No sentinels**: exhaustion is `None`, distinct from every element value
//! - **Tree-shaped ownership**: sequences own child sequences by value,
//!   cursors own child cursors and only borrow sequences
//! - **Composability**: every combinator is a plain struct plus an extension
//!   method, so pipelines read left to right
//!
//! ```
//! use seqcomb::*;
//!
//! // Every other element of 0 1 2 10 11 12 0 1 2 ...
//! let seq = take(3, count(0, 1))
//!     .concat(count(10, 1).take(3))
//!     .cycle()
//!     .filter(values(vec![true, false]).cycle());
//!
//! let mut cursor = seq.iter();
//! assert_eq!(cursor.next_chunk(5), Ok(vec![0, 2, 11, 0, 2]));
//! ```

pub mod alternate;
pub mod boxed;
pub mod concat;
pub mod count;
pub mod cursor;
pub mod cycle;
pub mod error;
pub mod filter;
pub mod iter;
pub mod repeat;
pub mod sequence;
pub mod skip;
pub mod take;
pub mod values;

#[cfg(test)]
mod testing;

pub use alternate::{Alternate, AlternateExt, alternate};
pub use boxed::{BoxCursor, BoxSequence, BoxedExt, DynSequence};
pub use concat::{Concat, ConcatExt, concat};
pub use count::{Count, count};
pub use cursor::Cursor;
pub use cycle::{Cycle, CycleExt, cycle};
pub use error::SequenceError;
pub use filter::{Filter, FilterExt, filter};
pub use iter::CursorIter;
pub use repeat::{Repeat, repeat};
pub use sequence::Sequence;
pub use skip::{Skip, SkipExt, skip};
pub use take::{Take, TakeExt, take};
pub use values::{Values, values};
