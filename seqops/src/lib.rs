//! Generic traversal operations for any sequence.
//!
//! A type becomes a sequence by implementing [`SequenceCore`], which has a
//! single method visiting each element in order. [`SequenceExt`] is
//! implemented for every sequence and provides `map`, `find`, `find_or`,
//! `find_all`, `first`, `reduce`, `min` and `max`.
//!
//! ```
//! use seqops::{Operation, Reduction, Sequence, SequenceExt};
//!
//! let numbers = Sequence::from(vec![1, 2, 3, 4]);
//! assert_eq!(numbers.find_all(|n| *n > 2), vec![3, 4]);
//!
//! type Combine = fn(i64, i64) -> i64;
//! let sum = numbers.reduce(Reduction::<_, Combine>::OperationNameOnly(Operation::Add));
//! assert_eq!(sum, Ok(Some(10)));
//! ```
mod error;
mod operation;
mod reduce;
pub mod sequence;

pub use error::{Error, Result};
pub use operation::{BinaryFn, Operand, Operation};
pub use reduce::{ReduceArg, ReduceArgs, Reduction};
pub use sequence::{
    traverse, Empty, Many, One, Range, Sequence, SequenceCore, SequenceExt, Traversal,
};
