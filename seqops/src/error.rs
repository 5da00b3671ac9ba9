use thiserror::Error;

use crate::operation::Operation;

/// Errors raised by sequence operations.
///
/// The argument errors are raised while resolving the arguments of
/// `reduce`; they indicate a wrong call, not a property of the data.
/// The remaining errors come from applying a named operation to the
/// elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Neither an operation nor a block was given to `reduce`.
    #[error("you must provide an operation or a block")]
    MissingOperation,
    /// Both an operation and a block were given to `reduce`.
    #[error("you must provide either an operation symbol or a block, not both")]
    OperationAndBlock,
    /// Something other than an operation symbol was given as the operation.
    #[error("the operation provided must be a symbol")]
    NotASymbol,
    /// An operation or a name was given in the position of the seed.
    #[error("the initial value must be a value, not an operation")]
    InvalidSeed,
    /// More positional arguments than `reduce` accepts.
    #[error("wrong number of arguments (given {0}, expected 0..2)")]
    Arity(usize),
    /// The element type does not support this operation.
    #[error("operation {0} is not supported for this element type")]
    Unsupported(Operation),
    /// Numeric overflow/underflow while applying an operation.
    #[error("numeric overflow in operation {0}")]
    Overflow(Operation),
    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A range larger than we are willing to traverse.
    #[error("range too large")]
    RangeTooLarge,
}

impl Error {
    /// Whether this error is caused by the way `reduce` was called, rather
    /// than by the elements being reduced.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::MissingOperation
                | Error::OperationAndBlock
                | Error::NotASymbol
                | Error::InvalidSeed
                | Error::Arity(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
