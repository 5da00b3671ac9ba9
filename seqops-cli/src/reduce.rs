use std::str::FromStr;

use clap::Parser;
use seqops::{Operation, ReduceArg, ReduceArgs, Sequence, SequenceExt};

use crate::output;

type Combine = fn(i64, i64) -> i64;

// saturates at the i64 bounds
fn sum(accumulator: i64, value: i64) -> i64 {
    accumulator.saturating_add(value)
}

#[derive(Debug, Parser)]
pub(crate) struct Reduce {
    /// Initial accumulator value
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Named operation: add, subtract, multiply, divide, remainder
    /// (or +, -, *, /, %)
    #[arg(long)]
    operation: Option<String>,
    /// Combine values with a summing block; the sum saturates at the
    /// integer bounds instead of overflowing
    #[arg(long)]
    block: bool,
    /// The values to reduce
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Reduce {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let sequence = Sequence::from(self.values.clone());
        tracing::debug!(
            values = self.values.len(),
            seed = ?self.seed,
            operation = ?self.operation,
            block = self.block,
            "reducing"
        );
        let result = sequence.reduce_args(self.reduce_args()).map_err(reduce_error)?;
        output::print_option(result)
    }

    fn reduce_args(&self) -> ReduceArgs<i64, Combine> {
        let mut args = ReduceArgs::new();
        if let Some(seed) = self.seed {
            args = args.arg(ReduceArg::Value(seed));
        }
        if let Some(operation) = &self.operation {
            // anything we don't know as an operation is passed on as a
            // plain name, which reduce rejects
            let arg = match Operation::from_str(operation) {
                Ok(operation) => ReduceArg::Symbol(operation),
                Err(_) => ReduceArg::Name(operation.clone()),
            };
            args = args.arg(arg);
        }
        if self.block {
            args = args.block(sum as Combine);
        }
        args
    }
}

fn reduce_error(error: seqops::Error) -> anyhow::Error {
    let context = if error.is_argument_error() {
        "invalid reduce arguments"
    } else {
        "cannot reduce values"
    };
    anyhow::Error::new(error).context(context)
}

#[cfg(test)]
mod tests {
    use seqops::{Error, Reduction};

    use super::*;

    fn reduce(seed: Option<i64>, operation: Option<&str>, block: bool) -> Reduce {
        Reduce {
            seed,
            operation: operation.map(|o| o.to_string()),
            block,
            values: vec![1, 2, 3, 4],
        }
    }

    #[test]
    fn test_seed_and_operation() {
        let args = reduce(Some(0), Some("add"), false).reduce_args();
        assert_eq!(
            args.resolve(),
            Ok(Reduction::SeedAndOperationName(0, Operation::Add))
        );
    }

    #[test]
    fn test_symbol_alias() {
        let args = reduce(None, Some("*"), false).reduce_args();
        assert_eq!(
            args.resolve(),
            Ok(Reduction::OperationNameOnly(Operation::Multiply))
        );
    }

    #[test]
    fn test_unknown_operation_is_not_a_symbol() {
        let args = reduce(Some(0), Some("plus"), false).reduce_args();
        assert_eq!(args.resolve(), Err(Error::NotASymbol));
    }

    #[test]
    fn test_operation_and_block() {
        let args = reduce(None, Some("add"), true).reduce_args();
        assert_eq!(args.resolve(), Err(Error::OperationAndBlock));
    }

    #[test]
    fn test_nothing() {
        let args = reduce(Some(5), None, false).reduce_args();
        assert_eq!(args.resolve(), Err(Error::NotASymbol));
        let args = reduce(None, None, false).reduce_args();
        assert_eq!(args.resolve(), Err(Error::MissingOperation));
    }

    #[test]
    fn test_block_with_seed() {
        let command = reduce(Some(10), None, true);
        let sequence = Sequence::from(command.values.clone());
        assert_eq!(sequence.reduce_args(command.reduce_args()), Ok(Some(20)));
    }

    #[test]
    fn test_block_saturates() {
        let mut command = reduce(None, None, true);
        command.values = vec![i64::MAX, 1, 2];
        let sequence = Sequence::from(command.values.clone());
        assert_eq!(
            sequence.reduce_args(command.reduce_args()),
            Ok(Some(i64::MAX))
        );
    }

    #[test]
    fn test_reduce_error_context() {
        assert_eq!(
            reduce_error(Error::NotASymbol).to_string(),
            "invalid reduce arguments"
        );
        assert_eq!(
            format!("{:#}", reduce_error(Error::DivisionByZero)),
            "cannot reduce values: division by zero"
        );
    }
}
