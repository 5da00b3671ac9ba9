use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use seqops::{Operation, Sequence, SequenceExt};

use crate::output;

#[derive(Debug, Parser)]
pub(crate) struct Map {
    /// Operation to apply: add, subtract, multiply, divide, remainder
    /// (or +, -, *, /, %)
    operation: String,
    /// Right hand side of the operation
    #[arg(allow_negative_numbers = true)]
    operand: i64,
    /// The values to transform
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Map {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let operation = Operation::from_str(&self.operation)
            .with_context(|| format!("unknown operation: {}", self.operation))?;
        let sequence = Sequence::from(self.values.clone());
        let mapped = sequence
            .map(|value| operation.apply(value, self.operand))
            .into_iter()
            .collect::<seqops::Result<Vec<_>>>()?;
        output::print_list(&mapped)
    }
}
