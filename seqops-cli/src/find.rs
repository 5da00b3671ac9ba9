use clap::Parser;
use seqops::{Sequence, SequenceExt};

use crate::condition::Condition;
use crate::output;

#[derive(Debug, Parser)]
pub(crate) struct Find {
    #[command(flatten)]
    condition: Condition,
    /// Value to print if nothing matches (default: none)
    #[arg(long, allow_negative_numbers = true)]
    default: Option<i64>,
    /// The values to search
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Find {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let sequence = Sequence::from(self.values.clone());
        let found = match self.default {
            Some(default) => Some(sequence.find_or(default, |v| self.condition.matches(*v))),
            None => sequence.find(|v| self.condition.matches(*v)),
        };
        output::print_option(found)
    }
}

#[derive(Debug, Parser)]
pub(crate) struct FindAll {
    #[command(flatten)]
    condition: Condition,
    /// The values to search
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl FindAll {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let sequence = Sequence::from(self.values.clone());
        output::print_list(&sequence.find_all(|v| self.condition.matches(*v)))
    }
}
