use clap::Parser;
use seqops::{Sequence, SequenceExt};

use crate::output;

#[derive(Debug, Parser)]
pub(crate) struct Values {
    /// The values to operate on
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Values {
    pub(crate) fn sequence(&self) -> Sequence<i64> {
        Sequence::from(self.values.clone())
    }

    pub(crate) fn first(&self) -> anyhow::Result<()> {
        output::print_option(self.sequence().first())
    }

    pub(crate) fn min(&self) -> anyhow::Result<()> {
        output::print_option(self.sequence().min())
    }

    pub(crate) fn max(&self) -> anyhow::Result<()> {
        output::print_option(self.sequence().max())
    }
}
