use clap::Args;

/// Conditions a value has to meet. All given conditions must hold; with no
/// conditions every value matches.
#[derive(Debug, Default, Args)]
pub(crate) struct Condition {
    /// Value must be equal to this
    #[arg(long, allow_negative_numbers = true)]
    equals: Option<i64>,
    /// Value must be greater than this
    #[arg(long, allow_negative_numbers = true)]
    above: Option<i64>,
    /// Value must be less than this
    #[arg(long, allow_negative_numbers = true)]
    below: Option<i64>,
}

impl Condition {
    pub(crate) fn matches(&self, value: i64) -> bool {
        self.equals.map_or(true, |equals| value == equals)
            && self.above.map_or(true, |above| value > above)
            && self.below.map_or(true, |below| value < below)
    }
}
