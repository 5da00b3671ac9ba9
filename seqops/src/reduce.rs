use crate::error::{Error, Result};
use crate::operation::Operation;

/// The ways to call `reduce`.
///
/// `T` is the element (and accumulator) type, `F` the combining function.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduction<T, F> {
    /// Fold into `seed` with the combining function.
    SeedAndCombiner(T, F),
    /// Fold with the combining function, starting from the first element.
    CombinerOnly(F),
    /// Fold into `seed` with a named operation.
    SeedAndOperationName(T, Operation),
    /// Fold with a named operation, starting from the first element.
    OperationNameOnly(Operation),
}

impl<T, F> Reduction<T, F> {
    fn shape(&self) -> &'static str {
        match self {
            Reduction::SeedAndCombiner(..) => "seed and combiner",
            Reduction::CombinerOnly(_) => "combiner only",
            Reduction::SeedAndOperationName(..) => "seed and operation name",
            Reduction::OperationNameOnly(_) => "operation name only",
        }
    }
}

/// A positional argument to [`ReduceArgs`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReduceArg<T, F> {
    /// A plain value.
    Value(T),
    /// An operation symbol.
    Symbol(Operation),
    /// A name that is not an operation symbol, such as `"+"` given as text.
    Name(String),
    /// A combining function.
    Callable(F),
}

/// Arguments for `reduce` as given positionally: up to two arguments and
/// an optional block.
///
/// This is resolved into a [`Reduction`] by [`ReduceArgs::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceArgs<T, F> {
    first: Option<ReduceArg<T, F>>,
    second: Option<ReduceArg<T, F>>,
    block: Option<F>,
    given: usize,
}

impl<T, F> Default for ReduceArgs<T, F> {
    fn default() -> Self {
        ReduceArgs {
            first: None,
            second: None,
            block: None,
            given: 0,
        }
    }
}

impl<T, F> ReduceArgs<T, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a positional argument.
    pub fn arg(mut self, arg: ReduceArg<T, F>) -> Self {
        match self.given {
            0 => self.first = Some(arg),
            1 => self.second = Some(arg),
            _ => {}
        }
        self.given += 1;
        self
    }

    /// Add an absent positional argument, which still takes up a position.
    pub fn none(mut self) -> Self {
        self.given += 1;
        self
    }

    /// Set the block.
    pub fn block(mut self, block: F) -> Self {
        self.block = Some(block);
        self
    }

    /// Resolve the arguments into a [`Reduction`].
    ///
    /// - Without any argument or block this fails with
    ///   [`Error::MissingOperation`].
    /// - A lone positional argument without a block is the operation, not
    ///   a seed.
    /// - An operation together with a block fails with
    ///   [`Error::OperationAndBlock`].
    /// - An operation that is neither a symbol nor callable fails with
    ///   [`Error::NotASymbol`], whatever the seed is.
    /// - A seed that is not a plain value fails with [`Error::InvalidSeed`].
    /// - An absent first argument means there is no seed.
    pub fn resolve(self) -> Result<Reduction<T, F>> {
        let resolved = self.resolve_arguments();
        match &resolved {
            Ok(reduction) => {
                tracing::debug!(shape = reduction.shape(), "resolved reduce arguments")
            }
            Err(e) => tracing::debug!(error = %e, "cannot resolve reduce arguments"),
        }
        resolved
    }

    fn resolve_arguments(self) -> Result<Reduction<T, F>> {
        if self.given > 2 {
            return Err(Error::Arity(self.given));
        }
        match (self.first, self.second, self.block) {
            (None, None, None) => Err(Error::MissingOperation),
            (_, Some(_), Some(_)) => Err(Error::OperationAndBlock),
            (Some(operation), None, None) | (None, Some(operation), None) => {
                unseeded(operation)
            }
            (Some(seed), Some(operation), None) => seeded(seed, operation),
            (None, None, Some(block)) => Ok(Reduction::CombinerOnly(block)),
            (Some(seed), None, Some(block)) => match seed {
                ReduceArg::Value(seed) => Ok(Reduction::SeedAndCombiner(seed, block)),
                ReduceArg::Symbol(_) | ReduceArg::Callable(_) => Err(Error::OperationAndBlock),
                ReduceArg::Name(_) => Err(Error::InvalidSeed),
            },
        }
    }
}

fn unseeded<T, F>(operation: ReduceArg<T, F>) -> Result<Reduction<T, F>> {
    match operation {
        ReduceArg::Symbol(operation) => Ok(Reduction::OperationNameOnly(operation)),
        ReduceArg::Callable(combine) => Ok(Reduction::CombinerOnly(combine)),
        ReduceArg::Value(_) | ReduceArg::Name(_) => Err(Error::NotASymbol),
    }
}

// the operation is checked before the seed
fn seeded<T, F>(seed: ReduceArg<T, F>, operation: ReduceArg<T, F>) -> Result<Reduction<T, F>> {
    match operation {
        ReduceArg::Symbol(operation) => Ok(Reduction::SeedAndOperationName(
            seed_value(seed)?,
            operation,
        )),
        ReduceArg::Callable(combine) => {
            Ok(Reduction::SeedAndCombiner(seed_value(seed)?, combine))
        }
        ReduceArg::Value(_) | ReduceArg::Name(_) => Err(Error::NotASymbol),
    }
}

fn seed_value<T, F>(seed: ReduceArg<T, F>) -> Result<T> {
    match seed {
        ReduceArg::Value(seed) => Ok(seed),
        _ => Err(Error::InvalidSeed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Combine = fn(i64, i64) -> i64;

    fn plus(a: i64, b: i64) -> i64 {
        a + b
    }

    fn args() -> ReduceArgs<i64, Combine> {
        ReduceArgs::new()
    }

    #[test]
    fn test_nothing_given() {
        assert_eq!(args().resolve(), Err(Error::MissingOperation));
        assert_eq!(args().none().resolve(), Err(Error::MissingOperation));
    }

    #[test]
    fn test_seed_and_block() {
        let reduction = args().arg(ReduceArg::Value(0)).block(plus).resolve().unwrap();
        assert!(matches!(reduction, Reduction::SeedAndCombiner(0, _)));
    }

    #[test]
    fn test_block_only() {
        let reduction = args().block(plus).resolve().unwrap();
        assert!(matches!(reduction, Reduction::CombinerOnly(_)));
    }

    #[test]
    fn test_seed_and_symbol() {
        assert_eq!(
            args()
                .arg(ReduceArg::Value(0))
                .arg(ReduceArg::Symbol(Operation::Add))
                .resolve(),
            Ok(Reduction::SeedAndOperationName(0, Operation::Add))
        );
    }

    #[test]
    fn test_lone_symbol_is_operation() {
        assert_eq!(
            args().arg(ReduceArg::Symbol(Operation::Add)).resolve(),
            Ok(Reduction::OperationNameOnly(Operation::Add))
        );
    }

    #[test]
    fn test_lone_callable_is_combiner() {
        let reduction = args().arg(ReduceArg::Callable(plus)).resolve().unwrap();
        assert!(matches!(reduction, Reduction::CombinerOnly(_)));
    }

    #[test]
    fn test_lone_value_is_not_a_seed() {
        assert_eq!(
            args().arg(ReduceArg::Value(10)).resolve(),
            Err(Error::NotASymbol)
        );
    }

    #[test]
    fn test_absent_seed() {
        assert_eq!(
            args()
                .none()
                .arg(ReduceArg::Symbol(Operation::Multiply))
                .resolve(),
            Ok(Reduction::OperationNameOnly(Operation::Multiply))
        );
    }

    #[test]
    fn test_symbol_and_block() {
        assert_eq!(
            args()
                .arg(ReduceArg::Value(0))
                .arg(ReduceArg::Symbol(Operation::Add))
                .block(plus)
                .resolve(),
            Err(Error::OperationAndBlock)
        );
        assert_eq!(
            args()
                .arg(ReduceArg::Symbol(Operation::Add))
                .block(plus)
                .resolve(),
            Err(Error::OperationAndBlock)
        );
    }

    #[test]
    fn test_both_checked_before_symbol() {
        assert_eq!(
            args()
                .arg(ReduceArg::Value(0))
                .arg(ReduceArg::Name("+".to_string()))
                .block(plus)
                .resolve(),
            Err(Error::OperationAndBlock)
        );
    }

    #[test]
    fn test_name_is_not_a_symbol() {
        assert_eq!(
            args()
                .arg(ReduceArg::Value(0))
                .arg(ReduceArg::Name("+".to_string()))
                .resolve(),
            Err(Error::NotASymbol)
        );
        assert_eq!(
            args().arg(ReduceArg::Name("+".to_string())).resolve(),
            Err(Error::NotASymbol)
        );
    }

    #[test]
    fn test_value_as_operation() {
        assert_eq!(
            args()
                .arg(ReduceArg::Value(0))
                .arg(ReduceArg::Value(1))
                .resolve(),
            Err(Error::NotASymbol)
        );
    }

    #[test]
    fn test_invalid_seed() {
        assert_eq!(
            args()
                .arg(ReduceArg::Symbol(Operation::Add))
                .arg(ReduceArg::Symbol(Operation::Multiply))
                .resolve(),
            Err(Error::InvalidSeed)
        );
        assert_eq!(
            args()
                .arg(ReduceArg::Name("zero".to_string()))
                .block(plus)
                .resolve(),
            Err(Error::InvalidSeed)
        );
    }

    #[test]
    fn test_operation_checked_before_seed() {
        assert_eq!(
            args()
                .arg(ReduceArg::Symbol(Operation::Add))
                .arg(ReduceArg::Name("+".to_string()))
                .resolve(),
            Err(Error::NotASymbol)
        );
        assert_eq!(
            args()
                .arg(ReduceArg::Name("zero".to_string()))
                .arg(ReduceArg::Value(1))
                .resolve(),
            Err(Error::NotASymbol)
        );
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            args()
                .arg(ReduceArg::Value(0))
                .arg(ReduceArg::Symbol(Operation::Add))
                .arg(ReduceArg::Value(1))
                .resolve(),
            Err(Error::Arity(3))
        );
    }
}
