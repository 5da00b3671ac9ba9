use std::ops::ControlFlow;

use crate::error;
use crate::operation::Operand;
use crate::reduce::{ReduceArgs, Reduction};

use super::fold;

/// The core sequence interface: a sequence must implement this to function.
///
/// If you do, [`SequenceExt`] provides the whole of the traversal API on
/// top of it.
pub trait SequenceCore {
    /// The element type handed to the visitor.
    type Item;

    /// Visit each element once, in order.
    ///
    /// Traversal stops as soon as `visit` returns [`ControlFlow::Break`];
    /// the break value is returned. If every element was visited the
    /// result is `ControlFlow::Continue(())`.
    fn each<B, F>(&self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(Self::Item) -> ControlFlow<B>;
}

/// Traversal operations available on every [`SequenceCore`].
pub trait SequenceExt: SequenceCore {
    /// Transform each element, collecting the results in order.
    fn map<U, F>(&self, mut transform: F) -> Vec<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        let mut result = Vec::new();
        let _: ControlFlow<()> = self.each(|item| {
            result.push(transform(item));
            ControlFlow::Continue(())
        });
        result
    }

    /// The first element that matches `predicate`.
    ///
    /// Traversal stops at the first match.
    fn find<P>(&self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let found = self.each(|item| {
            if predicate(&item) {
                ControlFlow::Break(item)
            } else {
                ControlFlow::Continue(())
            }
        });
        match found {
            ControlFlow::Break(item) => Some(item),
            ControlFlow::Continue(()) => None,
        }
    }

    /// The first element that matches `predicate`, or `default`.
    ///
    /// The default is returned as it was given. If the element type is
    /// itself callable, the default is not called.
    fn find_or<P>(&self, default: Self::Item, predicate: P) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).unwrap_or(default)
    }

    /// All elements that match `predicate`, in order.
    fn find_all<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut result = Vec::new();
        let _: ControlFlow<()> = self.each(|item| {
            if predicate(&item) {
                result.push(item);
            }
            ControlFlow::Continue(())
        });
        result
    }

    /// The first element, if any.
    fn first(&self) -> Option<Self::Item> {
        match self.each(ControlFlow::Break) {
            ControlFlow::Break(item) => Some(item),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Fold into `seed`, visiting every element.
    ///
    /// The accumulator type may differ from the element type. An empty
    /// sequence gives back the seed.
    fn fold<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let folded = fold::infallible(fold::try_fold_from(self, seed, 0, |accumulator, item| {
            Ok(combine(accumulator, item))
        }));
        // try_fold_from only leaves the accumulator empty on error
        match folded {
            Some(accumulator) => accumulator,
            None => unreachable!("infallible fold lost its accumulator"),
        }
    }

    /// Fold without a seed: the first element is the initial accumulator
    /// and `combine` is applied from the second element on.
    ///
    /// An empty sequence gives `None`.
    fn fold_first<F>(&self, mut combine: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.first()?;
        fold::infallible(fold::try_fold_from(self, first, 1, |accumulator, item| {
            Ok(combine(accumulator, item))
        }))
    }

    /// Reduce with a combining function, starting from `seed` if given and
    /// from the first element otherwise.
    ///
    /// This is the combiner half of [`SequenceExt::reduce`]; it places no
    /// requirement on the element type.
    fn reduce_with<F>(&self, seed: Option<Self::Item>, combine: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        match seed {
            Some(seed) => Some(self.fold(seed, combine)),
            None => self.fold_first(combine),
        }
    }

    /// Reduce the sequence using one of the [`Reduction`] call shapes.
    ///
    /// The element type must be an [`Operand`] so that named operations can
    /// be looked up; use [`SequenceExt::reduce_with`] to reduce other types
    /// with a combining function.
    ///
    /// Without a seed an empty sequence reduces to `None`; with a seed it
    /// reduces to the seed. Errors from a named operation stop the
    /// traversal.
    fn reduce<F>(
        &self,
        reduction: Reduction<Self::Item, F>,
    ) -> error::Result<Option<Self::Item>>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
        Self::Item: Operand,
    {
        let reduced = match reduction {
            Reduction::SeedAndCombiner(seed, combine) => {
                Ok(self.reduce_with(Some(seed), combine))
            }
            Reduction::CombinerOnly(combine) => Ok(self.reduce_with(None, combine)),
            Reduction::SeedAndOperationName(seed, operation) => {
                fold::try_fold_from(self, seed, 0, operation.function::<Self::Item>())
            }
            Reduction::OperationNameOnly(operation) => match self.first() {
                Some(first) => {
                    fold::try_fold_from(self, first, 1, operation.function::<Self::Item>())
                }
                None => Ok(None),
            },
        };
        if let Err(e) = &reduced {
            tracing::trace!(error = %e, "reduce stopped by operation");
        }
        reduced
    }

    /// Reduce with positional arguments, resolved at runtime.
    ///
    /// See [`ReduceArgs::resolve`] for the resolution rules.
    fn reduce_args<F>(
        &self,
        args: ReduceArgs<Self::Item, F>,
    ) -> error::Result<Option<Self::Item>>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
        Self::Item: Operand,
    {
        self.reduce(args.resolve()?)
    }

    /// The smallest element.
    ///
    /// The accumulator is only replaced when it is strictly greater than
    /// the current element, so of equal elements the earliest one wins.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.fold_first(|accumulator, item| {
            if accumulator > item {
                item
            } else {
                accumulator
            }
        })
    }

    /// The largest element.
    ///
    /// The accumulator is only replaced when it is strictly smaller than
    /// the current element, so of equal elements the earliest one wins.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.fold_first(|accumulator, item| {
            if accumulator < item {
                item
            } else {
                accumulator
            }
        })
    }
}

impl<S> SequenceExt for S where S: SequenceCore + ?Sized {}
