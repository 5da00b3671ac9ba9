use std::convert::Infallible;
use std::ops::ControlFlow;

use super::traits::SequenceCore;

/// Fold `sequence` into `seed`, skipping the first `skip` elements.
///
/// The first error returned by `combine` stops the traversal. On success
/// the accumulator is always `Some`.
pub(crate) fn try_fold_from<S, A, E, F>(
    sequence: &S,
    seed: A,
    mut skip: usize,
    mut combine: F,
) -> Result<Option<A>, E>
where
    S: SequenceCore + ?Sized,
    F: FnMut(A, S::Item) -> Result<A, E>,
{
    let mut accumulator = Some(seed);
    let flow = sequence.each(|item| {
        if skip > 0 {
            skip -= 1;
            return ControlFlow::Continue(());
        }
        let Some(current) = accumulator.take() else {
            return ControlFlow::Continue(());
        };
        match combine(current, item) {
            Ok(next) => {
                accumulator = Some(next);
                ControlFlow::Continue(())
            }
            Err(e) => ControlFlow::Break(e),
        }
    });
    match flow {
        ControlFlow::Continue(()) => Ok(accumulator),
        ControlFlow::Break(e) => Err(e),
    }
}

pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
