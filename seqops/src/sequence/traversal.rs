use std::ops::ControlFlow;

use super::traits::SequenceCore;

/// A sequence over any cloneable iterator.
///
/// Each traversal starts from a fresh clone of the iterator, so the
/// sequence can be traversed more than once.
#[derive(Debug, Clone)]
pub struct Traversal<I> {
    iter: I,
}

impl<I> Traversal<I>
where
    I: Iterator + Clone,
{
    pub fn new(iter: I) -> Self {
        Traversal { iter }
    }
}

impl<I> SequenceCore for Traversal<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn each<B, F>(&self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(I::Item) -> ControlFlow<B>,
    {
        self.iter.clone().try_for_each(visit)
    }
}

/// Traverse anything that can be iterated more than once, such as a
/// borrowed `Vec` or slice.
pub fn traverse<T>(iterable: T) -> Traversal<T::IntoIter>
where
    T: IntoIterator,
    T::IntoIter: Clone,
{
    Traversal::new(iterable.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;

    #[test]
    fn test_borrowed_elements() {
        let words = vec!["alpha".to_string(), "beta".to_string()];
        let sequence = traverse(&words);
        assert_eq!(sequence.first(), Some(&words[0]));
        assert_eq!(sequence.map(|w| w.len()), vec![5, 4]);
    }

    #[test]
    fn test_traverse_twice() {
        let sequence = traverse(1..4);
        assert_eq!(sequence.map(|i| i * 10), vec![10, 20, 30]);
        assert_eq!(sequence.map(|i| i * 10), vec![10, 20, 30]);
    }

    #[test]
    fn test_find_stops_early() {
        let mut visited = Vec::new();
        let sequence = traverse([1, 2, 3, 4]);
        let found = sequence.find(|i| {
            visited.push(*i);
            *i == 2
        });
        assert_eq!(found, Some(2));
        assert_eq!(visited, vec![1, 2]);
    }
}
