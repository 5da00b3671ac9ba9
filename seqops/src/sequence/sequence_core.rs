use std::ops::ControlFlow;

use super::traits::SequenceCore;
use super::variant::{Empty, Many, One};

/// An owned, ordered sequence of items.
///
/// The representation depends on the number of items: no items, one item,
/// or a shared list of many.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence<T> {
    Empty(Empty<T>),
    One(One<T>),
    Many(Many<T>),
}

impl<T> Sequence<T> {
    /// Construct an empty sequence
    pub fn empty() -> Self {
        Sequence::Empty(Empty::new())
    }

    /// Get the length of the sequence
    pub fn len(&self) -> usize {
        match self {
            Sequence::Empty(_) => 0,
            Sequence::One(_) => 1,
            Sequence::Many(many) => many.len(),
        }
    }

    /// Check whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Sequence::Empty(_))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(mut items: Vec<T>) -> Self {
        if items.len() > 1 {
            return Sequence::Many(items.into());
        }
        match items.pop() {
            Some(item) => Sequence::One(item.into()),
            None => Sequence::empty(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T: Clone> SequenceCore for Sequence<T> {
    type Item = T;

    fn each<B, F>(&self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(T) -> ControlFlow<B>,
    {
        match self {
            Sequence::Empty(empty) => empty.each(visit),
            Sequence::One(one) => one.each(visit),
            Sequence::Many(many) => many.each(visit),
        }
    }
}
