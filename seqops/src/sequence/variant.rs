use std::marker::PhantomData;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::error;

use super::traits::SequenceCore;

// this size should be below a usize
const MAXIMUM_RANGE_SIZE: i64 = 2_i64.pow(25);

#[derive(Debug, Clone, PartialEq)]
pub struct Empty<T> {
    item: PhantomData<T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Empty { item: PhantomData }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceCore for Empty<T> {
    type Item = T;

    #[inline]
    fn each<B, F>(&self, _visit: F) -> ControlFlow<B>
    where
        F: FnMut(T) -> ControlFlow<B>,
    {
        ControlFlow::Continue(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct One<T> {
    item: T,
}

impl<T> One<T> {
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> From<T> for One<T> {
    fn from(item: T) -> Self {
        One { item }
    }
}

impl<T: Clone> SequenceCore for One<T> {
    type Item = T;

    #[inline]
    fn each<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(T) -> ControlFlow<B>,
    {
        visit(self.item.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Many<T> {
    items: Rc<[T]>,
}

impl<T> Many<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> From<Vec<T>> for Many<T> {
    fn from(items: Vec<T>) -> Self {
        Many {
            items: items.into(),
        }
    }
}

impl<T: Clone> SequenceCore for Many<T> {
    type Item = T;

    #[inline]
    fn each<B, F>(&self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(T) -> ControlFlow<B>,
    {
        self.items.iter().cloned().try_for_each(visit)
    }
}

/// A half-open range of integers, `start..end`.
///
/// A range with `end <= start` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> error::Result<Self> {
        // i128 so that i64::MIN..i64::MAX doesn't overflow
        let length = i128::from(end) - i128::from(start);
        if length > i128::from(MAXIMUM_RANGE_SIZE) {
            return Err(error::Error::RangeTooLarge);
        }
        Ok(Range { start, end })
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        // we know the length fits, as we cannot construct larger ranges
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl SequenceCore for Range {
    type Item = i64;

    #[inline]
    fn each<B, F>(&self, visit: F) -> ControlFlow<B>
    where
        F: FnMut(i64) -> ControlFlow<B>,
    {
        (self.start..self.end).try_for_each(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;

    #[test]
    fn test_empty() {
        let empty = Empty::<i32>::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.map(|i| i * 2), Vec::<i32>::new());
    }

    #[test]
    fn test_one() {
        let one = One::from("a");
        assert_eq!(one.first(), Some("a"));
        assert_eq!(one.find(|s| *s == "b"), None);
        assert_eq!(one.into_item(), "a");
    }

    #[test]
    fn test_many_len() {
        let many = Many::from(vec![1, 2, 3]);
        assert_eq!(many.len(), 3);
        assert_eq!(many.get(1), Some(&2));
        assert!(!many.is_empty());
    }

    #[test]
    fn test_range() {
        let range = Range::new(3, 7).unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(range.map(|i| i), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_range_reversed_is_empty() {
        let range = Range::new(7, 3).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.first(), None);
    }

    #[test]
    fn test_range_too_large() {
        assert_eq!(
            Range::new(0, MAXIMUM_RANGE_SIZE + 1),
            Err(error::Error::RangeTooLarge)
        );
        assert_eq!(
            Range::new(i64::MIN, i64::MAX),
            Err(error::Error::RangeTooLarge)
        );
        assert!(Range::new(0, MAXIMUM_RANGE_SIZE).is_ok());
    }
}
