//! LIFO stack adapter over any [`BoundedSequence`].

use std::marker::PhantomData;

use crate::collections::{ArrayList, BoundedSequence, LinkedList};
use crate::core::CollectionError;

/// Abstraction for bounded LIFO stacks.
pub trait Stack<T> {
    /// Push onto the top. Fails with `CapacityExceeded` when full.
    fn push(&mut self, value: impl Into<Option<T>>) -> Result<(), CollectionError>;
    /// Pop the top. Fails with `EmptyContainer` when empty.
    fn pop(&mut self) -> Result<T, CollectionError>;
    /// Borrow the top without removing it.
    fn peek(&self) -> Option<&T>;
    /// Current depth.
    fn len(&self) -> usize;
    /// Maximum depth.
    fn capacity(&self) -> usize;
    /// Change the maximum depth. Fails if below the current depth.
    fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError>;

    /// Whether the stack holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stack whose top is the tail of the backing sequence `S`.
#[derive(Debug, Clone)]
pub struct BoundedStack<S, T> {
    list: S,
    _marker: PhantomData<T>,
}

/// Stack backed by an [`ArrayList`].
pub type ArrayStack<T> = BoundedStack<ArrayList<T>, T>;

/// Stack backed by a [`LinkedList`].
pub type LinkedStack<T> = BoundedStack<LinkedList<T>, T>;

impl<S, T> BoundedStack<S, T>
where
    S: BoundedSequence<T>,
    T: PartialEq,
{
    /// Create an empty stack holding at most `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: S::bounded(capacity),
            _marker: PhantomData,
        }
    }
}

impl<S, T> Stack<T> for BoundedStack<S, T>
where
    S: BoundedSequence<T>,
    T: PartialEq,
{
    fn push(&mut self, value: impl Into<Option<T>>) -> Result<(), CollectionError> {
        self.list.push(value)
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        match self.list.len() {
            0 => Err(CollectionError::EmptyContainer),
            len => self.list.remove_at(len - 1),
        }
    }

    fn peek(&self) -> Option<&T> {
        self.list.len().checked_sub(1).and_then(|top| self.list.get(top).ok())
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn capacity(&self) -> usize {
        self.list.capacity()
    }

    fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        self.list.set_capacity(capacity)
    }
}
