//! FIFO queue adapter over any [`BoundedSequence`].

use std::marker::PhantomData;

use crate::collections::{ArrayList, BoundedSequence, LinkedList};
use crate::core::CollectionError;

/// Abstraction for bounded FIFO queues.
pub trait Queue<T> {
    /// Append at the tail. Fails with `CapacityExceeded` when full.
    fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<(), CollectionError>;
    /// Remove the head. Fails with `EmptyContainer` when empty.
    fn dequeue(&mut self) -> Result<T, CollectionError>;
    /// Borrow the head without removing it.
    fn peek(&self) -> Option<&T>;
    /// Current depth.
    fn len(&self) -> usize;
    /// Maximum depth.
    fn capacity(&self) -> usize;
    /// Change the maximum depth. Fails if below the current depth.
    fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError>;
    /// Whether an equal element is queued.
    fn contains(&self, value: &T) -> bool;
    /// Remove the first equal element, keeping the order of the others.
    fn remove_item(&mut self, value: &T) -> Option<T>;

    /// Whether the queue holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the queue is at capacity.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Queue whose storage and capacity are those of the backing sequence `S`.
#[derive(Debug, Clone)]
pub struct BoundedQueue<S, T> {
    list: S,
    _marker: PhantomData<T>,
}

/// Queue backed by an [`ArrayList`].
pub type ArrayQueue<T> = BoundedQueue<ArrayList<T>, T>;

/// Queue backed by a [`LinkedList`].
pub type LinkedQueue<T> = BoundedQueue<LinkedList<T>, T>;

impl<S, T> BoundedQueue<S, T>
where
    S: BoundedSequence<T>,
    T: PartialEq,
{
    /// Create an empty queue holding at most `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: S::bounded(capacity),
            _marker: PhantomData,
        }
    }

    /// Borrow the backing sequence, head first.
    pub const fn as_sequence(&self) -> &S {
        &self.list
    }
}

impl<S, T> Queue<T> for BoundedQueue<S, T>
where
    S: BoundedSequence<T>,
    T: PartialEq,
{
    fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<(), CollectionError> {
        self.list.push(value)
    }

    fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.list.is_empty() {
            return Err(CollectionError::EmptyContainer);
        }
        self.list.remove_at(0)
    }

    fn peek(&self) -> Option<&T> {
        self.list.get(0).ok()
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

    fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    fn remove_item(&mut self, value: &T) -> Option<T> {
        self.list.remove_item(value)
    }
}
