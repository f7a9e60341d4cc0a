//! Capacity-bounded sequential containers.
//!
//! Every container here rejects absent values and, apart from [`SwapList`],
//! rejects values equal to one already stored. Capacity is a logical ceiling
//! set by the caller; it is independent of how much storage a container has
//! physically allocated.
//!
//! Insertion points accept `impl Into<Option<T>>`, so both `list.push(7)` and
//! `list.push(None)` type-check and the latter is reported as
//! [`CollectionError::NullValue`].

pub mod array;
pub mod linked;
pub mod queue;
pub mod sorted;
pub mod stack;
pub mod swap;

pub use array::ArrayList;
pub use linked::LinkedList;
pub use queue::{ArrayQueue, BoundedQueue, LinkedQueue, Queue};
pub use sorted::SortedList;
pub use stack::{ArrayStack, BoundedStack, LinkedStack, Stack};
pub use swap::SwapList;

use crate::core::CollectionError;

/// Ordered container with a capacity ceiling and uniqueness/non-null invariants.
pub trait BoundedSequence<T: PartialEq> {
    /// Front-to-back iterator over live elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Create an empty sequence with the given capacity ceiling.
    fn bounded(capacity: usize) -> Self
    where
        Self: Sized;

    /// Insert `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// Checks run in order: null, duplicate, index, capacity.
    fn insert(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<(), CollectionError>;

    /// Remove and return the element at `index`, shifting the tail left by one.
    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError>;

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> Result<&T, CollectionError>;

    /// Replace the element at `index`, returning the previous one.
    ///
    /// The duplicate check ignores the slot being replaced.
    fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<T, CollectionError>;

    /// Iterate live elements front to back.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Logical capacity ceiling.
    fn capacity(&self) -> usize;

    /// Change the capacity ceiling. Fails if `capacity < len()`.
    fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError>;

    /// Remove every element. Capacity is unchanged.
    fn clear(&mut self);

    /// Index of the first element equal to `value`.
    fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|existing| existing == value)
    }

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the container is at its capacity ceiling.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Whether an element equal to `value` is stored.
    fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Append at the tail.
    fn push(&mut self, value: impl Into<Option<T>>) -> Result<(), CollectionError> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Remove the first element equal to `value`, if any.
    fn remove_item(&mut self, value: &T) -> Option<T> {
        let index = self.position(value)?;
        self.remove_at(index).ok()
    }
}

/// Bounds check shared by the read/replace/remove paths.
pub(crate) const fn check_index(index: usize, size: usize) -> Result<(), CollectionError> {
    if index < size {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, size })
    }
}
