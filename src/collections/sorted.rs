//! Sorted, duplicate-free list.

use crate::collections::{BoundedSequence, LinkedList};
use crate::core::CollectionError;

/// Unbounded list that keeps its elements in ascending order.
///
/// Backed by a [`LinkedList`]; `add` walks to the first element greater than
/// the new value and links it in front of it.
#[derive(Debug, Clone)]
pub struct SortedList<T> {
    list: LinkedList<T>,
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedList<T> {
    /// Create an empty sorted list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.list.iter()
    }
}

impl<T: Ord> SortedList<T> {
    /// Insert in order. Rejects absent and duplicate values.
    pub fn add(&mut self, value: impl Into<Option<T>>) -> Result<usize, CollectionError> {
        let value = value.into().ok_or(CollectionError::NullValue)?;
        if self.list.contains(&value) {
            return Err(CollectionError::DuplicateValue);
        }
        let index = self
            .list
            .iter()
            .position(|existing| existing > &value)
            .unwrap_or_else(|| self.list.len());
        self.list.insert(index, value)?;
        Ok(index)
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.list.remove_at(index)
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.list.get(index)
    }

    /// Whether an equal element is stored.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// First element matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.list.iter().find(|v| predicate(v))
    }

    /// Remove the first element matching `predicate`.
    pub fn remove_where(&mut self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.list.iter().position(predicate)?;
        self.list.remove_at(index).ok()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
