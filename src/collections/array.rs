//! Array-backed bounded list with amortized doubling growth.

use std::iter::Flatten;
use std::slice;

use crate::collections::{check_index, BoundedSequence};
use crate::core::CollectionError;

/// Physical slots allocated by a fresh list.
pub const INITIAL_SLOTS: usize = 10;

/// Iterator over the live slots of an [`ArrayList`].
pub type Iter<'a, T> = Flatten<slice::Iter<'a, Option<T>>>;

/// Growable array list with a logical capacity ceiling.
///
/// Storage is a slot array where `slots[..size]` are occupied and every slot
/// at or after `size` is empty, so removed elements are never retained. When
/// the slot array is exhausted it doubles; this is independent of the
/// logical capacity, which only the caller changes.
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    slots: Vec<Option<T>>,
    size: usize,
    capacity: usize,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Create a list with no practical capacity ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(usize::MAX)
    }

    /// Create a list whose logical capacity is `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(INITIAL_SLOTS).collect(),
            size: 0,
            capacity,
        }
    }

    /// Number of physically allocated slots.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Iterate live elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots[..self.size].iter().flatten()
    }

    /// Whether every slot past the live range is empty.
    #[must_use]
    pub fn tail_is_clear(&self) -> bool {
        self.slots[self.size..].iter().all(Option::is_none)
    }

    fn grow(&mut self) {
        let doubled = (self.slots.len() * 2).max(INITIAL_SLOTS);
        self.slots.resize_with(doubled, || None);
        tracing::trace!("array list grew to {} slots", doubled);
    }
}

impl<T: PartialEq> BoundedSequence<T> for ArrayList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn bounded(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn insert(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<(), CollectionError> {
        let value = value.into().ok_or(CollectionError::NullValue)?;
        if self.contains(&value) {
            return Err(CollectionError::DuplicateValue);
        }
        if index > self.size {
            return Err(CollectionError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        if self.size >= self.capacity {
            return Err(CollectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if self.size == self.slots.len() {
            self.grow();
        }
        // Park the value in the first free slot, then rotate it into place.
        self.slots[self.size] = Some(value);
        self.slots[index..=self.size].rotate_right(1);
        self.size += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        check_index(index, self.size)?;
        let size = self.size;
        let removed = self.slots[index].take();
        // The emptied slot travels to `size - 1`; nothing past `size` is touched.
        self.slots[index..size].rotate_left(1);
        self.size -= 1;
        removed.ok_or(CollectionError::IndexOutOfRange { index, size })
    }

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        check_index(index, self.size)?;
        self.slots[index]
            .as_ref()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<T, CollectionError> {
        let value = value.into().ok_or(CollectionError::NullValue)?;
        check_index(index, self.size)?;
        if matches!(self.position(&value), Some(existing) if existing != index) {
            return Err(CollectionError::DuplicateValue);
        }
        self.slots[index]
            .replace(value)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        if capacity < self.size {
            return Err(CollectionError::InvalidCapacity {
                requested: capacity,
                size: self.size,
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    fn clear(&mut self) {
        for slot in &mut self.slots[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }
}
