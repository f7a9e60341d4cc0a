//! Reorderable list with single-step and jump moves.

use crate::collections::check_index;
use crate::core::CollectionError;

/// Unbounded list that allows duplicates and supports in-place reordering.
///
/// Every move is bounded by the live size, so moving the last element down or
/// the first element up is a no-op rather than a read past the end.
#[derive(Debug, Clone)]
pub struct SwapList<T> {
    items: Vec<T>,
}

impl<T> Default for SwapList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SwapList<T> {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append at the tail. Rejects absent values.
    pub fn add(&mut self, value: impl Into<Option<T>>) -> Result<(), CollectionError> {
        let value = value.into().ok_or(CollectionError::NullValue)?;
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Swap the element at `index` with its predecessor.
    pub fn move_up(&mut self, index: usize) -> Result<(), CollectionError> {
        check_index(index, self.items.len())?;
        if index > 0 {
            self.items.swap(index, index - 1);
        }
        Ok(())
    }

    /// Swap the element at `index` with its successor.
    pub fn move_down(&mut self, index: usize) -> Result<(), CollectionError> {
        check_index(index, self.items.len())?;
        if index + 1 < self.items.len() {
            self.items.swap(index, index + 1);
        }
        Ok(())
    }

    /// Move the element at `index` to the head, shifting `[0, index)` down.
    pub fn move_to_front(&mut self, index: usize) -> Result<(), CollectionError> {
        check_index(index, self.items.len())?;
        self.items[..=index].rotate_right(1);
        Ok(())
    }

    /// Move the element at `index` to the tail, shifting `(index, len)` up.
    pub fn move_to_back(&mut self, index: usize) -> Result<(), CollectionError> {
        check_index(index, self.items.len())?;
        self.items[index..].rotate_left(1);
        Ok(())
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}
