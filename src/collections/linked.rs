//! Linked bounded list over an index arena.
//!
//! Nodes live in a slot vector and refer to each other by index, so there is
//! no aliasing between the `front` and `back` handles: both are plain indices
//! updated only inside `link_at` and `unlink_at`.
//! Freed slots are recycled through a free list.

use crate::collections::{check_index, BoundedSequence};
use crate::core::CollectionError;

/// Index of a node slot inside the arena.
type NodeId = usize;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

/// Singly linked list with O(1) prepend/append and O(n) indexed access.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    size: usize,
    capacity: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create a list with no practical capacity ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(usize::MAX)
    }

    /// Create a list whose logical capacity is `capacity`.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            front: None,
            back: None,
            size: 0,
            capacity,
        }
    }

    /// Iterate elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.front,
            remaining: self.size,
        }
    }

    /// First element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.front.and_then(|id| self.node(id)).map(|n| &n.value)
    }

    /// Last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.back.and_then(|id| self.node(id)).map(|n| &n.value)
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    /// Walk `index` links from the front.
    fn id_at(&self, index: usize) -> Option<NodeId> {
        let mut cursor = self.front;
        for _ in 0..index {
            cursor = cursor.and_then(|id| self.node(id)).and_then(|n| n.next);
        }
        cursor
    }

    fn allocate(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let node = self.nodes.get_mut(id).and_then(Option::take)?;
        self.free.push(id);
        Some(node)
    }

    /// Link a new node so it ends up at `index`. Caller has validated `index <= size`.
    fn link_at(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        let size = self.size;
        if index == 0 {
            let id = self.allocate(Node {
                value,
                next: self.front,
            });
            self.front = Some(id);
            if self.back.is_none() {
                self.back = Some(id);
            }
        } else if index == size {
            let id = self.allocate(Node { value, next: None });
            let tail = self
                .back
                .ok_or(CollectionError::IndexOutOfRange { index, size })?;
            if let Some(node) = self.node_mut(tail) {
                node.next = Some(id);
            }
            self.back = Some(id);
        } else {
            let prev = self
                .id_at(index - 1)
                .ok_or(CollectionError::IndexOutOfRange { index, size })?;
            let next = self.node(prev).and_then(|n| n.next);
            let id = self.allocate(Node { value, next });
            if let Some(node) = self.node_mut(prev) {
                node.next = Some(id);
            }
        }
        self.size += 1;
        Ok(())
    }

    /// Unlink the node at `index`. Caller has validated `index < size`.
    fn unlink_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let size = self.size;
        let out_of_range = CollectionError::IndexOutOfRange { index, size };
        let (prev, target) = if index == 0 {
            (None, self.front.ok_or(out_of_range.clone())?)
        } else {
            let prev = self.id_at(index - 1).ok_or(out_of_range.clone())?;
            let target = self
                .node(prev)
                .and_then(|n| n.next)
                .ok_or(out_of_range.clone())?;
            (Some(prev), target)
        };

        let removed = self.release(target).ok_or(out_of_range)?;
        match prev {
            None => self.front = removed.next,
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.next = removed.next;
                }
            }
        }
        if self.back == Some(target) {
            self.back = prev;
        }
        self.size -= 1;
        Ok(removed.value)
    }
}

impl<T: PartialEq> BoundedSequence<T> for LinkedList<T> {
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
        self.link_at(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        check_index(index, self.size)?;
        self.unlink_at(index)
    }

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        check_index(index, self.size)?;
        self.id_at(index)
            .and_then(|id| self.node(id))
            .map(|n| &n.value)
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
        let size = self.size;
        let id = self
            .id_at(index)
            .ok_or(CollectionError::IndexOutOfRange { index, size })?;
        let node = self
            .node_mut(id)
            .ok_or(CollectionError::IndexOutOfRange { index, size })?;
        Ok(std::mem::replace(&mut node.value, value))
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
        self.nodes.clear();
        self.free.clear();
        self.front = None;
        self.back = None;
        self.size = 0;
    }
}

/// Front-to-back iterator over a [`LinkedList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
