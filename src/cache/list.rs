//! Recency List Module
//!
//! Doubly linked list stored in an arena, ordered from least recently used
//! (front) to most recently used (back).

use crate::error::{CacheError, Result};

/// Upper bound on nodes reserved up front; the arena grows past it on demand.
pub(crate) const PREALLOC_LIMIT: usize = 1024;

// == Handle ==
/// Stable reference to a node in a [`RecencyList`].
///
/// A handle stays valid until its node is removed or popped, regardless of
/// how often the node is moved. Afterwards it resolves to nothing, even once
/// the slot has been reused for another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u64,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Arena slot; the generation is bumped each time the slot is released.
#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

// == Recency List ==
/// Arena-backed doubly linked list with O(1) unlink and move-to-back.
///
/// Slots released by `remove`/`pop_front` are recycled through a free list.
#[derive(Debug)]
pub struct RecencyList<T> {
    /// Node arena
    slots: Vec<Slot<T>>,
    /// Indices of free slots
    free: Vec<usize>,
    /// Least recently used node
    head: Option<usize>,
    /// Most recently used node
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list expecting up to `capacity` nodes.
    ///
    /// At most [`PREALLOC_LIMIT`] slots are reserved immediately.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends a value at the most recently used end and returns its handle.
    pub fn push_back(&mut self, value: T) -> Handle {
        let node = Node {
            value,
            prev: None,
            next: None,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].node = Some(node);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        };

        self.link_back(idx);
        self.len += 1;
        Handle {
            index: idx,
            generation: self.slots[idx].generation,
        }
    }

    // == Move To Back ==
    /// Relinks the node at the most recently used end.
    ///
    /// Moving the current tail (including a sole element) leaves the list as
    /// is, and so does a stale handle.
    pub fn move_to_back(&mut self, handle: Handle) {
        let Some(idx) = self.resolve(handle) else {
            return;
        };
        if self.tail == Some(idx) {
            return;
        }
        if self.unlink(idx) {
            self.link_back(idx);
        }
    }

    // == Pop Front ==
    /// Removes and returns the least recently used value.
    pub fn pop_front(&mut self) -> Result<T> {
        let idx = self.head.ok_or(CacheError::EmptyList)?;
        self.release(idx).ok_or(CacheError::EmptyList)
    }

    // == Remove ==
    /// Removes an arbitrary node. Returns `None` for a stale handle.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let idx = self.resolve(handle)?;
        self.release(idx)
    }

    // == Accessors ==
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let idx = self.resolve(handle)?;
        self.node(idx).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let idx = self.resolve(handle)?;
        self.node_mut(idx).map(|node| &mut node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node and resets the arena.
    ///
    /// Generations are kept, so handles issued before the clear stay stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation += 1;
            }
            self.free.push(idx);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from least to most recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    // == Internal Linking ==
    /// Slot index for a live handle; `None` once its node has been released.
    fn resolve(&self, handle: Handle) -> Option<usize> {
        let slot = self.slots.get(handle.index)?;
        (slot.generation == handle.generation && slot.node.is_some()).then_some(handle.index)
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(|slot| slot.node.as_mut())
    }

    /// Attaches a detached node after the current tail.
    fn link_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(idx) {
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Detaches a node from its neighbours. Returns false if the slot is free.
    fn unlink(&mut self, idx: usize) -> bool {
        let (prev, next) = match self.node_mut(idx) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return false,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        true
    }

    fn release(&mut self, idx: usize) -> Option<T> {
        if !self.unlink(idx) {
            return None;
        }
        let slot = self.slots.get_mut(idx)?;
        let node = slot.node.take()?;
        slot.generation += 1;
        self.free.push(idx);
        self.len -= 1;
        Some(node.value)
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?)?;
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order<T: Clone>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
    }

    #[test]
    fn test_with_capacity_reserves_bounded_space() {
        let list: RecencyList<u8> = RecencyList::with_capacity(usize::MAX);
        assert!(list.slots.capacity() <= PREALLOC_LIMIT);
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_back_keeps_insertion_order() {
        let mut list = RecencyList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.len(), 3);
        assert_eq!(order(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_to_back_from_front() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        list.move_to_back(a);
        assert_eq!(order(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_back_from_middle() {
        let mut list = RecencyList::new();
        list.push_back("a");
        let b = list.push_back("b");
        list.push_back("c");

        list.move_to_back(b);
        assert_eq!(order(&list), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_move_to_back_on_tail_is_noop() {
        let mut list = RecencyList::new();
        list.push_back("a");
        let b = list.push_back("b");

        list.move_to_back(b);
        assert_eq!(order(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_move_to_back_sole_element() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");

        list.move_to_back(a);
        assert_eq!(list.len(), 1);
        assert_eq!(order(&list), vec!["a"]);

        // Links must still be intact for further pushes
        list.push_back("b");
        assert_eq!(order(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_pop_front_order() {
        let mut list = RecencyList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(3));
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_front_empty() {
        let mut list: RecencyList<u32> = RecencyList::new();
        assert_eq!(list.pop_front(), Err(CacheError::EmptyList));
    }

    #[test]
    fn test_pop_sole_element_resets_ends() {
        let mut list = RecencyList::new();
        list.push_back("a");
        assert_eq!(list.pop_front(), Ok("a"));
        assert!(list.iter().next().is_none());

        list.push_back("b");
        assert_eq!(order(&list), vec!["b"]);
    }

    #[test]
    fn test_remove_arbitrary() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(order(&list), vec!["a", "c"]);

        assert_eq!(list.remove(c), Some("c"));
        assert_eq!(order(&list), vec!["a"]);

        assert_eq!(list.remove(a), Some("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_stale_handle() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        list.push_back("b");

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(a), None);
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        list.remove(a);

        // "b" lands in the slot "a" used to occupy
        let b = list.push_back("b");
        assert_ne!(a, b);

        assert_eq!(list.remove(a), None);
        assert_eq!(list.get(a), None);
        assert_eq!(list.get_mut(a), None);
        list.move_to_back(a);

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(b), Some(&"b"));
        assert_eq!(order(&list), vec!["b"]);
    }

    #[test]
    fn test_stale_handle_after_clear() {
        let mut list = RecencyList::new();
        let a = list.push_back(1);
        list.clear();
        list.push_back(2);

        assert_eq!(list.get(a), None);
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = RecencyList::new();
        let a = list.push_back("a");
        list.push_back("b");
        list.remove(a);

        list.push_back("c");
        assert_eq!(list.slots.len(), 2);
        assert_eq!(order(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_get_mut_and_handle_stability() {
        let mut list = RecencyList::new();
        let a = list.push_back(10);
        list.push_back(20);

        list.move_to_back(a);
        if let Some(value) = list.get_mut(a) {
            *value = 11;
        }
        assert_eq!(list.get(a), Some(&11));
        assert_eq!(order(&list), vec![20, 11]);
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();
        list.push_back(1);
        list.push_back(2);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);

        list.push_back(3);
        assert_eq!(order(&list), vec![3]);
        assert_eq!(list.slots.len(), 2);
    }

    #[test]
    fn test_iter_size_hint() {
        let mut list = RecencyList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.iter().len(), 2);
    }
}
