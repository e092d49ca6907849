//! LRU Recency Module
//!
//! Implements the recency-ordered sequence backing LRU eviction.

// == Handle ==
/// Stable position of an item inside a [`RecencyList`].
///
/// A handle stays valid until its item is removed; after that the slot may
/// be reused by a later insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Doubly linked list stored in an arena of slots.
///
/// Items are ordered by recency:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Links are slot indices rather than pointers, so every operation apart
/// from iteration is O(1) and no `unsafe` is needed.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an item as the most recently used and returns its handle.
    pub fn push_front(&mut self, value: T) -> Handle {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        Handle(idx)
    }

    // == Move To Front ==
    /// Marks an item as most recently used.
    ///
    /// Returns false if the handle does not refer to a live item.
    pub fn move_to_front(&mut self, handle: Handle) -> bool {
        if !self.contains(handle) {
            return false;
        }
        if self.head == Some(handle.0) {
            return true;
        }

        self.unlink(handle.0);
        let old_head = self.head;
        {
            let node = self.node_mut(handle.0);
            node.prev = None;
            node.next = old_head;
        }
        if let Some(old_head) = old_head {
            self.node_mut(old_head).prev = Some(handle.0);
        }
        self.head = Some(handle.0);
        true
    }

    // == Remove ==
    /// Removes an item by handle and returns it.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        if !self.contains(handle) {
            return None;
        }
        self.unlink(handle.0);
        let node = self.slots[handle.0].take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.value)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used item.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(Handle(tail))
    }

    // == Peek Back ==
    /// Returns the least recently used item without removing it.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.get(Handle(idx)))
    }

    /// Returns the most recently used item.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.get(Handle(idx)))
    }

    // == Accessors ==
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots
            .get(handle.0)
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.value)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.0)
            .and_then(|slot| slot.as_mut())
            .map(|node| &mut node.value)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        matches!(self.slots.get(handle.0), Some(Some(_)))
    }

    // == Length ==
    /// Returns the number of live items.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // Detaches a live node from its neighbours. The node keeps stale links.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = self.node_mut(idx);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    // Callers only pass indices reachable from head/tail or checked by `contains`.
    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.slots[idx].as_mut() {
            Some(node) => node,
            None => unreachable!("recency list link points at an empty slot"),
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.slots.get(idx)?.as_ref()?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(list.back(), Some(&"key1"));
        assert_eq!(list.front(), Some(&"key3"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert!(list.move_to_front(a));

        assert_eq!(collect(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back(), Some(&"b"));
    }

    #[test]
    fn test_move_to_front_of_head_and_single() {
        let mut list = RecencyList::new();

        let only = list.push_front("only");
        assert!(list.move_to_front(only));
        assert_eq!(list.front(), Some(&"only"));
        assert_eq!(list.back(), Some(&"only"));

        let newer = list.push_front("newer");
        assert!(list.move_to_front(newer));
        assert_eq!(collect(&list), vec!["newer", "only"]);
    }

    #[test]
    fn test_move_middle_then_tail() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        // Order: [c, b, a]
        list.move_to_front(b);
        // Order: [b, c, a]
        list.move_to_front(a);
        // Order: [a, b, c]

        assert_eq!(collect(&list), vec!["a", "b", "c"]);
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_back(), Some("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_back_empty() {
        let mut list: RecencyList<u32> = RecencyList::new();
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_by_handle() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        let key2 = list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.remove(key2), Some("key2"));
        assert_eq!(list.len(), 2);
        assert_eq!(collect(&list), vec!["key3", "key1"]);

        // Stale handle
        assert_eq!(list.remove(key2), None);
        assert!(!list.move_to_front(key2));
        assert!(list.get(key2).is_none());
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = RecencyList::new();

        let first = list.push_front(1);
        list.push_front(2);
        list.remove(first);

        let reused = list.push_front(3);
        assert_eq!(reused, first);
        assert_eq!(collect(&list), vec![3, 2]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = RecencyList::new();

        let handle = list.push_front(String::from("old"));
        if let Some(value) = list.get_mut(handle) {
            value.push_str("-new");
        }

        assert_eq!(list.get(handle).map(String::as_str), Some("old-new"));
    }

    #[test]
    fn test_iter_size_hint() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);

        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
    }
}
