//! LinkedList: singly linked list over an arena with head/tail tracking.

use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<DefaultKey>,
}

/// Singly linked sequence with O(1) `append`/`prepend` and O(n)
/// positional `get`. Nodes live in a `SlotMap` owned by the list;
/// `head`/`tail` and the `next` links are generational keys into it.
///
/// The payload type is opaque to the list. Instantiate with a
/// reference type to keep payload ownership with the caller; the list
/// then drops only the references on teardown.
#[derive(Debug)]
pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    /// Number of nodes in the list. Every arena slot is linked, so the
    /// arena length is the list length.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Links `data` after the current tail.
    pub fn append(&mut self, data: T) {
        let key = self.nodes.insert(Node { data, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Links `data` before the current head.
    pub fn prepend(&mut self, data: T) {
        let key = self.nodes.insert(Node {
            data,
            next: self.head,
        });
        self.head = Some(key);
        if self.tail.is_none() {
            self.tail = Some(key);
        }
    }

    /// Walks from the head to the node at `index`. `None` when
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut remaining = index;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if remaining == 0 {
                return Some(&node.data);
            }
            remaining -= 1;
            cursor = node.next;
        }
        None
    }

    /// Head-to-tail iterator over the payloads.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list payloads in link order.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cursor: Option<DefaultKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = &self.nodes[key];
        self.cursor = node.next;
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: after appending v0..v(n-1) in order, get(i) == vi and
    /// get(i) is None for i >= n.
    #[test]
    fn append_positions() {
        let mut list = LinkedList::new();
        for v in [10, 20, 30] {
            list.append(v);
        }
        assert_eq!(list.get(0), Some(&10));
        assert_eq!(list.get(1), Some(&20));
        assert_eq!(list.get(2), Some(&30));
        assert_eq!(list.get(3), None);
        assert_eq!(list.get(usize::MAX), None);
    }

    /// Invariant: prepend inserts at the head; tail stays put.
    #[test]
    fn prepend_positions() {
        let mut list = LinkedList::new();
        list.append("mid");
        list.prepend("front");
        list.append("back");
        assert_eq!(list.get(0), Some(&"front"));
        assert_eq!(list.get(1), Some(&"mid"));
        assert_eq!(list.get(2), Some(&"back"));
        assert_eq!(list.len(), 3);
    }

    /// Invariant: len counts every successful insert and is
    /// monotonically non-decreasing absent removal.
    #[test]
    fn len_tracks_inserts() {
        let mut list = LinkedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        for i in 0..5 {
            if i % 2 == 0 {
                list.append(i);
            } else {
                list.prepend(i);
            }
            assert_eq!(list.len(), i + 1);
        }
        assert!(!list.is_empty());
    }

    /// Invariant: a prepend onto an empty list sets both head and tail,
    /// so a later append lands after it.
    #[test]
    fn prepend_then_append_on_empty() {
        let mut list = LinkedList::new();
        list.prepend(1);
        list.append(2);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(1), Some(&2));
    }

    /// Invariant: iteration yields payloads head-to-tail and matches
    /// positional access.
    #[test]
    fn iter_matches_get() {
        let mut list = LinkedList::new();
        for v in 0..8 {
            list.append(v);
        }
        let collected: Vec<i32> = list.iter().copied().collect();
        assert_eq!(collected, (0..8).collect::<Vec<_>>());
        for (i, v) in (&list).into_iter().enumerate() {
            assert_eq!(list.get(i), Some(v));
        }
    }

    /// Invariant: the list can hold borrowed payloads; dropping the
    /// list leaves the referents untouched.
    #[test]
    fn borrowed_payloads_survive_teardown() {
        let values = [10, 20, 30];
        {
            let mut list: LinkedList<&i32> = LinkedList::new();
            for v in &values {
                list.append(v);
            }
            assert_eq!(list.get(1), Some(&&values[1]));
        }
        assert_eq!(values, [10, 20, 30]);
    }

    /// Invariant: dropping an empty list is a no-op.
    #[test]
    fn empty_drop_is_noop() {
        let list: LinkedList<String> = LinkedList::new();
        drop(list);
        let list: LinkedList<i32> = LinkedList::default();
        assert!(list.is_empty());
    }
}
