use crate::error::{Result, TrackerError};

/// Link to a node, as a key into the list's node arena
type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// Doubly linked list
///
/// Nodes live in an arena (`Vec` of slots) and link to their neighbours by
/// key, so the list is safe Rust without reference counting. Vacated slots
/// are recycled through a free list.
///
/// Invariants:
/// - `head`'s `prev` and `tail`'s `next` are always `None`
/// - following `next` from `head` reaches exactly `len` nodes, ending at `tail`
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append an element at the tail
    pub fn append(&mut self, element: T) {
        let key = self.alloc(Node {
            value: element,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    /// Insert an element at `index`; valid positions are `0..=len`
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        TrackerError::check_position(index, self.len)?;
        if index == self.len {
            self.append(element);
            return Ok(());
        }

        let current = self.key_at(index)?;
        let prev = self.node(current).prev;
        let key = self.alloc(Node {
            value: element,
            prev,
            next: Some(current),
        });
        self.node_mut(current).prev = Some(key);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(key),
            None => self.head = Some(key),
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let key = self.key_at(index)?;
        Ok(self.unlink(key))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let key = self.key_at(index)?;
        Ok(&self.node(key).value)
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let key = self.key_at(index)?;
        Ok(std::mem::replace(&mut self.node_mut(key).value, element))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element; fails with `IllegalState` on an empty list
    pub fn first(&self) -> Result<&T> {
        self.head
            .map(|key| &self.node(key).value)
            .ok_or_else(|| TrackerError::IllegalState("List is empty".to_string()))
    }

    /// Last element; fails with `IllegalState` on an empty list
    pub fn last(&self) -> Result<&T> {
        self.tail
            .map(|key| &self.node(key).value)
            .ok_or_else(|| TrackerError::IllegalState("List is empty".to_string()))
    }

    /// Iterate head to tail; `.rev()` walks the `prev` links tail to head
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Find the node key for `index`, walking from whichever end is closer
    fn key_at(&self, index: usize) -> Result<usize> {
        TrackerError::check_index(index, self.len)?;
        let cursor = if index < self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|key| self.node(key).next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in index..self.len - 1 {
                cursor = cursor.and_then(|key| self.node(key).prev);
            }
            cursor
        };
        cursor.ok_or(TrackerError::IndexOutOfBounds { index, size: self.len })
    }

    /// Detach a node, rewire its neighbours and return its value
    fn unlink(&mut self, key: usize) -> T {
        let node = match self.nodes[key].take() {
            Some(node) => node,
            None => unreachable!("linked list node {key} already vacated"),
        };
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(key);
        self.len -= 1;
        node.value
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(key) => {
                self.nodes[key] = Some(node);
                key
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn node(&self, key: usize) -> &Node<T> {
        match &self.nodes[key] {
            Some(node) => node,
            None => unreachable!("dangling link to linked list node {key}"),
        }
    }

    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        match &mut self.nodes[key] {
            Some(node) => node,
            None => unreachable!("dangling link to linked list node {key}"),
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Remove the first element equal to `element`, scanning from the head
    pub fn remove_first_occurrence(&mut self, element: &T) -> bool {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let (found, next) = {
                let node = self.node(key);
                (node.value == *element, node.next)
            };
            if found {
                self.unlink(key);
                return true;
            }
            cursor = next;
        }
        false
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|value| value == element)
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`]
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for element in iter {
            list.append(element);
        }
        list
    }
}
