// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Singly linked list built by head insertion.
//!
//! `OrderedList` keeps the newest element first. It is used where chain-like
//! ordering matters, e.g. the order in which films were registered with a store
//! or added to a collection.
//!
//! # Complexity
//!
//! * `add` (head insertion) is O(1).
//! * `get`, `set`, `index_of` and `remove` walk from the head and are O(n).
//! * `len` is O(1); the counter is maintained on every insert and unlink.
//!
//! # Example
//!
//! ```
//! use reel_index_lib::data_structures::ordered_list::OrderedList;
//!
//! let mut films = OrderedList::new();
//! films.add(11);
//! films.add(12);
//! films.add(13);
//!
//! // Newest first
//! assert_eq!(films.get(0), Some(&13));
//! assert!(films.remove(&12));
//! assert_eq!(films.iter().copied().collect::<Vec<_>>(), vec![13, 11]);
//! ```

mod node;

use std::fmt;

use crate::data_structures::collection_error::{CollectionError, Result};
use node::{Link, Node};

/// A head-insertion singly linked list with an incrementally tracked size.
///
/// # Type Parameters
///
/// * `T` - Type of the stored elements.
pub struct OrderedList<T> {
    /// First node of the chain (the most recently added element)
    head: Link<T>,

    /// Number of nodes in the chain
    len: usize,
}

impl<T> OrderedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts an element at the head of the list.
    ///
    /// # Returns
    ///
    /// Always `true`.
    pub fn add(&mut self, element: T) -> bool {
        let next = self.head.take();
        self.head = Some(Node::boxed(element, next));
        self.len += 1;
        true
    }

    /// Appends an element after the current last node. O(n).
    pub fn add_to_tail(&mut self, element: T) -> bool {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::boxed(element, None));
        self.len += 1;
        true
    }

    /// Removes and returns the head element.
    pub fn remove_from_head(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the last element. O(n).
    pub fn remove_from_tail(&mut self) -> Option<T> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let node = cursor.take()?;
        self.len -= 1;
        Some(node.value)
    }

    /// Returns the element at `index`, counting from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.iter().nth(index)
    }

    /// Replaces the element at `index`.
    ///
    /// # Returns
    ///
    /// * `Ok(previous)` - The element that was replaced.
    /// * `Err(CollectionError::IndexOutOfBounds)` - If `index` is not below `len()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let len = self.len;
        match self.iter_mut().nth(index) {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(CollectionError::IndexOutOfBounds { index, len }),
        }
    }

    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == element)
    }

    /// Returns whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Unlinks the first node whose value equals `element`.
    ///
    /// # Returns
    ///
    /// `true` if a node was removed. The size only changes when a node is unlinked.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != *element) {
            match cursor.as_mut() {
                Some(node) => cursor = &mut node.next,
                None => return false,
            }
        }

        match cursor.take() {
            Some(mut node) => {
                *cursor = node.next.take();
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator from the head (newest) to the tail (oldest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns a mutable iterator from the head to the tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedList<T> {
    // Iterative teardown; the default recursive drop overflows on long chains.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.iter() {
            copy.add_to_tail(value.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    /// Builds a list by head insertion, so the last yielded element ends up first.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            list.add(element);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`OrderedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Mutable iterator over an [`OrderedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}
