// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Growable, indexable sequence used to materialize snapshots and result sets.
//!
//! `DynamicArray` keeps its elements contiguous and grows its backing storage by
//! doubling whenever an append finds it full, so `add` is amortized O(1).
//! Positional reads and writes are O(1); removal by value shifts the tail left.
//!
//! # Example
//!
//! ```
//! use reel_index_lib::data_structures::dynamic_array::DynamicArray;
//!
//! let mut ids = DynamicArray::new();
//! ids.add(862);
//! ids.add(8844);
//! ids.add(15602);
//!
//! assert_eq!(ids.get(1), Some(&8844));
//! assert!(ids.remove(&8844));
//! assert_eq!(ids.index_of(&15602), Some(1));
//! assert_eq!(ids.len(), 2);
//! ```

use std::fmt;

use crate::data_structures::collection_error::{CollectionError, Result};

/// Backing capacity allocated by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable array with explicit doubling growth.
///
/// # Type Parameters
///
/// * `T` - Type of the stored elements.
#[derive(Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    /// Stored elements; `items.len()` is the logical size.
    items: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with the default backing capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array that can hold `capacity` elements before growing.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Initial backing capacity. Zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Creates an array of `len` copies of `value`.
    ///
    /// Used to build dense aggregation arrays indexed directly by id.
    pub fn filled(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len);
        array.items.resize(len, value);
        array
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the array can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends an element at the end of the array.
    ///
    /// Doubles the backing capacity when it is exhausted.
    ///
    /// # Returns
    ///
    /// Always `true`; the return value mirrors the other collection `add` operations.
    pub fn add(&mut self, element: T) -> bool {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        self.items.push(element);
        true
    }

    fn grow(&mut self) {
        let additional = self.items.capacity().max(1);
        self.items.reserve_exact(additional);
    }

    /// Returns the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Replaces the element at `index`.
    ///
    /// # Returns
    ///
    /// * `Ok(previous)` - The element that was replaced.
    /// * `Err(CollectionError::IndexOutOfBounds)` - If `index` is not below `len()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(CollectionError::IndexOutOfBounds { index, len }),
        }
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == element)
    }

    /// Returns whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`.
    ///
    /// # Returns
    ///
    /// `true` if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Shortens the array to at most `len` elements.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Removes every element, keeping the backing capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the elements as a slice, in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the elements as a mutable slice, in index order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the array and returns its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_vec()
    }
}
