// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Deduplicating container over [`DynamicArray`].
//!
//! `UniqueSet` only needs `PartialEq` on its elements. Membership is a linear
//! scan, which keeps the container usable for any record type at the cost of
//! O(n) inserts. Stores use it to collapse person and film ids gathered from many
//! linked records before ranking or listing them.
//!
//! # Example
//!
//! ```
//! use reel_index_lib::data_structures::unique_set::UniqueSet;
//!
//! let mut people = UniqueSet::new();
//! assert!(people.add(31));
//! assert!(people.add(12898));
//! assert!(!people.add(31)); // duplicate rejected
//!
//! assert_eq!(people.len(), 2);
//! assert_eq!(people.iter().copied().collect::<Vec<_>>(), vec![31, 12898]);
//! ```

use crate::data_structures::dynamic_array::DynamicArray;

/// A set that rejects elements equal to an existing member.
///
/// Iteration yields members in insertion order; no stronger ordering is promised.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueSet<T> {
    members: DynamicArray<T>,
}

impl<T: PartialEq> UniqueSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            members: DynamicArray::new(),
        }
    }

    /// Adds `element` unless an equal member already exists.
    ///
    /// # Returns
    ///
    /// `true` if the element was added, `false` if it was a duplicate.
    /// A rejected add leaves the set unchanged.
    pub fn add(&mut self, element: T) -> bool {
        if self.members.contains(&element) {
            return false;
        }
        self.members.add(element)
    }

    /// Removes the member equal to `element`.
    pub fn remove(&mut self, element: &T) -> bool {
        self.members.remove(element)
    }

    /// Returns whether an equal member exists.
    pub fn contains(&self, element: &T) -> bool {
        self.members.contains(element)
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Returns an iterator over the members in insertion order.
    ///
    /// The set can be iterated any number of times.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Consumes the set and returns its members as an array.
    pub fn into_array(self) -> DynamicArray<T> {
        self.members
    }
}

impl<T: PartialEq> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for UniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: PartialEq> IntoIterator for &'a UniqueSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_rejected_without_state_change() {
        let mut set = UniqueSet::new();
        assert!(set.add("Tom Hanks"));
        assert!(!set.add("Tom Hanks"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_then_readd() {
        let mut set: UniqueSet<u32> = [1, 2, 3].into_iter().collect();

        assert!(set.remove(&2));
        assert!(!set.contains(&2));
        assert!(!set.remove(&2));
        assert!(set.add(2));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let set: UniqueSet<u32> = [9, 9, 8].into_iter().collect();
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = set.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![&9, &8]);
    }
}
