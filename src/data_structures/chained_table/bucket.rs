// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Collision chains for the chained hash table.
//!
//! A bucket is a singly linked chain of entries. Each entry owns the next one,
//! so unlinking an entry hands the remainder of the chain to its predecessor
//! and drops the entry itself. The chain length is tracked by a counter that
//! is updated on every push and unlink, never recomputed by walking the chain.

use std::borrow::Borrow;

/// Owning link to the next entry in a chain.
type Link<K, V> = Option<Box<Entry<K, V>>>;

fn key_matches<K, Q>(stored: &K, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    let stored: &Q = stored.borrow();
    stored == key
}

/// One key/value pair, owned by exactly one bucket.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    next: Link<K, V>,
}

/// The collision chain stored at one table slot.
#[derive(Debug)]
pub(crate) struct Bucket<K, V> {
    head: Link<K, V>,
    len: usize,
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty chain.
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of entries in the chain.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Pushes a new entry in front of the chain without checking for the key.
    pub(crate) fn push_front(&mut self, key: K, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Entry { key, value, next }));
        self.len += 1;
    }

    /// Returns the first entry whose key equals `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter().find(|entry| key_matches(&entry.key, key))
    }

    /// Returns a mutable reference to the value of the first entry matching `key`.
    pub(crate) fn find_value_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut cursor = self.head.as_deref_mut();
        while let Some(entry) = cursor {
            if key_matches(&entry.key, key) {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Number of key comparisons a lookup of `key` performs.
    ///
    /// Equals the 1-based chain position on a hit and the chain length on a miss.
    pub(crate) fn probe_count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut comparisons = 0;
        for entry in self.iter() {
            comparisons += 1;
            if key_matches(&entry.key, key) {
                break;
            }
        }
        comparisons
    }

    /// Unlinks the first entry matching `key` and returns its pair.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|entry| !key_matches(&entry.key, key))
        {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut entry = cursor.take()?;
        *cursor = entry.next.take();
        self.len -= 1;
        let Entry { key, value, .. } = *entry;
        Some((key, value))
    }

    /// Iterates over the chain from the most recently pushed entry.
    pub(crate) fn iter(&self) -> ChainIter<'_, K, V> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }
}

impl<K, V> Drop for Bucket<K, V> {
    // Chains are unbounded; drop them iteratively.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut entry) = link {
            link = entry.next.take();
        }
    }
}

/// Borrowing iterator over one chain.
pub(crate) struct ChainIter<'a, K, V> {
    next: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for ChainIter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|entry| {
            self.next = entry.next.as_deref();
            entry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(bucket: &Bucket<u32, &'static str>) -> Vec<u32> {
        bucket.iter().map(|entry| entry.key).collect()
    }

    #[test]
    fn test_push_front_order_and_len() {
        let mut bucket = Bucket::new();
        bucket.push_front(1, "a");
        bucket.push_front(2, "b");
        bucket.push_front(3, "c");

        assert_eq!(keys(&bucket), vec![3, 2, 1]);
        assert_eq!(bucket.len(), 3);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut bucket = Bucket::new();
        for key in 1..=4 {
            bucket.push_front(key, "v");
        }

        assert_eq!(bucket.remove(&4).map(|(k, _)| k), Some(4)); // head
        assert_eq!(bucket.remove(&2).map(|(k, _)| k), Some(2)); // middle
        assert_eq!(bucket.remove(&1).map(|(k, _)| k), Some(1)); // tail
        assert_eq!(bucket.remove(&9), None);

        assert_eq!(keys(&bucket), vec![3]);
        assert_eq!(bucket.len(), 1);
    }

    #[test]
    fn test_remove_relinks_long_chain() {
        let mut bucket = Bucket::new();
        for key in 0..1_000 {
            bucket.push_front(key, "v");
        }

        // Oldest entry sits at the far end of the chain
        assert_eq!(bucket.remove(&0).map(|(k, _)| k), Some(0));
        assert_eq!(bucket.remove(&500).map(|(k, _)| k), Some(500));
        assert_eq!(bucket.remove(&500), None);

        assert_eq!(bucket.len(), 998);
        assert_eq!(bucket.iter().count(), 998);
        assert!(bucket.find(&1).is_some());
        assert!(bucket.find(&499).is_some() && bucket.find(&501).is_some());
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut bucket = Bucket::new();
        bucket.push_front(7, "old");
        bucket.push_front(7, "new");

        assert_eq!(bucket.remove(&7), Some((7, "new")));
        assert_eq!(bucket.find(&7).map(|entry| entry.value), Some("old"));
        assert_eq!(bucket.len(), 1);
    }

    #[test]
    fn test_probe_count() {
        let mut bucket = Bucket::new();
        bucket.push_front(1, "a");
        bucket.push_front(2, "b");

        assert_eq!(bucket.probe_count(&2), 1);
        assert_eq!(bucket.probe_count(&1), 2);
        assert_eq!(bucket.probe_count(&5), 2);
    }

    #[test]
    fn test_find_value_mut() {
        let mut bucket = Bucket::new();
        bucket.push_front(1, "a");
        if let Some(value) = bucket.find_value_mut(&1) {
            *value = "z";
        }
        assert_eq!(bucket.find(&1).map(|entry| entry.value), Some("z"));
    }
}
