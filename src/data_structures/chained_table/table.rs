// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the fixed-capacity chained hash table.
//!
//! The bucket array is allocated once and never resized. Inserting more keys
//! than there are buckets lengthens the chains, so lookups degrade toward
//! O(n / capacity) on heavily loaded tables. [`ChainedTable::stats`] reports
//! chain lengths so callers can watch for that.

use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use super::bucket::{Bucket, ChainIter};
use super::config::ChainedTableConfig;
use super::error::Result;
use super::hash::{locate, DefaultBuildHasher};
use super::observer::{InsertEvent, InsertObserver};
use crate::data_structures::dynamic_array::DynamicArray;

/// A separate-chaining hash table with a fixed number of buckets.
///
/// The table itself never checks for an existing key on [`add`](Self::add);
/// callers pick a duplicate policy explicitly through
/// [`insert_or_reject`](Self::insert_or_reject) or
/// [`insert_or_overwrite`](Self::insert_or_overwrite).
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash + Eq + Debug`.
/// * `V` - The value type.
/// * `S` - The hasher factory, FNV by default.
pub struct ChainedTable<K, V, S = DefaultBuildHasher> {
    /// Pre-allocated buckets; the length is the table capacity
    buckets: Box<[Bucket<K, V>]>,

    /// Hasher factory used to address buckets
    build_hasher: S,

    /// Optional insert diagnostics
    observer: Option<Arc<dyn InsertObserver>>,
}

/// Chain length summary for a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets.
    pub capacity: usize,

    /// Total number of entries.
    pub entries: usize,

    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,

    /// Length of the longest chain.
    pub longest_chain: usize,

    /// Entries per bucket.
    pub load_factor: f64,
}

impl<K, V> ChainedTable<K, V, DefaultBuildHasher>
where
    K: Hash + Eq + Debug,
{
    /// Creates an empty table with the default bucket count.
    pub fn new() -> Self {
        Self::with_config(ChainedTableConfig::default())
    }

    /// Creates an empty table with `capacity` buckets (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ChainedTableConfig::new().with_capacity(capacity))
    }

    /// Creates an empty table from a configuration.
    ///
    /// A zero capacity is raised to one bucket; use
    /// [`try_with_config`](Self::try_with_config) to reject it instead.
    pub fn with_config(config: ChainedTableConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultBuildHasher::default())
    }

    /// Creates an empty table after validating the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(ChainedTable)` - If the configuration is valid.
    /// * `Err(ChainedTableError)` - If the capacity is zero or too large.
    pub fn try_with_config(config: ChainedTableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }
}

impl<K, V, S> ChainedTable<K, V, S>
where
    K: Hash + Eq + Debug,
    S: BuildHasher,
{
    /// Creates an empty table that addresses buckets with `build_hasher`.
    pub fn with_config_and_hasher(config: ChainedTableConfig, build_hasher: S) -> Self {
        let buckets = (0..config.capacity.max(1))
            .map(|_| Bucket::new())
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            buckets,
            build_hasher,
            observer: None,
        }
    }

    /// Installs an insert observer, replacing any previous one.
    pub fn with_observer(mut self, observer: Arc<dyn InsertObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Installs or removes the insert observer.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn InsertObserver>>) {
        self.observer = observer;
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries, summed over all bucket counters.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.len() == 0)
    }

    /// Returns the bucket index `key` maps to.
    pub fn location<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        locate(&self.build_hasher, key, self.buckets.len())
    }

    /// Inserts a pair at the head of its bucket without looking for the key.
    ///
    /// The caller is responsible for keeping keys unique; prefer
    /// [`insert_or_reject`](Self::insert_or_reject) or
    /// [`insert_or_overwrite`](Self::insert_or_overwrite) unless absence is
    /// already known.
    ///
    /// # Returns
    ///
    /// Always `true`.
    pub fn add(&mut self, key: K, value: V) -> bool {
        let location = self.location(&key);
        let bucket = &mut self.buckets[location];
        bucket.push_front(key, value);

        if let Some(observer) = &self.observer {
            if let Some(entry) = bucket.iter().next() {
                observer.on_insert(&InsertEvent {
                    key: &entry.key,
                    location,
                    chain_len: bucket.len(),
                });
            }
        }
        true
    }

    /// Inserts a pair only if the key is absent.
    ///
    /// # Returns
    ///
    /// `true` if the pair was inserted, `false` if the key already existed
    /// (the stored value is left untouched).
    pub fn insert_or_reject(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.add(key, value)
    }

    /// Inserts a pair, replacing the entry for an existing key.
    ///
    /// # Returns
    ///
    /// The value previously stored under the key, if any.
    pub fn insert_or_overwrite(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.take(&key);
        self.add(key, value);
        previous
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let location = self.location(key);
        self.buckets[location].find(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let location = self.location(key);
        self.buckets[location].find_value_mut(key)
    }

    /// Checks whether `key` is stored, scanning its bucket linearly.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the first entry for `key` in its bucket.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes the first entry for `key` and returns its value.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let location = self.location(key);
        self.buckets[location].remove(key).map(|(_, value)| value)
    }

    /// Number of key comparisons a lookup of `key` performs in its bucket.
    pub fn probe_length<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let location = self.location(key);
        self.buckets[location].probe_count(key)
    }

    /// Copies every value into an independent array.
    ///
    /// Values come out bucket by bucket in index order, newest entry first
    /// within each bucket. Mutating the returned array never affects the table.
    pub fn snapshot(&self) -> DynamicArray<V>
    where
        V: Clone,
    {
        let mut values = DynamicArray::with_capacity(self.len());
        values.extend(self.iter().map(|(_, value)| value.clone()));
        values
    }

    /// Copies every key/value pair into an independent array, in snapshot order.
    pub fn entries_snapshot(&self) -> DynamicArray<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut entries = DynamicArray::with_capacity(self.len());
        entries.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        entries
    }

    /// Copies every key into an independent array, in snapshot order.
    pub fn keys_snapshot(&self) -> DynamicArray<K>
    where
        K: Clone,
    {
        let mut keys = DynamicArray::with_capacity(self.len());
        keys.extend(self.iter().map(|(key, _)| key.clone()));
        keys
    }

    /// Summarizes chain lengths across the table.
    pub fn stats(&self) -> ChainStats {
        let capacity = self.buckets.len();
        let mut entries = 0;
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in self.buckets.iter() {
            let len = bucket.len();
            entries += len;
            if len > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(len);
        }
        ChainStats {
            capacity,
            entries,
            occupied_buckets,
            longest_chain,
            load_factor: entries as f64 / capacity as f64,
        }
    }
}

impl<K, V, S> ChainedTable<K, V, S> {
    /// Iterates over all entries in snapshot order without copying.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }
}

impl<K, V> Default for ChainedTable<K, V, DefaultBuildHasher>
where
    K: Hash + Eq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Debug for ChainedTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("capacity", &self.buckets.len())
            .field("len", &self.buckets.iter().map(Bucket::len).sum::<usize>())
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over every entry of a [`ChainedTable`].
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    chain: Option<ChainIter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(|chain| chain.next()) {
                return Some((&entry.key, &entry.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    #[test]
    fn test_add_get_remove() {
        let mut table = ChainedTable::new();

        assert!(table.add(862u32, "Toy Story"));
        assert!(table.add(8844u32, "Jumanji"));

        assert_eq!(table.get(&862), Some(&"Toy Story"));
        assert_eq!(table.get(&8844), Some(&"Jumanji"));
        assert_eq!(table.get(&1), None);
        assert_eq!(table.len(), 2);

        assert!(table.remove(&862));
        assert!(!table.remove(&862));
        assert!(!table.contains_key(&862));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_collisions_in_single_bucket() {
        let mut table = ChainedTable::with_capacity(1);
        for key in 0u32..50 {
            assert!(table.insert_or_reject(key, key * 10));
        }

        assert_eq!(table.len(), 50);
        assert_eq!(table.stats().longest_chain, 50);
        for key in 0u32..50 {
            assert_eq!(table.get(&key), Some(&(key * 10)));
        }

        // Newest entry sits at the head of the chain
        assert_eq!(table.probe_length(&49), 1);
        assert_eq!(table.probe_length(&0), 50);
    }

    #[test]
    fn test_duplicate_policies() {
        let mut table = ChainedTable::new();

        assert!(table.insert_or_reject("key", 1));
        assert!(!table.insert_or_reject("key", 2));
        assert_eq!(table.get("key"), Some(&1));

        assert_eq!(table.insert_or_overwrite("key", 3), Some(1));
        assert_eq!(table.insert_or_overwrite("other", 4), None);
        assert_eq!(table.get("key"), Some(&3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut table = ChainedTable::with_capacity(4);
        for key in 0u32..10 {
            table.add(key, key);
        }

        let mut snapshot = table.snapshot();
        assert_eq!(snapshot.len(), 10);
        snapshot.clear();

        assert_eq!(table.len(), 10);
        assert_eq!(table.iter().count(), 10);
    }

    #[test]
    fn test_snapshot_order_follows_buckets() {
        let mut table = ChainedTable::with_capacity(3);
        for key in 0u32..9 {
            table.add(key, key);
        }

        let expected: Vec<u32> = (0..3)
            .flat_map(|location| {
                let mut chain: Vec<u32> = (0u32..9)
                    .filter(|key| table.location(key) == location)
                    .collect();
                chain.reverse();
                chain
            })
            .collect();
        assert_eq!(table.snapshot().into_vec(), expected);
    }

    #[test]
    fn test_custom_hasher() {
        let config = ChainedTableConfig::new().with_capacity(16);
        let mut table = ChainedTable::with_config_and_hasher(config, RandomState::new());

        assert!(table.insert_or_reject("a".to_string(), 1));
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.capacity(), 16);
    }

    #[test]
    fn test_get_mut() {
        let mut table = ChainedTable::new();
        table.add(1u32, 1.5f32);
        if let Some(value) = table.get_mut(&1) {
            *value = 4.0;
        }
        assert_eq!(table.get(&1), Some(&4.0));
    }
}
