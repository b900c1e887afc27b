// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket addressing for the chained hash table.
//!
//! A key's bucket is `abs(hash(key)) mod capacity`, where `hash` is the key's
//! native `Hash` implementation fed through the table's `BuildHasher`. The raw
//! 64-bit hash is read as a signed value before taking its magnitude.

use std::hash::{BuildHasher, Hash, Hasher};

/// Default hasher for chained tables: FNV-1a, deterministic across runs.
pub type DefaultBuildHasher = fnv::FnvBuildHasher;

/// Computes the non-negative hash of `key`.
///
/// # Arguments
///
/// * `build_hasher` - The hasher factory owned by the table.
/// * `key` - The key to hash.
pub fn hash_key<Q, S>(build_hasher: &S, key: &Q) -> u64
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    let mut hasher = build_hasher.build_hasher();
    key.hash(&mut hasher);
    (hasher.finish() as i64).unsigned_abs()
}

/// Maps `key` to a bucket index in `0..capacity`.
///
/// # Panics
///
/// Panics if `capacity` is zero; tables never allocate zero buckets.
pub fn locate<Q, S>(build_hasher: &S, key: &Q, capacity: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    (hash_key(build_hasher, key) % capacity as u64) as usize
}
